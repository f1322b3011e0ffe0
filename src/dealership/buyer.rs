use std::fmt;

use crate::Amount;
use crate::model::{BuyerId, next_buyer_id};

use super::{DealershipError, ValidationError};

/// A buyer with a name and a non-negative balance.
#[derive(Debug)]
pub struct Buyer {
    id: BuyerId,
    name: String,
    balance: Amount,
}

impl Buyer {
    /// Create a buyer. The id is only consumed when validation passes.
    pub fn new(name: impl Into<String>, balance: Amount) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_balance(balance)?;

        Ok(Self {
            id: next_buyer_id(),
            name,
            balance,
        })
    }

    /// Create a buyer from a textual balance, e.g. read from a prompt.
    pub fn parse(name: impl Into<String>, balance: &str) -> Result<Self, ValidationError> {
        Self::new(name, balance.parse()?)
    }

    pub fn id(&self) -> BuyerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Amount) -> Result<(), ValidationError> {
        validate_balance(balance)?;
        self.balance = balance;
        Ok(())
    }

    /// Deduct `amount` from the balance, all or nothing.
    pub fn decrease_balance(&mut self, amount: Amount) -> Result<(), DealershipError> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount(amount).into());
        }
        if amount > self.balance {
            return Err(DealershipError::InsufficientFunds {
                balance: self.balance,
                required: amount,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Buyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buyer {}, balance: {} UAH.", self.name, self.balance)
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_balance(balance: Amount) -> Result<(), ValidationError> {
    if balance.is_negative() {
        return Err(ValidationError::NegativeBalance(balance));
    }
    Ok(())
}
