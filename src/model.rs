//! Core domain types for the dealership.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Local};

use crate::Amount;
use crate::dealership::ValidationError;

/// Car identifier.
pub type CarId = u32;

/// Buyer identifier.
pub type BuyerId = u32;

/// Contract identifier.
pub type ContractId = u32;

// Process-wide counters, one per entity type. Ids are never reused.
static NEXT_CAR_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_BUYER_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_CONTRACT_ID: AtomicU32 = AtomicU32::new(1);

fn next_id(counter: &AtomicU32) -> u32 {
    counter.fetch_add(1, Ordering::Relaxed)
}

pub(crate) fn next_buyer_id() -> BuyerId {
    next_id(&NEXT_BUYER_ID)
}

/// A car offered for sale. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    make: String,
    model: String,
    price: Amount,
}

impl Car {
    /// Create a car with the next car id. The price must not be negative.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        price: Amount,
    ) -> Result<Self, ValidationError> {
        if price.is_negative() {
            return Err(ValidationError::NegativePrice(price));
        }

        Ok(Self {
            id: next_id(&NEXT_CAR_ID),
            make: make.into(),
            model: model.into(),
            price,
        })
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, price: {} UAH.", self.make, self.model, self.price)
    }
}

/// Record of a completed sale.
///
/// Owns the sold car. The buyer is only referenced by id and name, it stays
/// with the caller.
#[derive(Debug, Clone)]
pub struct Contract {
    id: ContractId,
    buyer_id: BuyerId,
    buyer_name: String,
    car: Car,
    date: DateTime<Local>,
}

impl Contract {
    pub(crate) fn new(buyer_id: BuyerId, buyer_name: impl Into<String>, car: Car) -> Self {
        Self {
            id: next_id(&NEXT_CONTRACT_ID),
            buyer_id,
            buyer_name: buyer_name.into(),
            car,
            date: Local::now(),
        }
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn buyer_id(&self) -> BuyerId {
        self.buyer_id
    }

    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }

    /// Take the car out of the contract.
    pub fn into_car(self) -> Car {
        self.car
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract {}: {} bought {} on {}",
            self.id,
            self.buyer_name,
            self.car,
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
