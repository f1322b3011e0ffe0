//! Dealership inventory and the sell transaction.
//!
//! The dealership owns an ordered list of cars. A sale checks the buyer's
//! funds, deducts the price, removes the car and hands back a [`Contract`]
//! owning it. Either all of that happens or none of it does.

use tracing::info;

use crate::Amount;
use crate::model::{Car, Contract};

mod buyer;
pub use buyer::Buyer;

mod error;
pub use error::{DealershipError, ValidationError};

/// A dealership with its inventory.
///
/// Insertion order is display order, and positions in that order are the
/// indices accepted by [`Dealership::sell_car`].
#[derive(Debug, Default)]
pub struct Dealership {
    cars: Vec<Car>,
}

/// Public API
impl Dealership {
    pub fn new() -> Self {
        Self { cars: Vec::new() }
    }

    /// Append a car to the inventory.
    pub fn add_car(&mut self, car: Car) {
        self.cars.push(car);
    }

    /// Iterate over the inventory in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter()
    }

    /// Iterate over cars priced at `min_price` or more, in inventory order.
    pub fn cars_by_price(&self, min_price: Amount) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter().filter(move |car| car.price() >= min_price)
    }

    pub fn get(&self, index: usize) -> Option<&Car> {
        self.cars.get(index)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Sell the car at `index` to `buyer`.
    ///
    /// On success the price is deducted, the car leaves the inventory (later
    /// indices shift down by one) and the contract is returned. On failure
    /// neither the inventory nor the buyer is touched.
    pub fn sell_car(
        &mut self,
        index: usize,
        buyer: &mut Buyer,
    ) -> Result<Contract, DealershipError> {
        let result = self.apply_sale(index, buyer);
        Self::log_result("sell_car", index, buyer, &result);
        result
    }
}

/// Private API
impl Dealership {
    /// Small helper to log `sell_car` results
    fn log_result(
        op: &str,
        index: usize,
        buyer: &Buyer,
        result: &Result<Contract, DealershipError>,
    ) {
        match result {
            Ok(contract) => {
                info!(
                    op,
                    index,
                    buyer_id = buyer.id(),
                    buyer = %buyer.name(),
                    contract = contract.id(),
                    price = %contract.car().price(),
                    "transaction successful"
                );
            }
            Err(e) => {
                info!(
                    op,
                    index,
                    buyer_id = buyer.id(),
                    buyer = %buyer.name(),
                    reason = %e,
                    "transaction failed"
                );
            }
        }
    }

    /// Run the sale:
    /// - Ensure the index points at a car
    /// - Deduct the price (fails without side effects on insufficient funds)
    /// - Move the car out of the inventory into the contract
    fn apply_sale(
        &mut self,
        index: usize,
        buyer: &mut Buyer,
    ) -> Result<Contract, DealershipError> {
        let price = self
            .cars
            .get(index)
            .map(Car::price)
            .ok_or(DealershipError::OutOfRange {
                index,
                available: self.cars.len(),
            })?;

        buyer.decrease_balance(price)?;

        // Index was checked above and nothing touched the inventory since
        let car = self.cars.remove(index);

        Ok(Contract::new(buyer.id(), buyer.name(), car))
    }
}

impl<'a> IntoIterator for &'a Dealership {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.cars.iter()
    }
}

impl Extend<Car> for Dealership {
    fn extend<I: IntoIterator<Item = Car>>(&mut self, iter: I) {
        self.cars.extend(iter);
    }
}
