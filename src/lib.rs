pub mod amount;
pub mod csv;
pub mod dealership;
pub mod driver;
pub mod model;

pub use amount::Amount;
pub use dealership::{Buyer, Dealership, DealershipError, ValidationError};
pub use model::{BuyerId, Car, CarId, Contract, ContractId};
