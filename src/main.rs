use std::env;
use std::io;
use std::process::ExitCode;

use car_dealership::csv::{CsvError, read_inventory};
use car_dealership::driver::run_session;
use car_dealership::{Amount, Buyer, Car, Dealership, ValidationError};
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const BUYER_NAME: &str = "Alexander";
const BUYER_BALANCE: i64 = 2_500_000;

/// Problems that prevent the session from starting
#[derive(Debug, Error)]
enum StartupError {
    #[error("{0}")]
    Inventory(#[from] CsvError),

    #[error("invalid startup data: {0}")]
    Invalid(#[from] ValidationError),

    #[error("no cars in stock")]
    EmptyInventory,
}

fn demo_inventory() -> Result<Vec<Car>, ValidationError> {
    Ok(vec![
        Car::new("Tesla", "Model S", Amount::from_whole(3_000_000))?,
        Car::new("Ford", "Fiesta", Amount::from_whole(500_000))?,
    ])
}

/// Stock the dealership from `path`, or with the demo cars when no path is given.
fn open_dealership(path: Option<String>) -> Result<Dealership, StartupError> {
    let mut dealership = Dealership::new();

    match path {
        Some(path) => {
            if !path.ends_with(".csv") {
                warn!(path, "inventory file seems to not be a csv file");
            }
            for result in read_inventory(&path)? {
                match result {
                    Ok(car) => dealership.add_car(car),
                    Err(e) => warn!("{e}"),
                }
            }
        }
        None => dealership.extend(demo_inventory()?),
    }

    if dealership.is_empty() {
        return Err(StartupError::EmptyInventory);
    }
    Ok(dealership)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let startup = open_dealership(env::args().nth(1)).and_then(|dealership| {
        let buyer = Buyer::new(BUYER_NAME, Amount::from_whole(BUYER_BALANCE))?;
        Ok((dealership, buyer))
    });
    let (mut dealership, mut buyer) = match startup {
        Ok(state) => state,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run_session(&mut dealership, &mut buyer, io::stdin().lock(), io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
