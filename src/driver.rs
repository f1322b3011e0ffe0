//! Interactive sale session.
//!
//! Lists the inventory, then asks for a car number until a sale goes
//! through. Bad input and recoverable sale errors are reported and the
//! prompt is shown again, without a retry limit.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use crate::dealership::{Buyer, Dealership, DealershipError};
use crate::model::Contract;

pub const PROMPT: &str = "Enter the number of the car you want to buy: ";

/// Errors that end a session without a sale
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before a car was bought")]
    InputClosed,

    #[error("sale aborted: {0}")]
    Sale(DealershipError),
}

/// Print `"{index}: {car}"` for every car in the inventory.
pub fn list_cars(dealership: &Dealership, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Available cars:")?;
    for (index, car) in dealership.iter().enumerate() {
        writeln!(output, "{index}: {car}")?;
    }
    Ok(())
}

/// Run the session until a car is sold or input runs out.
pub fn run_session(
    dealership: &mut Dealership,
    buyer: &mut Buyer,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<Contract, SessionError> {
    list_cars(dealership, &mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let Ok(index) = line.trim().parse::<usize>() else {
            writeln!(output, "Please enter a valid car number.")?;
            continue;
        };

        match dealership.sell_car(index, buyer) {
            Ok(contract) => {
                writeln!(output, "{contract}")?;
                return Ok(contract);
            }
            Err(e) if e.is_recoverable() => {
                writeln!(output, "{e}")?;
                writeln!(output, "Please try again.")?;
            }
            Err(e) => {
                warn!(reason = %e, "sale aborted");
                return Err(SessionError::Sale(e));
            }
        }
    }
}
