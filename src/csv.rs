use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::Amount;
use crate::dealership::ValidationError;
use crate::model::Car;

/// Errors that can occur when reading an inventory file
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open inventory file: {0}")]
    Open(csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: invalid car: {source}")]
    InvalidCar {
        line: usize,
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    make: String,
    model: String,
    price: String,
}

/// Read cars from a csv file with a `make,model,price` header.
///
/// Rows are yielded lazily; a bad row yields an error and does not stop the
/// remaining rows.
pub fn read_inventory(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Car, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InventoryRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            row.price
                .parse::<Amount>()
                .and_then(|price| Car::new(row.make, row.model, price))
                .map_err(|source| CsvError::InvalidCar { line, source })
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_cars() {
        let file = write_csv("make,model,price\nTesla,Model S,3000000\nFord,Fiesta,500000.5\n");
        let cars: Vec<_> = read_inventory(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].make(), "Tesla");
        assert_eq!(cars[0].model(), "Model S");
        assert_eq!(cars[0].price(), Amount::from_whole(3_000_000));
        assert_eq!(cars[1].price(), Amount::from_scaled(50_000_050));
        assert!(cars[0].id() < cars[1].id());
    }

    #[test]
    fn read_with_whitespace() {
        let file = write_csv("make, model, price\nFord, Fiesta, 500000\n");
        let results: Vec<_> = read_inventory(file.path()).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap().model(), "Fiesta");
    }

    #[test]
    fn read_returns_error_for_bad_price() {
        let file = write_csv("make,model,price\nFord,Fiesta,cheap\nTesla,Model 3,100\n");
        let results: Vec<_> = read_inventory(file.path()).unwrap().collect();
        assert_eq!(results.len(), 2);
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidCar {
                line: 2,
                source: ValidationError::NotANumber(_)
            }
        ));
        assert!(results[1].is_ok());
    }

    #[test]
    fn read_returns_error_for_missing_column() {
        let file = write_csv("make,model,price\nFord,Fiesta\n");
        let results: Vec<_> = read_inventory(file.path()).unwrap().collect();
        assert_eq!(results.len(), 1);
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(err, CsvError::Parse { line: 2, .. }));
    }

    #[test]
    fn read_returns_error_for_huge_negative_price() {
        let file = write_csv("make,model,price\nLada,Niva,-1e300\nFord,Fiesta,500000\n");
        let results: Vec<_> = read_inventory(file.path()).unwrap().collect();
        assert_eq!(results.len(), 2);
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidCar {
                line: 2,
                source: ValidationError::AmountOutOfRange(_)
            }
        ));
        assert!(err.to_string().contains("-1e300"));
        assert!(results[1].is_ok());
    }

    #[test]
    fn read_returns_error_for_negative_price() {
        let file = write_csv("make,model,price\nFord,Fiesta,-1\n");
        let results: Vec<_> = read_inventory(file.path()).unwrap().collect();
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidCar {
                line: 2,
                source: ValidationError::NegativePrice(_)
            }
        ));
    }

    #[test]
    fn missing_file_fails_to_open() {
        let result = read_inventory("does/not/exist.csv");
        assert!(matches!(result, Err(CsvError::Open(_))));
    }
}
