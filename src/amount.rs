use std::fmt;
use std::str::FromStr;

use crate::dealership::ValidationError;

/// Money in hryvnias, stored as a scaled integer of kopiykas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    pub const ZERO: Amount = Amount(0);

    pub fn from_whole(units: i64) -> Self {
        Amount(units * Self::SCALE)
    }

    /// Convert a float, rounding to kopiykas. `None` when the value is not
    /// finite or does not fit the scaled representation.
    pub fn from_float(value: f64) -> Option<Self> {
        let scaled = (value * Self::SCALE as f64).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if scaled.is_finite() && scaled > i64::MIN as f64 && scaled < i64::MAX as f64 {
            Some(Amount(scaled as i64))
        } else {
            None
        }
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    /// Parse a decimal number such as `2500000` or `10.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Amount::from_float(value)
                .ok_or_else(|| ValidationError::AmountOutOfRange(trimmed.to_string())),
            _ => Err(ValidationError::NotANumber(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / Self::SCALE as u64;
        let frac = abs % Self::SCALE as u64;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.{frac:02}")
        }
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
