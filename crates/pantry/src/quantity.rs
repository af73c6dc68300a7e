use std::fmt;

/// Amount of a pantry item, held as whole thousandths of its unit.
///
/// User input is read as a real number and rounded to the nearest thousandth
/// (halves away from zero), so repeated display and re-entry never drifts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    pub const SCALE: i64 = 1000;

    pub fn from_thousandths(value: i64) -> Self {
        Self(value)
    }

    pub fn thousandths(self) -> i64 {
        self.0
    }

    /// Reads user text such as `2`, `0.25` or `1e3`.
    ///
    /// Negative, infinite and non-numeric input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }

        let scaled = (value * Self::SCALE as f64).round();
        if scaled >= i64::MAX as f64 {
            return None;
        }

        Some(Self(scaled as i64))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let fraction = self.0 % Self::SCALE;
        if fraction == 0 {
            return write!(f, "{whole}");
        }

        let digits = format!("{fraction:03}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}
