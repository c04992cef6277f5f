//! Fixed-point decimal numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-point number `digits * 10^-precision`, as carried in gNMI
/// telemetry updates.
///
/// Converting to and from `f64` can overflow, so those conversions live in
/// `hal-common` and return a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Decimal64 {
    /// Unscaled integer value.
    pub digits: i64,
    /// Number of digits after the decimal point.
    pub precision: u32,
}

impl Decimal64 {
    pub const fn new(digits: i64, precision: u32) -> Self {
        Decimal64 { digits, precision }
    }
}

impl fmt::Display for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e-{}", self.digits, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(Decimal64::new(12345, 2).to_string(), "12345e-2");
        assert_eq!(Decimal64::default(), Decimal64::new(0, 0));
    }
}
