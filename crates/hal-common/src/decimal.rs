//! Conversion between [`Decimal64`] and `f64`.
//!
//! Sensor readings (temperatures, optical power, voltages) are exported as
//! gNMI `Decimal64` values. A conversion that would produce a non-finite
//! double or a digit count outside the `i64` range fails with
//! [`HalError::OutOfRange`] instead of returning a clamped value.

use hal_types::Decimal64;
use tracing::debug;

use crate::error::{HalError, HalResult};

/// Precision used when the caller has no specific requirement.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 2;

fn scale(precision: u32) -> f64 {
    10f64.powf(f64::from(precision))
}

/// Converts a `Decimal64` to the nearest `f64`.
pub fn decimal64_to_f64(value: Decimal64) -> HalResult<f64> {
    let result = value.digits as f64 / scale(value.precision);
    if !result.is_finite() {
        debug!(digits = value.digits, precision = value.precision, "Decimal64 overflow");
        return Err(HalError::out_of_range(format!(
            "can not convert decimal with digits {} and precision {} to a double value.",
            value.digits, value.precision
        )));
    }
    Ok(result)
}

/// Converts `value` to a `Decimal64` with `precision` fractional digits.
///
/// The digits are rounded half away from zero.
pub fn f64_to_decimal64(value: f64, precision: u32) -> HalResult<Decimal64> {
    let digits = (value * scale(precision)).round();

    // i64::MAX is not exactly representable; as f64 it rounds up to 2^63.
    if !digits.is_finite() || digits < i64::MIN as f64 || digits >= i64::MAX as f64 {
        debug!(value, precision, "double does not fit in Decimal64");
        return Err(HalError::out_of_range(format!(
            "can not convert number {} with precision {} to a Decimal64 value",
            value, precision
        )));
    }

    Ok(Decimal64::new(digits as i64, precision))
}

/// Converts `value` using [`DEFAULT_DECIMAL_PRECISION`].
pub fn f64_to_decimal64_default(value: f64) -> HalResult<Decimal64> {
    f64_to_decimal64(value, DEFAULT_DECIMAL_PRECISION)
}
