//! Conversion, formatting and LED decision helpers for the switch HAL.
//!
//! Everything in this crate is a pure function over the value types from
//! `hal-types`; nothing keeps state between calls and every function is safe
//! to call concurrently.
//!
//! - [`led`]: port LED signal resolution and aggregation for shared LEDs
//! - [`convert`]: enum to canonical string tables used in telemetry
//! - [`print`]: human-readable node/port/trunk descriptors for log messages
//! - [`mac`]: MAC address string conversion and validation
//! - [`decimal`]: `Decimal64` <-> `f64` conversion with overflow detection
//! - [`log_severity`]: log severity names <-> (severity, verbosity) pairs
//! - [`error`]: error types for the fallible conversions
//!
//! # Example
//!
//! ```
//! use hal_common::led;
//! use hal_types::{AdminState, HealthState, LedColor, LedState, PortState, TrunkMemberBlockState};
//!
//! let signal = led::resolve_single(
//!     AdminState::Enabled,
//!     PortState::Up,
//!     HealthState::Good,
//!     TrunkMemberBlockState::Unknown,
//! );
//! assert_eq!(signal.color, LedColor::Green);
//! assert_eq!(signal.state, LedState::Solid);
//! ```

pub mod convert;
pub mod decimal;
pub mod error;
pub mod led;
pub mod log_severity;
pub mod mac;
pub mod print;

// Re-export commonly used items at crate root
pub use error::{HalError, HalResult};
pub use log_severity::{LogSeverity, LoggingConfig};
