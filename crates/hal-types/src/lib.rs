//! Common value types for the switch hardware abstraction layer.
//!
//! This crate provides the plain data types shared by the HAL helpers:
//!
//! - [`AdminState`], [`PortState`], [`HealthState`], [`TrunkMemberBlockState`]:
//!   the per-port state signals that drive the front-panel LEDs
//! - [`LedColor`], [`LedState`], [`LedSignal`]: what a port LED displays
//! - [`HwState`], [`AlarmSeverity`], [`MediaType`], [`TriState`],
//!   [`LoopbackState`]: other hardware enumerations reported upward
//! - [`Node`], [`SingletonPort`], [`TrunkPort`]: identifier descriptors
//! - [`MacAddress`]: 48-bit Ethernet MAC addresses
//! - [`Decimal64`]: fixed-point numbers as carried by gNMI
//!
//! Every type here is an immutable value. The operations over them live in
//! the `hal-common` crate.

mod decimal;
mod descriptor;
mod led;
mod mac;
pub mod speed;
mod state;

pub use decimal::Decimal64;
pub use descriptor::{Node, SingletonPort, TrunkPort};
pub use led::{LedColor, LedSignal, LedState};
pub use mac::MacAddress;
pub use state::{
    AdminState, AlarmSeverity, HealthState, HwState, LoopbackState, MediaType, PortState,
    TriState, TrunkMemberBlockState,
};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid {kind} value: {value}")]
    InvalidEnumValue {
        /// Name of the enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    #[error("invalid LED signal format: {0} (expected COLOR:STATE)")]
    InvalidLedSignal(String),
}

impl ParseError {
    pub(crate) fn enum_value(kind: &'static str, value: &str) -> Self {
        ParseError::InvalidEnumValue {
            kind,
            value: value.to_string(),
        }
    }
}
