//! Front-panel LED types.

use crate::state::normalize;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color of a port LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedColor {
    #[default]
    Unknown,
    Green,
    Amber,
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LedColor::Unknown => "UNKNOWN",
            LedColor::Green => "GREEN",
            LedColor::Amber => "AMBER",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LedColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(LedColor::Unknown),
            "GREEN" => Ok(LedColor::Green),
            "AMBER" => Ok(LedColor::Amber),
            _ => Err(ParseError::enum_value("LED color", s)),
        }
    }
}

/// Blink pattern of a port LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedState {
    #[default]
    Unknown,
    Off,
    Solid,
    BlinkingSlow,
    BlinkingFast,
}

impl LedState {
    /// Returns true for either blinking pattern.
    pub const fn is_blinking(&self) -> bool {
        matches!(self, LedState::BlinkingSlow | LedState::BlinkingFast)
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LedState::Unknown => "UNKNOWN",
            LedState::Off => "OFF",
            LedState::Solid => "SOLID",
            LedState::BlinkingSlow => "BLINKING_SLOW",
            LedState::BlinkingFast => "BLINKING_FAST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LedState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(LedState::Unknown),
            "OFF" => Ok(LedState::Off),
            "SOLID" => Ok(LedState::Solid),
            "BLINKING_SLOW" => Ok(LedState::BlinkingSlow),
            "BLINKING_FAST" => Ok(LedState::BlinkingFast),
            _ => Err(ParseError::enum_value("LED state", s)),
        }
    }
}

/// What a single port LED should display: a color and a blink pattern.
///
/// # Examples
///
/// ```
/// use hal_types::{LedColor, LedSignal, LedState};
///
/// let signal: LedSignal = "amber:blinking_slow".parse().unwrap();
/// assert_eq!(signal, LedSignal::new(LedColor::Amber, LedState::BlinkingSlow));
/// assert_eq!(signal.to_string(), "AMBER:BLINKING_SLOW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LedSignal {
    pub color: LedColor,
    pub state: LedState,
}

impl LedSignal {
    /// Signal reported when nothing is known about the port(s).
    pub const UNKNOWN: LedSignal = LedSignal::new(LedColor::Unknown, LedState::Unknown);

    pub const fn new(color: LedColor, state: LedState) -> Self {
        LedSignal { color, state }
    }

    /// Returns true for an amber LED blinking at either rate.
    pub const fn is_amber_blinking(&self) -> bool {
        matches!(self.color, LedColor::Amber) && self.state.is_blinking()
    }
}

impl From<(LedColor, LedState)> for LedSignal {
    fn from((color, state): (LedColor, LedState)) -> Self {
        LedSignal::new(color, state)
    }
}

impl From<LedSignal> for (LedColor, LedState) {
    fn from(signal: LedSignal) -> Self {
        (signal.color, signal.state)
    }
}

impl fmt::Display for LedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.color, self.state)
    }
}

impl FromStr for LedSignal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, state) = s
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidLedSignal(s.to_string()))?;
        Ok(LedSignal::new(color.parse()?, state.parse()?))
    }
}
