//! Hardware and port state enumerations.
//!
//! The variants mirror the HAL's protobuf enums. Each type has an explicit
//! `Unknown` variant which is also its default, so values coming from a
//! newer or misbehaving peer never fail to decode.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalizes user input for case-insensitive enum parsing.
///
/// `blinking-slow`, `Blinking_Slow` and `BLINKING_SLOW` all normalize to the
/// same key.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

/// Administrative state of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminState {
    /// State not reported.
    #[default]
    Unknown,
    /// Port is administratively enabled.
    Enabled,
    /// Port is administratively shut down.
    Disabled,
    /// Port is held in diagnostic mode.
    Diag,
}

impl AdminState {
    /// Creates an AdminState from its raw wire value.
    ///
    /// Unrecognized values map to [`AdminState::Unknown`].
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => AdminState::Enabled,
            2 => AdminState::Disabled,
            3 => AdminState::Diag,
            _ => AdminState::Unknown,
        }
    }

    /// Returns true if the port is administratively enabled.
    pub const fn is_enabled(&self) -> bool {
        matches!(self, AdminState::Enabled)
    }
}

impl fmt::Display for AdminState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdminState::Unknown => "UNKNOWN",
            AdminState::Enabled => "ENABLED",
            AdminState::Disabled => "DISABLED",
            AdminState::Diag => "DIAG",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AdminState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(AdminState::Unknown),
            "ENABLED" => Ok(AdminState::Enabled),
            "DISABLED" => Ok(AdminState::Disabled),
            "DIAG" => Ok(AdminState::Diag),
            _ => Err(ParseError::enum_value("admin state", s)),
        }
    }
}

/// Operational (link) state of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortState {
    /// State not reported.
    #[default]
    Unknown,
    /// Link is up.
    Up,
    /// Link is down.
    Down,
    /// Port hardware failed.
    Failed,
}

impl PortState {
    /// Creates a PortState from its raw wire value.
    ///
    /// Unrecognized values map to [`PortState::Unknown`].
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => PortState::Up,
            2 => PortState::Down,
            3 => PortState::Failed,
            _ => PortState::Unknown,
        }
    }

    /// Returns true if the link is up.
    pub const fn is_up(&self) -> bool {
        matches!(self, PortState::Up)
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortState::Unknown => "UNKNOWN",
            PortState::Up => "UP",
            PortState::Down => "DOWN",
            PortState::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PortState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(PortState::Unknown),
            "UP" => Ok(PortState::Up),
            "DOWN" => Ok(PortState::Down),
            "FAILED" => Ok(PortState::Failed),
            _ => Err(ParseError::enum_value("port state", s)),
        }
    }
}

/// Health of an operationally up link, as judged by higher-level
/// diagnostics such as neighbor mismatch detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthState {
    #[default]
    Unknown,
    Good,
    Bad,
}

impl HealthState {
    /// Creates a HealthState from its raw wire value.
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => HealthState::Good,
            2 => HealthState::Bad,
            _ => HealthState::Unknown,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Unknown => "UNKNOWN",
            HealthState::Good => "GOOD",
            HealthState::Bad => "BAD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HealthState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(HealthState::Unknown),
            "GOOD" => Ok(HealthState::Good),
            "BAD" => Ok(HealthState::Bad),
            _ => Err(ParseError::enum_value("health state", s)),
        }
    }
}

/// Forwarding state of a port inside a trunk (LAG).
///
/// Ports that are not trunk members always report `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrunkMemberBlockState {
    #[default]
    Unknown,
    /// Member is forwarding traffic.
    Forwarding,
    /// Member is excluded from forwarding (e.g. by LACP).
    Blocked,
}

impl TrunkMemberBlockState {
    /// Creates a TrunkMemberBlockState from its raw wire value.
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => TrunkMemberBlockState::Forwarding,
            2 => TrunkMemberBlockState::Blocked,
            _ => TrunkMemberBlockState::Unknown,
        }
    }

    /// Returns true if the member is blocked from forwarding.
    pub const fn is_blocked(&self) -> bool {
        matches!(self, TrunkMemberBlockState::Blocked)
    }
}

impl fmt::Display for TrunkMemberBlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrunkMemberBlockState::Unknown => "UNKNOWN",
            TrunkMemberBlockState::Forwarding => "FORWARDING",
            TrunkMemberBlockState::Blocked => "BLOCKED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TrunkMemberBlockState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(TrunkMemberBlockState::Unknown),
            "FORWARDING" => Ok(TrunkMemberBlockState::Forwarding),
            "BLOCKED" => Ok(TrunkMemberBlockState::Blocked),
            _ => Err(ParseError::enum_value("trunk member block state", s)),
        }
    }
}

/// Hardware presence/readiness of a component (port, transceiver, fan...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HwState {
    #[default]
    Unknown,
    /// Component slot is empty.
    NotPresent,
    /// Component is inserted but not yet configured.
    Present,
    /// Component is configured to stay off.
    ConfiguredOff,
    /// Component is powered off.
    Off,
    /// Component failed.
    Failed,
    /// Component is under diagnostics.
    Diagnostic,
    /// Component is fully operational.
    Ready,
}

impl fmt::Display for HwState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HwState::Unknown => "UNKNOWN",
            HwState::NotPresent => "NOT_PRESENT",
            HwState::Present => "PRESENT",
            HwState::ConfiguredOff => "CONFIGURED_OFF",
            HwState::Off => "OFF",
            HwState::Failed => "FAILED",
            HwState::Diagnostic => "DIAGNOSTIC",
            HwState::Ready => "READY",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HwState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(HwState::Unknown),
            "NOT_PRESENT" => Ok(HwState::NotPresent),
            "PRESENT" => Ok(HwState::Present),
            "CONFIGURED_OFF" => Ok(HwState::ConfiguredOff),
            "OFF" => Ok(HwState::Off),
            "FAILED" => Ok(HwState::Failed),
            "DIAGNOSTIC" => Ok(HwState::Diagnostic),
            "READY" => Ok(HwState::Ready),
            _ => Err(ParseError::enum_value("hardware state", s)),
        }
    }
}

/// Severity attached to a raised alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmSeverity {
    #[default]
    Unknown,
    Minor,
    Warning,
    Major,
    Critical,
}

impl fmt::Display for AlarmSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlarmSeverity::Unknown => "UNKNOWN",
            AlarmSeverity::Minor => "MINOR",
            AlarmSeverity::Warning => "WARNING",
            AlarmSeverity::Major => "MAJOR",
            AlarmSeverity::Critical => "CRITICAL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AlarmSeverity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(AlarmSeverity::Unknown),
            "MINOR" => Ok(AlarmSeverity::Minor),
            "WARNING" => Ok(AlarmSeverity::Warning),
            "MAJOR" => Ok(AlarmSeverity::Major),
            "CRITICAL" => Ok(AlarmSeverity::Critical),
            _ => Err(ParseError::enum_value("alarm severity", s)),
        }
    }
}

/// Transceiver media type as read from the module EEPROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    Unknown,
    Sfp,
    CfpCopper,
    CfpLr4,
    QsfpCopper,
    QsfpSr4,
    QsfpLr4,
    QsfpCsr4,
    QsfpClr4,
    QsfpPsm4,
    QsfpCcr4,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Unknown => "UNKNOWN",
            MediaType::Sfp => "SFP",
            MediaType::CfpCopper => "CFP_COPPER",
            MediaType::CfpLr4 => "CFP_LR4",
            MediaType::QsfpCopper => "QSFP_COPPER",
            MediaType::QsfpSr4 => "QSFP_SR4",
            MediaType::QsfpLr4 => "QSFP_LR4",
            MediaType::QsfpCsr4 => "QSFP_CSR4",
            MediaType::QsfpClr4 => "QSFP_CLR4",
            MediaType::QsfpPsm4 => "QSFP_PSM4",
            MediaType::QsfpCcr4 => "QSFP_CCR4",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(MediaType::Unknown),
            "SFP" => Ok(MediaType::Sfp),
            "CFP_COPPER" => Ok(MediaType::CfpCopper),
            "CFP_LR4" => Ok(MediaType::CfpLr4),
            "QSFP_COPPER" => Ok(MediaType::QsfpCopper),
            "QSFP_SR4" => Ok(MediaType::QsfpSr4),
            "QSFP_LR4" => Ok(MediaType::QsfpLr4),
            "QSFP_CSR4" => Ok(MediaType::QsfpCsr4),
            "QSFP_CLR4" => Ok(MediaType::QsfpClr4),
            "QSFP_PSM4" => Ok(MediaType::QsfpPsm4),
            "QSFP_CCR4" => Ok(MediaType::QsfpCcr4),
            _ => Err(ParseError::enum_value("media type", s)),
        }
    }
}

/// Three-valued boolean used for optional port settings like autoneg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriState {
    #[default]
    Unknown,
    True,
    False,
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriState::Unknown => "UNKNOWN",
            TriState::True => "TRUE",
            TriState::False => "FALSE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TriState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(TriState::Unknown),
            "TRUE" => Ok(TriState::True),
            "FALSE" => Ok(TriState::False),
            _ => Err(ParseError::enum_value("tri-state", s)),
        }
    }
}

/// Loopback mode configured on a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoopbackState {
    #[default]
    Unknown,
    None,
    /// Loopback at the MAC layer.
    Mac,
    /// Loopback at the PHY layer.
    Phy,
}

impl fmt::Display for LoopbackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoopbackState::Unknown => "UNKNOWN",
            LoopbackState::None => "NONE",
            LoopbackState::Mac => "MAC",
            LoopbackState::Phy => "PHY",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LoopbackState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UNKNOWN" => Ok(LoopbackState::Unknown),
            "NONE" => Ok(LoopbackState::None),
            "MAC" => Ok(LoopbackState::Mac),
            "PHY" => Ok(LoopbackState::Phy),
            _ => Err(ParseError::enum_value("loopback state", s)),
        }
    }
}
