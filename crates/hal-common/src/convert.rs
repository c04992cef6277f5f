//! Canonical string forms for HAL enumerations.
//!
//! These tables produce the strings published in OpenConfig-style telemetry
//! (e.g. `oper-status`, `admin-status`, `port-speed`). They are total: any
//! value without a dedicated name maps to an `UNKNOWN` string, and
//! [`string_to_speed_bps`] maps unknown names to 0 rather than failing.

use hal_types::speed::{
    FIFTY_GIG_BPS, FORTY_GIG_BPS, HUNDRED_GIG_BPS, TEN_GIG_BPS, TWENTY_FIVE_GIG_BPS,
    TWENTY_GIG_BPS,
};
use hal_types::{
    AdminState, AlarmSeverity, HealthState, HwState, LoopbackState, MediaType, PortState,
    TriState, TrunkMemberBlockState,
};

/// Hertz per megahertz.
const HZ_PER_MHZ: u64 = 1_000_000;

/// Name for a speed with no canonical string.
pub const SPEED_UNKNOWN: &str = "SPEED_UNKNOWN";

/// Maps a hardware state to an interface `oper-status` string.
pub fn hw_state_to_string(state: HwState) -> &'static str {
    match state {
        HwState::Ready => "UP",
        HwState::NotPresent => "NOT_PRESENT",
        HwState::Off => "DORMANT",
        HwState::Present | HwState::ConfiguredOff => "DOWN",
        HwState::Failed => "LOWER_LAYER_DOWN",
        HwState::Diagnostic => "TESTING",
        HwState::Unknown => "UNKNOWN",
    }
}

/// Maps a hardware state to a component `present` string.
///
/// Anything that is not explicitly `NotPresent`, including `Unknown`, is
/// reported as present.
pub fn hw_state_to_present_string(state: HwState) -> &'static str {
    match state {
        HwState::NotPresent => "NOT_PRESENT",
        HwState::Ready
        | HwState::Off
        | HwState::Present
        | HwState::ConfiguredOff
        | HwState::Failed
        | HwState::Diagnostic
        | HwState::Unknown => "PRESENT",
    }
}

/// Maps a port state to an interface `oper-status` string.
pub fn port_state_to_string(state: PortState) -> &'static str {
    match state {
        PortState::Up => "UP",
        PortState::Down => "DOWN",
        PortState::Failed => "LOWER_LAYER_DOWN",
        PortState::Unknown => "UNKNOWN",
    }
}

/// Maps an admin state to an interface `admin-status` string.
pub fn admin_state_to_string(state: AdminState) -> &'static str {
    match state {
        AdminState::Enabled => "UP",
        AdminState::Disabled => "DOWN",
        AdminState::Diag => "TESTING",
        AdminState::Unknown => "UNKNOWN",
    }
}

/// Maps a port speed in bits per second to its `port-speed` name.
pub fn speed_bps_to_string(speed_bps: u64) -> &'static str {
    match speed_bps {
        TEN_GIG_BPS => "SPEED_10GB",
        TWENTY_GIG_BPS => "SPEED_20GB",
        TWENTY_FIVE_GIG_BPS => "SPEED_25GB",
        FORTY_GIG_BPS => "SPEED_40GB",
        FIFTY_GIG_BPS => "SPEED_50GB",
        HUNDRED_GIG_BPS => "SPEED_100GB",
        _ => SPEED_UNKNOWN,
    }
}

/// Maps a `port-speed` name back to bits per second; unknown names give 0.
pub fn string_to_speed_bps(speed: &str) -> u64 {
    match speed {
        "SPEED_10GB" => TEN_GIG_BPS,
        "SPEED_20GB" => TWENTY_GIG_BPS,
        "SPEED_25GB" => TWENTY_FIVE_GIG_BPS,
        "SPEED_40GB" => FORTY_GIG_BPS,
        "SPEED_50GB" => FIFTY_GIG_BPS,
        "SPEED_100GB" => HUNDRED_GIG_BPS,
        _ => 0,
    }
}

pub fn alarm_severity_to_string(severity: AlarmSeverity) -> &'static str {
    match severity {
        AlarmSeverity::Minor => "MINOR",
        AlarmSeverity::Warning => "WARNING",
        AlarmSeverity::Major => "MAJOR",
        AlarmSeverity::Critical => "CRITICAL",
        AlarmSeverity::Unknown => "UNKNOWN",
    }
}

pub fn health_state_to_string(state: HealthState) -> &'static str {
    match state {
        HealthState::Good => "GOOD",
        HealthState::Bad => "BAD",
        HealthState::Unknown => "UNKNOWN",
    }
}

/// Groups transceiver media types into their form-factor name.
pub fn media_type_to_string(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Sfp => "SFP",
        MediaType::CfpCopper | MediaType::CfpLr4 => "CFP",
        MediaType::QsfpPsm4 | MediaType::QsfpSr4 | MediaType::QsfpLr4 | MediaType::QsfpClr4 => {
            "QSFP28"
        }
        MediaType::QsfpCsr4 => "QSFP_PLUS",
        MediaType::QsfpCopper | MediaType::QsfpCcr4 => "QSFP",
        MediaType::Unknown => "UNKNOWN",
    }
}

/// Returns true if a trunk member is forwarding.
///
/// Blocked members and non-members (`Unknown`) both report false.
pub fn trunk_member_block_state_is_forwarding(state: TrunkMemberBlockState) -> bool {
    state == TrunkMemberBlockState::Forwarding
}

pub fn is_port_autoneg_enabled(state: TriState) -> bool {
    state == TriState::True
}

pub fn is_admin_state_enabled(state: AdminState) -> bool {
    state.is_enabled()
}

/// Returns true for MAC or PHY loopback.
pub fn is_loopback_state_enabled(state: LoopbackState) -> bool {
    matches!(state, LoopbackState::Mac | LoopbackState::Phy)
}

/// Truncating conversion from Hz to MHz.
pub fn hz_to_mhz(hz: u64) -> u64 {
    hz / HZ_PER_MHZ
}

/// Conversion from MHz to Hz; wraps like the unsigned multiply it replaces.
pub fn mhz_to_hz(mhz: u64) -> u64 {
    mhz.wrapping_mul(HZ_PER_MHZ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_types::speed::NAMED_SPEEDS_BPS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hw_state_strings() {
        assert_eq!(hw_state_to_string(HwState::Ready), "UP");
        assert_eq!(hw_state_to_string(HwState::NotPresent), "NOT_PRESENT");
        assert_eq!(hw_state_to_string(HwState::Off), "DORMANT");
        assert_eq!(hw_state_to_string(HwState::Present), "DOWN");
        assert_eq!(hw_state_to_string(HwState::ConfiguredOff), "DOWN");
        assert_eq!(hw_state_to_string(HwState::Failed), "LOWER_LAYER_DOWN");
        assert_eq!(hw_state_to_string(HwState::Diagnostic), "TESTING");
        assert_eq!(hw_state_to_string(HwState::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_hw_state_present() {
        assert_eq!(hw_state_to_present_string(HwState::NotPresent), "NOT_PRESENT");
        assert_eq!(hw_state_to_present_string(HwState::Ready), "PRESENT");
        assert_eq!(hw_state_to_present_string(HwState::Unknown), "PRESENT");
    }

    #[test]
    fn test_port_and_admin_state_strings() {
        assert_eq!(port_state_to_string(PortState::Up), "UP");
        assert_eq!(port_state_to_string(PortState::Down), "DOWN");
        assert_eq!(port_state_to_string(PortState::Failed), "LOWER_LAYER_DOWN");
        assert_eq!(port_state_to_string(PortState::Unknown), "UNKNOWN");

        assert_eq!(admin_state_to_string(AdminState::Enabled), "UP");
        assert_eq!(admin_state_to_string(AdminState::Disabled), "DOWN");
        assert_eq!(admin_state_to_string(AdminState::Diag), "TESTING");
        assert_eq!(admin_state_to_string(AdminState::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_speed_strings() {
        assert_eq!(speed_bps_to_string(TEN_GIG_BPS), "SPEED_10GB");
        assert_eq!(speed_bps_to_string(HUNDRED_GIG_BPS), "SPEED_100GB");
        assert_eq!(speed_bps_to_string(0), SPEED_UNKNOWN);
        assert_eq!(speed_bps_to_string(1_000_000_000), SPEED_UNKNOWN);

        assert_eq!(string_to_speed_bps("SPEED_25GB"), TWENTY_FIVE_GIG_BPS);
        assert_eq!(string_to_speed_bps("SPEED_400GB"), 0);
        assert_eq!(string_to_speed_bps("speed_10gb"), 0);
    }

    #[test]
    fn test_speed_round_trip() {
        for bps in NAMED_SPEEDS_BPS {
            assert_eq!(string_to_speed_bps(speed_bps_to_string(bps)), bps);
        }
    }

    #[test]
    fn test_alarm_and_health_strings() {
        assert_eq!(alarm_severity_to_string(AlarmSeverity::Minor), "MINOR");
        assert_eq!(alarm_severity_to_string(AlarmSeverity::Critical), "CRITICAL");
        assert_eq!(alarm_severity_to_string(AlarmSeverity::Unknown), "UNKNOWN");
        assert_eq!(health_state_to_string(HealthState::Good), "GOOD");
        assert_eq!(health_state_to_string(HealthState::Bad), "BAD");
        assert_eq!(health_state_to_string(HealthState::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_media_type_grouping() {
        assert_eq!(media_type_to_string(MediaType::Sfp), "SFP");
        assert_eq!(media_type_to_string(MediaType::CfpCopper), "CFP");
        assert_eq!(media_type_to_string(MediaType::CfpLr4), "CFP");
        for qsfp28 in [
            MediaType::QsfpPsm4,
            MediaType::QsfpSr4,
            MediaType::QsfpLr4,
            MediaType::QsfpClr4,
        ] {
            assert_eq!(media_type_to_string(qsfp28), "QSFP28");
        }
        assert_eq!(media_type_to_string(MediaType::QsfpCsr4), "QSFP_PLUS");
        assert_eq!(media_type_to_string(MediaType::QsfpCopper), "QSFP");
        assert_eq!(media_type_to_string(MediaType::QsfpCcr4), "QSFP");
        assert_eq!(media_type_to_string(MediaType::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_predicates() {
        assert!(trunk_member_block_state_is_forwarding(
            TrunkMemberBlockState::Forwarding
        ));
        assert!(!trunk_member_block_state_is_forwarding(
            TrunkMemberBlockState::Blocked
        ));
        assert!(!trunk_member_block_state_is_forwarding(
            TrunkMemberBlockState::Unknown
        ));

        assert!(is_port_autoneg_enabled(TriState::True));
        assert!(!is_port_autoneg_enabled(TriState::Unknown));

        assert!(is_admin_state_enabled(AdminState::Enabled));
        assert!(!is_admin_state_enabled(AdminState::Diag));

        assert!(is_loopback_state_enabled(LoopbackState::Mac));
        assert!(is_loopback_state_enabled(LoopbackState::Phy));
        assert!(!is_loopback_state_enabled(LoopbackState::None));
        assert!(!is_loopback_state_enabled(LoopbackState::Unknown));
    }

    #[test]
    fn test_frequency_conversion() {
        assert_eq!(hz_to_mhz(156_250_000), 156);
        assert_eq!(hz_to_mhz(999_999), 0);
        assert_eq!(mhz_to_hz(156), 156_000_000);
    }
}
