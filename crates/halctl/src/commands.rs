//! Command execution for halctl.
//!
//! Each command produces a [`Report`] holding both a one-line human readable
//! summary and a JSON value, so `--json` output never diverges from the text.

use anyhow::{bail, Context, Result};
use hal_common::{convert, decimal, led, log_severity, mac, print};
use hal_types::{Decimal64, MacAddress};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::cli::{Command, StateKind};

/// Output of a single command.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    pub json: Value,
}

impl Report {
    fn new(text: impl Into<String>, json: Value) -> Self {
        Self {
            text: text.into(),
            json,
        }
    }

    /// Renders the report for stdout.
    pub fn render(&self, as_json: bool) -> Result<String> {
        if as_json {
            serde_json::to_string_pretty(&self.json).context("Failed to serialize report")
        } else {
            Ok(self.text.clone())
        }
    }
}

pub fn run(command: Command) -> Result<Report> {
    match command {
        Command::Led {
            admin,
            oper,
            health,
            block,
        } => {
            let signal = led::resolve_single(admin, oper, health, block);
            Ok(Report::new(signal.to_string(), json!(signal)))
        }
        Command::Aggregate { signals } => {
            let signal = led::aggregate(&signals);
            info!(ports = signals.len(), "Aggregated {} LED signals", signals.len());
            Ok(Report::new(signal.to_string(), json!(signal)))
        }
        Command::Speed { value } => Ok(speed(&value)),
        Command::Mac { value } => mac_report(&value),
        Command::ToDouble { digits, precision } => {
            let value = decimal::decimal64_to_f64(Decimal64::new(digits, precision))?;
            Ok(Report::new(value.to_string(), json!(value)))
        }
        Command::FromDouble { value, precision } => {
            let decimal = match precision {
                Some(precision) => decimal::f64_to_decimal64(value, precision)?,
                None => decimal::f64_to_decimal64_default(value)?,
            };
            Ok(Report::new(
                format!("digits: {}, precision: {}", decimal.digits, decimal.precision),
                json!(decimal),
            ))
        }
        Command::Severity { name } => {
            let config = log_severity::string_to_log_severity(&name)?;
            Ok(Report::new(
                format!("severity: {}, verbosity: {}", config.severity, config.verbosity),
                json!(config),
            ))
        }
        Command::State { kind } => Ok(state(kind)),
        Command::Port {
            slot,
            port,
            channel,
            speed_bps,
            node,
            id,
        } => {
            let mut singleton = print::build_singleton_port(slot, port, channel, speed_bps);
            singleton.node = node;
            singleton.id = id;
            let text = print::print_singleton_port(&singleton);
            Ok(Report::new(
                text.clone(),
                json!({ "port": singleton, "description": text }),
            ))
        }
    }
}

fn speed(value: &str) -> Report {
    match value.parse::<u64>() {
        Ok(bps) => {
            let name = convert::speed_bps_to_string(bps);
            Report::new(name, json!({ "speed_bps": bps, "name": name }))
        }
        Err(_) => {
            let bps = convert::string_to_speed_bps(value);
            debug!(name = value, bps, "Parsed speed name");
            Report::new(bps.to_string(), json!({ "speed_bps": bps, "name": value }))
        }
    }
}

fn mac_report(value: &str) -> Result<Report> {
    let address = if let Some(hex) = value.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid MAC address integer '{}'", value))?
    } else if mac::is_mac_address_valid(value) {
        value.parse::<MacAddress>()?.to_u64()
    } else {
        bail!("Invalid MAC address '{}'", value);
    };
    if address > 0xffff_ffff_ffff {
        bail!("MAC address integer '{}' is wider than 48 bits", value);
    }

    let canonical = MacAddress::from_u64(address).to_string();
    let yang = mac::mac_address_to_yang_string(address);
    Ok(Report::new(
        format!("{} (yang: {}, value: {:#x})", canonical, yang, address),
        json!({ "mac": canonical, "yang": yang, "value": address }),
    ))
}

fn state(kind: StateKind) -> Report {
    match kind {
        StateKind::Admin { state } => {
            let status = convert::admin_state_to_string(state);
            Report::new(status, json!({ "state": state, "admin_status": status }))
        }
        StateKind::Oper { state } => {
            let status = convert::port_state_to_string(state);
            Report::new(
                status,
                json!({
                    "state": state,
                    "oper_status": status,
                    "log_name": print::print_port_state(state),
                }),
            )
        }
        StateKind::Health { state } => {
            let health = convert::health_state_to_string(state);
            Report::new(health, json!({ "state": state, "health": health }))
        }
        StateKind::Hw { state } => {
            let status = convert::hw_state_to_string(state);
            let present = convert::hw_state_to_present_string(state);
            Report::new(
                format!("{} ({})", status, present),
                json!({ "state": state, "oper_status": status, "present": present }),
            )
        }
        StateKind::Media { media_type } => {
            let form_factor = convert::media_type_to_string(media_type);
            Report::new(
                form_factor,
                json!({ "media_type": media_type, "form_factor": form_factor }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_common::HalError;
    use hal_types::{AdminState, HealthState, HwState, LedSignal, PortState, TrunkMemberBlockState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_led_command() {
        let report = run(Command::Led {
            admin: AdminState::Enabled,
            oper: PortState::Up,
            health: HealthState::Bad,
            block: TrunkMemberBlockState::Forwarding,
        })
        .unwrap();
        assert_eq!(report.text, "AMBER:BLINKING_FAST");
        assert_eq!(report.json, json!({ "color": "AMBER", "state": "BLINKING_FAST" }));
    }

    #[test]
    fn test_aggregate_command() {
        let signals: Vec<LedSignal> = vec!["GREEN:SOLID".parse().unwrap(), "GREEN:OFF".parse().unwrap()];
        let report = run(Command::Aggregate { signals }).unwrap();
        assert_eq!(report.text, "AMBER:SOLID");

        let report = run(Command::Aggregate { signals: vec![] }).unwrap();
        assert_eq!(report.text, "UNKNOWN:UNKNOWN");
    }

    #[test]
    fn test_speed_command() {
        assert_eq!(speed("25000000000").text, "SPEED_25GB");
        assert_eq!(speed("SPEED_40GB").text, "40000000000");
        assert_eq!(speed("fast").text, "0");
        assert_eq!(speed("0").text, "SPEED_UNKNOWN");
    }

    #[test]
    fn test_mac_command() {
        let report = mac_report("00:11:22:33:44:55").unwrap();
        assert_eq!(report.json["yang"], "0:11:22:33:44:55");
        assert_eq!(report.json["value"], 0x0011_2233_4455u64);

        let report = mac_report("0xaabbccddeeff").unwrap();
        assert_eq!(report.json["mac"], "aa:bb:cc:dd:ee:ff");

        assert!(mac_report("0:11:22:33:44:55").is_err());
        assert!(mac_report("0x1000000000000").is_err());
    }

    #[test]
    fn test_decimal_commands() {
        let report = run(Command::ToDouble {
            digits: -27315,
            precision: 2,
        })
        .unwrap();
        assert_eq!(report.text, "-273.15");

        let report = run(Command::FromDouble {
            value: 3.14159,
            precision: None,
        })
        .unwrap();
        assert_eq!(report.text, "digits: 314, precision: 2");

        let err = run(Command::FromDouble {
            value: 1e300,
            precision: Some(2),
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HalError>(),
            Some(HalError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_severity_command() {
        let report = run(Command::Severity {
            name: "INFORMATIONAL".to_string(),
        })
        .unwrap();
        assert_eq!(report.text, "severity: 0, verbosity: 1");

        let err = run(Command::Severity {
            name: "LOUD".to_string(),
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HalError>(),
            Some(HalError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_state_command() {
        let report = state(StateKind::Hw {
            state: HwState::ConfiguredOff,
        });
        assert_eq!(report.text, "DOWN (PRESENT)");

        let report = state(StateKind::Oper {
            state: PortState::Failed,
        });
        assert_eq!(report.text, "LOWER_LAYER_DOWN");
        assert_eq!(report.json["log_name"], "FAILED");
    }

    #[test]
    fn test_port_command() {
        let report = run(Command::Port {
            slot: 1,
            port: 5,
            channel: 2,
            speed_bps: 25_000_000_000,
            node: 1,
            id: 0,
        })
        .unwrap();
        assert_eq!(
            report.text,
            "(node_id: 1, slot: 1, port: 5, channel: 2, speed: 25G)"
        );
    }

    #[test]
    fn test_render() {
        let report = Report::new("UP", json!({ "admin_status": "UP" }));
        assert_eq!(report.render(false).unwrap(), "UP");
        assert!(report.render(true).unwrap().contains("\"admin_status\": \"UP\""));
    }
}
