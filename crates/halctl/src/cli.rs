//! Command-line arguments for halctl.

use clap::{Parser, Subcommand};
use hal_common::LogSeverity;
use hal_types::{
    AdminState, HealthState, HwState, LedSignal, MediaType, PortState, TrunkMemberBlockState,
};

/// Switch HAL conversion and LED helper tool
#[derive(Parser, Debug)]
#[command(name = "halctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log severity (CRITICAL, ERROR, WARNING, NOTICE, INFORMATIONAL, DEBUG).
    /// RUST_LOG overrides this when set.
    #[arg(short = 'l', long, default_value = "NOTICE", global = true)]
    pub log_severity: LogSeverity,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the LED signal of a single port
    Led {
        #[arg(long, default_value = "ENABLED")]
        admin: AdminState,

        #[arg(long, default_value = "UP")]
        oper: PortState,

        #[arg(long, default_value = "UNKNOWN")]
        health: HealthState,

        #[arg(long, default_value = "UNKNOWN")]
        block: TrunkMemberBlockState,
    },

    /// Merge per-port LED signals (COLOR:STATE) into one shared LED signal
    Aggregate {
        /// Signals in port order, e.g. GREEN:SOLID AMBER:BLINKING_FAST
        signals: Vec<LedSignal>,
    },

    /// Convert between a port speed in bps and its name
    Speed {
        /// Either a number of bits per second or a name like SPEED_25GB
        value: String,
    },

    /// Validate and convert a MAC address
    Mac {
        /// MAC address string, or a 0x-prefixed 48-bit integer
        value: String,
    },

    /// Convert a Decimal64 (digits, precision) to a double
    ToDouble {
        #[arg(long, allow_negative_numbers = true)]
        digits: i64,

        #[arg(long)]
        precision: u32,
    },

    /// Convert a double to a Decimal64
    FromDouble {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Fractional digits to keep (defaults to 2)
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Map a log severity name to its (severity, verbosity) pair
    Severity {
        name: String,
    },

    /// Show the telemetry strings for a state value
    State {
        #[command(subcommand)]
        kind: StateKind,
    },

    /// Print a port locator
    Port {
        #[arg(long)]
        slot: i32,

        #[arg(long)]
        port: i32,

        #[arg(long, default_value_t = 0)]
        channel: i32,

        #[arg(long, default_value_t = 0)]
        speed_bps: u64,

        /// Node ID the port belongs to
        #[arg(long, default_value_t = 0)]
        node: u64,

        /// Port ID
        #[arg(long, default_value_t = 0)]
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum StateKind {
    Admin { state: AdminState },
    Oper { state: PortState },
    Health { state: HealthState },
    Hw { state: HwState },
    Media { media_type: MediaType },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hal_types::{LedColor, LedState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_led_defaults() {
        let cli = Cli::try_parse_from(["halctl", "led"]).unwrap();
        assert_eq!(cli.log_severity, LogSeverity::Notice);
        match cli.command {
            Command::Led {
                admin,
                oper,
                health,
                block,
            } => {
                assert_eq!(admin, AdminState::Enabled);
                assert_eq!(oper, PortState::Up);
                assert_eq!(health, HealthState::Unknown);
                assert_eq!(block, TrunkMemberBlockState::Unknown);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_aggregate() {
        let cli =
            Cli::try_parse_from(["halctl", "--json", "aggregate", "green:solid", "AMBER:OFF"])
                .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Aggregate { signals } => assert_eq!(
                signals,
                vec![
                    LedSignal::new(LedColor::Green, LedState::Solid),
                    LedSignal::new(LedColor::Amber, LedState::Off),
                ]
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["halctl", "led", "--admin", "maybe"]).is_err());
        assert!(Cli::try_parse_from(["halctl", "-l", "LOUD", "led"]).is_err());
        assert!(Cli::try_parse_from(["halctl", "aggregate", "GREEN"]).is_err());
    }

    #[test]
    fn test_parse_negative_digits() {
        let cli = Cli::try_parse_from([
            "halctl",
            "to-double",
            "--digits",
            "-27315",
            "--precision",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::ToDouble { digits, precision } => {
                assert_eq!(digits, -27315);
                assert_eq!(precision, 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
