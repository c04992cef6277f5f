//! Human-readable descriptors for nodes, ports and trunks.
//!
//! Used in log and error messages to locate an entity in the chassis, e.g.
//! `(node_id: 1, port_id: 33, slot: 1, port: 5, channel: 2, speed: 25G)`.
//! Fields that are unset are left out: IDs, channel, index and speed when
//! they are 0, unit and logical port when they are negative.

use hal_types::speed::BITS_PER_GIGABIT;
use hal_types::{Node, PortState, SingletonPort, TrunkPort};

fn parenthesize(fields: Vec<String>) -> String {
    format!("({})", fields.join(", "))
}

fn speed_field(speed_bps: u64) -> String {
    format!("speed: {}G", speed_bps / BITS_PER_GIGABIT)
}

pub fn print_node(node: &Node) -> String {
    print_node_properties(node.id, node.slot, node.index)
}

pub fn print_singleton_port(port: &SingletonPort) -> String {
    print_port_properties(
        port.node,
        port.id,
        port.slot,
        port.port,
        port.channel,
        -1,
        -1,
        port.speed_bps,
    )
}

pub fn print_trunk_port(trunk: &TrunkPort) -> String {
    print_trunk_properties(trunk.node, trunk.id, -1, -1, 0)
}

pub fn print_node_properties(id: u64, slot: i32, index: i32) -> String {
    let mut fields = Vec::with_capacity(3);
    if id > 0 {
        fields.push(format!("id: {}", id));
    }
    fields.push(format!("slot: {}", slot));
    if index > 0 {
        fields.push(format!("index: {}", index));
    }
    parenthesize(fields)
}

/// Prints a port locator. `slot` and `port` are always present.
#[allow(clippy::too_many_arguments)]
pub fn print_port_properties(
    node_id: u64,
    port_id: u32,
    slot: i32,
    port: i32,
    channel: i32,
    unit: i32,
    logical_port: i32,
    speed_bps: u64,
) -> String {
    let mut fields = Vec::with_capacity(8);
    if node_id > 0 {
        fields.push(format!("node_id: {}", node_id));
    }
    if port_id > 0 {
        fields.push(format!("port_id: {}", port_id));
    }
    fields.push(format!("slot: {}", slot));
    fields.push(format!("port: {}", port));
    if channel > 0 {
        fields.push(format!("channel: {}", channel));
    }
    if unit >= 0 {
        fields.push(format!("unit: {}", unit));
    }
    if logical_port >= 0 {
        fields.push(format!("logical_port: {}", logical_port));
    }
    if speed_bps > 0 {
        fields.push(speed_field(speed_bps));
    }
    parenthesize(fields)
}

/// Prints a trunk locator. Every field is optional, so an entirely unset
/// trunk prints as `()`.
pub fn print_trunk_properties(
    node_id: u64,
    trunk_id: u32,
    unit: i32,
    trunk_port: i32,
    speed_bps: u64,
) -> String {
    let mut fields = Vec::with_capacity(5);
    if node_id > 0 {
        fields.push(format!("node_id: {}", node_id));
    }
    if trunk_id > 0 {
        fields.push(format!("trunk_id: {}", trunk_id));
    }
    if unit >= 0 {
        fields.push(format!("unit: {}", unit));
    }
    if trunk_port >= 0 {
        fields.push(format!("trunk_port: {}", trunk_port));
    }
    if speed_bps > 0 {
        fields.push(speed_field(speed_bps));
    }
    parenthesize(fields)
}

/// Short port state name for log messages.
///
/// Unlike `convert::port_state_to_string`, a failed port prints as `FAILED`.
pub fn print_port_state(state: PortState) -> &'static str {
    match state {
        PortState::Up => "UP",
        PortState::Down => "DOWN",
        PortState::Failed => "FAILED",
        PortState::Unknown => "UNKNOWN",
    }
}

/// Builds a singleton port descriptor with no IDs assigned yet.
pub fn build_singleton_port(slot: i32, port: i32, channel: i32, speed_bps: u64) -> SingletonPort {
    SingletonPort {
        slot,
        port,
        channel,
        speed_bps,
        ..SingletonPort::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_types::speed::{HUNDRED_GIG_BPS, TWENTY_FIVE_GIG_BPS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_node() {
        assert_eq!(print_node_properties(0, 1, 0), "(slot: 1)");
        assert_eq!(print_node_properties(7, 1, 2), "(id: 7, slot: 1, index: 2)");

        let node = Node {
            id: 3,
            slot: 2,
            index: 0,
        };
        assert_eq!(print_node(&node), "(id: 3, slot: 2)");
    }

    #[test]
    fn test_print_port_minimal() {
        assert_eq!(
            print_port_properties(0, 0, 1, 5, 0, -1, -1, 0),
            "(slot: 1, port: 5)"
        );
    }

    #[test]
    fn test_print_port_full() {
        assert_eq!(
            print_port_properties(1, 33, 1, 5, 2, 0, 10, TWENTY_FIVE_GIG_BPS),
            "(node_id: 1, port_id: 33, slot: 1, port: 5, channel: 2, unit: 0, \
             logical_port: 10, speed: 25G)"
        );
    }

    #[test]
    fn test_print_singleton_port() {
        let mut port = build_singleton_port(1, 3, 0, HUNDRED_GIG_BPS);
        assert_eq!(print_singleton_port(&port), "(slot: 1, port: 3, speed: 100G)");

        port.id = 12;
        port.node = 1;
        assert_eq!(
            print_singleton_port(&port),
            "(node_id: 1, port_id: 12, slot: 1, port: 3, speed: 100G)"
        );
    }

    #[test]
    fn test_print_trunk() {
        assert_eq!(print_trunk_properties(0, 0, -1, -1, 0), "()");
        assert_eq!(print_trunk_properties(0, 0, 0, -1, 0), "(unit: 0)");
        assert_eq!(
            print_trunk_properties(1, 2, 0, 7, HUNDRED_GIG_BPS),
            "(node_id: 1, trunk_id: 2, unit: 0, trunk_port: 7, speed: 100G)"
        );

        let trunk = TrunkPort { id: 4, node: 1 };
        assert_eq!(print_trunk_port(&trunk), "(node_id: 1, trunk_id: 4)");
    }

    #[test]
    fn test_print_port_state() {
        assert_eq!(print_port_state(PortState::Up), "UP");
        assert_eq!(print_port_state(PortState::Down), "DOWN");
        assert_eq!(print_port_state(PortState::Failed), "FAILED");
        assert_eq!(print_port_state(PortState::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_build_singleton_port() {
        let port = build_singleton_port(1, 2, 3, 0);
        assert_eq!(port.slot, 1);
        assert_eq!(port.port, 2);
        assert_eq!(port.channel, 3);
        assert_eq!(port.id, 0);
        assert_eq!(port.node, 0);
    }
}
