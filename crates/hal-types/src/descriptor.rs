//! Identifier descriptors for nodes and ports.
//!
//! These carry just enough of the chassis configuration to print a
//! human-readable locator in log and error messages.

use serde::{Deserialize, Serialize};

/// A forwarding node (switching ASIC) in the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Node {
    /// Controller-assigned node ID; 0 when not yet assigned.
    pub id: u64,
    /// Linecard slot.
    pub slot: i32,
    /// Index of the node within the slot; 0 when there is only one.
    pub index: i32,
}

/// A physical front-panel port, or one channel of a broken-out port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SingletonPort {
    /// Controller-assigned port ID; 0 when not yet assigned.
    pub id: u32,
    /// ID of the node this port belongs to.
    pub node: u64,
    pub slot: i32,
    pub port: i32,
    /// Breakout channel; 0 for a non-channelized port.
    pub channel: i32,
    pub speed_bps: u64,
}

/// A trunk (LAG) made of singleton ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TrunkPort {
    pub id: u32,
    pub node: u64,
}
