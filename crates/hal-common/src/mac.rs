//! MAC address string helpers for YANG-modeled configuration and state.
//!
//! The YANG string form here is what the HAL has always published: six
//! colon-separated lowercase hex octets *without* zero padding
//! (`0:11:22:33:44:55`). Use [`hal_types::MacAddress`]'s `Display` when a
//! zero-padded form is wanted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a valid MAC address: six two-digit hex octets separated by
/// `:` or `-`.
pub const MAC_ADDRESS_PATTERN: &str = r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$";

static MAC_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAC_ADDRESS_PATTERN).expect("Invalid regex pattern"));

/// Formats the low 48 bits of `mac_address` as a YANG MAC string.
pub fn mac_address_to_yang_string(mac_address: u64) -> String {
    format!(
        "{:x}:{:x}:{:x}:{:x}:{:x}:{:x}",
        (mac_address >> 40) & 0xff,
        (mac_address >> 32) & 0xff,
        (mac_address >> 24) & 0xff,
        (mac_address >> 16) & 0xff,
        (mac_address >> 8) & 0xff,
        mac_address & 0xff
    )
}

/// Parses a YANG MAC string into a `u64`.
///
/// Parsing is lenient: colons are dropped and the longest leading run of hex
/// digits is used. Input with no leading hex digits yields 0 and a value too
/// large for `u64` saturates at `u64::MAX`. A leading `+` or `-` sign is not
/// accepted, so `"-1"` yields 0 rather than wrapping to `u64::MAX`. Call
/// [`is_mac_address_valid`] first when the input is untrusted.
pub fn yang_string_to_mac_address(yang_string: &str) -> u64 {
    let stripped: String = yang_string.chars().filter(|c| *c != ':').collect();
    let trimmed = stripped.trim_start();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits_end = hex
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(hex.len());
    let digits = &hex[..digits_end];
    if digits.is_empty() {
        return 0;
    }

    u64::from_str_radix(digits, 16).unwrap_or(u64::MAX)
}

/// Returns true if `mac_address` is a well-formed MAC address string.
pub fn is_mac_address_valid(mac_address: &str) -> bool {
    MAC_ADDRESS_RE.is_match(mac_address)
}
