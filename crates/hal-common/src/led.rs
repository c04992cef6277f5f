//! Port LED signal resolution.
//!
//! A front-panel port LED summarizes four independent signals about the
//! port. [`resolve_single`] turns those signals into the color and blink
//! pattern the LED should show. When one physical LED is shared by several
//! logical ports (e.g. the channels of a broken-out QSFP), the per-port
//! signals are folded into one with [`aggregate`].
//!
//! | Admin | Oper | Block | Health | LED |
//! |-------|------|-------|--------|-----|
//! | not ENABLED | * | * | * | AMBER / SOLID |
//! | ENABLED | not UP | * | * | GREEN / OFF |
//! | ENABLED | UP | BLOCKED | * | GREEN / BLINKING_SLOW |
//! | ENABLED | UP | other | GOOD | GREEN / SOLID |
//! | ENABLED | UP | other | BAD | AMBER / BLINKING_FAST |
//! | ENABLED | UP | other | UNKNOWN | GREEN / BLINKING_FAST |

use hal_types::{
    AdminState, HealthState, LedColor, LedSignal, LedState, PortState, TrunkMemberBlockState,
};
use tracing::trace;

/// Computes the LED signal for a single port.
///
/// The checks run in a fixed order and the first match wins; each later
/// signal only matters once the earlier ones are satisfied. `block_state` is
/// `Unknown` for ports that are not trunk members, so those fall through to
/// the health checks.
pub fn resolve_single(
    admin_state: AdminState,
    oper_state: PortState,
    health_state: HealthState,
    block_state: TrunkMemberBlockState,
) -> LedSignal {
    let signal = if !admin_state.is_enabled() {
        // Admin disabled overrides every other state.
        LedSignal::new(LedColor::Amber, LedState::Solid)
    } else if !oper_state.is_up() {
        // Admin enabled but no link: the LED is turned off.
        LedSignal::new(LedColor::Green, LedState::Off)
    } else if block_state.is_blocked() {
        // Link up but excluded from forwarding by LACP.
        LedSignal::new(LedColor::Green, LedState::BlinkingSlow)
    } else if health_state == HealthState::Good {
        LedSignal::new(LedColor::Green, LedState::Solid)
    } else if health_state == HealthState::Bad {
        // Forwarding with a detected anomaly, e.g. neighbor mismatch.
        LedSignal::new(LedColor::Amber, LedState::BlinkingFast)
    } else {
        // Forwarding but health is not known to the controller.
        LedSignal::new(LedColor::Green, LedState::BlinkingFast)
    };

    trace!(
        admin = %admin_state,
        oper = %oper_state,
        health = %health_state,
        block = %block_state,
        led = %signal,
        "Resolved port LED signal"
    );

    signal
}

/// Merges the signals of all ports sharing one LED into a single signal.
///
/// - No signals: [`LedSignal::UNKNOWN`].
/// - All signals equal: that signal.
/// - Otherwise the signals are folded left to right. Whenever the next
///   signal differs from the running aggregate, the aggregate becomes amber,
///   blinking slowly if either side was a blinking amber and solid otherwise.
///
/// Later signals are compared against the running (possibly already amber)
/// aggregate, not against the original per-port signals.
pub fn aggregate(signals: &[LedSignal]) -> LedSignal {
    let Some((first, rest)) = signals.split_first() else {
        return LedSignal::UNKNOWN;
    };

    let merged = rest.iter().fold(*first, |running, next| {
        if running == *next {
            running
        } else {
            merge_conflicting(running, *next)
        }
    });

    trace!(
        ports = signals.len(),
        led = %merged,
        "Aggregated shared LED signal"
    );

    merged
}

/// Conflict between two different signals is always surfaced as amber; a
/// blinking amber on either side wins visibility as a slow blink.
fn merge_conflicting(running: LedSignal, next: LedSignal) -> LedSignal {
    let state = if running.is_amber_blinking() || next.is_amber_blinking() {
        LedState::BlinkingSlow
    } else {
        LedState::Solid
    };
    LedSignal::new(LedColor::Amber, state)
}
