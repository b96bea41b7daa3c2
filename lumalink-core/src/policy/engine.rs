//! Timeout policy engine
//!
//! Three independent rules checked against a monotonic millisecond clock:
//! auto power-off while disconnected, screen dim while idle, and periodic
//! telemetry refresh. None of them gates another.

pub use crate::config::Timeouts;

/// How often the firmware evaluates the policy (ms)
pub const POLL_INTERVAL_MS: u64 = 10;

/// Inputs the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityState {
    pub connected: bool,
    /// Time of the last transition into Disconnected
    pub last_disconnect_ms: u64,
    /// Time of the last touch edge
    pub last_ui_interaction_ms: u64,
    pub dimmed: bool,
    /// Cleared once power-off fires, set again by the next disconnect
    pub power_off_armed: bool,
    /// Earliest time of the next telemetry refresh
    pub next_diagnostic_ms: u64,
}

impl ActivityState {
    /// State at power-on
    ///
    /// Both idle clocks start one full timeout ahead of zero, so a remote
    /// that never connects or is never touched gets twice the normal grace
    /// before powering off or dimming.
    pub fn at_boot(timeouts: &Timeouts) -> Self {
        Self {
            connected: false,
            last_disconnect_ms: u64::from(timeouts.power_off_ms),
            last_ui_interaction_ms: u64::from(timeouts.dim_ms),
            dimmed: false,
            power_off_armed: true,
            next_diagnostic_ms: u64::from(timeouts.diagnostic_settle_ms),
        }
    }
}

/// Actions due at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PolicyActions {
    pub power_off: bool,
    pub dim: bool,
    pub refresh_diagnostics: bool,
}

impl PolicyActions {
    pub fn is_empty(&self) -> bool {
        !(self.power_off || self.dim || self.refresh_diagnostics)
    }
}

/// Evaluate all rules without changing anything
pub fn evaluate(now_ms: u64, state: &ActivityState, timeouts: &Timeouts) -> PolicyActions {
    let disconnected_for = now_ms.saturating_sub(state.last_disconnect_ms);
    let idle_for = now_ms.saturating_sub(state.last_ui_interaction_ms);

    PolicyActions {
        power_off: !state.connected
            && state.power_off_armed
            && disconnected_for >= u64::from(timeouts.power_off_ms),
        dim: !state.dimmed && idle_for >= u64::from(timeouts.dim_ms),
        refresh_diagnostics: now_ms >= state.next_diagnostic_ms,
    }
}

/// Policy engine holding the activity state between ticks
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    timeouts: Timeouts,
    state: ActivityState,
}

impl PolicyEngine {
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            state: ActivityState::at_boot(&timeouts),
            timeouts,
        }
    }

    /// Evaluate the rules and latch whatever fired
    pub fn tick(&mut self, now_ms: u64) -> PolicyActions {
        let actions = evaluate(now_ms, &self.state, &self.timeouts);

        if actions.power_off {
            self.state.power_off_armed = false;
        }
        if actions.dim {
            self.state.dimmed = true;
        }
        if actions.refresh_diagnostics {
            self.state.next_diagnostic_ms =
                now_ms.saturating_add(u64::from(self.timeouts.diagnostic_period_ms));
        }

        actions
    }

    /// Record a touch edge
    ///
    /// Returns true if the screen was dimmed and must be restored.
    pub fn record_interaction(&mut self, now_ms: u64) -> bool {
        self.state.last_ui_interaction_ms = now_ms;
        core::mem::replace(&mut self.state.dimmed, false)
    }

    pub fn record_connected(&mut self) {
        self.state.connected = true;
    }

    /// Record a transition into Disconnected and re-arm power-off
    pub fn record_disconnected(&mut self, now_ms: u64) {
        self.state.connected = false;
        self.state.last_disconnect_ms = now_ms;
        self.state.power_off_armed = true;
    }

    pub fn is_dimmed(&self) -> bool {
        self.state.dimmed
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }
}
