//! Application state of the remote
//!
//! `Remote` owns the cache, the connection machine, the policy engine and
//! the three collaborators. The UI loop is its only caller, so every
//! mutation happens in one context; the wireless stack reaches it only
//! through the [`EventMailbox`](crate::mailbox::EventMailbox).
//!
//! Nothing here fails. Each entry point returns a [`Report`] describing
//! what happened and what went wrong, and the caller decides what to log.

use heapless::Vec;
use lumalink_display::{DisplayBackend, DisplayError, WidgetId};
use lumalink_protocol::{
    parse_list, LinkRequest, ListError, ListId, PeripheralEvent, ScalarId, TelemetryChannel,
};

use crate::cache::AttributeCache;
use crate::config::RemoteConfig;
use crate::diagnostics::DiagnosticSnapshot;
use crate::link::{follow_up, ConnectionState, Edge, BULK_REFRESH};
use crate::policy::{PolicyActions, PolicyEngine};
use crate::projection::{self, Gesture, CONNECTING_MESSAGE};
use crate::traits::{LinkError, PeripheralLink, PowerError, PowerManagement, TouchState};

/// Notes kept per report
pub const MAX_NOTES: usize = 12;

/// Power operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerOp {
    Backlight,
    Shutdown,
}

/// Something worth logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    /// A list payload failed the parser and was discarded
    PayloadDropped(ListId, ListError),
    /// A list shrank below its index
    IndexClamped(ScalarId, u8),
    /// A request could not be queued
    RequestFailed(LinkRequest, LinkError),
    /// A display call failed
    DisplayFailed(DisplayError),
    /// Backlight or shutdown failed
    PowerFailed(PowerOp, PowerError),
    /// A telemetry read failed
    TelemetryFailed(TelemetryChannel, PowerError),
}

/// Outcome of one call into [`Remote`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Policy actions that fired (only set by `tick`)
    pub actions: PolicyActions,
    /// Connection edge taken (only set by `handle_event`)
    pub edge: Option<Edge>,
    pub notes: Vec<Note, MAX_NOTES>,
    /// Set when notes were lost because the report was full
    pub overflowed: bool,
}

impl Report {
    fn note(&mut self, note: Note) {
        if self.notes.push(note).is_err() {
            self.overflowed = true;
        }
    }

    fn display(&mut self, result: Result<(), DisplayError>) {
        if let Err(e) = result {
            self.note(Note::DisplayFailed(e));
        }
    }

    /// True when nothing fired and nothing went wrong
    pub fn is_quiet(&self) -> bool {
        self.actions.is_empty() && self.edge.is_none() && self.notes.is_empty()
    }
}

/// The remote's core state
pub struct Remote<D, L, P> {
    config: RemoteConfig,
    cache: AttributeCache,
    connection: ConnectionState,
    policy: PolicyEngine,
    snapshot: DiagnosticSnapshot,
    display: D,
    link: L,
    power: P,
}

impl<D, L, P> Remote<D, L, P>
where
    D: DisplayBackend,
    L: PeripheralLink,
    P: PowerManagement,
{
    pub fn new(config: RemoteConfig, display: D, link: L, power: P) -> Self {
        Self {
            policy: PolicyEngine::new(config.timeouts),
            config,
            cache: AttributeCache::new(),
            connection: ConnectionState::Disconnected,
            snapshot: DiagnosticSnapshot::new(),
            display,
            link,
            power,
        }
    }

    /// Draw the initial screen and switch the backlight on
    pub fn start(&mut self) -> Report {
        let mut report = Report::default();

        report.display(projection::configure_sliders(&mut self.display, &self.config));
        report.display(projection::show_message(&mut self.display, CONNECTING_MESSAGE));
        for list in ListId::ALL {
            report.display(projection::render_selection(&mut self.display, &self.cache, list));
        }
        for id in [ScalarId::Brightness, ScalarId::Speed] {
            report.display(projection::render_scalar(&mut self.display, &self.cache, id));
        }
        report.display(projection::render_diagnostics(&mut self.display, &self.snapshot));
        self.apply_backlight(false, &mut report);

        report
    }

    /// Consume one peripheral event
    pub fn handle_event(&mut self, now_ms: u64, event: PeripheralEvent) -> Report {
        let mut report = Report::default();

        let next = self.connection.transition(&event);
        report.edge = self.connection.edge_to(next);
        self.connection = next;

        match event {
            PeripheralEvent::Connected | PeripheralEvent::Disconnected => match report.edge {
                Some(Edge::Connected) => self.on_connected(&mut report),
                Some(Edge::Disconnected) => self.on_disconnected(now_ms, &mut report),
                None => {}
            },
            PeripheralEvent::ScalarChanged { id, value } => {
                self.cache.set_scalar(id, value);
                report.display(projection::render_scalar(&mut self.display, &self.cache, id));
            }
            PeripheralEvent::ListReceived { id, payload } => match parse_list(&payload) {
                Ok(items) => {
                    if let Some(index) = self.cache.set_list(id, items) {
                        report.note(Note::IndexClamped(id.index(), index));
                    }
                    report.display(projection::render_selection(
                        &mut self.display,
                        &self.cache,
                        id,
                    ));
                    self.submit(follow_up(id), &mut report);
                }
                Err(e) => report.note(Note::PayloadDropped(id, e)),
            },
        }

        report
    }

    /// Consume one user gesture
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Report {
        let mut report = Report::default();

        if let Gesture::SliderMoved { scalar, value } = gesture {
            report.display(
                self.display
                    .set_value(WidgetId::Slider(scalar), i32::from(value)),
            );
        }

        if let Some(request) = projection::apply_gesture(&mut self.cache, gesture) {
            if let LinkRequest::Write { id, .. } = request {
                report.display(projection::render_scalar(&mut self.display, &self.cache, id));
            }
            self.submit(request, &mut report);
        }

        report
    }

    /// Record a press or release edge
    pub fn touch_edge(&mut self, now_ms: u64, _state: TouchState) -> Report {
        let mut report = Report::default();
        if self.policy.record_interaction(now_ms) {
            self.apply_backlight(false, &mut report);
        }
        report
    }

    /// Run the timeout policies
    pub fn tick(&mut self, now_ms: u64) -> Report {
        let mut report = Report::default();
        let actions = self.policy.tick(now_ms);

        if actions.refresh_diagnostics {
            let (snapshot, failures) = DiagnosticSnapshot::capture(&mut self.power);
            self.snapshot = snapshot;
            for (channel, e) in failures {
                report.note(Note::TelemetryFailed(channel, e));
            }
            report.display(projection::render_diagnostics(&mut self.display, &self.snapshot));
        }

        if actions.dim {
            self.apply_backlight(true, &mut report);
        }

        if actions.power_off {
            if let Err(e) = self.power.shutdown() {
                report.note(Note::PowerFailed(PowerOp::Shutdown, e));
            }
        }

        report.actions = actions;
        report
    }

    fn on_connected(&mut self, report: &mut Report) {
        self.policy.record_connected();
        for request in BULK_REFRESH {
            self.submit(request, report);
        }
        report.display(projection::hide_message(&mut self.display));
    }

    fn on_disconnected(&mut self, now_ms: u64, report: &mut Report) {
        self.policy.record_disconnected(now_ms);
        report.display(projection::show_message(&mut self.display, CONNECTING_MESSAGE));
    }

    fn submit(&mut self, request: LinkRequest, report: &mut Report) {
        if let Err(e) = self.link.submit(request) {
            report.note(Note::RequestFailed(request, e));
        }
    }

    fn apply_backlight(&mut self, dimmed: bool, report: &mut Report) {
        let level = self.config.backlight.level_mv(dimmed);
        if let Err(e) = self.power.set_backlight_mv(level) {
            report.note(Note::PowerFailed(PowerOp::Backlight, e));
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn is_dimmed(&self) -> bool {
        self.policy.is_dimmed()
    }

    pub fn snapshot(&self) -> &DiagnosticSnapshot {
        &self.snapshot
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn power(&self) -> &P {
        &self.power
    }
}
