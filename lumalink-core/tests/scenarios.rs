//! End-to-end behavior of the remote against fake collaborators.

mod common;

use common::{remote, FakePower, RecordingLink};
use lumalink_core::config::RemoteConfig;
use lumalink_core::link::{Edge, BULK_REFRESH};
use lumalink_core::projection::{Gesture, StepDirection, TouchRouter, CONNECTING_MESSAGE};
use lumalink_core::traits::{PowerError, TouchPoint, TouchState};
use lumalink_core::{Note, PowerOp, Remote};
use lumalink_display::{layout, Screen, WidgetId};
use lumalink_protocol::{LinkRequest, ListId, PeripheralEvent, ScalarId, TelemetryChannel};

const PATTERNS: &[u8] = b"Rainbow\nSolid\nChase\0";

#[test]
fn selector_click_advances_and_writes() {
    let mut remote = remote();

    remote.handle_event(0, PeripheralEvent::Connected);
    remote.handle_event(10, PeripheralEvent::list(ListId::Patterns, PATTERNS));
    remote.handle_event(
        20,
        PeripheralEvent::ScalarChanged {
            id: ScalarId::PatternIndex,
            value: 1,
        },
    );

    let selector = WidgetId::Selector(ListId::Patterns);
    assert_eq!(remote.display().text(selector), Some("Solid"));

    remote.handle_gesture(Gesture::SelectorStep {
        list: ListId::Patterns,
        direction: StepDirection::Next,
    });

    assert_eq!(remote.cache().get_scalar(ScalarId::PatternIndex), 2);
    assert_eq!(remote.display().text(selector), Some("Chase"));
    assert_eq!(
        remote.link().sent.last(),
        Some(&LinkRequest::Write {
            id: ScalarId::PatternIndex,
            value: 2
        })
    );
}

#[test]
fn selector_wraps_backwards() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::Connected);
    remote.handle_event(10, PeripheralEvent::list(ListId::Patterns, PATTERNS));

    remote.handle_gesture(Gesture::SelectorStep {
        list: ListId::Patterns,
        direction: StepDirection::Previous,
    });
    assert_eq!(
        remote.display().text(WidgetId::Selector(ListId::Patterns)),
        Some("Chase")
    );
}

/// Feed touch samples through the router into the remote
fn touch(
    router: &mut TouchRouter,
    remote: &mut common::TestRemote,
    samples: &[Option<(i16, i16)>],
) {
    for sample in samples {
        let point = sample.map(|(x, y)| TouchPoint {
            x: x as u16,
            y: y as u16,
        });
        if let Some(gesture) = router.update(point) {
            remote.handle_gesture(gesture);
        }
    }
}

#[test]
fn slider_drag_writes_only_on_release() {
    let mut remote = remote();
    let mut router = TouchRouter::new(remote.config());
    remote.handle_event(0, PeripheralEvent::Connected);
    let before = remote.link().sent.len();

    let track = layout::slider_track(ScalarId::Brightness).unwrap();
    let y = track.center_y();
    let drag = [
        Some((track.x, y)),
        Some((track.x + 40, y)),
        Some((track.right() - 1, y)),
    ];
    touch(&mut router, &mut remote, &drag);

    // Finger still down: the bar follows, nothing goes upstream
    let slider = WidgetId::Slider(ScalarId::Brightness);
    assert_eq!(remote.display().value(slider), Some(250));
    assert_eq!(remote.link().sent.len(), before);

    touch(&mut router, &mut remote, &[None]);
    assert_eq!(remote.link().sent.len(), before + 1);
    assert_eq!(
        remote.link().sent.last(),
        Some(&LinkRequest::Write {
            id: ScalarId::Brightness,
            value: 250
        })
    );
}

#[test]
fn arrow_press_writes_on_release_inside_only() {
    let mut remote = remote();
    let mut router = TouchRouter::new(remote.config());
    remote.handle_event(0, PeripheralEvent::Connected);
    remote.handle_event(10, PeripheralEvent::list(ListId::Patterns, PATTERNS));
    let before = remote.link().sent.len();

    let (_, next) = layout::selector_buttons(ListId::Patterns).unwrap();
    let y = next.center_y();

    // Slid off the arrow before lifting: cancelled
    touch(&mut router, &mut remote, &[Some((next.x + 5, y)), Some((160, y)), None]);
    assert_eq!(remote.link().sent.len(), before);
    assert_eq!(remote.cache().get_scalar(ScalarId::PatternIndex), 0);

    // Held on the arrow: nothing until the finger lifts
    touch(&mut router, &mut remote, &[Some((next.x + 5, y)), Some((next.x + 6, y))]);
    assert_eq!(remote.link().sent.len(), before);

    touch(&mut router, &mut remote, &[None]);
    assert_eq!(
        remote.link().sent.last(),
        Some(&LinkRequest::Write {
            id: ScalarId::PatternIndex,
            value: 1
        })
    );
}

#[test]
fn reconnect_reads_lists_before_indices() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::Connected);
    assert_eq!(remote.link().sent, BULK_REFRESH.to_vec());

    remote.handle_event(5, PeripheralEvent::list(ListId::Colors, b"Red\nGreen\0"));
    assert_eq!(
        remote.link().sent.last(),
        Some(&LinkRequest::read_scalar(ScalarId::ColorIndex))
    );
}

#[test]
fn power_off_fires_once_per_disconnect() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::Connected);
    let report = remote.handle_event(0, PeripheralEvent::Disconnected);
    assert_eq!(report.edge, Some(Edge::Disconnected));

    let mut t = 0;
    while t < 40_000 {
        assert!(!remote.tick(t).actions.power_off, "fired early at {t}");
        t += 10;
    }
    assert!(!remote.tick(39_999).actions.power_off);
    assert!(remote.tick(40_000).actions.power_off);

    for t in (40_010..60_000).step_by(10) {
        remote.tick(t);
    }
    assert_eq!(remote.power().shutdowns, 1);
}

#[test]
fn failed_shutdown_is_reported_not_retried() {
    let power = FakePower {
        fail_shutdown: true,
        ..FakePower::default()
    };
    let mut remote = Remote::new(
        RemoteConfig::default(),
        Screen::new(),
        RecordingLink::default(),
        power,
    );
    remote.handle_event(0, PeripheralEvent::Connected);
    remote.handle_event(0, PeripheralEvent::Disconnected);

    let report = remote.tick(40_000);
    assert!(report
        .notes
        .contains(&Note::PowerFailed(PowerOp::Shutdown, PowerError::Bus)));
    remote.tick(40_010);
    assert_eq!(remote.power().shutdowns, 1);
}

#[test]
fn touch_within_window_prevents_dim() {
    let mut remote = remote();
    remote.touch_edge(0, TouchState::Pressed);
    remote.touch_edge(50, TouchState::Released);

    remote.touch_edge(15_000, TouchState::Pressed);
    assert!(!remote.tick(20_050).actions.dim);
    assert!(!remote.is_dimmed());

    assert!(remote.tick(35_000).actions.dim);
    assert_eq!(remote.power().backlight_mv.last(), Some(&2500));
}

#[test]
fn idle_remote_dims() {
    let mut remote = remote();
    remote.touch_edge(1_000, TouchState::Pressed);
    assert!(!remote.tick(20_999).actions.dim);
    assert!(remote.tick(21_000).actions.dim);
    assert!(remote.is_dimmed());
}

#[test]
fn diagnostics_wait_for_settle_then_repeat() {
    let mut remote = remote();
    let diag = WidgetId::Diagnostic(TelemetryChannel::BatteryVoltage);

    for t in (0..3_000).step_by(10) {
        assert!(!remote.tick(t).actions.refresh_diagnostics);
    }
    assert_eq!(remote.display().text(diag), Some("--"));

    assert!(remote.tick(3_000).actions.refresh_diagnostics);
    assert_eq!(remote.display().text(diag), Some("4.05 V"));

    let fired: Vec<u64> = (3_010..=4_500)
        .step_by(10)
        .filter(|&t| remote.tick(t).actions.refresh_diagnostics)
        .collect();
    assert_eq!(fired, vec![3_500, 4_000, 4_500]);
}

#[test]
fn diagnostics_refresh_regardless_of_connection() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::Connected);
    assert!(remote.tick(3_000).actions.refresh_diagnostics);
    remote.handle_event(3_100, PeripheralEvent::Disconnected);
    assert!(remote.tick(3_500).actions.refresh_diagnostics);
    assert_eq!(remote.power().telemetry_reads, 2 * TelemetryChannel::ALL.len());
}

#[test]
fn disconnect_shows_placeholder_and_keeps_values() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::Connected);
    assert!(!remote.display().is_visible(WidgetId::Message));

    remote.handle_event(10, PeripheralEvent::list(ListId::Patterns, PATTERNS));
    remote.handle_event(20, PeripheralEvent::Disconnected);

    assert!(remote.display().is_visible(WidgetId::Message));
    assert_eq!(remote.display().text(WidgetId::Message), Some(CONNECTING_MESSAGE));
    assert_eq!(
        remote.display().text(WidgetId::Selector(ListId::Patterns)),
        Some("Rainbow")
    );
}

#[test]
fn shrinking_list_moves_selection() {
    let mut remote = remote();
    remote.handle_event(0, PeripheralEvent::list(ListId::Patterns, PATTERNS));
    remote.handle_event(
        1,
        PeripheralEvent::ScalarChanged {
            id: ScalarId::PatternIndex,
            value: 2,
        },
    );

    let report = remote.handle_event(2, PeripheralEvent::list(ListId::Patterns, b"Rainbow\0"));
    assert!(report
        .notes
        .contains(&Note::IndexClamped(ScalarId::PatternIndex, 0)));
    assert_eq!(
        remote.display().text(WidgetId::Selector(ListId::Patterns)),
        Some("Rainbow")
    );
}
