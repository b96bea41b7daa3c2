//! UI task
//!
//! Owns the core, the touch controller and the panel. Once per tick it
//! drains the event mailbox, polls touch, runs the timeout policies and
//! repaints the panel if anything changed.

use defmt::*;

use lumalink_core::projection::TouchRouter;
use lumalink_core::traits::{EdgeDetector, TouchInput, TouchState};
use lumalink_display::render;

use crate::board::{FirmwareRemote, Panel, Touch};
use crate::channels::EVENTS;
use crate::report::log_report;
use crate::tasks::tick::TICK_SIGNAL;

#[embassy_executor::task]
pub async fn ui_task(mut remote: FirmwareRemote, mut touch: Touch, mut panel: Panel) -> ! {
    info!("UI task started");

    let mut edges = EdgeDetector::new();
    let mut router = TouchRouter::new(remote.config());
    let mut touch_failing = false;

    log_report(&remote.start());

    loop {
        let now_ms = TICK_SIGNAL.wait().await;

        for event in EVENTS.drain() {
            debug!("Event: {}", event);
            log_report(&remote.handle_event(now_ms, event));
        }

        match touch.point() {
            Ok(point) => {
                if touch_failing {
                    info!("Touch controller recovered");
                    touch_failing = false;
                }

                if let Some(edge) = edges.update(TouchState::of(point)) {
                    if remote.is_dimmed() {
                        info!("Touched, restoring backlight");
                    }
                    log_report(&remote.touch_edge(now_ms, edge));
                }

                if let Some(gesture) = router.update(point) {
                    trace!("Gesture: {}", gesture);
                    log_report(&remote.handle_gesture(gesture));
                }
            }
            Err(_) => {
                if !touch_failing {
                    warn!("Touch controller read failed");
                    touch_failing = true;
                }
            }
        }

        log_report(&remote.tick(now_ms));

        if remote.display().is_dirty() {
            if render::draw(remote.display(), &mut panel).is_err() {
                warn!("Panel redraw failed");
            }
            // Retried on the next change, not every tick
            remote.display_mut().mark_clean();
        }
    }
}
