//! Tick task for time-based updates
//!
//! Drives the UI loop: mailbox drain, touch polling, timeout policies and
//! redraws all happen once per tick.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

use lumalink_core::policy::POLL_INTERVAL_MS;

/// Signal carrying milliseconds since boot
///
/// A slow UI pass coalesces missed ticks into the latest one.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u64> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(start.elapsed().as_millis());
    }
}
