//! Fixed row layout for the 320x240 panel
//!
//! ```text
//!   y
//!   0 ┌──────────────── message ────────────────┐
//!  30 │ Brightness        ════════●═════════     │
//!  64 │ Speed             ═══●══════════════     │
//!  98 │ [<]             Color label          [>] │
//! 138 │ [<]            Pattern label         [>] │
//! 178 │ Temperature:                      31.2 C │
//!     │ ... one 12 px row per telemetry channel  │
//! 238 └──────────────────────────────────────────┘
//! ```

use lumalink_protocol::{ListId, ScalarId, TelemetryChannel};

use crate::widget::WidgetId;

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 320;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 240;

/// Width of selector arrow buttons
pub const BUTTON_WIDTH: u16 = 70;

/// Width of slider tracks
pub const SLIDER_WIDTH: u16 = 200;

/// Gap between the slider track and the right screen edge
pub const SLIDER_MARGIN: u16 = 10;

/// Height of one diagnostic row
pub const DIAG_ROW_HEIGHT: u16 = 12;

const MESSAGE_Y: i16 = 0;
const MESSAGE_HEIGHT: u16 = 30;
const SLIDER_HEIGHT: u16 = 34;
const SELECTOR_HEIGHT: u16 = 40;
const BRIGHTNESS_Y: i16 = MESSAGE_Y + MESSAGE_HEIGHT as i16;
const SPEED_Y: i16 = BRIGHTNESS_Y + SLIDER_HEIGHT as i16;
const COLOR_Y: i16 = SPEED_Y + SLIDER_HEIGHT as i16;
const PATTERN_Y: i16 = COLOR_Y + SELECTOR_HEIGHT as i16;
const DIAG_Y: i16 = PATTERN_Y + SELECTOR_HEIGHT as i16;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    /// Create a region
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside
    pub const fn contains(&self, x: i16, y: i16) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i16
            && y < self.y + self.height as i16
    }

    /// Vertical center line
    pub const fn center_y(&self) -> i16 {
        self.y + (self.height / 2) as i16
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i16 {
        self.x + self.width as i16
    }
}

/// Full-width row holding a widget
pub fn row(widget: WidgetId) -> Option<Region> {
    let full = |y, height| Some(Region::new(0, y, SCREEN_WIDTH, height));
    match widget {
        WidgetId::Message => full(MESSAGE_Y, MESSAGE_HEIGHT),
        WidgetId::Slider(ScalarId::Brightness) => full(BRIGHTNESS_Y, SLIDER_HEIGHT),
        WidgetId::Slider(ScalarId::Speed) => full(SPEED_Y, SLIDER_HEIGHT),
        WidgetId::Slider(_) => None,
        WidgetId::Selector(ListId::Colors) => full(COLOR_Y, SELECTOR_HEIGHT),
        WidgetId::Selector(ListId::Patterns) => full(PATTERN_Y, SELECTOR_HEIGHT),
        WidgetId::Diagnostic(channel) => full(diag_row_y(channel), DIAG_ROW_HEIGHT),
    }
}

/// Slider track inside its row
pub fn slider_track(scalar: ScalarId) -> Option<Region> {
    let row = row(WidgetId::Slider(scalar))?;
    let x = (SCREEN_WIDTH - SLIDER_WIDTH - SLIDER_MARGIN) as i16;
    Some(Region::new(x, row.y, SLIDER_WIDTH, row.height))
}

/// Left and right arrow buttons of a selector
pub fn selector_buttons(list: ListId) -> Option<(Region, Region)> {
    let row = row(WidgetId::Selector(list))?;
    let left = Region::new(0, row.y, BUTTON_WIDTH, row.height);
    let right = Region::new(
        (SCREEN_WIDTH - BUTTON_WIDTH) as i16,
        row.y,
        BUTTON_WIDTH,
        row.height,
    );
    Some((left, right))
}

/// Glyph advance used for a widget's label
pub const fn char_width(widget: WidgetId) -> u16 {
    match widget {
        WidgetId::Diagnostic(_) => 6,
        _ => 10,
    }
}

/// Map a slider x coordinate to a value in `[min, max]`
pub fn slider_value_at(track: Region, x: i16, min: i32, max: i32) -> i32 {
    let width = i32::from(track.width.max(1)) - 1;
    let offset = i32::from(x - track.x).clamp(0, width);
    if width == 0 {
        return min;
    }
    min + (offset * (max - min) + width / 2) / width
}

fn diag_row_y(channel: TelemetryChannel) -> i16 {
    DIAG_Y + (channel.slot() as i16) * DIAG_ROW_HEIGHT as i16
}
