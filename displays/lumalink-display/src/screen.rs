//! Retained widget model
//!
//! Holds the last text, value and visibility pushed for every widget so a
//! renderer can redraw the whole panel from it.

use heapless::String;

use crate::backend::{Align, DisplayBackend, DisplayError};
use crate::layout;
use crate::widget::{WidgetId, WIDGET_COUNT};

/// Maximum characters per widget label
pub const MAX_TEXT_LEN: usize = 32;

#[derive(Debug, Clone)]
struct WidgetState {
    text: String<MAX_TEXT_LEN>,
    value: i32,
    min: i32,
    max: i32,
    visible: bool,
    /// Left edge of the label, set by `align`
    text_x: i16,
}

impl WidgetState {
    fn new() -> Self {
        Self {
            text: String::new(),
            value: 0,
            min: 0,
            max: 255,
            visible: true,
            text_x: 0,
        }
    }
}

/// Retained screen for the widget display
#[derive(Debug, Clone)]
pub struct Screen {
    widgets: [WidgetState; WIDGET_COUNT],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a screen with every widget empty and visible
    pub fn new() -> Self {
        Self {
            widgets: core::array::from_fn(|_| WidgetState::new()),
            dirty: true,
        }
    }

    fn state(&self, widget: WidgetId) -> Option<&WidgetState> {
        widget.slot().map(|slot| &self.widgets[slot])
    }

    fn state_mut(&mut self, widget: WidgetId) -> Result<&mut WidgetState, DisplayError> {
        let slot = widget.slot().ok_or(DisplayError::UnknownWidget)?;
        Ok(&mut self.widgets[slot])
    }

    /// Current label text
    pub fn text(&self, widget: WidgetId) -> Option<&str> {
        self.state(widget).map(|s| s.text.as_str())
    }

    /// Current slider value
    pub fn value(&self, widget: WidgetId) -> Option<i32> {
        self.state(widget).map(|s| s.value)
    }

    /// Current slider range
    pub fn range(&self, widget: WidgetId) -> Option<(i32, i32)> {
        self.state(widget).map(|s| (s.min, s.max))
    }

    /// Check if a widget is shown
    pub fn is_visible(&self, widget: WidgetId) -> bool {
        self.state(widget).is_some_and(|s| s.visible)
    }

    /// Left edge of a widget's label in pixels
    pub fn text_x(&self, widget: WidgetId) -> Option<i16> {
        self.state(widget).map(|s| s.text_x)
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl DisplayBackend for Screen {
    fn set_text(&mut self, widget: WidgetId, text: &str) -> Result<(), DisplayError> {
        let state = self.state_mut(widget)?;
        state.text.clear();

        let mut end = text.len().min(MAX_TEXT_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        // Fits: end <= MAX_TEXT_LEN
        let _ = state.text.push_str(&text[..end]);
        self.dirty = true;

        if end < text.len() {
            return Err(DisplayError::TextTooLong);
        }
        Ok(())
    }

    fn set_value(&mut self, widget: WidgetId, value: i32) -> Result<(), DisplayError> {
        let state = self.state_mut(widget)?;
        state.value = value.clamp(state.min, state.max);
        self.dirty = true;
        Ok(())
    }

    fn set_range(&mut self, widget: WidgetId, min: i32, max: i32) -> Result<(), DisplayError> {
        let state = self.state_mut(widget)?;
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        state.min = min;
        state.max = max;
        state.value = state.value.clamp(min, max);
        self.dirty = true;
        Ok(())
    }

    fn set_visible(&mut self, widget: WidgetId, visible: bool) -> Result<(), DisplayError> {
        let state = self.state_mut(widget)?;
        if state.visible != visible {
            state.visible = visible;
            self.dirty = true;
        }
        Ok(())
    }

    fn align(&mut self, widget: WidgetId, align: Align) -> Result<(), DisplayError> {
        let row = layout::row(widget).ok_or(DisplayError::UnknownWidget)?;
        let state = self.state_mut(widget)?;

        let text_width = (state.text.chars().count() as u16)
            .saturating_mul(layout::char_width(widget))
            .min(row.width) as i16;

        state.text_x = match align {
            Align::Center => row.x + (row.width as i16 - text_width) / 2,
            Align::LeftMid(offset) => row.x + offset,
            Align::RightMid(offset) => row.right() - text_width + offset,
        };
        self.dirty = true;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, widget) in self.widgets.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", widget.text.as_str());
        }
        defmt::write!(f, "]");
    }
}
