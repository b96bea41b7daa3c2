//! Display backend trait
//!
//! Defines the widget-level interface consumed by the core.

use crate::widget::WidgetId;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Widget does not exist on this display
    UnknownWidget,
    /// Text was cut to fit the widget
    TextTooLong,
}

/// Label placement inside its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Horizontally centered
    Center,
    /// Left edge plus offset in pixels
    LeftMid(i16),
    /// Right edge plus offset in pixels (negative moves inward)
    RightMid(i16),
}

/// Display backend trait
///
/// The core only writes. Backends are free to buffer and render later.
pub trait DisplayBackend {
    /// Replace a widget's text
    fn set_text(&mut self, widget: WidgetId, text: &str) -> Result<(), DisplayError>;

    /// Set a slider's position
    fn set_value(&mut self, widget: WidgetId, value: i32) -> Result<(), DisplayError>;

    /// Set a slider's range
    fn set_range(&mut self, widget: WidgetId, min: i32, max: i32) -> Result<(), DisplayError>;

    /// Show or hide a widget
    fn set_visible(&mut self, widget: WidgetId, visible: bool) -> Result<(), DisplayError>;

    /// Re-position a widget's label for its current text
    ///
    /// Must be called after `set_text` when the label width matters.
    fn align(&mut self, widget: WidgetId, align: Align) -> Result<(), DisplayError>;
}
