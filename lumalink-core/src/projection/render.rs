//! Cache to display
//!
//! Push-model rendering: the caller renders whatever it just changed.

use lumalink_display::{Align, DisplayBackend, DisplayError, WidgetId};
use lumalink_protocol::{ListId, ScalarId, TelemetryChannel};

use crate::cache::AttributeCache;
use crate::config::RemoteConfig;
use crate::diagnostics::DiagnosticSnapshot;

/// Message shown while no peripheral is connected
pub const CONNECTING_MESSAGE: &str = "Connecting...";

/// Right margin of the diagnostic values
pub const DIAGNOSTIC_OFFSET: i16 = -10;

/// Draw the selected item of a list, centered
pub fn render_selection<D: DisplayBackend>(
    display: &mut D,
    cache: &AttributeCache,
    list: ListId,
) -> Result<(), DisplayError> {
    let widget = WidgetId::Selector(list);
    display.set_text(widget, cache.selected_item(list).unwrap_or(""))?;
    display.align(widget, Align::Center)
}

/// Draw a scalar into its widget
///
/// Index attributes update their selector, the rest their slider.
pub fn render_scalar<D: DisplayBackend>(
    display: &mut D,
    cache: &AttributeCache,
    id: ScalarId,
) -> Result<(), DisplayError> {
    match id.indexed_list() {
        Some(list) => render_selection(display, cache, list),
        None => display.set_value(WidgetId::Slider(id), i32::from(cache.get_scalar(id))),
    }
}

/// Show a centered status message
pub fn show_message<D: DisplayBackend>(display: &mut D, text: &str) -> Result<(), DisplayError> {
    display.set_text(WidgetId::Message, text)?;
    display.align(WidgetId::Message, Align::Center)?;
    display.set_visible(WidgetId::Message, true)
}

pub fn hide_message<D: DisplayBackend>(display: &mut D) -> Result<(), DisplayError> {
    display.set_visible(WidgetId::Message, false)
}

/// Apply slider ranges from the configuration
pub fn configure_sliders<D: DisplayBackend>(
    display: &mut D,
    config: &RemoteConfig,
) -> Result<(), DisplayError> {
    for (id, range) in [
        (ScalarId::Brightness, config.brightness),
        (ScalarId::Speed, config.speed),
    ] {
        display.set_range(
            WidgetId::Slider(id),
            i32::from(range.min),
            i32::from(range.max),
        )?;
    }
    Ok(())
}

/// Draw every diagnostic row
///
/// Keeps going past a failed row and returns the last error.
pub fn render_diagnostics<D: DisplayBackend>(
    display: &mut D,
    snapshot: &DiagnosticSnapshot,
) -> Result<(), DisplayError> {
    let mut result = Ok(());
    for channel in TelemetryChannel::ALL {
        if let Err(e) = render_diagnostic(display, snapshot, channel) {
            result = Err(e);
        }
    }
    result
}

fn render_diagnostic<D: DisplayBackend>(
    display: &mut D,
    snapshot: &DiagnosticSnapshot,
    channel: TelemetryChannel,
) -> Result<(), DisplayError> {
    let widget = WidgetId::Diagnostic(channel);
    display.set_text(widget, snapshot.format(channel).as_str())?;
    display.align(widget, Align::RightMid(DIAGNOSTIC_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumalink_display::Screen;
    use lumalink_protocol::parse_list;

    #[test]
    fn test_selection_centered() {
        let mut cache = AttributeCache::new();
        cache.set_list(ListId::Patterns, parse_list(b"Rainbow\nSolid\0").unwrap());
        cache.set_scalar(ScalarId::PatternIndex, 1);

        let mut screen = Screen::new();
        render_scalar(&mut screen, &cache, ScalarId::PatternIndex).unwrap();
        let widget = WidgetId::Selector(ListId::Patterns);
        assert_eq!(screen.text(widget), Some("Solid"));
        assert_eq!(screen.text_x(widget), Some(135));
    }

    #[test]
    fn test_empty_list_renders_blank() {
        let cache = AttributeCache::new();
        let mut screen = Screen::new();
        render_selection(&mut screen, &cache, ListId::Colors).unwrap();
        assert_eq!(screen.text(WidgetId::Selector(ListId::Colors)), Some(""));
    }

    #[test]
    fn test_slider_value() {
        let mut cache = AttributeCache::new();
        cache.set_scalar(ScalarId::Speed, 42);
        let mut screen = Screen::new();
        render_scalar(&mut screen, &cache, ScalarId::Speed).unwrap();
        assert_eq!(screen.value(WidgetId::Slider(ScalarId::Speed)), Some(42));
    }

    #[test]
    fn test_message_visibility() {
        let mut screen = Screen::new();
        show_message(&mut screen, CONNECTING_MESSAGE).unwrap();
        assert!(screen.is_visible(WidgetId::Message));
        assert_eq!(screen.text(WidgetId::Message), Some(CONNECTING_MESSAGE));
        hide_message(&mut screen).unwrap();
        assert!(!screen.is_visible(WidgetId::Message));
    }

    #[test]
    fn test_slider_ranges() {
        let mut screen = Screen::new();
        configure_sliders(&mut screen, &RemoteConfig::default()).unwrap();
        assert_eq!(
            screen.range(WidgetId::Slider(ScalarId::Brightness)),
            Some((10, 250))
        );
        assert_eq!(screen.range(WidgetId::Slider(ScalarId::Speed)), Some((1, 100)));
    }

    #[test]
    fn test_diagnostics_rows() {
        let mut screen = Screen::new();
        render_diagnostics(&mut screen, &DiagnosticSnapshot::new()).unwrap();
        for channel in TelemetryChannel::ALL {
            assert_eq!(screen.text(WidgetId::Diagnostic(channel)), Some("--"));
        }
    }
}
