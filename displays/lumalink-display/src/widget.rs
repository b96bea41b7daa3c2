//! Widget identifiers

use lumalink_protocol::{ListId, ScalarId, TelemetryChannel};

/// Number of addressable widgets
pub const WIDGET_COUNT: usize = 10;

/// Every element the core can update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetId {
    /// Connection status row
    Message,
    /// Pattern or color selector label
    Selector(ListId),
    /// Brightness or speed slider
    Slider(ScalarId),
    /// Value label of a diagnostic row
    Diagnostic(TelemetryChannel),
}

impl WidgetId {
    /// Storage slot, or None for widgets that do not exist
    ///
    /// Index attributes have selectors, not sliders.
    pub fn slot(self) -> Option<usize> {
        match self {
            WidgetId::Message => Some(0),
            WidgetId::Selector(list) => Some(1 + list.slot()),
            WidgetId::Slider(ScalarId::Brightness) => Some(3),
            WidgetId::Slider(ScalarId::Speed) => Some(4),
            WidgetId::Slider(_) => None,
            WidgetId::Diagnostic(channel) => Some(5 + channel.slot()),
        }
    }

    /// Static caption drawn beside the widget
    pub fn caption(self) -> Option<&'static str> {
        match self {
            WidgetId::Slider(ScalarId::Brightness) => Some("Brightness"),
            WidgetId::Slider(ScalarId::Speed) => Some("Speed"),
            WidgetId::Diagnostic(channel) => Some(channel.label()),
            _ => None,
        }
    }

    /// Every existing widget, in slot order
    pub fn all() -> impl Iterator<Item = WidgetId> {
        let fixed = [
            WidgetId::Message,
            WidgetId::Selector(ListId::Patterns),
            WidgetId::Selector(ListId::Colors),
            WidgetId::Slider(ScalarId::Brightness),
            WidgetId::Slider(ScalarId::Speed),
        ];
        fixed
            .into_iter()
            .chain(TelemetryChannel::ALL.into_iter().map(WidgetId::Diagnostic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_dense() {
        for (i, widget) in WidgetId::all().enumerate() {
            assert_eq!(widget.slot(), Some(i));
        }
        assert_eq!(WidgetId::all().count(), WIDGET_COUNT);
    }

    #[test]
    fn test_index_slider_does_not_exist() {
        assert_eq!(WidgetId::Slider(ScalarId::PatternIndex).slot(), None);
        assert_eq!(WidgetId::Slider(ScalarId::ColorIndex).slot(), None);
    }

    #[test]
    fn test_captions() {
        assert_eq!(
            WidgetId::Slider(ScalarId::Speed).caption(),
            Some("Speed")
        );
        assert_eq!(
            WidgetId::Diagnostic(TelemetryChannel::InputVoltage).caption(),
            Some("AC Voltage:")
        );
        assert_eq!(WidgetId::Message.caption(), None);
    }
}
