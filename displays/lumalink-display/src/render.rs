//! Screen rendering
//!
//! Paints every row of the retained [`Screen`] onto any embedded-graphics
//! `DrawTarget`. Each row is cleared before drawing, so a redraw never
//! leaves stale pixels.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use lumalink_protocol::{ListId, ScalarId};

use crate::layout::{self, Region};
use crate::{Screen, WidgetId};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const FOREGROUND: Rgb565 = Rgb565::WHITE;
const ACCENT: Rgb565 = Rgb565::CSS_DODGER_BLUE;
const BUTTON: Rgb565 = Rgb565::CSS_DARK_GRAY;

/// Height of the slider bar inside its track
const BAR_HEIGHT: u32 = 8;

/// Left margin of captions
const CAPTION_X: i32 = 10;

/// Draw the whole screen
pub fn draw<D>(screen: &Screen, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for widget in WidgetId::all() {
        let Some(row) = layout::row(widget) else {
            continue;
        };
        rect(row)
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
            .draw(target)?;

        if !screen.is_visible(widget) {
            continue;
        }

        match widget {
            WidgetId::Message => draw_label(screen, widget, row, &FONT_10X20, target)?,
            WidgetId::Selector(list) => {
                draw_arrows(list, target)?;
                draw_label(screen, widget, row, &FONT_10X20, target)?;
            }
            WidgetId::Slider(scalar) => {
                draw_caption(widget, row, target)?;
                draw_slider(screen, widget, scalar, target)?;
            }
            WidgetId::Diagnostic(_) => {
                draw_caption(widget, row, target)?;
                draw_label(screen, widget, row, &FONT_6X10, target)?;
            }
        }
    }
    Ok(())
}

fn draw_label<D>(
    screen: &Screen,
    widget: WidgetId,
    row: Region,
    font: &MonoFont<'_>,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (Some(text), Some(x)) = (screen.text(widget), screen.text_x(widget)) else {
        return Ok(());
    };
    let style = MonoTextStyle::new(font, FOREGROUND);
    let text_style = TextStyleBuilder::new().baseline(Baseline::Middle).build();
    Text::with_text_style(
        text,
        Point::new(i32::from(x), i32::from(row.center_y())),
        style,
        text_style,
    )
    .draw(target)?;
    Ok(())
}

fn draw_caption<D>(widget: WidgetId, row: Region, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(caption) = widget.caption() else {
        return Ok(());
    };
    let style = MonoTextStyle::new(&FONT_6X10, FOREGROUND);
    let text_style = TextStyleBuilder::new().baseline(Baseline::Middle).build();
    Text::with_text_style(
        caption,
        Point::new(CAPTION_X, i32::from(row.center_y())),
        style,
        text_style,
    )
    .draw(target)?;
    Ok(())
}

fn draw_arrows<D>(list: ListId, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some((previous, next)) = layout::selector_buttons(list) else {
        return Ok(());
    };
    let button = PrimitiveStyleBuilder::new()
        .fill_color(BUTTON)
        .stroke_color(FOREGROUND)
        .stroke_width(1)
        .build();
    let glyph = MonoTextStyle::new(&FONT_10X20, FOREGROUND);
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    for (region, symbol) in [(previous, "<"), (next, ">")] {
        let bounds = rect(region).offset(-2);
        RoundedRectangle::with_equal_corners(bounds, Size::new(6, 6))
            .into_styled(button)
            .draw(target)?;
        Text::with_text_style(symbol, bounds.center(), glyph, centered).draw(target)?;
    }
    Ok(())
}

fn draw_slider<D>(
    screen: &Screen,
    widget: WidgetId,
    scalar: ScalarId,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (Some(track), Some(value), Some((min, max))) = (
        layout::slider_track(scalar),
        screen.value(widget),
        screen.range(widget),
    ) else {
        return Ok(());
    };

    let bar = Rectangle::with_center(
        Point::new(
            i32::from(track.x) + i32::from(track.width) / 2,
            i32::from(track.center_y()),
        ),
        Size::new(u32::from(track.width), BAR_HEIGHT),
    );
    bar.into_styled(PrimitiveStyle::with_fill(BUTTON))
        .draw(target)?;

    let filled = fill_width(bar.size.width, value, min, max);
    if filled > 0 {
        Rectangle::new(bar.top_left, Size::new(filled, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(ACCENT))
            .draw(target)?;
    }
    Ok(())
}

/// Pixels of the bar covered by `value`
fn fill_width(width: u32, value: i32, min: i32, max: i32) -> u32 {
    if max <= min {
        return 0;
    }
    let span = i64::from(max - min);
    let offset = i64::from(value.clamp(min, max) - min);
    // offset <= span, so the result is at most `width`
    (i64::from(width) * offset / span) as u32
}

fn rect(region: Region) -> Rectangle {
    Rectangle::new(
        Point::new(i32::from(region.x), i32::from(region.y)),
        Size::new(u32::from(region.width), u32::from(region.height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use crate::DisplayBackend;

    const WIDTH: usize = layout::SCREEN_WIDTH as usize;
    const HEIGHT: usize = layout::SCREEN_HEIGHT as usize;

    /// Full-size frame that counts pixels per region
    struct Frame {
        pixels: [[Rgb565; WIDTH]; HEIGHT],
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: [[BACKGROUND; WIDTH]; HEIGHT],
            }
        }

        fn count_in(&self, region: Region, matches: impl Fn(Rgb565) -> bool) -> usize {
            let rows = region.y as usize..region.y as usize + region.height as usize;
            let cols = region.x as usize..region.right() as usize;
            rows.map(|y| {
                self.pixels[y][cols.clone()]
                    .iter()
                    .filter(|p| matches(**p))
                    .count()
            })
            .sum()
        }

        fn lit_in(&self, region: Region) -> usize {
            self.count_in(region, |p| p != BACKGROUND)
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                    if x < WIDTH && y < HEIGHT {
                        self.pixels[y][x] = color;
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_fill_width() {
        assert_eq!(fill_width(200, 10, 10, 250), 0);
        assert_eq!(fill_width(200, 250, 10, 250), 200);
        assert_eq!(fill_width(200, 130, 10, 250), 100);
        assert_eq!(fill_width(200, 5, 5, 5), 0);
    }

    #[test]
    fn test_hidden_message_row_is_blank() {
        let mut screen = Screen::new();
        screen.set_text(WidgetId::Message, "Connecting...").unwrap();
        let row = layout::row(WidgetId::Message).unwrap();

        let mut frame = Frame::new();
        draw(&screen, &mut frame).unwrap();
        assert!(frame.lit_in(row) > 0);

        screen.set_visible(WidgetId::Message, false).unwrap();
        draw(&screen, &mut frame).unwrap();
        assert_eq!(frame.lit_in(row), 0);
    }

    #[test]
    fn test_slider_fill_tracks_value() {
        let slider = WidgetId::Slider(ScalarId::Speed);
        let track = layout::slider_track(ScalarId::Speed).unwrap();
        let mut screen = Screen::new();
        screen.set_range(slider, 1, 100).unwrap();
        let mut frame = Frame::new();

        screen.set_value(slider, 1).unwrap();
        draw(&screen, &mut frame).unwrap();
        assert_eq!(frame.count_in(track, |p| p == ACCENT), 0);

        screen.set_value(slider, 100).unwrap();
        draw(&screen, &mut frame).unwrap();
        let full = track.width as usize * BAR_HEIGHT as usize;
        assert_eq!(frame.count_in(track, |p| p == ACCENT), full);
    }
}
