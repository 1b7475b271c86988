use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_4X6, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::Point,
    text::{Baseline, Text},
    Drawable,
};
use heapless::{String, Vec};
use rustkbd::{
    display::Display,
    keyboard::{KeyboardState, Layout},
};

use crate::{
    config::PANEL_ROTATION,
    layout::{Layer, Macropad8Layout},
    legend,
    switch_identifier::KeySwitchIdentifier,
};

pub const LINE_WIDTH: usize = 32;
pub const PANEL_LINES: usize = 9;
const LINE_HEIGHT: i32 = 7;

pub type Line = String<LINE_WIDTH>;

pub fn init_display<D: Display>(display: &mut D) -> Result<(), D::Error> {
    display.set_rotation(PANEL_ROTATION)
}

/// Text of the status panel for the highest active layer.
pub fn panel_lines<const RO: usize>(
    layout: &Macropad8Layout,
    state: &KeyboardState<Layer, RO>,
) -> Vec<Line, PANEL_LINES> {
    let layer = state.layer();
    let mut lines = Vec::new();

    let mut title = Line::new();
    write!(title, "Active layer: {}", legend::layer_name(layer)).ok();
    lines.push(title).ok();

    for row in 0..KeySwitchIdentifier::ROWS {
        lines
            .push(legend_row(layout, layer, row, |switch, a| {
                let base = layout.action(Layer::default(), switch);
                legend::cell_label(layer, a, &base)
            }))
            .ok();
    }

    let has_hold = (0..KeySwitchIdentifier::ROWS)
        .flat_map(|row| (0..KeySwitchIdentifier::COLS).map(move |col| (row, col)))
        .any(|(row, col)| {
            let action = layout.action(layer, &KeySwitchIdentifier::new(row, col));
            legend::hold_label(&action).is_some()
        });
    if has_hold {
        lines.push(line("--------------------")).ok();
        for row in 0..KeySwitchIdentifier::ROWS {
            lines
                .push(legend_row(layout, layer, row, |_, a| {
                    legend::hold_label(a).unwrap_or(legend::EMPTY)
                }))
                .ok();
        }
    } else {
        for _ in 0..=KeySwitchIdentifier::ROWS {
            lines.push(Line::new()).ok();
        }
    }

    lines.push(line(" ")).ok();
    let mut backlit = Line::new();
    let on_off = if state.backlight.is_enabled() { "On" } else { "Off" };
    write!(backlit, "Backlit: {}", on_off).ok();
    lines.push(backlit).ok();
    lines
}

pub fn draw_state<D, const RO: usize>(
    display: &mut D,
    layout: &Macropad8Layout,
    state: &KeyboardState<Layer, RO>,
) where
    D: Display<Color = BinaryColor>,
{
    let char_style = MonoTextStyle::new(&FONT_4X6, BinaryColor::On);
    display.clear(BinaryColor::Off).ok();

    for (i, text) in panel_lines(layout, state).iter().enumerate() {
        Text::with_baseline(
            text.as_str(),
            Point::new(0, i as i32 * LINE_HEIGHT),
            char_style,
            Baseline::Top,
        )
        .draw(display)
        .ok();
    }

    if D::REQUIRES_FLUSH {
        display.flush().ok();
    }
}

fn legend_row<F>(layout: &Macropad8Layout, layer: Layer, row: u8, label: F) -> Line
where
    F: Fn(&KeySwitchIdentifier, &crate::layout::KeymapAction) -> &'static str,
{
    let mut text = Line::new();
    for col in 0..KeySwitchIdentifier::COLS {
        if col > 0 {
            text.push_str(" | ").ok();
        }
        let switch = KeySwitchIdentifier::new(row, col);
        let action = layout.action(layer, &switch);
        text.push_str(label(&switch, &action)).ok();
    }
    text
}

fn line(text: &str) -> Line {
    let mut line = Line::new();
    line.push_str(text).ok();
    line
}

#[cfg(test)]
#[path = "drawing_test.rs"]
mod test;
