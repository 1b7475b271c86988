use core::convert::Infallible;
use std::vec::Vec as StdVec;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    Pixel,
};
use rustkbd::{
    display::{Display, Rotation},
    keyboard::{KeyboardState, LayerState},
    lighting::Backlight,
};

use super::*;
use crate::config::BACKLIGHT_LEVELS;

#[derive(Default)]
struct Panel {
    lit: StdVec<Point>,
    flushes: usize,
    rotation: Option<Rotation>,
}

impl OriginDimensions for Panel {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for Panel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color == BinaryColor::On {
                self.lit.push(point);
            }
        }
        Ok(())
    }

    fn clear(&mut self, _color: Self::Color) -> Result<(), Self::Error> {
        self.lit.clear();
        Ok(())
    }
}

impl Display for Panel {
    const REQUIRES_FLUSH: bool = true;

    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushes += 1;
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Infallible> {
        self.rotation = Some(rotation);
        Ok(())
    }
}

fn state(layers: LayerState<Layer>) -> KeyboardState<Layer, 6> {
    KeyboardState::new(layers, Backlight::new(BACKLIGHT_LEVELS))
}

fn text<const RO: usize>(state: &KeyboardState<Layer, RO>) -> StdVec<Line> {
    panel_lines(&Macropad8Layout::default(), state)
        .into_iter()
        .collect()
}

#[test]
fn git_panel_with_hold_legend() {
    let lines = text(&state(LayerState::new()));
    assert_eq!(
        lines,
        [
            "Active layer: Git",
            "ST | LOG | PUL | PUS",
            "DF | ADD | COM | FN",
            "--------------------",
            "__ | __ | __ | PR",
            "__ | __ | __ | __",
            " ",
            "Backlit: On",
        ]
    );
}

#[test]
fn teams_panel() {
    let mut layers = LayerState::new();
    layers.move_to(Layer::Teams);
    let lines = text(&state(layers));
    assert_eq!(
        lines,
        [
            "Active layer: Teams",
            "Mic | Cam | Hnd | __",
            "Answ | End | __ | FN",
            "",
            "",
            "",
            " ",
            "Backlit: On",
        ]
    );
}

#[test]
fn slack_and_leds_legends() {
    let mut layers = LayerState::new();
    layers.move_to(Layer::Slack);
    let lines = text(&state(layers));
    assert_eq!(lines[0], "Active layer: Slack");
    assert_eq!(lines[1], "Act | Aw | Mic | Cam");
    assert_eq!(lines[2], "All | DMs | Thr | FN");

    layers.move_to(Layer::Leds);
    let lines = text(&state(layers));
    assert_eq!(lines[0], "Active layer: LEDs");
    assert_eq!(lines[1], "TOG | MODE | R | SN");
    assert_eq!(lines[2], "TOG | STP | BRT | FN");
}

#[test]
fn fn_legend_ignores_base_layer() {
    let mut on_git = LayerState::new();
    on_git.activate(Layer::Fn);
    let mut on_slack = LayerState::new();
    on_slack.move_to(Layer::Slack);
    on_slack.activate(Layer::Fn);

    let lines = text(&state(on_git));
    assert_eq!(lines[0], "Active layer: Layers");
    assert_eq!(lines[1], "Git | Team | Slack | __");
    assert_eq!(lines[2], "__ | __ | LEDs | FN");
    assert_eq!(lines, text(&state(on_slack)));
}

#[test]
fn backlight_state_line() {
    let mut backlight = Backlight::new(BACKLIGHT_LEVELS);
    backlight.toggle();
    let state = KeyboardState::<Layer, 6>::new(LayerState::new(), backlight);
    assert_eq!(text(&state).last().map(Line::as_str), Some("Backlit: Off"));
}

#[test]
fn draw_and_flush() {
    let layout = Macropad8Layout::default();
    let mut panel = Panel::default();
    init_display(&mut panel).unwrap();
    assert_eq!(panel.rotation, Some(Rotation::Rotate180));

    draw_state(&mut panel, &layout, &state(LayerState::new()));
    assert_eq!(panel.flushes, 1);
    assert!(!panel.lit.is_empty());
    let git = panel.lit.clone();

    let mut layers = LayerState::new();
    layers.activate(Layer::Fn);
    draw_state(&mut panel, &layout, &state(layers));
    assert_eq!(panel.flushes, 2);
    assert_ne!(panel.lit, git);
    assert!(panel.lit.iter().all(|p| p.x < 128 && p.y < 64));
}
