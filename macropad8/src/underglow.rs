use rustkbd::{
    keyboard::LayerState,
    lighting::{Color, Segment, Underglow},
};

use crate::layout::Layer;

static GIT: [Segment; 1] = [Segment::new(0, 4, Color::RED)];
static LEDS: [Segment; 4] = [
    Segment::new(0, 1, Color::RED),
    Segment::new(1, 1, Color::YELLOW),
    Segment::new(2, 1, Color::BLUE),
    Segment::new(3, 1, Color::GREEN),
];
static TEAMS: [Segment; 1] = [Segment::new(0, 4, Color::BLUE)];
static SLACK: [Segment; 1] = [Segment::new(0, 4, Color::WHITE)];
static LAYER_PICKER: [Segment; 1] = [Segment::new(0, 4, Color::YELLOW)];

/// One overlay per layer, indexed by [`overlay`].
pub static UNDERGLOW_LAYERS: [&[Segment]; 5] = [&GIT, &LEDS, &TEAMS, &SLACK, &LAYER_PICKER];

pub fn overlay(layer: Layer) -> usize {
    match layer {
        Layer::Git => 0,
        Layer::Leds => 1,
        Layer::Teams => 2,
        Layer::Slack => 3,
        Layer::Fn => 4,
    }
}

pub fn install<const N: usize>(underglow: &mut Underglow<N>) {
    underglow.set_layers(&UNDERGLOW_LAYERS);
}

/// Show exactly the overlay of the highest active layer.
pub fn select<const N: usize>(state: LayerState<Layer>, underglow: &mut Underglow<N>) {
    for index in 0..UNDERGLOW_LAYERS.len() {
        underglow.set_layer_state(index, false);
    }
    underglow.set_layer_state(overlay(state.highest()), true);
}
