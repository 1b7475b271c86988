//! Short key labels for the status panel, derived from the layer table.

use rustkbd::keyboard::{Action, Key, Lighting};

use crate::layout::{
    KeymapAction, Layer, MacroKey, ACCEPT_VIDEO_CALL, ALL_UNREAD, DMS, END_VIDEO_CALL, THREADS,
    TOGGLE_MUTE, TOGGLE_RAISE_HAND, TOGGLE_VIDEO,
};

pub const EMPTY: &str = "__";

pub fn layer_name(layer: Layer) -> &'static str {
    match layer {
        Layer::Git => "Git",
        Layer::Leds => "LEDs",
        Layer::Teams => "Teams",
        Layer::Slack => "Slack",
        Layer::Fn => "Layers",
    }
}

/// Label for what a key does when tapped on `layer`.
pub fn label(layer: Layer, action: &KeymapAction) -> &'static str {
    match (layer, *action) {
        (_, Action::Custom(code)) => macro_label(code),
        (_, Action::Momentary(_)) => "FN",
        (_, Action::SwitchTo(Layer::Git)) => "Git",
        (_, Action::SwitchTo(Layer::Leds)) => "LEDs",
        (_, Action::SwitchTo(Layer::Teams)) => "Team",
        (_, Action::SwitchTo(Layer::Slack)) => "Slack",
        (_, Action::SwitchTo(Layer::Fn)) => "FN",
        (_, Action::Lighting(command)) => lighting_label(command),
        (Layer::Slack, ALL_UNREAD) => "All",
        (Layer::Slack, DMS) => "DMs",
        (Layer::Slack, THREADS) => "Thr",
        (_, ACCEPT_VIDEO_CALL) => "Answ",
        (_, TOGGLE_MUTE) | (_, Action::Key(Key::M)) => "Mic",
        (_, TOGGLE_VIDEO) | (_, Action::Key(Key::V)) => "Cam",
        (_, TOGGLE_RAISE_HAND) => "Hnd",
        (_, END_VIDEO_CALL) => "End",
        (_, Action::Key(Key::None)) | (_, Action::Key(Key::Transparent)) => EMPTY,
        _ => "?",
    }
}

/// Label for a cell of `layer`, given the default layer's action on the
/// same switch. A transparent cell over the key that holds `layer` reads
/// `FN`, like the key under the finger.
pub fn cell_label(layer: Layer, action: &KeymapAction, base: &KeymapAction) -> &'static str {
    match *base {
        Action::Momentary(target) if target == layer && action.is_transparent() => "FN",
        _ => label(layer, action),
    }
}

/// Label for what a key does when held past the tapping term, if that
/// differs from the tap.
pub fn hold_label(action: &KeymapAction) -> Option<&'static str> {
    match action {
        Action::Custom(MacroKey::GitPush) => Some("PR"),
        _ => None,
    }
}

fn macro_label(code: MacroKey) -> &'static str {
    match code {
        MacroKey::GitStatus => "ST",
        MacroKey::GitLog => "LOG",
        MacroKey::GitPull => "PUL",
        MacroKey::GitPush => "PUS",
        MacroKey::GitDiff => "DF",
        MacroKey::GitAdd => "ADD",
        MacroKey::GitCommit => "COM",
        MacroKey::SlackActive => "Act",
        MacroKey::SlackAway => "Aw",
    }
}

fn lighting_label(command: Lighting) -> &'static str {
    match command {
        Lighting::UnderglowToggle | Lighting::BacklightToggle => "TOG",
        Lighting::UnderglowModeStep => "MODE",
        Lighting::UnderglowRainbow => "R",
        Lighting::UnderglowSnake => "SN",
        Lighting::BacklightStep => "STP",
        Lighting::BacklightBreathing => "BRT",
    }
}
