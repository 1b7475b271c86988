use rustkbd::keyboard::{self, layout, Action, Key, Layout};

use crate::switch_identifier::KeySwitchIdentifier;

pub type KeymapAction = Action<MacroKey, Layer>;

#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Macropad8Layout {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, keyboard::Layer)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Git = 0,
    Leds = 1,
    Teams = 2,
    Slack = 3,
    Fn = 15,
}

impl Default for Layer {
    fn default() -> Self {
        Self::Git
    }
}

/// Codes this keymap handles itself by typing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroKey {
    GitCommit,
    GitPush,
    GitPull,
    GitStatus,
    GitDiff,
    GitLog,
    GitAdd,
    SlackActive,
    SlackAway,
}

// Teams and Slack shortcuts (macOS).
pub const TOGGLE_MUTE: KeymapAction = gui_shift(Key::M);
pub const TOGGLE_VIDEO: KeymapAction = gui_shift(Key::O);
pub const TOGGLE_RAISE_HAND: KeymapAction = gui_shift(Key::K);
pub const END_VIDEO_CALL: KeymapAction = gui_shift(Key::B);
pub const ACCEPT_VIDEO_CALL: KeymapAction = gui_shift(Key::A);
pub const ALL_UNREAD: KeymapAction = gui_shift(Key::A);
pub const THREADS: KeymapAction = gui_shift(Key::T);
pub const DMS: KeymapAction = gui_shift(Key::K);

const fn gui_shift(key: Key) -> KeymapAction {
    Action::Chord(
        keyboard::Modifiers::LEFT_GUI.union(keyboard::Modifiers::LEFT_SHIFT),
        key,
    )
}

impl Macropad8Layout {
    const KEY_CODES_GIT: [[KeymapAction; 4]; 2] = layout! { Layer, MacroKey, r"
        | GitStatus | GitLog |  GitPull  | GitPush |
        |  GitDiff  | GitAdd | GitCommit | MO(Fn)  |
    "};
    const KEY_CODES_LEDS: [[KeymapAction; 4]; 2] = layout! { Layer, MacroKey, r"
        | RgbTog | RgbMod | RgbRnb | RgbSnk |
        | BlTog  | BlStep | BlBrth | MO(Fn) |
    "};
    const KEY_CODES_TEAMS: [[KeymapAction; 4]; 2] = layout! { Layer, MacroKey, r"
        | LGui+LSft+M | LGui+LSft+O | LGui+LSft+K |  Trn   |
        | LGui+LSft+A | LGui+LSft+B |     Trn     | MO(Fn) |
    "};
    const KEY_CODES_SLACK: [[KeymapAction; 4]; 2] = layout! { Layer, MacroKey, r"
        | SlackActive |  SlackAway  |      M      |   V    |
        | LGui+LSft+A | LGui+LSft+K | LGui+LSft+T | MO(Fn) |
    "};
    const KEY_CODES_FN: [[KeymapAction; 4]; 2] = layout! { Layer, MacroKey, r"
        | TO(Git) | TO(Teams) | TO(Slack) | Trn |
        |   Trn   |    Trn    | TO(Leds)  | Trn |
    "};

    fn table(layer: Layer) -> &'static [[KeymapAction; 4]; 2] {
        match layer {
            Layer::Git => &Self::KEY_CODES_GIT,
            Layer::Leds => &Self::KEY_CODES_LEDS,
            Layer::Teams => &Self::KEY_CODES_TEAMS,
            Layer::Slack => &Self::KEY_CODES_SLACK,
            Layer::Fn => &Self::KEY_CODES_FN,
        }
    }
}

impl Layout for Macropad8Layout {
    type Identifier = KeySwitchIdentifier;
    type Layer = Layer;
    type Custom = MacroKey;

    fn action(&self, layer: Layer, switch: &Self::Identifier) -> KeymapAction {
        let KeySwitchIdentifier { row, col } = *switch;
        Self::table(layer)
            .get(row as usize)
            .and_then(|keys| keys.get(col as usize))
            .copied()
            .unwrap_or(Action::Key(Key::None))
    }
}

#[cfg(test)]
mod test {
    use rustkbd::keyboard::{Layer as _, Lighting};

    use super::*;

    const LAYERS: [Layer; 5] = [
        Layer::Git,
        Layer::Leds,
        Layer::Teams,
        Layer::Slack,
        Layer::Fn,
    ];

    fn at(row: u8, col: u8) -> KeySwitchIdentifier {
        KeySwitchIdentifier::new(row, col)
    }

    #[test]
    fn layer_indices() {
        let indices = LAYERS.map(|layer| layer.index());
        assert_eq!(indices, [0, 1, 2, 3, 15]);
        for layer in LAYERS {
            assert_eq!(Layer::from_index(layer.index()), Some(layer));
        }
        assert_eq!(Layer::from_index(4), None);
        assert_eq!(Layer::default(), Layer::Git);
    }

    #[test]
    fn lookup_is_stable() {
        let layout = Macropad8Layout::default();
        for layer in LAYERS {
            for row in 0..KeySwitchIdentifier::ROWS {
                for col in 0..KeySwitchIdentifier::COLS {
                    let switch = at(row, col);
                    assert_eq!(layout.action(layer, &switch), layout.action(layer, &switch));
                }
            }
        }
    }

    #[test]
    fn git_layer() {
        let layout = Macropad8Layout::default();
        assert_eq!(
            layout.action(Layer::Git, &at(0, 0)),
            Action::Custom(MacroKey::GitStatus)
        );
        assert_eq!(
            layout.action(Layer::Git, &at(0, 3)),
            Action::Custom(MacroKey::GitPush)
        );
        assert_eq!(
            layout.action(Layer::Git, &at(1, 2)),
            Action::Custom(MacroKey::GitCommit)
        );
        assert_eq!(
            layout.action(Layer::Git, &at(1, 3)),
            Action::Momentary(Layer::Fn)
        );
    }

    #[test]
    fn every_base_layer_reaches_fn() {
        let layout = Macropad8Layout::default();
        for layer in [Layer::Git, Layer::Leds, Layer::Teams, Layer::Slack] {
            assert_eq!(layout.action(layer, &at(1, 3)), Action::Momentary(Layer::Fn));
        }
    }

    #[test]
    fn fn_layer_switches() {
        let layout = Macropad8Layout::default();
        assert_eq!(layout.action(Layer::Fn, &at(0, 0)), Action::SwitchTo(Layer::Git));
        assert_eq!(layout.action(Layer::Fn, &at(0, 1)), Action::SwitchTo(Layer::Teams));
        assert_eq!(layout.action(Layer::Fn, &at(0, 2)), Action::SwitchTo(Layer::Slack));
        assert_eq!(layout.action(Layer::Fn, &at(1, 2)), Action::SwitchTo(Layer::Leds));
        assert!(layout.action(Layer::Fn, &at(1, 3)).is_transparent());
    }

    #[test]
    fn shortcut_chords() {
        let layout = Macropad8Layout::default();
        assert_eq!(layout.action(Layer::Teams, &at(0, 0)), TOGGLE_MUTE);
        assert_eq!(layout.action(Layer::Teams, &at(1, 0)), ACCEPT_VIDEO_CALL);
        assert_eq!(layout.action(Layer::Slack, &at(1, 1)), DMS);
        assert_eq!(layout.action(Layer::Slack, &at(0, 2)), Action::Key(Key::M));
        assert_eq!(
            layout.action(Layer::Leds, &at(0, 2)),
            Action::Lighting(Lighting::UnderglowRainbow)
        );
    }

    #[test]
    fn out_of_range_is_noop() {
        let layout = Macropad8Layout::default();
        assert_eq!(layout.action(Layer::Git, &at(2, 0)), Action::Key(Key::None));
    }
}
