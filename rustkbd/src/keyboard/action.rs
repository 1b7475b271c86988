use heapless::Vec;

use super::{Key, Modifiers};

/// Commands for the lighting owned by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lighting {
    UnderglowToggle,
    UnderglowModeStep,
    UnderglowRainbow,
    UnderglowSnake,
    BacklightToggle,
    BacklightStep,
    BacklightBreathing,
}

/// What a switch does on a layer.
///
/// `C` is the keymap's own closed set of codes, `L` its layer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<C, L> {
    Key(Key),
    Chord(Modifiers, Key),
    Momentary(L),
    SwitchTo(L),
    Lighting(Lighting),
    Custom(C),
}

impl<C, L> Action<C, L> {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Action::Key(Key::Transparent))
    }

    /// Keys held down while the switch is pressed.
    pub fn held_keys(&self) -> Vec<Key, 9> {
        let mut keys = Vec::new();
        match self {
            Action::Key(key) if !key.is_noop() => {
                keys.push(*key).ok();
            }
            Action::Chord(modifiers, key) => {
                keys.extend(modifiers.keys());
                keys.push(*key).ok();
            }
            _ => {}
        }
        keys
    }
}
