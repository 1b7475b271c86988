use heapless::Vec;

use super::{Key, Layer, LayerState};
use crate::lighting::Backlight;

/// Snapshot handed to status renderers on every refresh.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct KeyboardState<L: Layer, const RO: usize> {
    pub layers: LayerState<L>,
    pub keys: Vec<Key, RO>,
    pub backlight: Backlight,
    pub underglow_enabled: bool,
}

impl<L: Layer, const RO: usize> KeyboardState<L, RO> {
    pub fn new(layers: LayerState<L>, backlight: Backlight) -> Self {
        KeyboardState {
            layers,
            keys: Vec::new(),
            backlight,
            underglow_enabled: true,
        }
    }

    pub fn layer(&self) -> L {
        self.layers.highest()
    }
}
