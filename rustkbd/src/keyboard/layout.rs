pub use rustkbd_macros::layout;

use crate::keyboard::{Action, KeySwitchIdentifier, Layer, LayerState};

pub trait Layout {
    type Identifier: KeySwitchIdentifier;
    type Layer: Layer;
    type Custom: Copy + Eq;

    fn action(&self, layer: Self::Layer, switch: &Self::Identifier)
        -> Action<Self::Custom, Self::Layer>;

    /// The action `switch` has under `layers`, and the layer it came from.
    ///
    /// Starts at the highest active layer; a transparent entry falls through
    /// to the next lower active layer.
    fn resolve(
        &self,
        layers: &LayerState<Self::Layer>,
        switch: &Self::Identifier,
    ) -> (Self::Layer, Action<Self::Custom, Self::Layer>) {
        for layer in layers.active_from(layers.highest()) {
            let action = self.action(layer, switch);
            if !action.is_transparent() {
                return (layer, action);
            }
        }
        let layer = Self::Layer::default();
        (layer, self.action(layer, switch))
    }
}
