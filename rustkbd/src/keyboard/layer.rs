use core::marker::PhantomData;

pub use rustkbd_macros::Layer;

/// A layer of a layout. `index` is the layer's bit in [`LayerState`] and
/// must be below 32; the default value is the default layer.
pub trait Layer: Copy + Eq + Default + 'static {
    fn index(&self) -> u8;

    fn from_index(index: u8) -> Option<Self>;
}

/// Bitmask of active layers. The default layer is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerState<L: Layer> {
    bits: u32,
    _layer: PhantomData<L>,
}

impl<L: Layer> Default for LayerState<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layer> LayerState<L> {
    pub const fn new() -> Self {
        LayerState {
            bits: 0,
            _layer: PhantomData,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn activate(&mut self, layer: L) {
        self.bits |= Self::bit(layer);
    }

    pub fn deactivate(&mut self, layer: L) {
        self.bits &= !Self::bit(layer);
    }

    /// Leave `layer` as the only active layer besides the default one.
    pub fn move_to(&mut self, layer: L) {
        self.bits = Self::bit(layer);
    }

    pub fn is_active(&self, layer: L) -> bool {
        layer == L::default() || self.bits & Self::bit(layer) != 0
    }

    /// The active layer with the largest index, or the default layer.
    pub fn highest(&self) -> L {
        (0..32u8)
            .rev()
            .filter(|i| self.bits & (1 << i) != 0)
            .find_map(L::from_index)
            .unwrap_or_default()
    }

    /// Active layers at or below `top`, highest first.
    pub fn active_from(&self, top: L) -> impl Iterator<Item = L> + '_ {
        (0..=top.index())
            .rev()
            .filter_map(L::from_index)
            .filter(|layer| self.is_active(*layer))
    }

    fn bit(layer: L) -> u32 {
        debug_assert!(layer.index() < 32, "layer index out of range");
        1 << layer.index()
    }
}
