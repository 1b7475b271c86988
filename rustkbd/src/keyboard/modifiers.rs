use super::Key;

/// HID modifier byte, one bit per modifier key starting at `LeftControl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0x00);
    pub const LEFT_CONTROL: Modifiers = Modifiers(0x01);
    pub const LEFT_SHIFT: Modifiers = Modifiers(0x02);
    pub const LEFT_ALT: Modifiers = Modifiers(0x04);
    pub const LEFT_GUI: Modifiers = Modifiers(0x08);

    pub const fn from_bits(bits: u8) -> Self {
        Modifiers(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Modifiers) -> Self {
        Modifiers(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Modifier keys to hold down, lowest bit first.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        (0..8)
            .filter(|bit| self.0 & (1 << bit) != 0)
            .filter_map(Key::modifier)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_in_bit_order() {
        let mods = Modifiers::LEFT_GUI.union(Modifiers::LEFT_SHIFT);
        let mut keys = mods.keys();
        assert_eq!(keys.next(), Some(Key::LeftShift));
        assert_eq!(keys.next(), Some(Key::LeftGui));
        assert_eq!(keys.next(), None);
        assert!(Modifiers::NONE.is_empty());
        assert_eq!(Modifiers::from_bits(0x0a), mods);
    }
}
