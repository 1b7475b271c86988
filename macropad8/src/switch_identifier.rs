use rustkbd::keyboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySwitchIdentifier {
    pub row: u8,
    pub col: u8,
}

impl KeySwitchIdentifier {
    pub const ROWS: u8 = 2;
    pub const COLS: u8 = 4;

    pub const fn new(row: u8, col: u8) -> Self {
        KeySwitchIdentifier { row, col }
    }
}

impl keyboard::KeySwitchIdentifier for KeySwitchIdentifier {}
