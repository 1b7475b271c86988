/// HID keyboard page usages a layer table can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
#[allow(non_camel_case_types, dead_code)]
pub enum Key {
    None = 0x0000,
    Transparent,
    A = 0x0004,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit1_Exclamation,
    Digit2_At,
    Digit3_Number,
    Digit4_Dollar,
    Digit5_Percent,
    Digit6_Circumflex,
    Digit7_Ampersand,
    Digit8_Asterisk,
    Digit9_LeftParenthesis,
    Digit0_RightParenthesis,
    Enter,
    Escape,
    Delete,
    Tab,
    Space,
    HyphenMinus_LowLine,
    Equal_Plus,
    LeftSquareBracket_LeftCurlyBracket,
    RightSquareBracket_RightCurlyBracket,
    Backslash_VerticalBar,
    NonUs_Number_Tilde,
    Semicolon_Colon,
    Apostrophe_Quotation,
    Grave_Tilde,
    Comma_LessThan,
    Period_GreaterThan,
    Slash_Question,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    DeleteForward,
    End,
    PageDown,
    RightArrow,
    LeftArrow,
    DownArrow,
    UpArrow,
    LeftControl = 0x00e0,
    LeftShift,
    LeftAlt,
    LeftGui, // Win key(Windows), Command key(Mac), Meta key
    RightControl,
    RightShift,
    RightAlt,
    RightGui,
}

impl Key {
    const LETTERS: [Key; 26] = [
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
    ];

    const DIGITS: [Key; 10] = [
        Key::Digit0_RightParenthesis,
        Key::Digit1_Exclamation,
        Key::Digit2_At,
        Key::Digit3_Number,
        Key::Digit4_Dollar,
        Key::Digit5_Percent,
        Key::Digit6_Circumflex,
        Key::Digit7_Ampersand,
        Key::Digit8_Asterisk,
        Key::Digit9_LeftParenthesis,
    ];

    const MODIFIERS: [Key; 8] = [
        Key::LeftControl,
        Key::LeftShift,
        Key::LeftAlt,
        Key::LeftGui,
        Key::RightControl,
        Key::RightShift,
        Key::RightAlt,
        Key::RightGui,
    ];

    pub fn is_noop(&self) -> bool {
        *self as u16 <= 0x0001
    }

    pub fn is_modifier_key(&self) -> bool {
        (*self as u16) >= 0x00e0 && (*self as u16) <= 0x00e7
    }

    pub fn is_keyboard_key(&self) -> bool {
        *self as u16 >= 0x0004 && (*self as u16) < 0x00e0
    }

    pub fn key_code(&self) -> Option<u8> {
        if self.is_keyboard_key() {
            Some((*self as u16 & 0xff) as u8)
        } else {
            None
        }
    }

    pub fn modifier_key_flag(&self) -> u8 {
        if self.is_modifier_key() {
            1 << ((*self as u16) - 0x00e0)
        } else {
            0x00
        }
    }

    /// The modifier key for bit `bit` of a HID modifier byte.
    pub fn modifier(bit: u8) -> Option<Key> {
        Self::MODIFIERS.get(bit as usize).copied()
    }

    /// The key typing the US-layout character `c`, and whether shift is
    /// needed for it.
    pub fn from_ascii(c: u8) -> Option<(Key, bool)> {
        let key = match c {
            b'a'..=b'z' => (Self::LETTERS[(c - b'a') as usize], false),
            b'A'..=b'Z' => (Self::LETTERS[(c - b'A') as usize], true),
            b'0'..=b'9' => (Self::DIGITS[(c - b'0') as usize], false),
            b'\n' => (Key::Enter, false),
            b'\t' => (Key::Tab, false),
            b' ' => (Key::Space, false),
            b'!' => (Key::Digit1_Exclamation, true),
            b'@' => (Key::Digit2_At, true),
            b'#' => (Key::Digit3_Number, true),
            b'$' => (Key::Digit4_Dollar, true),
            b'%' => (Key::Digit5_Percent, true),
            b'^' => (Key::Digit6_Circumflex, true),
            b'&' => (Key::Digit7_Ampersand, true),
            b'*' => (Key::Digit8_Asterisk, true),
            b'(' => (Key::Digit9_LeftParenthesis, true),
            b')' => (Key::Digit0_RightParenthesis, true),
            b'-' => (Key::HyphenMinus_LowLine, false),
            b'_' => (Key::HyphenMinus_LowLine, true),
            b'=' => (Key::Equal_Plus, false),
            b'+' => (Key::Equal_Plus, true),
            b'[' => (Key::LeftSquareBracket_LeftCurlyBracket, false),
            b'{' => (Key::LeftSquareBracket_LeftCurlyBracket, true),
            b']' => (Key::RightSquareBracket_RightCurlyBracket, false),
            b'}' => (Key::RightSquareBracket_RightCurlyBracket, true),
            b'\\' => (Key::Backslash_VerticalBar, false),
            b'|' => (Key::Backslash_VerticalBar, true),
            b';' => (Key::Semicolon_Colon, false),
            b':' => (Key::Semicolon_Colon, true),
            b'\'' => (Key::Apostrophe_Quotation, false),
            b'"' => (Key::Apostrophe_Quotation, true),
            b'`' => (Key::Grave_Tilde, false),
            b'~' => (Key::Grave_Tilde, true),
            b',' => (Key::Comma_LessThan, false),
            b'<' => (Key::Comma_LessThan, true),
            b'.' => (Key::Period_GreaterThan, false),
            b'>' => (Key::Period_GreaterThan, true),
            b'/' => (Key::Slash_Question, false),
            b'?' => (Key::Slash_Question, true),
            _ => return None,
        };
        Some(key)
    }
}
