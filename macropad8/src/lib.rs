#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod drawing;
pub mod keymap;
pub mod layout;
pub mod legend;
pub mod switch_identifier;
pub mod underglow;

pub use keymap::Macropad8;
pub use layout::{Layer, MacroKey, Macropad8Layout};

pub type Macropad8Controller<C, D> = rustkbd::keyboard::Controller<
    { config::ROLLOVER },
    { config::LED_COUNT },
    C,
    D,
    Macropad8Layout,
>;
