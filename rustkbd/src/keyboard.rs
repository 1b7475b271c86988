mod action;
mod controller;
mod external_communicator;
mod hooks;
mod key;
mod key_switches;
mod keyboard_state;
mod layer;
mod layout;
mod modifiers;
mod output;

pub use action::{Action, Lighting};
pub use controller::Controller;
pub use external_communicator::ExternalCommunicator;
pub use hooks::{Flow, Hooks};
pub use key::Key;
pub use key_switches::{KeyRecord, KeySwitchIdentifier};
pub use keyboard_state::KeyboardState;
pub use layer::{Layer, LayerState};
pub use layout::{layout, Layout};
pub use modifiers::Modifiers;
pub use output::Output;
