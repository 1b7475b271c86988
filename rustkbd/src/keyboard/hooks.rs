use embedded_hal::delay::DelayNs;

use super::{Action, ExternalCommunicator, KeyRecord, LayerState, Layout, Output};
use crate::lighting::Underglow;

/// Whether the controller should go on with its own handling of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flow {
    Continue,
    Handled,
}

/// Extension points a keymap implements. Every hook runs synchronously on
/// the controller's loop and is never re-entered.
pub trait Hooks<L: Layout> {
    fn post_init<const N: usize>(&mut self, _underglow: &mut Underglow<N>) {}

    fn process_record<C: ExternalCommunicator, D: DelayNs>(
        &mut self,
        _action: &Action<L::Custom, L::Layer>,
        _record: &KeyRecord<L::Identifier>,
        _output: &mut Output<'_, C, D>,
    ) -> Flow {
        Flow::Continue
    }

    fn layer_state_changed<const N: usize>(
        &mut self,
        _state: LayerState<L::Layer>,
        _underglow: &mut Underglow<N>,
    ) {
    }
}
