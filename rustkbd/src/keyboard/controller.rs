use embedded_hal::delay::DelayNs;
use heapless::{FnvIndexMap, Vec};

use super::{
    Action, ExternalCommunicator, Flow, Hooks, Key, KeyRecord, KeyboardState, LayerState, Layout,
    Lighting, Output,
};
use crate::lighting::{Backlight, Mode, Underglow};

pub struct Controller<
    const RO: usize,
    const LEDS: usize,
    C: ExternalCommunicator,
    D: DelayNs,
    L: Layout,
> {
    pub communicator: C,
    pub delay: D,
    layout: L,
    layers: LayerState<L::Layer>,
    pressed_switches: FnvIndexMap<L::Identifier, L::Layer, 16>,
    underglow: Underglow<LEDS>,
    backlight: Backlight,
}

impl<const RO: usize, const LEDS: usize, C: ExternalCommunicator, D: DelayNs, L: Layout>
    Controller<RO, LEDS, C, D, L>
{
    pub fn new(communicator: C, delay: D, layout: L, backlight: Backlight) -> Self {
        Controller {
            communicator,
            delay,
            layout,
            layers: LayerState::new(),
            pressed_switches: FnvIndexMap::new(),
            underglow: Underglow::new(),
            backlight,
        }
    }

    /// Run the keymap's init hook, then report the initial layer state.
    pub fn init<H: Hooks<L>>(&mut self, hooks: &mut H) {
        hooks.post_init(&mut self.underglow);
        hooks.layer_state_changed(self.layers, &mut self.underglow);
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn underglow(&self) -> &Underglow<LEDS> {
        &self.underglow
    }

    pub fn get_state(&self) -> KeyboardState<L::Layer, RO> {
        let mut state = KeyboardState::new(self.layers, self.backlight);
        state.keys = determine_keys(&self.layout, &self.pressed_switches);
        state.underglow_enabled = self.underglow.is_enabled();
        state
    }

    /// Handle one switch transition to completion.
    pub fn process<H: Hooks<L>>(&mut self, record: KeyRecord<L::Identifier>, hooks: &mut H) {
        // 押下時に決まったレイヤを離したときにも使う
        let layer = if record.pressed {
            let (layer, _) = self.layout.resolve(&self.layers, &record.switch);
            if self.pressed_switches.insert(record.switch, layer).is_err() {
                crate::warn!("too many switches pressed, ignoring press");
                return;
            }
            layer
        } else if let Some(layer) = self.pressed_switches.remove(&record.switch) {
            layer
        } else {
            crate::debug!("release without press, ignoring");
            return;
        };
        let action = self.layout.action(layer, &record.switch);

        let mut output = Output::new(&self.communicator, &mut self.delay);
        if hooks.process_record(&action, &record, &mut output) == Flow::Handled {
            return;
        }

        let before = self.layers;
        match action {
            Action::Momentary(layer) if record.pressed => self.layers.activate(layer),
            Action::Momentary(layer) => self.layers.deactivate(layer),
            Action::SwitchTo(layer) if record.pressed => self.layers.move_to(layer),
            Action::Lighting(command) if record.pressed => self.apply_lighting(command),
            _ => {}
        }

        if self.layers != before {
            crate::debug!("layer state {}", self.layers.bits());
            hooks.layer_state_changed(self.layers, &mut self.underglow);
        }
    }

    pub fn send_keys(&self) -> Result<(), C::Error> {
        if !self.communicator.is_ready() {
            return Ok(());
        }

        let keys: Vec<Key, RO> = determine_keys(&self.layout, &self.pressed_switches);
        self.communicator.send_keys(&keys)
    }

    fn apply_lighting(&mut self, command: Lighting) {
        match command {
            Lighting::UnderglowToggle => self.underglow.toggle(),
            Lighting::UnderglowModeStep => self.underglow.step_mode(),
            Lighting::UnderglowRainbow => self.underglow.set_mode(Mode::Rainbow),
            Lighting::UnderglowSnake => self.underglow.set_mode(Mode::Snake),
            Lighting::BacklightToggle => self.backlight.toggle(),
            Lighting::BacklightStep => self.backlight.step(),
            Lighting::BacklightBreathing => self.backlight.toggle_breathing(),
        }
    }
}

fn determine_keys<L: Layout, const N: usize, const RO: usize>(
    layout: &L,
    pressed_switches: &FnvIndexMap<L::Identifier, L::Layer, N>,
) -> Vec<Key, RO> {
    let mut keys = Vec::new();
    for (switch, layer) in pressed_switches.iter() {
        for key in layout.action(*layer, switch).held_keys() {
            if keys.push(key).is_err() {
                return keys;
            }
        }
    }
    keys
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod test;
