use embedded_hal::delay::DelayNs;
use rustkbd::{
    keyboard::{Action, ExternalCommunicator, Flow, Hooks, KeyRecord, LayerState, Output},
    lighting::Underglow,
    Duration, Instant,
};

use crate::{
    config::{SLACK_COMMAND_SETTLE, TAPPING_TERM},
    layout::{KeymapAction, Layer, MacroKey, Macropad8Layout},
    switch_identifier::KeySwitchIdentifier,
    underglow,
};

/// Time of the latest press, read back on the next release.
///
/// Only one key is tracked; overlapping presses share the timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTimer {
    pressed_at: Option<Instant>,
}

impl HoldTimer {
    pub fn arm(&mut self, at: Instant) {
        self.pressed_at = Some(at);
    }

    /// A release with no press recorded counts as a tap.
    pub fn is_hold(&self, released_at: Instant, term: Duration) -> bool {
        self.pressed_at
            .and_then(|pressed_at| released_at.checked_duration_since(pressed_at))
            .is_some_and(|elapsed| elapsed > term)
    }
}

#[derive(Debug, Default)]
pub struct Macropad8 {
    hold_timer: HoldTimer,
}

impl Macropad8 {
    pub fn new() -> Self {
        Self::default()
    }

    fn send_macro<C: ExternalCommunicator, D: DelayNs>(
        code: MacroKey,
        is_hold: bool,
        output: &mut Output<'_, C, D>,
    ) -> Result<(), C::Error> {
        match code {
            MacroKey::GitCommit => output.send_string("git commit -s\n"),
            MacroKey::GitPush if is_hold => output.send_string("git pull-request "),
            MacroKey::GitPush => output.send_string("git push\n"),
            MacroKey::GitPull => output.send_string("git pull\n"),
            MacroKey::GitStatus => output.send_string("git status\n"),
            MacroKey::GitDiff => output.send_string("git difftool\n"),
            MacroKey::GitLog => output.send_string("git log\n"),
            MacroKey::GitAdd => output.send_string("git add "),
            MacroKey::SlackAway => slash_command(output, "/away"),
            MacroKey::SlackActive => slash_command(output, "/active"),
        }
    }
}

// The chat client drops an Enter that arrives while it is still handling
// the command text.
fn slash_command<C: ExternalCommunicator, D: DelayNs>(
    output: &mut Output<'_, C, D>,
    command: &str,
) -> Result<(), C::Error> {
    if !output.is_ready() {
        rustkbd::warn!("host not ready, skipping {}", command);
        return Ok(());
    }
    output.send_string(command)?;
    output.delay_ms(SLACK_COMMAND_SETTLE.ticks());
    output.send_string("\n")
}

impl Hooks<Macropad8Layout> for Macropad8 {
    fn post_init<const N: usize>(&mut self, underglow: &mut Underglow<N>) {
        underglow::install(underglow);
    }

    fn process_record<C: ExternalCommunicator, D: DelayNs>(
        &mut self,
        action: &KeymapAction,
        record: &KeyRecord<KeySwitchIdentifier>,
        output: &mut Output<'_, C, D>,
    ) -> Flow {
        if record.pressed {
            self.hold_timer.arm(record.time);
            return Flow::Continue;
        }
        let is_hold = self.hold_timer.is_hold(record.time, TAPPING_TERM);

        let Action::Custom(code) = *action else {
            return Flow::Continue;
        };
        rustkbd::debug!("macro {} hold={}", code, is_hold);
        if Self::send_macro(code, is_hold, output).is_err() {
            rustkbd::warn!("macro {} not fully typed", code);
        }
        Flow::Handled
    }

    fn layer_state_changed<const N: usize>(
        &mut self,
        state: LayerState<Layer>,
        underglow: &mut Underglow<N>,
    ) {
        underglow::select(state, underglow);
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
