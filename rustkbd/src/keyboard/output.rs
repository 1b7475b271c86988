use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::{ExternalCommunicator, Key};

/// Types text on behalf of a keymap callback.
///
/// Each character becomes a press report followed by an empty report.
pub struct Output<'a, C: ExternalCommunicator, D: DelayNs> {
    communicator: &'a C,
    delay: &'a mut D,
}

impl<'a, C: ExternalCommunicator, D: DelayNs> Output<'a, C, D> {
    pub fn new(communicator: &'a C, delay: &'a mut D) -> Self {
        Output {
            communicator,
            delay,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.communicator.is_ready()
    }

    pub fn send_string(&mut self, text: &str) -> Result<(), C::Error> {
        if !self.communicator.is_ready() {
            crate::warn!("host not ready, dropping {} bytes", text.len());
            return Ok(());
        }

        for c in text.bytes() {
            let Some((key, shifted)) = Key::from_ascii(c) else {
                crate::warn!("cannot type character {}", c);
                continue;
            };
            let mut report = Vec::<Key, 2>::new();
            if shifted {
                report.push(Key::LeftShift).ok();
            }
            report.push(key).ok();
            self.communicator.send_keys(&report)?;
            self.communicator.release_all()?;
        }
        Ok(())
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
