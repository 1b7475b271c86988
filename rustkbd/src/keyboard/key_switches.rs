use core::hash::Hash;

use crate::Instant;

pub trait KeySwitchIdentifier: Copy + Eq + Hash {}

/// A single switch transition as reported by the matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord<SI: KeySwitchIdentifier> {
    pub switch: SI,
    pub pressed: bool,
    pub time: Instant,
}

impl<SI: KeySwitchIdentifier> KeyRecord<SI> {
    pub fn press(switch: SI, time: Instant) -> Self {
        KeyRecord {
            switch,
            pressed: true,
            time,
        }
    }

    pub fn release(switch: SI, time: Instant) -> Self {
        KeyRecord {
            switch,
            pressed: false,
            time,
        }
    }
}
