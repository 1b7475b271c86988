#![no_std]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod display;
pub mod keyboard;
pub mod lighting;

pub use heapless::{String, Vec};

/// Millisecond timestamp as delivered by the runtime's monotonic timer.
pub type Instant = fugit::TimerInstantU32<1000>;

/// Millisecond duration matching [`Instant`].
pub type Duration = fugit::MillisDurationU32;

#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use defmt;
