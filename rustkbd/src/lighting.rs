mod backlight;
mod underglow;

pub use backlight::Backlight;
pub use underglow::{Color, Mode, Segment, Underglow};
