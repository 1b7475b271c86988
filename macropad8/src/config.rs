use fugit::MillisDurationU32;
use rustkbd::display::Rotation;

/// Longest press still counted as a tap.
pub const TAPPING_TERM: MillisDurationU32 = MillisDurationU32::from_ticks(200);

/// Pause between a chat slash command and the Enter that submits it.
pub const SLACK_COMMAND_SETTLE: MillisDurationU32 = MillisDurationU32::from_ticks(500);

pub const ROLLOVER: usize = 6;
pub const LED_COUNT: usize = 4;
pub const BACKLIGHT_LEVELS: u8 = 3;

pub const PANEL_ROTATION: Rotation = Rotation::Rotate180;
