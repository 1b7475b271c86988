/// Single-colour key backlight: on/off, a stepped level and breathing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Backlight {
    levels: u8,
    level: u8,
    enabled: bool,
    breathing: bool,
}

impl Backlight {
    pub const fn new(levels: u8) -> Self {
        Backlight {
            levels,
            level: levels,
            enabled: true,
            breathing: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> u8 {
        if self.enabled {
            self.level
        } else {
            0
        }
    }

    pub fn is_breathing(&self) -> bool {
        self.breathing
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        if self.enabled && self.level == 0 {
            self.level = self.levels;
        }
    }

    /// Next level; the step after the brightest one turns the light off.
    pub fn step(&mut self) {
        let current = self.level();
        self.level = if current >= self.levels { 0 } else { current + 1 };
        self.enabled = self.level != 0;
    }

    pub fn toggle_breathing(&mut self) {
        self.breathing = !self.breathing;
    }
}

#[cfg(test)]
mod test {
    use super::Backlight;

    #[test]
    fn step_wraps_through_off() {
        let mut backlight = Backlight::new(3);
        assert_eq!(backlight.level(), 3);
        backlight.step();
        assert!(!backlight.is_enabled());
        assert_eq!(backlight.level(), 0);
        backlight.step();
        assert!(backlight.is_enabled());
        assert_eq!(backlight.level(), 1);
    }

    #[test]
    fn toggle_restores_level() {
        let mut backlight = Backlight::new(3);
        backlight.toggle();
        assert!(!backlight.is_enabled());
        backlight.toggle();
        assert_eq!(backlight.level(), 3);
        backlight.toggle_breathing();
        assert!(backlight.is_breathing());
    }
}
