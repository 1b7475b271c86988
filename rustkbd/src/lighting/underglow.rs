//! Addressable underglow with per-layer overlays.
//!
//! The base effect is drawn first. Every enabled overlay then paints its
//! segments on top, in table order, so later overlays win where they overlap.

use smart_leds::{
    hsv::{hsv2rgb, Hsv},
    SmartLedsWrite, RGB8,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Color {
    pub const RED: Color = Color::new(0, 255, 255);
    pub const YELLOW: Color = Color::new(43, 255, 255);
    pub const GREEN: Color = Color::new(85, 255, 255);
    pub const BLUE: Color = Color::new(170, 255, 255);
    pub const WHITE: Color = Color::new(0, 0, 255);

    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Color { hue, sat, val }
    }

    pub fn to_rgb(self) -> RGB8 {
        hsv2rgb(Hsv {
            hue: self.hue,
            sat: self.sat,
            val: self.val,
        })
    }

    fn with_hue(self, hue: u8) -> Self {
        Color { hue, ..self }
    }
}

/// `count` LEDs from `start` lit with one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u8,
    pub count: u8,
    pub color: Color,
}

impl Segment {
    pub const fn new(start: u8, count: u8, color: Color) -> Self {
        Segment {
            start,
            count,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Static,
    Rainbow,
    Snake,
}

impl Mode {
    fn next(self) -> Self {
        match self {
            Mode::Static => Mode::Rainbow,
            Mode::Rainbow => Mode::Snake,
            Mode::Snake => Mode::Static,
        }
    }
}

pub struct Underglow<const N: usize> {
    enabled: bool,
    mode: Mode,
    color: Color,
    layers: &'static [&'static [Segment]],
    layer_bits: u32,
}

impl<const N: usize> Default for Underglow<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Underglow<N> {
    pub const fn new() -> Self {
        Underglow {
            enabled: true,
            mode: Mode::Static,
            color: Color::RED,
            layers: &[],
            layer_bits: 0,
        }
    }

    /// Install the overlay table. Overlay `i` is switched with
    /// [`Underglow::set_layer_state`]`(i, ..)`.
    pub fn set_layers(&mut self, layers: &'static [&'static [Segment]]) {
        self.layers = layers;
        self.layer_bits = 0;
    }

    pub fn set_layer_state(&mut self, index: usize, enabled: bool) {
        if index >= self.layers.len() {
            crate::warn!("no underglow layer {}", index);
            return;
        }
        if enabled {
            self.layer_bits |= 1 << index;
        } else {
            self.layer_bits &= !(1 << index);
        }
    }

    pub fn layer_state(&self, index: usize) -> bool {
        index < self.layers.len() && self.layer_bits & (1 << index) != 0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.enabled = true;
        self.mode = mode;
    }

    pub fn step_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Colours for every LED at animation step `tick`.
    pub fn render(&self, tick: u32) -> [RGB8; N] {
        let mut leds = [RGB8::default(); N];
        if !self.enabled {
            return leds;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            *led = match self.mode {
                Mode::Static => self.color.to_rgb(),
                Mode::Rainbow => {
                    let spread = (i * 256 / N.max(1)) as u32;
                    self.color.with_hue(tick.wrapping_add(spread) as u8).to_rgb()
                }
                Mode::Snake if N > 0 && i == tick as usize % N => self.color.to_rgb(),
                Mode::Snake => RGB8::default(),
            };
        }

        for (index, segments) in self.layers.iter().enumerate() {
            if !self.layer_state(index) {
                continue;
            }
            for segment in segments.iter() {
                let start = segment.start as usize;
                let end = (start + segment.count as usize).min(N);
                for led in leds.iter_mut().take(end).skip(start) {
                    *led = segment.color.to_rgb();
                }
            }
        }
        leds
    }

    pub fn write<W: SmartLedsWrite<Color = RGB8>>(
        &self,
        leds: &mut W,
        tick: u32,
    ) -> Result<(), W::Error> {
        leds.write(self.render(tick).into_iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static HALVES: [Segment; 1] = [Segment::new(0, 2, Color::BLUE)];
    static WHOLE: [Segment; 1] = [Segment::new(0, 4, Color::WHITE)];
    static LAYERS: [&[Segment]; 2] = [&HALVES, &WHOLE];

    #[test]
    fn base_static_colour() {
        let underglow = Underglow::<4>::new();
        assert_eq!(underglow.render(0), [Color::RED.to_rgb(); 4]);
    }

    #[test]
    fn disabled_is_dark() {
        let mut underglow = Underglow::<4>::new();
        underglow.set_layers(&LAYERS);
        underglow.set_layer_state(1, true);
        underglow.toggle();
        assert_eq!(underglow.render(0), [RGB8::default(); 4]);
    }

    #[test]
    fn overlays_paint_in_order() {
        let mut underglow = Underglow::<4>::new();
        underglow.set_layers(&LAYERS);
        underglow.set_layer_state(0, true);
        let leds = underglow.render(0);
        assert_eq!(leds[0], Color::BLUE.to_rgb());
        assert_eq!(leds[1], Color::BLUE.to_rgb());
        assert_eq!(leds[2], Color::RED.to_rgb());

        underglow.set_layer_state(1, true);
        assert_eq!(underglow.render(0), [Color::WHITE.to_rgb(); 4]);

        underglow.set_layer_state(1, false);
        underglow.set_layer_state(0, false);
        assert_eq!(underglow.render(0), [Color::RED.to_rgb(); 4]);
    }

    #[test]
    fn unknown_overlay_is_ignored() {
        let mut underglow = Underglow::<4>::new();
        underglow.set_layers(&LAYERS);
        underglow.set_layer_state(7, true);
        assert!(!underglow.layer_state(7));
    }

    #[test]
    fn mode_step_cycles() {
        let mut underglow = Underglow::<4>::new();
        underglow.step_mode();
        assert_eq!(underglow.mode(), Mode::Rainbow);
        underglow.step_mode();
        assert_eq!(underglow.mode(), Mode::Snake);
        let leds = underglow.render(5);
        assert_eq!(leds[1], Color::RED.to_rgb());
        assert_eq!(leds[0], RGB8::default());
        underglow.step_mode();
        assert_eq!(underglow.mode(), Mode::Static);
    }
}
