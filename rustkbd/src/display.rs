use embedded_graphics::draw_target::DrawTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

pub trait Display: DrawTarget {
    const REQUIRES_FLUSH: bool;
    fn flush(&mut self) -> Result<(), Self::Error>;
    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error>;
}
