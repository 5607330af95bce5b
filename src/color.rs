use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Line colour of one plotted series. The role of a series (desired,
/// measured, sensor) keeps the same colour in every figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// Desired / commanded signal.
    Red,
    /// Measured configuration.
    Blue,
    /// Joint or motor sensor.
    Cyan,
}

impl SeriesColor {
    /// sRGB components in `0.0..=1.0`, matching the classic
    /// single-letter plot colours.
    fn srgb(self) -> Srgb<f32> {
        match self {
            SeriesColor::Red => Srgb::new(1.0, 0.0, 0.0),
            SeriesColor::Blue => Srgb::new(0.0, 0.0, 1.0),
            SeriesColor::Cyan => Srgb::new(0.0, 0.75, 0.75),
        }
    }

    pub fn to_color32(self) -> Color32 {
        let rgb: Srgb<u8> = self.srgb().into_format();
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<SeriesColor> for Color32 {
    fn from(c: SeriesColor) -> Self {
        c.to_color32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_egui_colours() {
        assert_eq!(SeriesColor::Red.to_color32(), Color32::from_rgb(255, 0, 0));
        assert_eq!(SeriesColor::Blue.to_color32(), Color32::from_rgb(0, 0, 255));
        assert_eq!(SeriesColor::Cyan.to_color32(), Color32::from_rgb(0, 191, 191));
    }
}
