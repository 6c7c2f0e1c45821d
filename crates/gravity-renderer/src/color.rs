/// RGB color with components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 0xAARRGGBB (or 0xRRGGBB) integer; the alpha byte is ignored
    pub const fn from_packed(color: u32) -> Self {
        Self::rgb(
            ((color >> 16) & 0xFF) as f32 / 255.0,
            ((color >> 8) & 0xFF) as f32 / 255.0,
            (color & 0xFF) as f32 / 255.0,
        )
    }

    /// Pack into 0xRRGGBB
    pub fn to_packed(self) -> u32 {
        let channel = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u32;
        channel(self.r) << 16 | channel(self.g) << 8 | channel(self.b)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

impl From<u32> for Color {
    fn from(color: u32) -> Self {
        Self::from_packed(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_ignores_alpha() {
        assert_eq!(Color::from_packed(0xFFFF0000), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_packed(0x00FF0000), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_packed(0xFFFFFFFF), Color::WHITE);
    }

    #[test]
    fn test_pack_round_trips_channels() {
        for packed in [0x000000, 0x123456, 0xFF8001, 0x00FF00] {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }
    }
}
