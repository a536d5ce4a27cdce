use rand::{Rng, RngCore};

/// Lowest channel value used for random brush colours, keeping them light
/// enough that face tinting stays visible.
const BRUSH_CHANNEL_MIN: u8 = 80;

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a colour with an explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Draws an opaque colour for a newly created brush.
    pub fn random_brush(rng: &mut dyn RngCore) -> Self {
        Self::rgb(
            rng.random_range(BRUSH_CHANNEL_MIN..=u8::MAX),
            rng.random_range(BRUSH_CHANNEL_MIN..=u8::MAX),
            rng.random_range(BRUSH_CHANNEL_MIN..=u8::MAX),
        )
    }

    /// Subtracts `amount` from each colour channel, saturating at zero.
    /// Alpha is kept.
    #[must_use]
    pub fn darkened(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
