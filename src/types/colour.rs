//! Colour type and channel arithmetic.

use std::fmt;

/// An RGBA colour value, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Offset the RGB channels, clamping each to `[0, 255]`. Alpha is kept.
    pub fn shift(self, dr: i32, dg: i32, db: i32) -> Self {
        Self::new(
            clamp_channel(self.r as i32 + dr),
            clamp_channel(self.g as i32 + dg),
            clamp_channel(self.b as i32 + db),
            self.a,
        )
    }

    /// Composite `self` over `dst` with the standard "over" operator.
    ///
    /// A fully transparent source leaves `dst` untouched; an opaque source,
    /// or a fully transparent destination, is replaced outright. Otherwise
    /// channels are mixed in normalized alpha space and rounded to nearest.
    pub fn over(self, dst: Colour) -> Colour {
        if self.a == 0 {
            return dst;
        }
        if self.a == 255 || dst.a == 0 {
            return self;
        }

        let src_a = self.a as f64 / 255.0;
        let dst_a = dst.a as f64 / 255.0 * (1.0 - src_a);
        let out_a = src_a + dst_a;

        let mix = |s: u8, d: u8| -> u8 {
            let v = (s as f64 * src_a + d as f64 * dst_a) / out_a;
            clamp_channel(v.round() as i32)
        };

        Colour::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            clamp_channel((out_a * 255.0).round() as i32),
        )
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<[u8; 4]> for Colour {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Clamp an intermediate channel value into a byte.
pub(crate) fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_clamps() {
        let c = Colour::new(250, 5, 128, 90);
        assert_eq!(c.shift(10, -10, 0), Colour::new(255, 0, 128, 90));
    }

    #[test]
    fn test_over_opaque_replaces() {
        let dst = Colour::new(10, 20, 30, 200);
        let src = Colour::rgb(200, 100, 50);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn test_over_transparent_source_is_noop() {
        let dst = Colour::new(10, 20, 30, 200);
        assert_eq!(Colour::new(255, 255, 255, 0).over(dst), dst);
    }

    #[test]
    fn test_over_transparent_destination_takes_source() {
        let src = Colour::new(255, 0, 0, 100);
        assert_eq!(src.over(Colour::TRANSPARENT), src);
    }

    #[test]
    fn test_over_half_red_on_blue() {
        let src = Colour::new(255, 0, 0, 128);
        let dst = Colour::rgb(0, 0, 255);
        assert_eq!(src.over(dst), Colour::new(128, 0, 127, 255));
    }

    #[test]
    fn test_over_two_translucent_layers() {
        // sa ~ 0.5, da ~ 0.25, out ~ 0.75
        let src = Colour::new(255, 255, 255, 255 / 2 + 1);
        let dst = Colour::new(0, 0, 0, 255 / 2 + 1);
        let out = src.over(dst);
        assert_eq!(out.a, 192);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert!((169..=171).contains(&out.r), "got {}", out);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::BLACK.is_opaque());
    }
}
