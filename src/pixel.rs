use std::fmt::{Debug, Formatter};

use bytemuck::{Pod, Zeroable};

/// 8-bit RGB colour, laid out as three consecutive bytes so that pixel slices can be
/// reinterpreted as packed `RGB888` data.
///
/// Equality is exact and element-wise; `!=` is always the negation of `==`.
#[repr(C)]
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_parts(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Builds a pixel from the low 24 bits of `value`, as `0xRRGGBB`.
    pub const fn from_u32(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Channel-wise saturating sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    /// Multiplies every channel by `factor`, truncating toward zero and clamping to `0..=255`.
    pub fn scale_by(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linear mix `self * (1 - t) + other * t` with truncating conversion back to 8 bits.
    ///
    /// Mixing a colour with itself returns it unchanged for every `t`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        if self == other {
            return self;
        }

        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Truncating 50/50 integer average.
    #[inline]
    pub(crate) const fn average(self, other: Self) -> Self {
        Self::new(
            ((self.r as u16 + other.r as u16) / 2) as u8,
            ((self.g as u16 + other.g as u16) / 2) as u8,
            ((self.b as u16 + other.b as u16) / 2) as u8,
        )
    }
}

impl Debug for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rgb")
            .field("repr", &format_args!("#{:06X}", self.to_u32()))
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .finish()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        value.to_parts()
    }
}

/// Floating-point colour used by the interpolating kernels; converted back with rounding.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub(crate) struct Rgbf {
    pub(crate) r: f32,
    pub(crate) g: f32,
    pub(crate) b: f32,
}

impl Rgbf {
    #[inline]
    pub(crate) const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub(crate) fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    #[inline]
    pub(crate) fn scale_by(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[inline]
    pub(crate) fn lerp(self, other: Self, t: f32) -> Self {
        self.scale_by(1.0 - t).add(other.scale_by(t))
    }

    #[inline]
    pub(crate) fn to_rgb(self) -> Rgb {
        let round = |c: f32| c.round().clamp(0.0, 255.0) as u8;
        Rgb::new(round(self.r), round(self.g), round(self.b))
    }
}

impl From<Rgb> for Rgbf {
    #[inline]
    fn from(value: Rgb) -> Self {
        Self::new(value.r as f32, value.g as f32, value.b as f32)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Rgb, Rgbf};

    #[test]
    fn single_channel_difference_is_unequal() {
        let base = Rgb::new(10, 20, 30);
        for other in [Rgb::new(11, 20, 30), Rgb::new(10, 21, 30), Rgb::new(10, 20, 31)] {
            assert!(base != other);
            assert!(!(base == other));
        }
        assert!(!(base != Rgb::new(10, 20, 30)));
    }

    #[test]
    fn lerp_truncates() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 3, 1);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(127, 1, 0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn arithmetic_saturates() {
        let a = Rgb::new(200, 100, 0);
        assert_eq!(a.add(Rgb::new(100, 100, 5)), Rgb::new(255, 200, 5));
        assert_eq!(a.scale_by(2.0), Rgb::new(255, 200, 0));
        assert_eq!(a.scale_by(0.5), Rgb::new(100, 50, 0));
        assert_eq!(a.average(Rgb::new(101, 0, 1)), Rgb::new(150, 50, 0));
    }

    #[test]
    fn packed_round_trip() {
        let px = Rgb::from_u32(0x12_34_56);
        assert_eq!(px.to_parts(), (0x12, 0x34, 0x56));
        assert_eq!(px.to_u32(), 0x12_34_56);
        assert_eq!(bytemuck::bytes_of(&px), &[0x12, 0x34, 0x56]);
    }

    #[test]
    fn float_rounding() {
        let f = Rgbf::from(Rgb::new(10, 20, 30)).lerp(Rgbf::from(Rgb::new(11, 20, 30)), 0.5);
        assert_eq!(f.to_rgb(), Rgb::new(11, 20, 30));
    }

    proptest! {
        #[test]
        fn inequality_is_negated_equality(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
            let a = Rgb::new(a[0], a[1], a[2]);
            let b = Rgb::new(b[0], b[1], b[2]);
            prop_assert_eq!(a != b, !(a == b));
            prop_assert_eq!(a == b, a.to_u32() == b.to_u32());
        }

        #[test]
        fn lerp_of_equal_colours_is_identity(c in any::<[u8; 3]>(), t in 0.0f32..=1.0) {
            let c = Rgb::new(c[0], c[1], c[2]);
            prop_assert_eq!(c.lerp(c, t), c);
        }
    }
}
