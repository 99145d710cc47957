use std::sync::OnceLock;

use crate::config::YuvThreshold;
use crate::pixel::Rgb;

// 16.16 fixed-point BT.601 coefficients
const Y_R: i32 = 19595;
const Y_G: i32 = 38470;
const Y_B: i32 = 7471;
const U_R: i32 = -11076;
const U_G: i32 = -21692;
const U_B: i32 = 32768;
const V_R: i32 = 32768;
const V_G: i32 = -27460;
const V_B: i32 = -5308;

/// Weights of the xBR colour distance.
const Y_WEIGHT: u32 = 0x30;
const U_WEIGHT: u32 = 0x07;
const V_WEIGHT: u32 = 0x06;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Yuv {
    pub(crate) y: u8,
    pub(crate) u: u8,
    pub(crate) v: u8,
}

impl Yuv {
    const fn from_u32(packed: u32) -> Self {
        Self {
            y: (packed >> 16) as u8,
            u: (packed >> 8) as u8,
            v: packed as u8,
        }
    }

    const fn to_u32(self) -> u32 {
        ((self.y as u32) << 16) | ((self.u as u32) << 8) | (self.v as u32)
    }

    /// HQ difference test: some channel differs by more than its threshold.
    #[inline]
    pub(crate) fn is_different(self, other: Self, threshold: &YuvThreshold) -> bool {
        self.y.abs_diff(other.y) > threshold.y
            || self.u.abs_diff(other.u) > threshold.u
            || self.v.abs_diff(other.v) > threshold.v
    }

    /// Weighted xBR distance, zero for identical colours.
    #[inline]
    pub(crate) fn distance(self, other: Self) -> u32 {
        if self == other {
            return 0;
        }
        self.y.abs_diff(other.y) as u32 * Y_WEIGHT
            + self.u.abs_diff(other.u) as u32 * U_WEIGHT
            + self.v.abs_diff(other.v) as u32 * V_WEIGHT
    }
}

#[inline]
fn combine(y: i32, u: i32, v: i32) -> Yuv {
    Yuv {
        y: (y >> 16) as u8,
        u: ((u >> 16) + 128) as u8,
        v: ((v >> 16) + 128) as u8,
    }
}

/// Direct fixed-point conversion.
#[inline]
pub(crate) fn rgb_to_yuv(px: Rgb) -> Yuv {
    let (r, g, b) = (px.r as i32, px.g as i32, px.b as i32);
    combine(
        Y_R * r + Y_G * g + Y_B * b,
        U_R * r + U_G * g + U_B * b,
        V_R * r + V_G * g + V_B * b,
    )
}

pub(crate) enum YuvLookup {
    /// Per-channel contributions `[channel][value] -> [y, u, v]`, summed then shifted.
    Channels(Box<[[[i32; 3]; 256]; 3]>),
    /// Packed `0xYYUUVV` for every 24-bit colour.
    Packed(Box<[u32]>),
}

static LOOKUP_INSTANCE: OnceLock<YuvLookup> = OnceLock::new();

impl YuvLookup {
    #[inline]
    pub(crate) fn instance() -> &'static Self {
        LOOKUP_INSTANCE.get_or_init(|| {
            #[cfg(feature = "large_lut")]
            {
                Self::new_packed()
            }
            #[cfg(not(feature = "large_lut"))]
            {
                Self::new_channels()
            }
        })
    }

    pub(crate) fn new_channels() -> Self {
        let mut table = Box::new([[[0i32; 3]; 256]; 3]);
        let coefficients = [[Y_R, U_R, V_R], [Y_G, U_G, V_G], [Y_B, U_B, V_B]];

        for (channel, coeff) in table.iter_mut().zip(coefficients) {
            for (value, entry) in channel.iter_mut().enumerate() {
                *entry = coeff.map(|c| c * value as i32);
            }
        }

        Self::Channels(table)
    }

    pub(crate) fn new_packed() -> Self {
        let lookup: Vec<u32> = (0..0x100_0000u32)
            .map(|i| rgb_to_yuv(Rgb::from_u32(i)).to_u32())
            .collect();

        Self::Packed(lookup.into_boxed_slice())
    }

    #[inline]
    pub(crate) fn yuv(&self, px: Rgb) -> Yuv {
        match self {
            YuvLookup::Channels(table) => {
                let [r, g, b] = [table[0][px.r as usize], table[1][px.g as usize], table[2][px.b as usize]];
                combine(r[0] + g[0] + b[0], r[1] + g[1] + b[1], r[2] + g[2] + b[2])
            }
            YuvLookup::Packed(lookup) => Yuv::from_u32(lookup[px.to_u32() as usize]),
        }
    }

    #[inline]
    pub(crate) fn is_different(&self, a: Rgb, b: Rgb, threshold: &YuvThreshold) -> bool {
        a != b && self.yuv(a).is_different(self.yuv(b), threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::{rgb_to_yuv, Yuv, YuvLookup};
    use crate::config::YuvThreshold;
    use crate::pixel::Rgb;

    fn test_whole_lut(lut: &YuvLookup) {
        for r in (0..=0xFF).step_by(15) {
            for g in (0..=0xFF).step_by(15) {
                for b in (0..=0xFF).step_by(15) {
                    let px = Rgb::new(r, g, b);
                    assert_eq!(lut.yuv(px), rgb_to_yuv(px), "{px:?}");
                }
            }
        }
    }

    #[test]
    fn channel_lut() {
        test_whole_lut(&YuvLookup::new_channels());
    }

    #[test]
    fn packed_lut() {
        test_whole_lut(&YuvLookup::new_packed());
    }

    #[test]
    fn known_conversions() {
        assert_eq!(rgb_to_yuv(Rgb::BLACK), Yuv { y: 0, u: 128, v: 128 });
        assert_eq!(rgb_to_yuv(Rgb::WHITE), Yuv { y: 255, u: 128, v: 128 });
        assert_eq!(rgb_to_yuv(Rgb::new(0, 0, 255)), Yuv { y: 29, u: 255, v: 107 });
    }

    #[test]
    fn thresholds_are_exclusive() {
        let threshold = YuvThreshold::default();
        let base = Yuv { y: 100, u: 100, v: 100 };
        assert!(!base.is_different(Yuv { y: 148, ..base }, &threshold));
        assert!(base.is_different(Yuv { y: 149, ..base }, &threshold));
        assert!(!base.is_different(Yuv { u: 93, ..base }, &threshold));
        assert!(base.is_different(Yuv { v: 107, ..base }, &threshold));
    }

    #[test]
    fn distance_weights() {
        let a = Yuv { y: 10, u: 20, v: 30 };
        let b = Yuv { y: 12, u: 17, v: 31 };
        assert_eq!(a.distance(a), 0);
        assert_eq!(a.distance(b), 2 * 0x30 + 3 * 7 + 6);
    }

    #[test]
    fn shared_instance_is_built_once() {
        let lut = YuvLookup::instance();
        assert!(std::ptr::eq(lut, YuvLookup::instance()));
        assert!(!lut.is_different(Rgb::WHITE, Rgb::WHITE, &YuvThreshold::default()));
        assert!(lut.is_different(Rgb::BLACK, Rgb::WHITE, &YuvThreshold::default()));
    }
}
