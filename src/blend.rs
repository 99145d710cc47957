//! Integer weighted blends of the HQ family. All divisions are truncating shifts.

use crate::pixel::Rgb;

#[inline(always)]
fn channels(f: impl Fn(u32, u32, u32) -> u32, a: Rgb, b: Rgb, c: Rgb) -> Rgb {
    Rgb::new(
        f(a.r as u32, b.r as u32, c.r as u32) as u8,
        f(a.g as u32, b.g as u32, c.g as u32) as u8,
        f(a.b as u32, b.b as u32, c.b as u32) as u8,
    )
}

/// `(a * W1 + b * W2) >> SHIFT`, returning `a` untouched when both inputs are equal.
#[inline]
pub(crate) fn interpolate2<const W1: u32, const W2: u32, const SHIFT: u32>(a: Rgb, b: Rgb) -> Rgb {
    debug_assert_eq!(W1 + W2, 1 << SHIFT);
    if a == b {
        return a;
    }
    channels(|a, b, _| (a * W1 + b * W2) >> SHIFT, a, b, b)
}

/// `(2a + b + c) >> 2`
#[inline]
pub(crate) fn interpolate3(a: Rgb, b: Rgb, c: Rgb) -> Rgb {
    channels(|a, b, c| (2 * a + b + c) >> 2, a, b, c)
}

/// `(2a + 7b + 7c) >> 4`
#[inline]
pub(crate) fn interpolate277(a: Rgb, b: Rgb, c: Rgb) -> Rgb {
    channels(|a, b, c| (2 * a + 7 * b + 7 * c) >> 4, a, b, c)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{interpolate2, interpolate277, interpolate3};
    use crate::pixel::Rgb;

    #[rstest]
    #[case(interpolate2::<5, 3, 3>, Rgb::new(255, 7, 0), Rgb::new(0, 0, 9), Rgb::new(159, 4, 3))]
    #[case(interpolate2::<3, 1, 2>, Rgb::new(255, 7, 0), Rgb::new(0, 0, 9), Rgb::new(191, 5, 2))]
    #[case(interpolate2::<7, 1, 3>, Rgb::new(255, 7, 0), Rgb::new(0, 0, 9), Rgb::new(223, 6, 1))]
    #[case(interpolate2::<1, 1, 1>, Rgb::new(255, 7, 0), Rgb::new(0, 0, 9), Rgb::new(127, 3, 4))]
    fn weighted_pairs(#[case] f: fn(Rgb, Rgb) -> Rgb, #[case] a: Rgb, #[case] b: Rgb, #[case] expected: Rgb) {
        assert_eq!(f(a, b), expected);
    }

    #[test]
    fn equal_pair_short_circuits() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(interpolate2::<5, 3, 3>(c, c), c);
    }

    #[test]
    fn three_way() {
        let (a, b, c) = (Rgb::new(100, 0, 255), Rgb::new(0, 4, 255), Rgb::new(1, 0, 255));
        assert_eq!(interpolate3(a, b, c), Rgb::new(50, 1, 255));
        assert_eq!(interpolate277(a, b, c), Rgb::new(12, 1, 255));
    }
}
