//! EPX and its stricter AdvMAME variant.
//!
//! Both expand each pixel `P` into a 2x2 block from its four edge neighbours:
//! ```text
//!     A          1 | 2
//!   C P B  =>   ---+---
//!     D          3 | 4
//! ```

use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage};
use crate::kernel::Kernel3x3;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::scaler::{run, set, with_template, Scaler};

/// Whether at least three of the six unordered pairs of `{a, b, c, d}` are equal.
#[inline]
pub(crate) fn three_or_more_identical(a: Rgb, b: Rgb, c: Rgb, d: Rgb) -> bool {
    let equal_pairs = (a == b) as u8
        + (a == c) as u8
        + (a == d) as u8
        + (b == c) as u8
        + (b == d) as u8
        + (c == d) as u8;
    equal_pairs >= 3
}

pub(crate) struct Epx;

impl Scaler<2> for Epx {
    type Kernel = Kernel3x3;

    #[inline]
    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
        let (a, b, c, d) = (k.b, k.f, k.d, k.h);
        let mut out = Block::filled(k.e);

        if three_or_more_identical(a, b, c, d) {
            return out;
        }

        if c == a {
            set!(out[0, 0], a);
        }
        if a == b {
            set!(out[1, 0], b);
        }
        if d == c {
            set!(out[0, 1], c);
        }
        if b == d {
            set!(out[1, 1], d);
        }

        out
    }
}

pub(crate) struct AdvMame;

impl Scaler<2> for AdvMame {
    type Kernel = Kernel3x3;

    #[inline]
    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
        let (a, b, c, d) = (k.b, k.f, k.d, k.h);
        let mut out = Block::filled(k.e);

        if c == a && c != d && a != b {
            set!(out[0, 0], a);
        }
        if a == b && a != c && b != d {
            set!(out[1, 0], b);
        }
        if d == c && d != b && c != a {
            set!(out[0, 1], c);
        }
        if b == d && b != a && d != c {
            set!(out[1, 1], d);
        }

        out
    }
}

/// Scales by 2 with EPX.
pub fn scale_epx<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Epx, _, _>(source, out, config)
    })
}

/// Scales by 2 with AdvMAME2x, which only rounds a corner when the perpendicular pair differs.
pub fn scale_adv_mame<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, AdvMame, _, _>(source, out, config)
    })
}
