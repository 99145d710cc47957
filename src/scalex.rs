//! Scale2x/Scale3x, their SFX refinements, and Scale4x.
//!
//! The 3x3 rules name the neighbourhood
//! ```text
//! A B C
//! D E F
//! G H I
//! ```
//! and the SFX rules add the pixels two steps away along each axis:
//! ```text
//!     J
//!   A B C
//! K D E F L
//!   G H I
//!     M
//! ```

use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, ImageBuffer, InputImage, OutputImage};
use crate::kernel::{Kernel3x3, Kernel5x5};
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::scaler::{run, set, with_template, Scaler};

/// The Scale2x corner rule, shared with AAScale: `[E0, E1, E2, E3]` in row-major order.
#[inline]
pub(crate) fn scale2x_corners(b: Rgb, d: Rgb, e: Rgb, f: Rgb, h: Rgb) -> [Rgb; 4] {
    if b != h && d != f {
        [
            if d == b { d } else { e },
            if b == f { f } else { e },
            if d == h { d } else { e },
            if h == f { f } else { e },
        ]
    } else {
        [e; 4]
    }
}

pub(crate) struct Scale2x;

impl Scaler<2> for Scale2x {
    type Kernel = Kernel3x3;

    #[inline]
    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
        let [e0, e1, e2, e3] = scale2x_corners(k.b, k.d, k.e, k.f, k.h);
        Block::from_rows([[e0, e1], [e2, e3]])
    }
}

pub(crate) struct Scale3x;

impl Scaler<3> for Scale3x {
    type Kernel = Kernel3x3;

    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<3> {
        let Kernel3x3 {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        } = *k;
        let mut out = Block::filled(e);

        if b != h && d != f {
            if d == b {
                set!(out[0, 0], d);
            }
            if (d == b && e != c) || (b == f && e != a) {
                set!(out[1, 0], b);
            }
            if b == f {
                set!(out[2, 0], f);
            }
            if (d == b && e != g) || (d == h && e != a) {
                set!(out[0, 1], d);
            }
            if (b == f && e != i) || (h == f && e != c) {
                set!(out[2, 1], f);
            }
            if d == h {
                set!(out[0, 2], d);
            }
            if (d == h && e != i) || (h == f && e != g) {
                set!(out[1, 2], h);
            }
            if h == f {
                set!(out[2, 2], f);
            }
        }

        out
    }
}

/// Letters of the SFX neighbourhood.
#[derive(Copy, Clone)]
struct Sfx {
    j: Rgb,
    a: Rgb,
    b: Rgb,
    c: Rgb,
    k: Rgb,
    d: Rgb,
    e: Rgb,
    f: Rgb,
    l: Rgb,
    g: Rgb,
    h: Rgb,
    i: Rgb,
    m: Rgb,
}

impl Sfx {
    #[inline]
    fn new(n: &Kernel5x5) -> Self {
        Self {
            j: n.at(0, -2),
            a: n.at(-1, -1),
            b: n.at(0, -1),
            c: n.at(1, -1),
            k: n.at(-2, 0),
            d: n.at(-1, 0),
            e: n.at(0, 0),
            f: n.at(1, 0),
            l: n.at(2, 0),
            g: n.at(-1, 1),
            h: n.at(0, 1),
            i: n.at(1, 1),
            m: n.at(0, 2),
        }
    }

    // A corner rounds when its two edges agree, the opposite edges do not, and no pixel
    // further out shows that the edge carries on past the corner.

    #[inline]
    fn top_left(&self) -> bool {
        let Self { j, a, b, c, k, d, e, f, g, h, .. } = *self;
        b == d && b != f && d != h && (e != a || e == c || e == g || a == j || a == k)
    }

    #[inline]
    fn top_right(&self) -> bool {
        let Self { j, a, b, c, d, e, f, l, h, i, .. } = *self;
        b == f && b != d && f != h && (e != c || e == a || e == i || c == j || c == l)
    }

    #[inline]
    fn bottom_left(&self) -> bool {
        let Self { a, b, k, d, e, f, g, h, i, m, .. } = *self;
        d == h && b != d && f != h && (e != g || e == a || e == i || g == k || g == m)
    }

    #[inline]
    fn bottom_right(&self) -> bool {
        let Self { b, c, d, e, f, l, g, h, i, m, .. } = *self;
        f == h && b != f && d != h && (e != i || e == c || e == g || i == l || i == m)
    }
}

pub(crate) struct Scale2xSfx;

impl Scaler<2> for Scale2xSfx {
    type Kernel = Kernel5x5;

    #[inline]
    fn expand(n: &Kernel5x5, _config: &ScalerConfig) -> Block<2> {
        let s = Sfx::new(n);
        let pick = |round: bool, to: Rgb| if round { to } else { s.e };

        Block::from_rows([
            [pick(s.top_left(), s.d), pick(s.top_right(), s.f)],
            [pick(s.bottom_left(), s.d), pick(s.bottom_right(), s.f)],
        ])
    }
}

pub(crate) struct Scale3xSfx;

impl Scaler<3> for Scale3xSfx {
    type Kernel = Kernel5x5;

    fn expand(n: &Kernel5x5, _config: &ScalerConfig) -> Block<3> {
        let s = Sfx::new(n);
        let Sfx { j, a, b, c, k, d, e, f, l, g, h, i, m } = s;
        let (tl, tr, bl, br) = (s.top_left(), s.top_right(), s.bottom_left(), s.bottom_right());
        let mut out = Block::filled(e);

        // corners blend the two agreeing edges
        if tl || (b == d && c == e && c != j && a != e) || (b == d && e == g && a != e && g != k) {
            set!(out[0, 0], b.lerp(d, 0.5));
        }
        if tr || (b == f && a == e && a != j && c != e) || (b == f && e == i && c != e && i != l) {
            set!(out[2, 0], b.lerp(f, 0.5));
        }
        if bl || (d == h && a == e && a != k && e != g) || (d == h && e == i && e != g && i != m) {
            set!(out[0, 2], d.lerp(h, 0.5));
        }
        if br || (f == h && c == e && c != l && e != i) || (f == h && e == g && e != i && g != m) {
            set!(out[2, 2], f.lerp(h, 0.5));
        }

        if (tl && e != c) || (tr && e != a) {
            set!(out[1, 0], b);
        }
        if (tl && e != g) || (bl && e != a) {
            set!(out[0, 1], d);
        }
        if (br && e != c) || (tr && e != i) {
            set!(out[2, 1], f);
        }
        if (br && e != g) || (bl && e != i) {
            set!(out[1, 2], h);
        }

        out
    }
}

pub fn scale_scale2x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Scale2x, _, _>(source, out, config)
    })
}

pub fn scale_scale3x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 3, source.height() * 3, |out| {
        run::<3, Scale3x, _, _>(source, out, config)
    })
}

pub fn scale_scale2x_sfx<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Scale2xSfx, _, _>(source, out, config)
    })
}

pub fn scale_scale3x_sfx<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 3, source.height() * 3, |out| {
        run::<3, Scale3xSfx, _, _>(source, out, config)
    })
}

/// Scale2x applied twice.
pub fn scale_scale4x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 4, source.height() * 4, |out| {
        scale4x_into(source, out, config)
    })
}

pub(crate) fn scale4x_into<I, O>(source: &I, destination: &mut O, config: &ScalerConfig) -> Result<(), ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let mut intermediate = ImageBuffer::create(source.width() * 2, source.height() * 2, source);
    run::<2, Scale2x, _, _>(source, &mut intermediate, config)?;
    run::<2, Scale2x, _, _>(&intermediate, destination, config)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{scale_scale2x, scale_scale2x_sfx, scale_scale3x, scale_scale3x_sfx, scale_scale4x};
    use crate::config::ScalerConfig;
    use crate::epx::scale_adv_mame;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;

    const X: Rgb = Rgb::new(200, 0, 0);
    const O: Rgb = Rgb::new(0, 0, 200);
    const W: Rgb = Rgb::WHITE;

    fn image(rows: &[&[Rgb]]) -> ImageBuffer {
        ImageBuffer::from_fn(rows[0].len(), rows.len(), |x, y| rows[y][x])
    }

    fn block<const N: usize>(out: &ImageBuffer, bx: usize, by: usize) -> [[Rgb; N]; N] {
        let mut cells = [[Rgb::default(); N]; N];
        for (j, row) in cells.iter_mut().enumerate() {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = out.get_pixel(bx * N + i, by * N + j);
            }
        }
        cells
    }

    /// Centre `W` with `X` above and to the left, `O` elsewhere.
    fn corner() -> ImageBuffer {
        image(&[&[O, X, O], &[X, W, O], &[O, O, O]])
    }

    #[test]
    fn scale2x_rounds_corner() {
        let out: ImageBuffer = scale_scale2x(&corner(), &ScalerConfig::default()).unwrap();
        assert_eq!(block::<2>(&out, 1, 1), [[X, W], [W, O]]);
    }

    #[test]
    fn scale3x_rounds_corner_and_edges() {
        let out: ImageBuffer = scale_scale3x(&corner(), &ScalerConfig::default()).unwrap();
        assert_eq!(block::<3>(&out, 1, 1), [[X, X, W], [X, W, O], [W, O, O]]);
    }

    #[test]
    fn scale3x_sfx_blends_corner() {
        let out: ImageBuffer = scale_scale3x_sfx(&corner(), &ScalerConfig::default()).unwrap();
        let cells = block::<3>(&out, 1, 1);
        assert_eq!(cells[0][0], X);
        assert_eq!(cells[1][1], W);
    }

    #[test]
    fn sfx_keeps_continuing_edge() {
        // W carries on diagonally through A, so SFX declines to round
        let src = image(&[
            &[O, O, O, O, O],
            &[O, W, X, O, O],
            &[O, X, W, O, O],
            &[O, O, O, O, O],
            &[O, O, O, O, O],
        ]);
        let plain: ImageBuffer = scale_scale2x(&src, &ScalerConfig::default()).unwrap();
        let sfx: ImageBuffer = scale_scale2x_sfx(&src, &ScalerConfig::default()).unwrap();
        assert_eq!(block::<2>(&plain, 2, 2)[0][0], X);
        assert_eq!(block::<2>(&sfx, 2, 2)[0][0], W);
    }

    #[test]
    fn scale4x_is_scale2x_twice() {
        let src = corner();
        let config = ScalerConfig::default();
        let once: ImageBuffer = scale_scale2x(&src, &config).unwrap();
        let twice: ImageBuffer = scale_scale2x(&once, &config).unwrap();
        let out: ImageBuffer = scale_scale4x(&src, &config).unwrap();
        assert_eq!((out.width(), out.height()), (12, 12));
        assert_eq!(out, twice);
    }

    proptest! {
        #[test]
        fn scale2x_matches_adv_mame(cells in proptest::collection::vec(0u8..3, 20)) {
            let palette = [X, O, W];
            let src = ImageBuffer::from_fn(5, 4, |x, y| palette[cells[y * 5 + x] as usize]);
            let config = ScalerConfig::default();
            let a: ImageBuffer = scale_scale2x(&src, &config).unwrap();
            let b: ImageBuffer = scale_adv_mame(&src, &config).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
