//! xBR 2x, with 3x and 4x built on top of it.
//!
//! The neighbourhood uses the customary xBR names:
//! ```text
//!       A1 B1 C1
//!    A0  A  B  C C4
//!    D0  D  E  F F4
//!    G0  G  H  I I4
//!       G5 H5 I5
//! ```

use crate::capabilities::Algorithm;
use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, ImageBuffer, InputImage, OutputImage};
use crate::kernel::Kernel5x5;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::resample::nearest_into;
use crate::scaler::{run, with_template, Scaler};
use crate::yuv_lookup::Yuv;

const CORNER_BLEND: f32 = 0.25;

/// Float BT.601 conversion, truncated. The green term of U is evaluated in double precision.
#[inline]
fn rgb_to_yuv(px: Rgb) -> Yuv {
    let (r, g, b) = (px.r as f32, px.g as f32, px.b as f32);
    let y = 0.299f32 * r + 0.587f32 * g + 0.114f32 * b;
    let u = f64::from(-0.169f32 * r) + -0.331f64 * f64::from(g) + f64::from(0.5f32 * b) + 128.0;
    let v = 0.5f32 * r + -0.419f32 * g + -0.081f32 * b + 128.0;
    Yuv { y: y as u8, u: u as u8, v: v as u8 }
}

/// Weighted YUV distance, zero for identical pixels.
#[inline]
fn distance(a: Rgb, b: Rgb) -> u32 {
    if a == b {
        return 0;
    }
    rgb_to_yuv(a).distance(rgb_to_yuv(b))
}

pub(crate) struct Xbr;

impl Scaler<2> for Xbr {
    type Kernel = Kernel5x5;

    fn expand(n: &Kernel5x5, _config: &ScalerConfig) -> Block<2> {
        let (a1, b1, c1) = (n.at(-1, -2), n.at(0, -2), n.at(1, -2));
        let (a0, a, b, c, c4) = (n.at(-2, -1), n.at(-1, -1), n.at(0, -1), n.at(1, -1), n.at(2, -1));
        let (d0, d, e, f, f4) = (n.at(-2, 0), n.at(-1, 0), n.at(0, 0), n.at(1, 0), n.at(2, 0));
        let (g0, g, h, i, i4) = (n.at(-2, 1), n.at(-1, 1), n.at(0, 1), n.at(1, 1), n.at(2, 1));
        let (g5, h5, i5) = (n.at(-1, 2), n.at(0, 2), n.at(1, 2));

        let d_ = distance;

        // an edge runs along a diagonal when the pairs across it differ less than those along it
        let edge_br = d_(e, c) + d_(e, g) + d_(i, f4) + d_(i, h5) + 4 * d_(h, f)
            < d_(h, d) + d_(h, i5) + d_(f, i4) + d_(f, b) + 4 * d_(e, i);
        let edge_bl = d_(a, e) + d_(e, i) + d_(d0, g) + d_(g, h5) + 4 * d_(d, h)
            < d_(b, d) + d_(f, h) + d_(d, g0) + d_(h, g5) + 4 * d_(e, g);
        let edge_tl = d_(g, e) + d_(e, c) + d_(d0, a) + d_(a, b1) + 4 * d_(d, b)
            < d_(h, d) + d_(d, a0) + d_(f, b) + d_(b, a1) + 4 * d_(e, a);
        let edge_tr = d_(a, e) + d_(e, i) + d_(b1, c) + d_(c, f4) + 4 * d_(b, f)
            < d_(d, b) + d_(b, c1) + d_(h, f) + d_(f, c4) + 4 * d_(e, c);

        let (mut top_left, mut top_right, mut bottom_left, mut bottom_right) = (e, e, e, e);

        if edge_tr && !edge_tl && d_(b, d) > d_(b, f) {
            top_right = b;
        }
        if edge_bl && !edge_br && d_(h, d) > d_(h, f) {
            bottom_left = h;
        }
        if edge_tl && !edge_bl && d_(d, b) > d_(d, h) {
            top_left = d;
        }
        if edge_br && !edge_tr && d_(f, b) > d_(f, h) {
            bottom_right = f;
        }

        // soften toward the diagonal unless an edge neighbour matches the centre
        if edge_tl && d_(e, c) <= d_(e, g) && a != e && b != e && c != e && d != e {
            top_left = top_left.lerp(a, CORNER_BLEND);
        }
        if edge_tr && d_(e, g) <= d_(e, c) && b != e && c != e && a != e && f != e {
            top_right = top_right.lerp(c, CORNER_BLEND);
        }
        if edge_bl && d_(e, c) <= d_(e, i) && d != e && g != e && h != e && a != e {
            bottom_left = bottom_left.lerp(g, CORNER_BLEND);
        }
        if edge_br && d_(e, a) <= d_(e, i) && f != e && h != e && i != e && c != e {
            bottom_right = bottom_right.lerp(i, CORNER_BLEND);
        }

        Block::from_rows([[top_left, top_right], [bottom_left, bottom_right]])
    }
}

/// Scales by `factor` (2, 3 or 4) with xBR.
///
/// 3x refines a 2x pass with a nearest-neighbour step of 1.5; 4x runs the 2x pass twice.
pub fn scale_xbr<I, O>(source: &I, factor: usize, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    if !matches!(factor, 2..=4) {
        return Err(Algorithm::Xbr.unsupported(factor as f32));
    }
    with_template(source, source.width() * factor, source.height() * factor, |out| {
        xbr_into(source, out, factor, config)
    })
}

pub(crate) fn xbr_into<I, O>(source: &I, destination: &mut O, factor: usize, config: &ScalerConfig) -> Result<(), ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    if factor == 2 {
        return run::<2, Xbr, _, _>(source, destination, config);
    }

    let mut doubled = ImageBuffer::create(source.width() * 2, source.height() * 2, source);
    run::<2, Xbr, _, _>(source, &mut doubled, config)?;

    match factor {
        3 => {
            nearest_into(&doubled, destination, 1.5, config);
            Ok(())
        }
        4 => run::<2, Xbr, _, _>(&doubled, destination, config),
        _ => Err(Algorithm::Xbr.unsupported(factor as f32)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{distance, rgb_to_yuv, scale_xbr};
    use crate::config::ScalerConfig;
    use crate::error::ScaleError;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;
    use crate::yuv_lookup::Yuv;

    const X: Rgb = Rgb::new(220, 40, 40);
    const O: Rgb = Rgb::new(20, 20, 120);

    /// A lower-left triangle of `X`, giving a clean diagonal edge.
    fn staircase(size: usize) -> ImageBuffer {
        ImageBuffer::from_fn(size, size, |x, y| if x <= y { X } else { O })
    }

    #[rstest]
    #[case(Rgb::BLACK, Yuv { y: 0, u: 128, v: 128 })]
    #[case(Rgb::WHITE, Yuv { y: 255, u: 127, v: 128 })]
    #[case(Rgb::new(0, 0, 255), Yuv { y: 29, u: 255, v: 107 })]
    #[case(Rgb::new(255, 205, 30), Yuv { y: 199, u: 32, v: 167 })]
    fn float_conversion_truncates(#[case] px: Rgb, #[case] expected: Yuv) {
        assert_eq!(rgb_to_yuv(px), expected);
    }

    #[test]
    fn distance_weights_channels() {
        assert_eq!(distance(X, X), 0);
        assert_eq!(distance(Rgb::BLACK, Rgb::WHITE), 255 * 0x30 + 7);
    }

    const GREY: Rgb = Rgb::new(191, 191, 191);
    const W: Rgb = Rgb::WHITE;
    const K: Rgb = Rgb::BLACK;

    /// The 2x2 block of a white pixel in the middle of a black 5x5 image, with an optional
    /// second white pixel next to it.
    #[rstest]
    #[case::corners_blend_toward_diagonal(None, [GREY, GREY, GREY, GREY])]
    #[case::edge_takes_neighbour(Some((1, 2)), [W, K, W, GREY])]
    #[case::matching_neighbour_keeps_centre(Some((3, 1)), [W, W, GREY, W])]
    fn centre_block(#[case] extra: Option<(usize, usize)>, #[case] expected: [Rgb; 4]) {
        let mut src = ImageBuffer::filled(5, 5, K);
        src.set_pixel(2, 2, W);
        if let Some((x, y)) = extra {
            src.set_pixel(x, y, W);
        }
        let out: ImageBuffer = scale_xbr(&src, 2, &ScalerConfig::default()).unwrap();
        let block = [out.get_pixel(4, 4), out.get_pixel(5, 4), out.get_pixel(4, 5), out.get_pixel(5, 5)];
        assert_eq!(block, expected);
    }

    #[test]
    fn step_corner_blends_a_quarter() {
        let out: ImageBuffer = scale_xbr(&staircase(4), 2, &ScalerConfig::default()).unwrap();
        // bottom-left of the O pixel beside the X corner, a quarter of the way to X
        assert_eq!(out.get_pixel(2, 1), Rgb::new(70, 25, 100));
        assert_eq!(out.get_pixel(2, 0), O);
        assert_eq!(out.get_pixel(1, 1), X);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn flat_image_stays_flat(#[case] factor: usize) {
        let src = ImageBuffer::filled(5, 3, O);
        let out: ImageBuffer = scale_xbr(&src, factor, &ScalerConfig::default()).unwrap();
        assert_eq!((out.width(), out.height()), (5 * factor, 3 * factor));
        assert!(out.pixels().iter().all(|&px| px == O));
    }

    #[test]
    fn unsupported_factor() {
        let src = ImageBuffer::filled(2, 2, O);
        let err = scale_xbr::<_, ImageBuffer>(&src, 5, &ScalerConfig::default()).unwrap_err();
        assert!(matches!(err, ScaleError::UnsupportedScale { requested, .. } if requested == 5.0));
    }

    #[test]
    fn diagonal_edge_keeps_sides() {
        let src = staircase(6);
        let out: ImageBuffer = scale_xbr(&src, 2, &ScalerConfig::default()).unwrap();
        // deep inside either side nothing changes
        assert_eq!(out.get_pixel(0, 10), X);
        assert_eq!(out.get_pixel(10, 0), O);
        // every output pixel is one of the sides or a blend between them
        for px in out.pixels() {
            assert!(px.r >= O.r && px.r <= X.r, "{px:?}");
        }
    }

    #[test]
    fn three_x_is_two_x_stretched() {
        let src = staircase(4);
        let config = ScalerConfig::default();
        let two: ImageBuffer = scale_xbr(&src, 2, &config).unwrap();
        let three: ImageBuffer = scale_xbr(&src, 3, &config).unwrap();
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(three.get_pixel(x, y), two.get_pixel(x * 2 / 3, y * 2 / 3));
            }
        }
    }

    #[test]
    fn four_x_is_two_x_twice() {
        let src = staircase(4);
        let config = ScalerConfig::default();
        let two: ImageBuffer = scale_xbr(&src, 2, &config).unwrap();
        let twice: ImageBuffer = scale_xbr(&two, 2, &config).unwrap();
        let four: ImageBuffer = scale_xbr(&src, 4, &config).unwrap();
        assert_eq!(four, twice);
    }
}
