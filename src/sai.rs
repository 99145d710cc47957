use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage};
use crate::kernel::Kernel4x4;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::scaler::{run, set, with_template, Scaler};

/// Votes on whether the samples `c` and `d` side with `a` or `b`.
///
/// Returns 1 when both samples match `a` and not `b`, -1 for the reverse, and 0 otherwise.
#[inline]
fn majority_match(a: Rgb, b: Rgb, c: Rgb, d: Rgb) -> i8 {
    let (mut x, mut y, mut r) = (0u8, 0u8, 0i8);

    if a == c {
        x += 1;
    } else if b == c {
        y += 1;
    }
    if a == d {
        x += 1;
    } else if b == d {
        y += 1;
    }

    if x <= 1 {
        r -= 1;
    }
    if y <= 1 {
        r += 1;
    }
    r
}

#[inline]
fn half(a: Rgb, b: Rgb) -> Rgb {
    a.lerp(b, 0.5)
}

#[inline]
fn quad(a: Rgb, b: Rgb, c: Rgb, d: Rgb) -> Rgb {
    half(half(a, b), half(c, d))
}

/// 2xSaI. The kernel letters map onto the customary 2xSaI names as
/// ```text
/// I E F J       a b c d
/// G A B K   =   e f g h
/// H C D L       i j k l
/// M N O P       m n o p
/// ```
/// with `A` the current pixel, copied unchanged into the top-left cell.
pub(crate) struct Sai2x;

impl Scaler<2> for Sai2x {
    type Kernel = Kernel4x4;

    fn expand(k: &Kernel4x4, _config: &ScalerConfig) -> Block<2> {
        let (i, e, f, j) = (k.a, k.b, k.c, k.d);
        let (g, a, b, kk) = (k.e, k.f, k.g, k.h);
        let (h, c, d, l) = (k.i, k.j, k.k, k.l);
        let (m, n, o) = (k.m, k.n, k.o);

        let (right, bottom, bottom_right);

        if a == d && b != c {
            right = if (a == e && b == l) || (a == c && a == f && b != e && b == j) {
                a
            } else {
                half(a, b)
            };
            bottom = a;
            bottom_right = a;
        } else if a != d && b == c {
            right = if (b == f && a == h) || (b == e && b == d && a != f && a == i) {
                b
            } else {
                half(a, b)
            };
            bottom = if (c == h && a == f) || (c == g && c == d && a != h && a == i) {
                c
            } else {
                half(a, c)
            };
            bottom_right = b;
        } else if a == d && b == c {
            if a == b {
                right = a;
                bottom = a;
                bottom_right = a;
            } else {
                right = half(a, b);
                bottom = half(a, c);

                let votes = majority_match(b, a, g, e)
                    + majority_match(b, a, kk, f)
                    + majority_match(b, a, h, n)
                    + majority_match(b, a, l, o);

                bottom_right = if votes > 0 {
                    a
                } else if votes < 0 {
                    b
                } else {
                    quad(a, b, c, d)
                };
            }
        } else {
            bottom_right = quad(a, b, c, d);

            right = if a == c && a == f && b != e && b == j {
                a
            } else if b == e && b == d && a != f && a == i {
                b
            } else {
                half(a, b)
            };

            bottom = if a == b && a == h && g != c && c == m {
                a
            } else if c == g && c == d && a != h && a == i {
                c
            } else {
                half(a, c)
            };
        }

        let mut out = Block::filled(a);
        set!(out[1, 0], right);
        set!(out[0, 1], bottom);
        set!(out[1, 1], bottom_right);
        out
    }
}

pub fn scale_2x_sai<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Sai2x, _, _>(source, out, config)
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{majority_match, scale_2x_sai};
    use crate::config::ScalerConfig;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;

    const R: Rgb = Rgb::new(255, 0, 0);
    const K: Rgb = Rgb::BLACK;
    const W: Rgb = Rgb::WHITE;

    #[rstest]
    #[case(R, K, R, R, 1)]
    #[case(R, K, K, K, -1)]
    #[case(R, K, R, K, 0)]
    #[case(R, K, W, W, 0)]
    #[case(R, K, R, W, 0)]
    fn votes(#[case] a: Rgb, #[case] b: Rgb, #[case] c: Rgb, #[case] d: Rgb, #[case] expected: i8) {
        assert_eq!(majority_match(a, b, c, d), expected);
    }

    /// 4x4 image whose pixel (1, 1) sees `A = D = R` and `B = C = K`, everything else `rest`.
    fn crossed(rest: Rgb) -> ImageBuffer {
        let mut img = ImageBuffer::filled(4, 4, rest);
        img.set_pixel(1, 1, R);
        img.set_pixel(2, 2, R);
        img.set_pixel(2, 1, K);
        img.set_pixel(1, 2, K);
        img
    }

    fn block(out: &ImageBuffer) -> [Rgb; 4] {
        [
            out.get_pixel(2, 2),
            out.get_pixel(3, 2),
            out.get_pixel(2, 3),
            out.get_pixel(3, 3),
        ]
    }

    #[test]
    fn outer_ring_votes_for_centre() {
        let out: ImageBuffer = scale_2x_sai(&crossed(K), &ScalerConfig::default()).unwrap();
        let mid = Rgb::new(127, 0, 0);
        assert_eq!(block(&out), [R, mid, mid, R]);
    }

    #[test]
    fn outer_ring_votes_for_neighbour() {
        let out: ImageBuffer = scale_2x_sai(&crossed(R), &ScalerConfig::default()).unwrap();
        let mid = Rgb::new(127, 0, 0);
        assert_eq!(block(&out), [R, mid, mid, K]);
    }

    #[test]
    fn split_vote_interpolates() {
        // no sample matches either candidate
        let out: ImageBuffer = scale_2x_sai(&crossed(W), &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(3, 3), Rgb::new(127, 0, 0));
    }

    #[test]
    fn top_left_is_source() {
        let img = ImageBuffer::from_fn(5, 3, |x, y| Rgb::new(x as u8 * 40, y as u8 * 80, 7));
        let out: ImageBuffer = scale_2x_sai(&img, &ScalerConfig::default()).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(out.get_pixel(x * 2, y * 2), img.get_pixel(x, y));
            }
        }
    }
}
