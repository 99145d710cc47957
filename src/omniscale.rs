//! OmniScale on the CPU for integer factors.
//!
//! Every output cell is evaluated at its centre `p` inside the source pixel. The neighbourhood
//! is mirrored so that `p` always lies in the top-left quarter, which lets one rule chain serve
//! all four quarters. Patterns that leave a diagonal ambiguous are settled by counting how many
//! pixels two steps out differ from the centre.

use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage};
use crate::kernel::Kernel5x5;
use crate::matrix::Block;
use crate::pixel::{Rgb, Rgbf};
use crate::scaler::{run, with_template, Scaler};

// 16.16 fixed-point thresholds of the hq colour space
const THRESHOLD_X: i32 = 1179;
const THRESHOLD_Y: i32 = 131;
const THRESHOLD_Z: i32 = 328;

#[inline]
fn hq_colour_space(px: Rgb) -> (i32, i32, i32) {
    let (r, g, b) = (px.r as i32, px.g as i32, px.b as i32);
    ((r + g + b) * 64, (r - b) * 64, (-r + 2 * g - b) * 32)
}

#[inline]
fn is_different(a: Rgb, b: Rgb) -> bool {
    if a == b {
        return false;
    }
    let (ax, ay, az) = hq_colour_space(a);
    let (bx, by, bz) = hq_colour_space(b);
    (ax - bx).abs() > THRESHOLD_X || (ay - by).abs() > THRESHOLD_Y || (az - bz).abs() > THRESHOLD_Z
}

#[inline]
fn mix(a: Rgbf, b: Rgbf, t: f32) -> Rgbf {
    a.lerp(b, t)
}

/// `3/8 a + 1/4 b + 3/8 c`
#[inline]
fn weighted(a: Rgbf, b: Rgbf, c: Rgbf) -> Rgbf {
    a.scale_by(0.375).add(b.scale_by(0.25)).add(c.scale_by(0.375))
}

/// Evaluates the cell centred at `(px, py)` within the source pixel; `pixel_size` is the
/// diagonal of one output cell in source pixels and sets the width of anti-aliased bands.
fn evaluate(n: &Kernel5x5, mut px: f32, mut py: f32, pixel_size: f32) -> Rgb {
    let (mut ox, mut oy) = (1isize, 1isize);
    if px > 0.5 {
        ox = -1;
        px = 1.0 - px;
    }
    if py > 0.5 {
        oy = -1;
        py = 1.0 - py;
    }
    let at = |dx: isize, dy: isize| n.at(dx * ox, dy * oy);

    let w = [
        at(-1, -1),
        at(0, -1),
        at(1, -1),
        at(-1, 0),
        at(0, 0),
        at(1, 0),
        at(-1, 1),
        at(0, 1),
        at(1, 1),
    ];
    let centre = w[4];

    let mut pattern: u32 = 0;
    for (bit, &neighbour) in [w[0], w[1], w[2], w[3], w[5], w[6], w[7], w[8]].iter().enumerate() {
        if is_different(neighbour, centre) {
            pattern |= 1 << bit;
        }
    }
    let p = |mask: u32, value: u32| pattern & mask == value;

    let [w0, w1, _, w3, w4, _, _, _, _] = w.map(Rgbf::from);
    let diagonal_size = pixel_size * 5f32.sqrt();

    // the w1-w3 diagonal, hard when w0 stands apart and smoothed through w0 otherwise
    let corner = || {
        if is_different(w[0], w[1]) || is_different(w[0], w[3]) {
            mix(w1, w3, py - px + 0.5)
        } else {
            mix(mix(weighted(w1, w0, w3), w3, py * 2.0), w1, px * 2.0)
        }
    };

    let colour = if (p(0xBF, 0x37) || p(0xDB, 0x13)) && is_different(w[1], w[5]) {
        mix(w4, w3, 0.5 - px)
    } else if (p(0xDB, 0x49) || p(0xEF, 0x6D)) && is_different(w[7], w[3]) {
        mix(w4, w1, 0.5 - py)
    } else if (p(0x0B, 0x0B) || p(0xFE, 0x4A) || p(0xFE, 0x1A)) && is_different(w[3], w[1]) {
        w4
    } else if (p(0x6F, 0x2A)
        || p(0x5B, 0x0A)
        || p(0xBF, 0x3A)
        || p(0xDF, 0x5A)
        || p(0x9F, 0x8A)
        || p(0xCF, 0x8A)
        || p(0xEF, 0x4E)
        || p(0x3F, 0x0E)
        || p(0xFB, 0x5A)
        || p(0xBB, 0x8A)
        || p(0x7F, 0x5A)
        || p(0xAF, 0x8A)
        || p(0xEB, 0x8A))
        && is_different(w[3], w[1])
    {
        mix(w4, mix(w4, w0, 0.5 - px), 0.5 - py)
    } else if p(0x0B, 0x08) {
        mix(mix(weighted(w0, w1, w4), mix(w4, w1, 0.5), px * 2.0), w4, py * 2.0)
    } else if p(0x0B, 0x02) {
        mix(mix(weighted(w0, w3, w4), mix(w4, w3, 0.5), py * 2.0), w4, px * 2.0)
    } else if p(0x2F, 0x2F) {
        let dist = (px - 0.5).hypot(py - 0.5);
        if dist < 0.5 - pixel_size / 2.0 {
            w4
        } else {
            let r = corner();
            if dist > 0.5 + pixel_size / 2.0 {
                r
            } else {
                mix(w4, r, (dist - 0.5 + pixel_size / 2.0) / pixel_size)
            }
        }
    } else if p(0xBF, 0x37) || p(0xDB, 0x13) {
        let dist = px - 2.0 * py;
        if dist > diagonal_size / 2.0 {
            w1
        } else {
            let r = mix(w3, w4, px + 0.5);
            if dist < -diagonal_size / 2.0 {
                r
            } else {
                mix(r, w1, (dist + diagonal_size / 2.0) / diagonal_size)
            }
        }
    } else if p(0xDB, 0x49) || p(0xEF, 0x6D) {
        let dist = py - 2.0 * px;
        if dist > diagonal_size / 2.0 {
            w3
        } else {
            let r = mix(w1, w4, px + 0.5);
            if dist < -diagonal_size / 2.0 {
                r
            } else {
                mix(r, w3, (dist + diagonal_size / 2.0) / diagonal_size)
            }
        }
    } else if p(0xBF, 0x8F) || p(0x7E, 0x0E) {
        shallow_band(w4, corner, px + 2.0 * py, 1.0, diagonal_size)
    } else if p(0x7E, 0x2A) || p(0xEF, 0xAB) {
        shallow_band(w4, corner, py + 2.0 * px, 1.0, diagonal_size)
    } else if p(0x1B, 0x03) || p(0x4F, 0x43) || p(0x8B, 0x83) || p(0x6B, 0x43) {
        mix(w4, w3, 0.5 - px)
    } else if p(0x4B, 0x09) || p(0x8B, 0x89) || p(0x1F, 0x19) || p(0x3B, 0x19) {
        mix(w4, w1, 0.5 - py)
    } else if p(0xFB, 0x6A)
        || p(0x6F, 0x6E)
        || p(0x3F, 0x3E)
        || p(0xFB, 0xFA)
        || p(0xDF, 0xDE)
        || p(0xDF, 0x1E)
    {
        mix(w4, w0, (1.0 - px - py) / 2.0)
    } else if p(0x4F, 0x4B)
        || p(0x9F, 0x1B)
        || p(0x2F, 0x0B)
        || p(0xBE, 0x0A)
        || p(0xEE, 0x0A)
        || p(0x7E, 0x0A)
        || p(0xEB, 0x4B)
        || p(0x3B, 0x1B)
    {
        shallow_band(w4, corner, px + py, 0.5, pixel_size)
    } else if p(0x0B, 0x01) {
        mix(mix(w4, w3, 0.5 - px), mix(w1, mix(w1, w3, 0.5), 0.5 - px), 0.5 - py)
    } else if p(0x0B, 0x00) {
        mix(mix(w4, w3, 0.5 - px), mix(w1, w0, 0.5 - px), 0.5 - py)
    } else {
        let dist = px + py;
        if dist > 0.5 + pixel_size / 2.0 {
            w4
        } else {
            let outer = [at(-2, -2), at(-1, -2), at(0, -2), at(1, -2), at(-2, -1), at(-2, 0), at(-2, 1)];
            let differing = pattern.count_ones() + outer.iter().filter(|&&x| is_different(x, centre)).count() as u32;

            if differing <= 7 {
                shallow_band(w4, || mix(w1, w3, py - px + 0.5), dist, 0.5, pixel_size)
            } else {
                w4
            }
        }
    };

    colour.to_rgb()
}

/// Resolves a band of width `size` around the line `dist == edge`: `r` on the near side,
/// the centre beyond it, and a linear blend inside.
#[inline]
fn shallow_band(w4: Rgbf, r: impl FnOnce() -> Rgbf, dist: f32, edge: f32, size: f32) -> Rgbf {
    if dist > edge + size / 2.0 {
        return w4;
    }
    let r = r();
    if dist < edge - size / 2.0 {
        r
    } else {
        mix(r, w4, (dist + size / 2.0 - edge) / size)
    }
}

pub(crate) struct OmniScale;

impl<const SCALE: usize> Scaler<SCALE> for OmniScale {
    type Kernel = Kernel5x5;

    fn expand(n: &Kernel5x5, _config: &ScalerConfig) -> Block<SCALE> {
        let step = 1.0 / SCALE as f32;
        let pixel_size = std::f32::consts::SQRT_2 * step;

        let mut out = Block::filled(n.at(0, 0));
        for j in 0..SCALE {
            for i in 0..SCALE {
                let (px, py) = ((i as f32 + 0.5) * step, (j as f32 + 0.5) * step);
                out.set(i, j, evaluate(n, px, py, pixel_size));
            }
        }
        out
    }
}

pub fn scale_omniscale2x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, OmniScale, _, _>(source, out, config)
    })
}

pub fn scale_omniscale3x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 3, source.height() * 3, |out| {
        run::<3, OmniScale, _, _>(source, out, config)
    })
}
