//! Arbitrary-factor resampling: nearest neighbour, bilinear, and mipmapped trilinear.
//!
//! Output dimensions are `floor(width * scale) x floor(height * scale)`.

use rayon::prelude::*;

use crate::capabilities::Algorithm;
use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage, OutputImage};
use crate::pixel::{Rgb, Rgbf};

pub(crate) fn scaled_dimension(dim: usize, scale: f32) -> usize {
    (dim as f32 * scale) as usize
}

fn check_scale(algorithm: Algorithm, scale: f32) -> Result<(), ScaleError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(algorithm.unsupported(scale))
    }
}

/// Fills every output pixel from `sample(x, y)`, row-parallel when allowed.
fn fill<O, F>(destination: &mut O, parallel: bool, sample: F)
where
    O: OutputImage + ?Sized,
    F: Fn(usize, usize) -> Rgb + Sync,
{
    let width = destination.width();
    let height = destination.height();
    if width == 0 || height == 0 {
        return;
    }

    if parallel {
        if let Some(pixels) = destination.pixels_mut() {
            pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate() {
                    *px = sample(x, y);
                }
            });
            return;
        }
    }

    for y in 0..height {
        for x in 0..width {
            destination.set_pixel(x, y, sample(x, y));
        }
    }
}

pub fn scale_nearest<I, O>(source: &I, scale: f32, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    check_scale(Algorithm::Nearest, scale)?;
    let width = scaled_dimension(source.width(), scale);
    let height = scaled_dimension(source.height(), scale);
    let mut out = O::create(width, height, source);
    nearest_into(source, &mut out, scale, config);
    Ok(out)
}

/// Nearest-neighbour resample of `source` onto the whole of `destination`, taking
/// `floor(dst / scale)` clamped to the source.
pub(crate) fn nearest_into<I, O>(source: &I, destination: &mut O, scale: f32, config: &ScalerConfig)
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let (src_w, src_h) = (source.width(), source.height());
    if src_w == 0 || src_h == 0 {
        return;
    }

    let inv_scale = 1.0 / scale;
    let map = |dst: usize, limit: usize| ((dst as f32 * inv_scale) as usize).min(limit - 1);
    fill(destination, config.parallel, |x, y| source.get_pixel(map(x, src_w), map(y, src_h)));
}

/// Bilinear taps for one destination coordinate: `(i0, i1, weight of i1)`.
#[inline]
fn taps(dst: usize, inv_scale: f32, size: usize) -> (usize, usize, f32) {
    let src = (dst as f32 + 0.5) * inv_scale - 0.5;
    if src < 0.0 {
        return (0, 1.min(size - 1), 0.0);
    }
    let i0 = (src as usize).min(size - 1);
    let i1 = (i0 + 1).min(size - 1);
    (i0, i1, src - i0 as f32)
}

#[inline]
fn bilinear_sample(fetch: impl Fn(usize, usize) -> Rgbf, width: usize, height: usize, x: usize, y: usize, inv_scale: f32) -> Rgbf {
    let (x0, x1, fx) = taps(x, inv_scale, width);
    let (y0, y1, fy) = taps(y, inv_scale, height);

    let top = fetch(x0, y0).lerp(fetch(x1, y0), fx);
    let bottom = fetch(x0, y1).lerp(fetch(x1, y1), fx);
    top.lerp(bottom, fy)
}

pub fn scale_bilinear<I, O>(source: &I, scale: f32, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    check_scale(Algorithm::Bilinear, scale)?;
    let width = scaled_dimension(source.width(), scale);
    let height = scaled_dimension(source.height(), scale);
    let mut out = O::create(width, height, source);
    bilinear_into(source, &mut out, scale, config);
    Ok(out)
}

pub(crate) fn bilinear_into<I, O>(source: &I, destination: &mut O, scale: f32, config: &ScalerConfig)
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let (src_w, src_h) = (source.width(), source.height());
    match (src_w, src_h) {
        (0, _) | (_, 0) => {}
        (1, 1) => {
            let only = source.get_pixel(0, 0);
            fill(destination, config.parallel, |_, _| only);
        }
        _ => {
            let inv_scale = 1.0 / scale;
            let fetch = |x, y| Rgbf::from(source.get_pixel(x, y));
            fill(destination, config.parallel, |x, y| {
                bilinear_sample(fetch, src_w, src_h, x, y, inv_scale).to_rgb()
            });
        }
    }
}

/// One box-filtered mipmap level, kept in floating point.
struct MipLevel {
    width: usize,
    height: usize,
    pixels: Vec<Rgbf>,
}

impl MipLevel {
    /// Level `level` of `source`: dimensions halved `level` times (at least 1), each pixel the
    /// mean of its `2^level` block, clipped at the image edge.
    fn build<I: InputImage + ?Sized>(source: &I, level: u32) -> Self {
        let block = 1usize.checked_shl(level).unwrap_or(usize::MAX);
        let width = source.width().checked_shr(level).unwrap_or(0).max(1);
        let height = source.height().checked_shr(level).unwrap_or(0).max(1);
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            let rows = (y * block)..(y + 1).saturating_mul(block).min(source.height());
            for x in 0..width {
                let cols = (x * block)..(x + 1).saturating_mul(block).min(source.width());
                let count = (rows.len() * cols.len()) as f32;
                let sum = rows
                    .clone()
                    .flat_map(|sy| cols.clone().map(move |sx| (sx, sy)))
                    .fold(Rgbf::default(), |acc, (sx, sy)| acc.add(source.get_pixel(sx, sy).into()));
                pixels.push(sum.scale_by(1.0 / count));
            }
        }

        Self { width, height, pixels }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Rgbf {
        self.pixels[y * self.width + x]
    }

    /// Bilinear sample for destination pixel `(x, y)` at `scale` relative to this level.
    #[inline]
    fn sample(&self, x: usize, y: usize, scale: f32) -> Rgbf {
        if self.width == 1 && self.height == 1 {
            return self.pixels[0];
        }
        bilinear_sample(|sx, sy| self.get(sx, sy), self.width, self.height, x, y, 1.0 / scale)
    }
}

/// Trilinear filtering: bilinear when magnifying, otherwise a blend of bilinear samples from
/// the two mipmap levels bracketing `-log2(scale)`.
pub fn scale_trilinear<I, O>(source: &I, scale: f32, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    check_scale(Algorithm::Trilinear, scale)?;
    let width = scaled_dimension(source.width(), scale);
    let height = scaled_dimension(source.height(), scale);
    let mut out = O::create(width, height, source);
    trilinear_into(source, &mut out, scale, config);
    Ok(out)
}

pub(crate) fn trilinear_into<I, O>(source: &I, destination: &mut O, scale: f32, config: &ScalerConfig)
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    if scale >= 1.0 {
        return bilinear_into(source, destination, scale, config);
    }
    let empty = |w: usize, h: usize| w == 0 || h == 0;
    if empty(source.width(), source.height()) || empty(destination.width(), destination.height()) {
        return;
    }

    // every level past the chain's depth is the same 1x1 mean
    let depth = source.width().max(source.height()).ilog2();
    let lod = -scale.log2();
    let level = (lod.floor() as u32).min(depth);
    let blend = (lod - level as f32).clamp(0.0, 1.0);
    log::debug!("trilinear at {scale}: mip levels {level} and {}, blend {blend:.3}", level + 1);

    let near = MipLevel::build(source, level);
    let far = MipLevel::build(source, level + 1);
    let near_scale = scale * 2f32.powi(level as i32);
    let far_scale = near_scale * 2.0;

    fill(destination, config.parallel, |x, y| {
        near.sample(x, y, near_scale)
            .lerp(far.sample(x, y, far_scale), blend)
            .to_rgb()
    });
}
