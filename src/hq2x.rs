//! HQ2x and HQ4x (HQ2x applied twice).
//!
//! Neighbours are numbered row-major around the centre `w4`:
//! ```text
//! w0 w1 w2
//! w3 w4 w5
//! w6 w7 w8
//! ```
//! Each neighbour that is YUV-different from `w4` sets one bit of the difference pattern, in the
//! order `w1 w2 w3 w5 w6 w7 w8 w0` from the least significant bit.

use crate::blend::{interpolate2, interpolate3};
use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, ImageBuffer, InputImage, OutputImage};
use crate::kernel::Kernel3x3;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::scaler::{run, with_template, Scaler};
use crate::yuv_lookup::YuvLookup;

const PATTERN_ORDER: [usize; 8] = [1, 2, 3, 5, 6, 7, 8, 0];

pub(crate) struct Hq2x;

impl Scaler<2> for Hq2x {
    type Kernel = Kernel3x3;

    fn expand(k: &Kernel3x3, config: &ScalerConfig) -> Block<2> {
        let lut = YuvLookup::instance();
        let threshold = &config.yuv_threshold;
        let w = k.to_array();
        let differs = |a: Rgb, b: Rgb| lut.is_different(a, b, threshold);

        let diffs = PATTERN_ORDER
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, &n)| acc | ((differs(w[4], w[n]) as u8) << bit));
        let p = |mask: u8, value: u8| diffs & mask == value;
        let edge_31 = differs(w[3], w[1]);

        let cond00 = (p(0xbf, 0x37) || p(0xdb, 0x13)) && differs(w[1], w[5]);
        let cond01 = (p(0xdb, 0x49) || p(0xef, 0x6d)) && differs(w[7], w[3]);
        let cond02 = (p(0x6f, 0x2a)
            || p(0x5b, 0x0a)
            || p(0xbf, 0x3a)
            || p(0xdf, 0x5a)
            || p(0x9f, 0x8a)
            || p(0xcf, 0x8a)
            || p(0xef, 0x4e)
            || p(0x3f, 0x0e)
            || p(0xfb, 0x5a)
            || p(0xbb, 0x8a)
            || p(0x7f, 0x5a)
            || p(0xaf, 0x8a)
            || p(0xeb, 0x8a))
            && edge_31;
        let cond03 = p(0xdb, 0x49) || p(0xef, 0x6d);
        let cond04 = p(0xbf, 0x37) || p(0xdb, 0x13);
        let cond05 = p(0x1b, 0x03) || p(0x4f, 0x43) || p(0x8b, 0x83) || p(0x6b, 0x43);
        let cond06 = p(0x4b, 0x09) || p(0x8b, 0x89) || p(0x1f, 0x19) || p(0x3b, 0x19);
        let cond07 = p(0x0b, 0x08)
            || p(0xf9, 0x68)
            || p(0xf3, 0x62)
            || p(0x6d, 0x6c)
            || p(0x67, 0x66)
            || p(0x3d, 0x3c)
            || p(0x37, 0x36)
            || p(0xf9, 0xf8)
            || p(0xdd, 0xdc)
            || p(0xf3, 0xf2)
            || p(0xd7, 0xd6)
            || p(0xdd, 0x1c)
            || p(0xd7, 0x16)
            || p(0x0b, 0x02);
        let cond08 = (p(0x0f, 0x0b) || p(0x2b, 0x0b) || p(0xfe, 0x4a) || p(0xfe, 0x1a)) && edge_31;
        let cond09 = p(0x2f, 0x2f);
        let cond10 = p(0x0a, 0x00);
        let cond11 = p(0x0b, 0x09);
        let cond12 = p(0x7e, 0x2a) || p(0xef, 0xab);
        let cond13 = p(0xbf, 0x8f) || p(0x7e, 0x0e);
        let cond14 = p(0x4f, 0x4b)
            || p(0x9f, 0x1b)
            || p(0x2f, 0x0b)
            || p(0xbe, 0x0a)
            || p(0xee, 0x0a)
            || p(0x7e, 0x0a)
            || p(0xeb, 0x4b)
            || p(0x3b, 0x1b);
        let cond15 = p(0x0b, 0x03);

        let c = w[4];

        let top_left = if cond00 {
            interpolate2::<5, 3, 3>(c, w[3])
        } else if cond01 {
            interpolate2::<5, 3, 3>(c, w[1])
        } else if (p(0x0b, 0x0b) || p(0xfe, 0x4a) || p(0xfe, 0x1a)) && edge_31 {
            c
        } else if cond02 {
            interpolate2::<5, 3, 3>(c, w[0])
        } else if cond03 {
            interpolate2::<3, 1, 2>(c, w[3])
        } else if cond04 {
            interpolate2::<3, 1, 2>(c, w[1])
        } else if cond05 {
            interpolate2::<5, 3, 3>(c, w[3])
        } else if cond06 {
            interpolate2::<5, 3, 3>(c, w[1])
        } else if p(0x0f, 0x0b)
            || p(0x5e, 0x0a)
            || p(0x2b, 0x0b)
            || p(0xbe, 0x0a)
            || p(0x7a, 0x0a)
            || p(0xee, 0x0a)
        {
            interpolate2::<1, 1, 1>(w[1], w[3])
        } else if cond07 {
            interpolate2::<5, 3, 3>(c, w[0])
        } else {
            interpolate3(c, w[1], w[3])
        };

        let top_right = if cond00 {
            interpolate2::<7, 1, 3>(c, w[5])
        } else if cond01 {
            interpolate2::<5, 3, 3>(c, w[2])
        } else if cond08 {
            c
        } else if cond02 {
            interpolate2::<7, 1, 3>(c, w[1])
        } else if cond03 {
            interpolate2::<5, 3, 3>(c, w[2])
        } else if cond04 {
            interpolate2::<3, 1, 2>(c, w[1])
        } else if cond05 {
            interpolate2::<7, 1, 3>(c, w[1])
        } else if cond06 {
            interpolate2::<5, 3, 3>(c, w[1])
        } else if cond09 {
            c
        } else if cond10 {
            interpolate2::<1, 1, 1>(w[1], w[5])
        } else if cond11 {
            interpolate2::<5, 3, 3>(c, w[2])
        } else if cond07 {
            interpolate2::<7, 1, 3>(c, w[5])
        } else {
            interpolate3(c, w[1], w[5])
        };

        let bottom_left = if cond00 {
            interpolate2::<5, 3, 3>(c, w[3])
        } else if cond01 {
            interpolate2::<7, 1, 3>(c, w[7])
        } else if cond08 {
            interpolate2::<7, 1, 3>(c, w[3])
        } else if cond02 {
            c
        } else if cond03 {
            interpolate2::<3, 1, 2>(c, w[3])
        } else if cond04 {
            interpolate2::<5, 3, 3>(c, w[6])
        } else if cond05 {
            interpolate2::<5, 3, 3>(c, w[3])
        } else if cond06 {
            interpolate2::<7, 1, 3>(c, w[3])
        } else if cond12 {
            interpolate2::<1, 1, 1>(w[3], w[7])
        } else if cond13 {
            interpolate2::<5, 3, 3>(c, w[6])
        } else if cond14 {
            c
        } else if cond07 {
            interpolate2::<7, 1, 3>(c, w[7])
        } else {
            interpolate3(c, w[3], w[7])
        };

        let bottom_right = if cond00 {
            interpolate2::<7, 1, 3>(c, w[5])
        } else if cond01 {
            interpolate2::<5, 3, 3>(c, w[8])
        } else if cond08 {
            interpolate2::<7, 1, 3>(c, w[5])
        } else if cond02 {
            interpolate2::<7, 1, 3>(c, w[7])
        } else if cond03 {
            interpolate2::<5, 3, 3>(c, w[8])
        } else if cond04 {
            interpolate2::<3, 1, 2>(c, w[7])
        } else if cond05 {
            interpolate2::<7, 1, 3>(c, w[7])
        } else if cond06 {
            interpolate2::<7, 1, 3>(c, w[5])
        } else if cond15 {
            c
        } else if p(0xf7, 0xf6)
            || p(0x37, 0x36)
            || p(0x37, 0x16)
            || p(0xdb, 0xd2)
            || p(0xf3, 0xf2)
            || p(0xf9, 0xf8)
            || p(0x6d, 0x6c)
            || p(0xf3, 0xf0)
        {
            interpolate2::<5, 3, 3>(c, w[8])
        } else if p(0xf7, 0xf7)
            || p(0xff, 0xff)
            || p(0xfc, 0xf4)
            || p(0xfb, 0xf3)
            || p(0xfb, 0xfb)
            || p(0xfd, 0xfd)
            || p(0xfe, 0xf6)
            || p(0xf7, 0xf3)
            || p(0xfd, 0xf5)
        {
            interpolate2::<1, 1, 1>(w[5], w[7])
        } else if cond07 {
            interpolate2::<5, 3, 3>(c, w[8])
        } else {
            interpolate3(c, w[5], w[7])
        };

        Block::from_rows([[top_left, top_right], [bottom_left, bottom_right]])
    }
}

pub fn scale_hq2x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Hq2x, _, _>(source, out, config)
    })
}

pub fn scale_hq4x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 4, source.height() * 4, |out| {
        hq4x_into(source, out, config)
    })
}

pub(crate) fn hq4x_into<I, O>(source: &I, destination: &mut O, config: &ScalerConfig) -> Result<(), ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let mut intermediate = ImageBuffer::create(source.width() * 2, source.height() * 2, source);
    run::<2, Hq2x, _, _>(source, &mut intermediate, config)?;
    run::<2, Hq2x, _, _>(&intermediate, destination, config)
}

#[cfg(test)]
mod tests {
    use super::{scale_hq2x, scale_hq4x};
    use crate::config::{ScalerConfig, YuvThreshold};
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;

    fn isolated(centre: Rgb, field: Rgb) -> ImageBuffer {
        let mut img = ImageBuffer::filled(3, 3, field);
        img.set_pixel(1, 1, centre);
        img
    }

    #[test]
    fn flat_image_stays_flat() {
        let colour = Rgb::new(12, 200, 77);
        let out: ImageBuffer = scale_hq2x(&ImageBuffer::filled(4, 4, colour), &ScalerConfig::default()).unwrap();
        assert!(out.pixels().iter().all(|&px| px == colour));
    }

    #[test]
    fn isolated_pixel_pattern() {
        // every neighbour differs: pattern 0xFF
        let out: ImageBuffer = scale_hq2x(&isolated(Rgb::WHITE, Rgb::BLACK), &ScalerConfig::default()).unwrap();
        let grey = Rgb::new(127, 127, 127);
        assert_eq!(out.get_pixel(2, 2), grey);
        assert_eq!(out.get_pixel(3, 2), Rgb::WHITE);
        assert_eq!(out.get_pixel(2, 3), grey);
        assert_eq!(out.get_pixel(3, 3), Rgb::BLACK);
    }

    #[test]
    fn similar_colours_fall_through_to_blend() {
        // below the luma threshold the pattern is 0 and every cell is a three-way blend
        let (centre, field) = (Rgb::new(100, 100, 100), Rgb::new(104, 104, 104));
        let out: ImageBuffer = scale_hq2x(&isolated(centre, field), &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(2, 2), Rgb::new(102, 102, 102));
        assert_eq!(out.get_pixel(3, 3), Rgb::new(102, 102, 102));
    }

    #[test]
    fn threshold_is_configurable() {
        let (centre, field) = (Rgb::new(100, 100, 100), Rgb::new(104, 104, 104));
        let strict = ScalerConfig {
            yuv_threshold: YuvThreshold { y: 0, u: 0, v: 0 },
            ..Default::default()
        };
        let loose: ImageBuffer = scale_hq2x(&isolated(centre, field), &ScalerConfig::default()).unwrap();
        let tight: ImageBuffer = scale_hq2x(&isolated(centre, field), &strict).unwrap();
        assert_ne!(loose, tight);
    }

    #[test]
    fn hq4x_is_hq2x_twice() {
        let src = ImageBuffer::from_fn(4, 3, |x, y| if (x + y) % 3 == 0 { Rgb::WHITE } else { Rgb::new(0, 0, 160) });
        let config = ScalerConfig::default();
        let once: ImageBuffer = scale_hq2x(&src, &config).unwrap();
        let twice: ImageBuffer = scale_hq2x(&once, &config).unwrap();
        let out: ImageBuffer = scale_hq4x(&src, &config).unwrap();
        assert_eq!((out.width(), out.height()), (16, 12));
        assert_eq!(out, twice);
    }
}
