use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, ImageBuffer, InputImage, OutputImage};
use crate::kernel::Kernel3x3;
use crate::matrix::Block;
use crate::scaler::{run, with_template, Scaler};
use crate::scalex::{scale2x_corners, Scale2x};

/// Scale2x followed by averaging every output cell with the source pixel, which softens the
/// staircase Scale2x leaves on diagonals.
pub(crate) struct AaScale2x;

impl Scaler<2> for AaScale2x {
    type Kernel = Kernel3x3;

    #[inline]
    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
        let [e0, e1, e2, e3] = scale2x_corners(k.b, k.d, k.e, k.f, k.h).map(|c| c.average(k.e));
        Block::from_rows([[e0, e1], [e2, e3]])
    }
}

pub fn scale_aa_scale2x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, AaScale2x, _, _>(source, out, config)
    })
}

/// A plain Scale2x pass, then the anti-aliased pass over its result.
pub fn scale_aa_scale4x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 4, source.height() * 4, |out| {
        aa_scale4x_into(source, out, config)
    })
}

pub(crate) fn aa_scale4x_into<I, O>(source: &I, destination: &mut O, config: &ScalerConfig) -> Result<(), ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let mut intermediate = ImageBuffer::create(source.width() * 2, source.height() * 2, source);
    run::<2, Scale2x, _, _>(source, &mut intermediate, config)?;
    run::<2, AaScale2x, _, _>(&intermediate, destination, config)
}

#[cfg(test)]
mod tests {
    use super::{scale_aa_scale2x, scale_aa_scale4x};
    use crate::config::ScalerConfig;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;
    use crate::scalex::scale_scale2x;

    const X: Rgb = Rgb::new(200, 0, 0);
    const O: Rgb = Rgb::new(0, 0, 200);
    const W: Rgb = Rgb::WHITE;

    fn corner() -> ImageBuffer {
        let rows = [[O, X, O], [X, W, O], [O, O, O]];
        ImageBuffer::from_fn(3, 3, |x, y| rows[y][x])
    }

    #[test]
    fn rounded_cells_are_averaged_with_centre() {
        let out: ImageBuffer = scale_aa_scale2x(&corner(), &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(2, 2), Rgb::new(227, 127, 127));
        assert_eq!(out.get_pixel(3, 2), W);
        assert_eq!(out.get_pixel(3, 3), Rgb::new(127, 127, 227));
    }

    #[test]
    fn flat_regions_are_untouched() {
        let src = ImageBuffer::filled(4, 3, O);
        let out: ImageBuffer = scale_aa_scale2x(&src, &ScalerConfig::default()).unwrap();
        assert!(out.pixels().iter().all(|&px| px == O));
    }

    #[test]
    fn aa_scale4x_runs_plain_pass_first() {
        let config = ScalerConfig::default();
        let src = corner();
        let plain: ImageBuffer = scale_scale2x(&src, &config).unwrap();
        let expected: ImageBuffer = scale_aa_scale2x(&plain, &config).unwrap();
        let out: ImageBuffer = scale_aa_scale4x(&src, &config).unwrap();
        assert_eq!((out.width(), out.height()), (12, 12));
        assert_eq!(out, expected);
    }
}
