use std::ops::Range;

use rayon::prelude::*;

use crate::config::{ScalerConfig, WindowStrategy};
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage, OutputImage, StripeMut};
use crate::kernel::Neighborhood;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::window::{HeapRows, InlineRows, RowStorage, SlidingWindow, FIXED_ROW_CAPACITY};

/// A neighbourhood kernel expanding every source pixel into a `SCALE`x`SCALE` block.
pub(crate) trait Scaler<const SCALE: usize>: Sized {
    type Kernel: Neighborhood;

    fn expand(kernel: &Self::Kernel, config: &ScalerConfig) -> Block<SCALE>;

    /// Scales source rows `y_range` into `destination`, whose row 0 receives the block row of
    /// `y_range.start`.
    fn scale_image<I, O>(
        source: &I,
        destination: &mut O,
        config: &ScalerConfig,
        y_range: Range<usize>,
    ) -> Result<(), ScaleError>
    where
        I: InputImage + ?Sized,
        O: OutputImage + ?Sized,
    {
        type Fixed = InlineRows<FIXED_ROW_CAPACITY>;

        match config.window {
            WindowStrategy::Dynamic => scan::<SCALE, Self, HeapRows, I, O>(source, destination, config, y_range),
            WindowStrategy::Fixed => scan::<SCALE, Self, Fixed, I, O>(source, destination, config, y_range),
            WindowStrategy::Auto => {
                match scan::<SCALE, Self, Fixed, I, O>(source, destination, config, y_range.clone()) {
                    Err(ScaleError::CapacityExceeded { required, capacity }) => {
                        log::debug!(
                            "{required} pixel rows exceed the inline window ({capacity}), using heap rows"
                        );
                        scan::<SCALE, Self, HeapRows, I, O>(source, destination, config, y_range)
                    }
                    result => result,
                }
            }
        }
    }
}

fn scan<const SCALE: usize, S, R, I, O>(
    source: &I,
    destination: &mut O,
    config: &ScalerConfig,
    y_range: Range<usize>,
) -> Result<(), ScaleError>
where
    S: Scaler<SCALE>,
    R: RowStorage,
    I: InputImage + ?Sized,
    O: OutputImage + ?Sized,
{
    let src_width = source.width();
    let y_first = y_range.start;
    let y_last = y_range.end.min(source.height());
    if src_width == 0 || y_first >= y_last {
        return Ok(());
    }

    // the only failure point, reached before any pixel is written
    let mut window = SlidingWindow::<R>::new(
        S::Kernel::HEIGHT,
        src_width,
        S::Kernel::PADDING,
        S::Kernel::OFFSET,
    )?
    .with_policy(config.out_of_bounds);
    window.initialize(source, y_first);

    for y in y_first..y_last {
        if y > y_first {
            window.advance(source);
        }

        let rows = window.rows();
        let dst_y = (y - y_first) * SCALE;
        for x in 0..src_width {
            let kernel = S::Kernel::gather(&rows, x);
            S::expand(&kernel, config).write_to(destination, x * SCALE, dst_y);
        }
    }

    Ok(())
}

/// Runs scaler `S` over the whole source, splitting the output into row stripes on the rayon
/// pool when `config.parallel` is set and the destination exposes contiguous storage.
pub(crate) fn run<const SCALE: usize, S, I, O>(
    source: &I,
    destination: &mut O,
    config: &ScalerConfig,
) -> Result<(), ScaleError>
where
    S: Scaler<SCALE>,
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let src_width = source.width();
    let src_height = source.height();
    debug_assert_eq!(destination.width(), src_width * SCALE);
    debug_assert_eq!(destination.height(), src_height * SCALE);
    if src_width == 0 || src_height == 0 {
        return Ok(());
    }

    if config.parallel {
        if let Some(pixels) = destination.pixels_mut() {
            return run_striped::<SCALE, S, I>(source, pixels, config);
        }
        log::debug!("destination has no contiguous storage, scaling sequentially");
    }

    S::scale_image(source, destination, config, 0..src_height)
}

fn run_striped<const SCALE: usize, S, I>(
    source: &I,
    pixels: &mut [Rgb],
    config: &ScalerConfig,
) -> Result<(), ScaleError>
where
    S: Scaler<SCALE>,
    I: InputImage + Sync + ?Sized,
{
    let src_height = source.height();
    let dst_width = source.width() * SCALE;
    let stripe_rows = config.stripe_rows.max(1);
    log::debug!(
        "scaling {src_height} rows in {} stripes of {stripe_rows}",
        src_height.div_ceil(stripe_rows)
    );

    pixels
        .par_chunks_mut(dst_width * SCALE * stripe_rows)
        .enumerate()
        .try_for_each(|(i, chunk)| {
            let y_first = i * stripe_rows;
            let y_last = (y_first + stripe_rows).min(src_height);
            let mut stripe = StripeMut::new(dst_width, chunk);
            S::scale_image(source, &mut stripe, config, y_first..y_last)
        })
}

/// Allocates a `width`x`height` output inheriting from `source`, then lets `fill` write it.
pub(crate) fn with_template<I, O>(
    source: &I,
    width: usize,
    height: usize,
    fill: impl FnOnce(&mut O) -> Result<(), ScaleError>,
) -> Result<O, ScaleError>
where
    I: InputImage + ?Sized,
    O: FromTemplate,
{
    let mut out = O::create(width, height, source);
    fill(&mut out)?;
    Ok(out)
}

/// `set!(out[x, y], value)` stores one cell of a [`Block`].
macro_rules! set {
    ($out:ident [$x:literal, $y:literal], $col:expr) => {
        $out.set($x, $y, $col)
    };
}

pub(crate) use set;

#[cfg(test)]
mod tests {
    use super::{run, Scaler};
    use crate::config::{ScalerConfig, WindowStrategy};
    use crate::error::ScaleError;
    use crate::image::{ImageBuffer, OutputImage};
    use crate::kernel::{Kernel3x3, Neighborhood};
    use crate::matrix::Block;
    use crate::pixel::Rgb;
    use crate::window::FAST_PATH_MAX_WIDTH;

    /// Copies the left neighbour into the top-right cell, so column order is visible.
    struct Probe;

    impl Scaler<2> for Probe {
        type Kernel = Kernel3x3;

        fn expand(kernel: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
            let mut out = Block::filled(kernel.center());
            set!(out[1, 0], kernel.d);
            set!(out[0, 1], kernel.b);
            out
        }
    }

    fn noise(width: usize, height: usize) -> ImageBuffer {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb::from_u32(((x * 7919 + y * 104_729) % 0x100_0000) as u32)
        })
    }

    fn scaled(src: &ImageBuffer, config: &ScalerConfig) -> Result<ImageBuffer, ScaleError> {
        let mut out = ImageBuffer::new(src.width() * 2, src.height() * 2);
        run::<2, Probe, _, _>(src, &mut out, config)?;
        Ok(out)
    }

    #[test]
    fn neighbours_land_in_their_cells() {
        let src = noise(5, 4);
        let out = scaled(&src, &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(0, 0));
        assert_eq!(out.get_pixel(5, 2), src.get_pixel(1, 1));
        assert_eq!(out.get_pixel(4, 7), src.get_pixel(2, 2));
        // left of column 0 is clamped to itself
        assert_eq!(out.get_pixel(1, 4), src.get_pixel(0, 2));
    }

    #[test]
    fn strategies_agree() {
        let src = noise(9, 7);
        let auto = scaled(&src, &ScalerConfig::default()).unwrap();
        for window in [WindowStrategy::Fixed, WindowStrategy::Dynamic] {
            let config = ScalerConfig {
                window,
                ..Default::default()
            };
            assert_eq!(scaled(&src, &config).unwrap(), auto);
        }
    }

    #[test]
    fn parallel_stripes_match_sequential() {
        let src = noise(11, 23);
        let sequential = scaled(&src, &ScalerConfig::default()).unwrap();
        for stripe_rows in [1, 4, 5, 64] {
            let config = ScalerConfig {
                parallel: true,
                stripe_rows,
                ..Default::default()
            };
            assert_eq!(scaled(&src, &config).unwrap(), sequential, "stripe_rows {stripe_rows}");
        }
    }

    #[test]
    fn wide_rows_fall_back_to_heap() {
        let src = noise(FAST_PATH_MAX_WIDTH + 3, 2);
        let fixed = ScalerConfig {
            window: WindowStrategy::Fixed,
            ..Default::default()
        };
        assert!(matches!(scaled(&src, &fixed), Err(ScaleError::CapacityExceeded { .. })));

        let out = scaled(&src, &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(2 * FAST_PATH_MAX_WIDTH + 4, 1), src.get_pixel(FAST_PATH_MAX_WIDTH + 2, 0));
    }

    #[test]
    fn rejected_call_leaves_output_untouched() {
        let src = noise(FAST_PATH_MAX_WIDTH + 1, 1);
        let fixed = ScalerConfig {
            window: WindowStrategy::Fixed,
            ..Default::default()
        };
        let mut out = ImageBuffer::filled(src.width() * 2, 2, Rgb::WHITE);
        assert!(run::<2, Probe, _, _>(&src, &mut out, &fixed).is_err());
        assert!(out.pixels().iter().all(|&px| px == Rgb::WHITE));
        assert_eq!(OutputImage::width(&out), src.width() * 2);
    }

    #[test]
    fn kernel_window_parameters() {
        assert_eq!((Kernel3x3::HEIGHT, Kernel3x3::PADDING, Kernel3x3::OFFSET), (3, 1, -1));
    }
}
