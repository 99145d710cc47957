//! Pixel-art magnification kernels: EPX, Eagle, 2xSaI, Scale2x/3x/4x and the SFX variants,
//! HQ2x/3x/4x, xBR, AAScale, OmniScale, and nearest/bilinear/trilinear resampling.
//!
//! Every kernel is a plain function generic over an [`InputImage`] and an output image type,
//! e.g. [`scale_hq2x`] or [`scale_xbr`]. The neighbourhood kernels stream the source through a
//! [`SlidingWindow`] that keeps only the rows they need.
//!
//! [`scale`], [`scale_with_config`], [`scale_into`] and [`scale_rgb`] pick a kernel from an
//! [`Algorithm`] and a scale factor, after checking both against the capability table in
//! [`capabilities`].
//!
//! ```
//! use pixscale::{scale, Algorithm, ImageBuffer, Rgb};
//!
//! let src = ImageBuffer::filled(3, 2, Rgb::new(40, 80, 120));
//! let out = scale(&src, Algorithm::Hq, 3.0).unwrap();
//! assert_eq!((out.width(), out.height()), (9, 6));
//! ```

mod aascale;
mod blend;
pub mod capabilities;
mod config;
mod eagle;
mod epx;
mod error;
mod hq2x;
mod hq3x;
mod hq3x_table;
mod image;
mod kernel;
mod matrix;
mod omniscale;
mod oob_reader;
mod pixel;
mod resample;
mod sai;
mod scaler;
mod scalex;
mod window;
mod xbr;
mod yuv_lookup;

pub use crate::aascale::{scale_aa_scale2x, scale_aa_scale4x};
pub use crate::capabilities::{output_dimensions, Algorithm, AlgorithmInfo, ScaleSupport};
pub use crate::config::{ScalerConfig, WindowStrategy, YuvThreshold};
pub use crate::eagle::scale_eagle;
pub use crate::epx::{scale_adv_mame, scale_epx};
pub use crate::error::ScaleError;
pub use crate::hq2x::{scale_hq2x, scale_hq4x};
pub use crate::hq3x::scale_hq3x;
pub use crate::image::{FromTemplate, ImageBuffer, InputImage, OutputImage};
pub use crate::omniscale::{scale_omniscale2x, scale_omniscale3x};
pub use crate::oob_reader::OutOfBounds;
pub use crate::pixel::Rgb;
pub use crate::resample::{scale_bilinear, scale_nearest, scale_trilinear};
pub use crate::sai::scale_2x_sai;
pub use crate::scalex::{scale_scale2x, scale_scale2x_sfx, scale_scale3x, scale_scale3x_sfx, scale_scale4x};
pub use crate::window::{DynamicWindow, FixedWindow, HeapRows, InlineRows, RowStorage, SlidingWindow, FAST_PATH_MAX_WIDTH};
pub use crate::xbr::scale_xbr;

use crate::aascale::{aa_scale4x_into, AaScale2x};
use crate::eagle::Eagle;
use crate::epx::Epx;
use crate::hq2x::{hq4x_into, Hq2x};
use crate::hq3x::Hq3x;
use crate::omniscale::OmniScale;
use crate::resample::{bilinear_into, nearest_into, trilinear_into};
use crate::sai::Sai2x;
use crate::scaler::run;
use crate::scalex::{scale4x_into, Scale2x, Scale2xSfx, Scale3x, Scale3xSfx};
use crate::xbr::xbr_into;

/// Scales `source` by `scale` with `algorithm` and the default configuration.
///
/// Fixed-factor algorithms accept only the factors listed in their [`AlgorithmInfo`];
/// anything else fails with [`ScaleError::UnsupportedScale`].
pub fn scale<I>(source: &I, algorithm: Algorithm, scale: f32) -> Result<ImageBuffer, ScaleError>
where
    I: InputImage + Sync + ?Sized,
{
    scale_with_config(source, algorithm, scale, &ScalerConfig::default())
}

pub fn scale_with_config<I>(
    source: &I,
    algorithm: Algorithm,
    scale: f32,
    config: &ScalerConfig,
) -> Result<ImageBuffer, ScaleError>
where
    I: InputImage + Sync + ?Sized,
{
    let (width, height) = output_dimensions(algorithm, source.width(), source.height(), scale)?;
    let mut out = ImageBuffer::create(width, height, source);
    scale_into(source, &mut out, algorithm, scale, config)?;
    Ok(out)
}

/// Scales `source` into a preallocated `destination`.
///
/// `destination` must have exactly the size reported by [`output_dimensions`]. A rejected call
/// leaves it untouched.
pub fn scale_into<I, O>(
    source: &I,
    destination: &mut O,
    algorithm: Algorithm,
    scale: f32,
    config: &ScalerConfig,
) -> Result<(), ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: OutputImage + ?Sized,
{
    let (width, height) = output_dimensions(algorithm, source.width(), source.height(), scale)?;
    if (destination.width(), destination.height()) != (width, height) {
        return Err(ScaleError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width: destination.width(),
            actual_height: destination.height(),
        });
    }

    log::trace!(
        "{algorithm} x{scale}: {}x{} -> {width}x{height}",
        source.width(),
        source.height()
    );

    let factor = scale as usize;
    match (algorithm, factor) {
        (Algorithm::Nearest, _) => nearest_into(source, destination, scale, config),
        (Algorithm::Bilinear, _) => bilinear_into(source, destination, scale, config),
        (Algorithm::Trilinear, _) => trilinear_into(source, destination, scale, config),
        (Algorithm::Epx, 2) => run::<2, Epx, _, _>(source, destination, config)?,
        (Algorithm::Eagle, 2) => run::<2, Eagle, _, _>(source, destination, config)?,
        (Algorithm::Super2xSai, 2) => run::<2, Sai2x, _, _>(source, destination, config)?,
        (Algorithm::Scale, 2) => run::<2, Scale2x, _, _>(source, destination, config)?,
        (Algorithm::Scale, 3) => run::<3, Scale3x, _, _>(source, destination, config)?,
        (Algorithm::Scale, 4) => scale4x_into(source, destination, config)?,
        (Algorithm::ScaleSfx, 2) => run::<2, Scale2xSfx, _, _>(source, destination, config)?,
        (Algorithm::ScaleSfx, 3) => run::<3, Scale3xSfx, _, _>(source, destination, config)?,
        (Algorithm::Hq, 2) => run::<2, Hq2x, _, _>(source, destination, config)?,
        (Algorithm::Hq, 3) => run::<3, Hq3x, _, _>(source, destination, config)?,
        (Algorithm::Hq, 4) => hq4x_into(source, destination, config)?,
        (Algorithm::AaScale, 2) => run::<2, AaScale2x, _, _>(source, destination, config)?,
        (Algorithm::AaScale, 4) => aa_scale4x_into(source, destination, config)?,
        (Algorithm::Xbr, 2..=4) => xbr_into(source, destination, factor, config)?,
        (Algorithm::OmniScale, 2) => run::<2, OmniScale, _, _>(source, destination, config)?,
        (Algorithm::OmniScale, 3) => run::<3, OmniScale, _, _>(source, destination, config)?,
        _ => return Err(algorithm.unsupported(scale)),
    }

    Ok(())
}

/// Scales a packed 8-bit RGB image, returning the packed result.
///
/// `source` must hold exactly `width * height * 3` bytes.
pub fn scale_rgb(
    source: &[u8],
    width: usize,
    height: usize,
    algorithm: Algorithm,
    scale: f32,
) -> Result<Vec<u8>, ScaleError> {
    let image = ImageBuffer::from_rgb_bytes(width, height, source)?;
    Ok(scale_with_config(&image, algorithm, scale, &ScalerConfig::default())?.into_rgb_bytes())
}
