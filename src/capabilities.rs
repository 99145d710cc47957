//! Static capability table: which scale factors every algorithm accepts on the CPU and on GPU
//! backends, and the dimension law the kernels follow.

use std::fmt::{Display, Formatter};

use crate::error::ScaleError;
use crate::resample::scaled_dimension;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Trilinear,
    Epx,
    Eagle,
    /// AdvMAME Scale2x/3x/4x.
    Scale,
    ScaleSfx,
    Super2xSai,
    Hq,
    AaScale,
    Xbr,
    OmniScale,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Nearest,
        Algorithm::Bilinear,
        Algorithm::Trilinear,
        Algorithm::Epx,
        Algorithm::Eagle,
        Algorithm::Scale,
        Algorithm::ScaleSfx,
        Algorithm::Super2xSai,
        Algorithm::Hq,
        Algorithm::AaScale,
        Algorithm::Xbr,
        Algorithm::OmniScale,
    ];

    pub fn info(self) -> &'static AlgorithmInfo {
        &ALGORITHM_INFO[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub(crate) fn unsupported(self, requested: f32) -> ScaleError {
        ScaleError::UnsupportedScale {
            algorithm: self,
            requested,
            supported: self.info().cpu_support(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The scale factors a backend accepts for one algorithm.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScaleSupport {
    Factors(&'static [f32]),
    /// Any factor within `min..=max`.
    Range { min: f32, max: f32 },
    None,
}

impl ScaleSupport {
    pub fn contains(&self, scale: f32) -> bool {
        match *self {
            ScaleSupport::Factors(factors) => factors.contains(&scale),
            ScaleSupport::Range { min, max } => (min..=max).contains(&scale),
            ScaleSupport::None => false,
        }
    }
}

impl Display for ScaleSupport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleSupport::Factors(factors) => {
                f.write_str("supported: ")?;
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{factor}x")?;
                }
                Ok(())
            }
            ScaleSupport::Range { min, max } => write!(f, "arbitrary scale from {min} to {max}"),
            ScaleSupport::None => f.write_str("not supported"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Empty when the CPU path accepts any scale within `min_scale..=max_scale`.
    pub cpu_scales: &'static [f32],
    pub cpu_arbitrary: bool,
    pub gpu_scales: &'static [f32],
    pub gpu_arbitrary: bool,
    pub gpu_accelerated: bool,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl AlgorithmInfo {
    pub fn cpu_support(&self) -> ScaleSupport {
        if self.cpu_arbitrary {
            ScaleSupport::Range {
                min: self.min_scale,
                max: self.max_scale,
            }
        } else {
            ScaleSupport::Factors(self.cpu_scales)
        }
    }

    pub fn gpu_support(&self) -> ScaleSupport {
        match (self.gpu_accelerated, self.gpu_arbitrary) {
            (false, _) => ScaleSupport::None,
            (true, true) => ScaleSupport::Range {
                min: self.min_scale,
                max: self.max_scale,
            },
            (true, false) => ScaleSupport::Factors(self.gpu_scales),
        }
    }
}

static ALGORITHM_INFO: [AlgorithmInfo; 12] = [
    AlgorithmInfo {
        name: "Nearest",
        description: "Nearest neighbor - fastest, pixelated",
        cpu_scales: &[],
        cpu_arbitrary: true,
        gpu_scales: &[],
        gpu_arbitrary: true,
        gpu_accelerated: true,
        min_scale: 0.1,
        max_scale: 10.0,
    },
    AlgorithmInfo {
        name: "Bilinear",
        description: "Bilinear interpolation - smooth but blurry",
        cpu_scales: &[],
        cpu_arbitrary: true,
        gpu_scales: &[],
        gpu_arbitrary: true,
        gpu_accelerated: true,
        min_scale: 0.1,
        max_scale: 10.0,
    },
    AlgorithmInfo {
        name: "Trilinear",
        description: "Trilinear with mipmapping - good for downscaling",
        cpu_scales: &[],
        cpu_arbitrary: true,
        gpu_scales: &[],
        gpu_arbitrary: false,
        gpu_accelerated: false,
        min_scale: 0.1,
        max_scale: 10.0,
    },
    AlgorithmInfo {
        name: "EPX",
        description: "Eric's Pixel Expansion - good for pixel art",
        cpu_scales: &[2.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 2.0,
    },
    AlgorithmInfo {
        name: "Eagle",
        description: "Eagle algorithm - smooth diagonal lines",
        cpu_scales: &[2.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 2.0,
    },
    AlgorithmInfo {
        name: "Scale",
        description: "AdvMAME Scale2x/3x/4x - sharp pixel art",
        cpu_scales: &[2.0, 3.0, 4.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0, 3.0, 4.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 4.0,
    },
    AlgorithmInfo {
        name: "ScaleSFX",
        description: "Sp00kyFox improved Scale - better edges",
        cpu_scales: &[2.0, 3.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0, 3.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 3.0,
    },
    AlgorithmInfo {
        name: "Super2xSaI",
        description: "Super 2xSaI - smooth interpolation",
        cpu_scales: &[2.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 2.0,
    },
    AlgorithmInfo {
        name: "HQ",
        description: "High Quality 2x/3x/4x - excellent quality",
        cpu_scales: &[2.0, 3.0, 4.0],
        cpu_arbitrary: false,
        gpu_scales: &[],
        gpu_arbitrary: false,
        gpu_accelerated: false,
        min_scale: 2.0,
        max_scale: 4.0,
    },
    AlgorithmInfo {
        name: "AAScale",
        description: "Anti-Aliased Scale - smooth edges",
        cpu_scales: &[2.0, 4.0],
        cpu_arbitrary: false,
        gpu_scales: &[2.0, 4.0],
        gpu_arbitrary: false,
        gpu_accelerated: true,
        min_scale: 2.0,
        max_scale: 4.0,
    },
    AlgorithmInfo {
        name: "xBR",
        description: "Hyllian's xBR - advanced edge interpolation",
        cpu_scales: &[2.0, 3.0, 4.0],
        cpu_arbitrary: false,
        gpu_scales: &[],
        gpu_arbitrary: false,
        gpu_accelerated: false,
        min_scale: 2.0,
        max_scale: 4.0,
    },
    AlgorithmInfo {
        name: "OmniScale",
        description: "OmniScale - resolution independent (GPU)",
        cpu_scales: &[2.0, 3.0],
        cpu_arbitrary: false,
        gpu_scales: &[],
        gpu_arbitrary: true,
        gpu_accelerated: true,
        min_scale: 1.0,
        max_scale: 8.0,
    },
];

pub fn all() -> &'static [Algorithm] {
    &Algorithm::ALL
}

pub fn is_cpu_scale_supported(algorithm: Algorithm, scale: f32) -> bool {
    algorithm.info().cpu_support().contains(scale)
}

pub fn is_gpu_scale_supported(algorithm: Algorithm, scale: f32) -> bool {
    algorithm.info().gpu_support().contains(scale)
}

pub fn cpu_algorithms_for_scale(scale: f32) -> Vec<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|&algorithm| is_cpu_scale_supported(algorithm, scale))
        .collect()
}

pub fn gpu_algorithms_for_scale(scale: f32) -> Vec<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|&algorithm| is_gpu_scale_supported(algorithm, scale))
        .collect()
}

pub fn gpu_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|algorithm| algorithm.info().gpu_accelerated)
        .collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Cpu,
    Gpu,
    Either,
}

/// Suggests a backend for scaling a `width`x`height` image: the CPU unless the GPU is the only
/// option or the image is large enough to amortise the upload.
pub fn recommend_backend(algorithm: Algorithm, width: usize, height: usize, scale: f32) -> Backend {
    if !algorithm.info().gpu_accelerated || !is_gpu_scale_supported(algorithm, scale) {
        return Backend::Cpu;
    }
    if !is_cpu_scale_supported(algorithm, scale) {
        return Backend::Gpu;
    }

    match width * height {
        pixels if pixels < 64 * 64 => Backend::Cpu,
        pixels if pixels > 512 * 512 => Backend::Gpu,
        _ => Backend::Either,
    }
}

/// Output size of scaling a `width`x`height` image on the CPU, or the reason it is rejected.
///
/// Factor-limited algorithms produce `width * scale` exactly; arbitrary-scale algorithms
/// produce `floor(width * scale)`.
pub fn output_dimensions(algorithm: Algorithm, width: usize, height: usize, scale: f32) -> Result<(usize, usize), ScaleError> {
    if !is_cpu_scale_supported(algorithm, scale) {
        return Err(algorithm.unsupported(scale));
    }
    Ok((scaled_dimension(width, scale), scaled_dimension(height, scale)))
}
