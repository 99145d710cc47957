use crate::oob_reader::OutOfBounds;

/// Row-buffer strategy used by the windowed kernels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum WindowStrategy {
    /// Inline rows for images up to [`FAST_PATH_MAX_WIDTH`](crate::FAST_PATH_MAX_WIDTH) pixels
    /// wide, heap rows beyond that.
    #[default]
    Auto,
    /// Always inline rows; wider images fail with
    /// [`ScaleError::CapacityExceeded`](crate::ScaleError::CapacityExceeded).
    Fixed,
    /// Always heap rows.
    Dynamic,
}

/// Per-channel limits of the HQ "different colour" test. A pair of pixels is different when
/// any YUV channel differs by more than its limit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct YuvThreshold {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Default for YuvThreshold {
    fn default() -> Self {
        Self {
            y: 0x30,
            u: 0x07,
            v: 0x06,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalerConfig {
    pub out_of_bounds: OutOfBounds,
    pub window: WindowStrategy,
    pub yuv_threshold: YuvThreshold,
    /// Split the output into row stripes scaled on the rayon pool.
    pub parallel: bool,
    /// Source rows per stripe when `parallel` is set.
    pub stripe_rows: usize,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            out_of_bounds: OutOfBounds::Nearest,
            window: WindowStrategy::Auto,
            yuv_threshold: YuvThreshold::default(),
            parallel: false,
            stripe_rows: 32,
        }
    }
}
