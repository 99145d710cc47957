//! Circular row cache feeding the neighbourhood kernels.
//!
//! A window holds `height` source rows of `width + 2 * padding` pixels each. Advancing the
//! window by one scan-line overwrites exactly one slot, the row that leaves the window, with
//! the row that enters it.

use crate::error::ScaleError;
use crate::image::InputImage;
use crate::oob_reader::{self, OutOfBounds};
use crate::pixel::Rgb;

pub const MAX_WINDOW_HEIGHT: usize = 5;
pub const MAX_PADDING: usize = 2;

/// Widest image served by the inline (allocation-free) row storage.
pub const FAST_PATH_MAX_WIDTH: usize = 4096;
pub(crate) const FIXED_ROW_CAPACITY: usize = FAST_PATH_MAX_WIDTH + 2 * MAX_PADDING;

/// Backing storage for the rows of a [`SlidingWindow`].
pub trait RowStorage: Sized {
    fn allocate(height: usize, width: usize, padding: usize) -> Result<Self, ScaleError>;
    fn row(&self, slot: usize) -> &[Rgb];
    fn row_mut(&mut self, slot: usize) -> &mut [Rgb];
}

/// Heap-backed rows for any width.
pub struct HeapRows {
    rows: Vec<Box<[Rgb]>>,
}

impl RowStorage for HeapRows {
    fn allocate(height: usize, width: usize, padding: usize) -> Result<Self, ScaleError> {
        let row_len = width + 2 * padding;
        let rows = (0..height)
            .map(|_| vec![Rgb::default(); row_len].into_boxed_slice())
            .collect();
        Ok(Self { rows })
    }

    #[inline]
    fn row(&self, slot: usize) -> &[Rgb] {
        &self.rows[slot]
    }

    #[inline]
    fn row_mut(&mut self, slot: usize) -> &mut [Rgb] {
        &mut self.rows[slot]
    }
}

/// Inline rows of at most `CAP` pixels (padding included). Construction fails for wider images.
pub struct InlineRows<const CAP: usize> {
    rows: [[Rgb; CAP]; MAX_WINDOW_HEIGHT],
    row_len: usize,
}

impl<const CAP: usize> InlineRows<CAP> {
    pub const MAX_WIDTH: usize = CAP - 2 * MAX_PADDING;
}

impl<const CAP: usize> RowStorage for InlineRows<CAP> {
    fn allocate(height: usize, width: usize, padding: usize) -> Result<Self, ScaleError> {
        debug_assert!(height <= MAX_WINDOW_HEIGHT);
        debug_assert!(padding <= MAX_PADDING);

        if width > Self::MAX_WIDTH {
            return Err(ScaleError::CapacityExceeded {
                required: width,
                capacity: Self::MAX_WIDTH,
            });
        }

        Ok(Self {
            rows: [[Rgb::default(); CAP]; MAX_WINDOW_HEIGHT],
            row_len: width + 2 * padding,
        })
    }

    #[inline]
    fn row(&self, slot: usize) -> &[Rgb] {
        &self.rows[slot][..self.row_len]
    }

    #[inline]
    fn row_mut(&mut self, slot: usize) -> &mut [Rgb] {
        &mut self.rows[slot][..self.row_len]
    }
}

/// Circular multi-row cache centred (per `offset`) on the current scan row.
///
/// Rows `current_y + offset ..= current_y + offset + height - 1` are resident. Source row `r`
/// lives in slot `r mod height`; a bit mask replaces the modulo for power-of-two heights.
pub struct SlidingWindow<S: RowStorage = HeapRows> {
    storage: S,
    height: usize,
    width: usize,
    padding: usize,
    offset: isize,
    current_y: isize,
    mask: Option<usize>,
    policy: OutOfBounds,
}

pub type DynamicWindow = SlidingWindow<HeapRows>;
pub type FixedWindow = SlidingWindow<InlineRows<FIXED_ROW_CAPACITY>>;

impl<S: RowStorage> SlidingWindow<S> {
    /// Creates a window of `height` rows over an image `width` pixels wide, reading `padding`
    /// extra columns on each side. The top resident row sits `offset` rows from the current one.
    pub fn new(height: usize, width: usize, padding: usize, offset: isize) -> Result<Self, ScaleError> {
        assert!((1..=MAX_WINDOW_HEIGHT).contains(&height));
        assert!(padding <= MAX_PADDING);
        debug_assert!(offset <= 0 && offset + height as isize > 0);

        Ok(Self {
            storage: S::allocate(height, width, padding)?,
            height,
            width,
            padding,
            offset,
            current_y: 0,
            mask: height.is_power_of_two().then_some(height - 1),
            policy: OutOfBounds::default(),
        })
    }

    pub fn with_policy(mut self, policy: OutOfBounds) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    fn slot(&self, src_row: isize) -> usize {
        match self.mask {
            // two's complement keeps negative rows consistent with rem_euclid
            Some(mask) => (src_row as usize) & mask,
            None => src_row.rem_euclid(self.height as isize) as usize,
        }
    }

    fn load_row<I: InputImage + ?Sized>(&mut self, image: &I, src_row: isize) {
        let slot = self.slot(src_row);
        let (padding, policy) = (self.padding, self.policy);
        oob_reader::fill_row(image, self.storage.row_mut(slot), src_row, padding, policy);
    }

    /// Fills every slot for a scan starting at `start_y`.
    pub fn initialize<I: InputImage + ?Sized>(&mut self, image: &I, start_y: usize) {
        debug_assert_eq!(image.width(), self.width);
        self.current_y = start_y as isize;
        for i in 0..self.height {
            self.load_row(image, self.current_y + self.offset + i as isize);
        }
    }

    /// Moves the window down one row, loading only the row that enters at the bottom.
    pub fn advance<I: InputImage + ?Sized>(&mut self, image: &I) {
        self.current_y += 1;
        let entering = self.current_y + self.offset + self.height as isize - 1;
        self.load_row(image, entering);
    }

    /// Whole padded row at `offset` rows from the current one; index `x + padding` is column `x`.
    #[inline]
    pub fn get_row(&self, offset: isize) -> &[Rgb] {
        debug_assert!(self.offset <= offset && offset < self.offset + self.height as isize);
        self.storage.row(self.slot(self.current_y + offset))
    }

    /// Pixel at unpadded column `x` of the row `offset` rows from the current one.
    #[inline]
    pub fn get(&self, x: usize, offset: isize) -> Rgb {
        self.get_row(offset)[x + self.padding]
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn current_y(&self) -> isize {
        self.current_y
    }

    /// Borrows every resident row once, for per-column neighbourhood reads.
    #[inline]
    pub(crate) fn rows(&self) -> WindowRows<'_> {
        let mut rows: [&[Rgb]; MAX_WINDOW_HEIGHT] = [&[]; MAX_WINDOW_HEIGHT];
        for (i, row) in rows.iter_mut().take(self.height).enumerate() {
            *row = self.get_row(self.offset + i as isize);
        }
        WindowRows {
            rows,
            top: self.offset,
            padding: self.padding,
        }
    }
}

/// Resident rows of a window, resolved for one scan-line.
#[derive(Copy, Clone)]
pub(crate) struct WindowRows<'w> {
    rows: [&'w [Rgb]; MAX_WINDOW_HEIGHT],
    top: isize,
    padding: usize,
}

impl WindowRows<'_> {
    /// Pixel at `(x + dx, current_y + dy)`.
    #[inline(always)]
    pub(crate) fn at(&self, x: usize, dx: isize, dy: isize) -> Rgb {
        self.rows[(dy - self.top) as usize][(x + self.padding).wrapping_add_signed(dx)]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::{DynamicWindow, FixedWindow, RowStorage, SlidingWindow, FAST_PATH_MAX_WIDTH};
    use crate::error::ScaleError;
    use crate::image::{ImageBuffer, InputImage};
    use crate::oob_reader::OutOfBounds;
    use crate::pixel::Rgb;

    fn labelled(width: usize, height: usize) -> ImageBuffer {
        ImageBuffer::from_fn(width, height, |x, y| Rgb::from_u32((y * 100 + x) as u32))
    }

    fn expected_row(img: &ImageBuffer, y: isize, padding: usize, policy: OutOfBounds) -> Vec<Rgb> {
        (0..img.width() + 2 * padding)
            .map(|i| img.safe_access(i as isize - padding as isize, y, policy))
            .collect()
    }

    fn check_scan<S: RowStorage>(height: usize, padding: usize, offset: isize, policy: OutOfBounds) {
        let img = labelled(6, 7);
        let mut window = SlidingWindow::<S>::new(height, 6, padding, offset)
            .unwrap()
            .with_policy(policy);
        window.initialize(&img, 0);

        for k in 0..img.height() {
            if k > 0 {
                window.advance(&img);
            }
            assert_eq!(window.current_y(), k as isize);
            for dy in offset..offset + height as isize {
                assert_eq!(
                    window.get_row(dy).to_vec(),
                    expected_row(&img, k as isize + dy, padding, policy),
                    "row {dy} after {k} advances"
                );
            }
            assert_eq!(window.get(0, 0), img.get_pixel(0, k));
            assert_eq!(window.get(5, 0), img.get_pixel(5, k));
        }
    }

    #[rstest]
    #[case(3, 1, -1)]
    #[case(4, 2, -1)]
    #[case(5, 2, -2)]
    fn rows_track_scan_line(
        #[case] height: usize,
        #[case] padding: usize,
        #[case] offset: isize,
        #[values(OutOfBounds::Nearest, OutOfBounds::Zero)] policy: OutOfBounds,
    ) {
        check_scan::<super::HeapRows>(height, padding, offset, policy);
        check_scan::<super::InlineRows<{ super::FIXED_ROW_CAPACITY }>>(height, padding, offset, policy);
    }

    #[test]
    fn labelled_neighbours_at_edges() {
        let img = labelled(4, 3);
        let mut window = DynamicWindow::new(3, 4, 1, -1).unwrap();
        window.initialize(&img, 0);
        window.advance(&img);
        assert_eq!(window.get(2, 0), Rgb::from_u32(102));
        assert_eq!(window.get(2, -1), Rgb::from_u32(2));
        assert_eq!(window.get(2, 1), Rgb::from_u32(202));

        window.advance(&img);
        // bottom edge is clamped
        assert_eq!(window.get(3, 1), Rgb::from_u32(203));
        assert_eq!(window.get_row(0)[0], Rgb::from_u32(200));
    }

    #[test]
    fn start_row_inside_image() {
        let img = labelled(3, 8);
        let mut window = FixedWindow::new(5, 3, 2, -2).unwrap();
        window.initialize(&img, 4);
        let rows = window.rows();
        assert_eq!(rows.at(1, 0, -2), Rgb::from_u32(201));
        assert_eq!(rows.at(1, 1, 2), Rgb::from_u32(602));
        assert_eq!(rows.at(0, -2, 0), Rgb::from_u32(400));
    }

    struct CountingImage {
        inner: ImageBuffer,
        reads: Cell<usize>,
    }

    impl InputImage for CountingImage {
        fn width(&self) -> usize {
            self.inner.width()
        }

        fn height(&self) -> usize {
            self.inner.height()
        }

        fn get_pixel(&self, x: usize, y: usize) -> Rgb {
            self.reads.set(self.reads.get() + 1);
            self.inner.get_pixel(x, y)
        }
    }

    #[test]
    fn advance_reads_one_row() {
        let img = CountingImage {
            inner: labelled(10, 10),
            reads: Cell::new(0),
        };
        let mut window = DynamicWindow::new(5, 10, 2, -2).unwrap();
        window.initialize(&img, 0);
        assert_eq!(img.reads.get(), 5 * 14);

        for _ in 0..4 {
            img.reads.set(0);
            window.advance(&img);
            assert_eq!(img.reads.get(), 14);
        }
    }

    #[test]
    fn fixed_window_rejects_wide_rows() {
        let err = FixedWindow::new(3, FAST_PATH_MAX_WIDTH + 1, 1, -1).err();
        assert_eq!(
            err,
            Some(ScaleError::CapacityExceeded {
                required: FAST_PATH_MAX_WIDTH + 1,
                capacity: FAST_PATH_MAX_WIDTH,
            })
        );
        assert!(FixedWindow::new(3, FAST_PATH_MAX_WIDTH, 1, -1).is_ok());
        assert!(DynamicWindow::new(3, FAST_PATH_MAX_WIDTH + 1, 1, -1).is_ok());
    }
}
