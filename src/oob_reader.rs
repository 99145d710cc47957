use std::ops::Range;

use crate::image::InputImage;
use crate::pixel::Rgb;

/// Policy applied when a kernel samples outside the source image.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutOfBounds {
    /// Out-of-range samples read as the default (black) pixel.
    Zero,
    /// Coordinates are clamped to the nearest edge pixel.
    #[default]
    Nearest,
}

impl OutOfBounds {
    /// Maps signed coordinates to an in-range position, or `None` when the sample is zero.
    #[inline]
    pub fn resolve(self, x: isize, y: isize, width: usize, height: usize) -> Option<(usize, usize)> {
        if width == 0 || height == 0 {
            return None;
        }

        let x_range: Range<isize> = 0..width as isize;
        let y_range: Range<isize> = 0..height as isize;
        match self {
            OutOfBounds::Zero => {
                if x_range.contains(&x) && y_range.contains(&y) {
                    Some((x as usize, y as usize))
                } else {
                    None
                }
            }
            OutOfBounds::Nearest => Some((
                x.clamp(0, x_range.end - 1) as usize,
                y.clamp(0, y_range.end - 1) as usize,
            )),
        }
    }
}

/// Bounds-safe read of `(x, y)` from `image` under `policy`.
#[inline]
pub(crate) fn read<I: InputImage + ?Sized>(image: &I, x: isize, y: isize, policy: OutOfBounds) -> Rgb {
    match policy.resolve(x, y, image.width(), image.height()) {
        Some((x, y)) => image.get_pixel(x, y),
        None => Rgb::default(),
    }
}

/// Fills `row` with source row `y`, where `row[i]` holds column `i - padding`.
pub(crate) fn fill_row<I: InputImage + ?Sized>(
    image: &I,
    row: &mut [Rgb],
    y: isize,
    padding: usize,
    policy: OutOfBounds,
) {
    let width = image.width();
    let y_inside = y >= 0 && (y as usize) < image.height();

    for (i, cell) in row.iter_mut().enumerate() {
        let x = i as isize - padding as isize;
        *cell = if y_inside && x >= 0 && (x as usize) < width {
            image.get_pixel(x as usize, y as usize)
        } else {
            read(image, x, y, policy)
        };
    }
}
