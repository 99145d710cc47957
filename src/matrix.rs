use crate::image::OutputImage;
use crate::pixel::Rgb;

/// `N`x`N` output block produced for one source pixel, indexed as `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Block<const N: usize> {
    cells: [[Rgb; N]; N],
}

impl<const N: usize> Block<N> {
    #[inline]
    pub(crate) fn filled(value: Rgb) -> Self {
        Self {
            cells: [[value; N]; N],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: Rgb) {
        self.cells[y][x] = value;
    }

    /// Builds a block from row-major cells.
    #[inline]
    pub(crate) fn from_rows(cells: [[Rgb; N]; N]) -> Self {
        Self { cells }
    }

    /// Writes the block with its top-left cell at `(dst_x, dst_y)`.
    #[inline]
    pub(crate) fn write_to<O: OutputImage + ?Sized>(&self, out: &mut O, dst_x: usize, dst_y: usize) {
        for (j, row) in self.cells.iter().enumerate() {
            for (i, &value) in row.iter().enumerate() {
                out.set_pixel(dst_x + i, dst_y + j, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;

    #[test]
    fn writes_at_offset() {
        let mut block = Block::<3>::filled(Rgb::WHITE);
        block.set(2, 0, Rgb::new(1, 0, 0));
        block.set(0, 2, Rgb::new(2, 0, 0));

        let mut out = ImageBuffer::new(6, 6);
        block.write_to(&mut out, 3, 3);
        assert_eq!(out.get_pixel(5, 3), Rgb::new(1, 0, 0));
        assert_eq!(out.get_pixel(3, 5), Rgb::new(2, 0, 0));
        assert_eq!(out.get_pixel(4, 4), Rgb::WHITE);
        assert_eq!(out.get_pixel(2, 2), Rgb::BLACK);
    }
}
