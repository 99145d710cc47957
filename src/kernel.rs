use crate::pixel::Rgb;
use crate::window::WindowRows;

/// Fixed-size source neighbourhood read from a sliding window for one column.
///
/// `HEIGHT`, `PADDING` and `OFFSET` are the window parameters the neighbourhood needs: the
/// number of resident rows, the extra columns on either side, and the first resident row
/// relative to the current one.
pub(crate) trait Neighborhood: Sized {
    const HEIGHT: usize;
    const PADDING: usize;
    const OFFSET: isize;

    fn gather(rows: &WindowRows<'_>, x: usize) -> Self;
    fn center(&self) -> Rgb;
}

/// 3x3 kernel with logical positions:
/// ```text
/// -------------
/// | A | B | C |
/// -------------
/// | D | E | F |
/// -------------
/// | G | H | I |
/// -------------
/// ```
/// E is the center pixel.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct Kernel3x3 {
    pub(crate) a: Rgb,
    pub(crate) b: Rgb,
    pub(crate) c: Rgb,
    pub(crate) d: Rgb,
    pub(crate) e: Rgb,
    pub(crate) f: Rgb,
    pub(crate) g: Rgb,
    pub(crate) h: Rgb,
    pub(crate) i: Rgb,
}

impl Kernel3x3 {
    /// Row-major `w[0..9]` view, `w[4]` being the center.
    #[inline]
    pub(crate) fn to_array(&self) -> [Rgb; 9] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.i]
    }
}

impl Neighborhood for Kernel3x3 {
    const HEIGHT: usize = 3;
    const PADDING: usize = 1;
    const OFFSET: isize = -1;

    #[inline]
    fn gather(rows: &WindowRows<'_>, x: usize) -> Self {
        Self {
            a: rows.at(x, -1, -1),
            b: rows.at(x, 0, -1),
            c: rows.at(x, 1, -1),
            d: rows.at(x, -1, 0),
            e: rows.at(x, 0, 0),
            f: rows.at(x, 1, 0),
            g: rows.at(x, -1, 1),
            h: rows.at(x, 0, 1),
            i: rows.at(x, 1, 1),
        }
    }

    #[inline]
    fn center(&self) -> Rgb {
        self.e
    }
}

/// 4x4 kernel with logical positions:
/// ```text
/// -----------------
/// | A | B | C | D |
/// -----------------
/// | E | F | G | H |
/// -----------------
/// | I | J | K | L |
/// -----------------
/// | M | N | O | P |
/// -----------------
/// ```
/// F is the center pixel; the kernel reaches one row and column before it and two after.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct Kernel4x4 {
    pub(crate) a: Rgb,
    pub(crate) b: Rgb,
    pub(crate) c: Rgb,
    pub(crate) d: Rgb,

    pub(crate) e: Rgb,
    pub(crate) f: Rgb,
    pub(crate) g: Rgb,
    pub(crate) h: Rgb,

    pub(crate) i: Rgb,
    pub(crate) j: Rgb,
    pub(crate) k: Rgb,
    pub(crate) l: Rgb,

    pub(crate) m: Rgb,
    pub(crate) n: Rgb,
    pub(crate) o: Rgb,
    pub(crate) p: Rgb,
}

impl Neighborhood for Kernel4x4 {
    const HEIGHT: usize = 4;
    const PADDING: usize = 2;
    const OFFSET: isize = -1;

    #[inline]
    fn gather(rows: &WindowRows<'_>, x: usize) -> Self {
        let row = |dy: isize| [-1, 0, 1, 2].map(|dx| rows.at(x, dx, dy));
        let [a, b, c, d] = row(-1);
        let [e, f, g, h] = row(0);
        let [i, j, k, l] = row(1);
        let [m, n, o, p] = row(2);
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
            j,
            k,
            l,
            m,
            n,
            o,
            p,
        }
    }

    #[inline]
    fn center(&self) -> Rgb {
        self.f
    }
}

/// 5x5 kernel centred on the current pixel, addressed by signed offsets.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct Kernel5x5 {
    px: [[Rgb; 5]; 5],
}

impl Kernel5x5 {
    #[inline(always)]
    pub(crate) fn at(&self, dx: isize, dy: isize) -> Rgb {
        debug_assert!((-2..=2).contains(&dx) && (-2..=2).contains(&dy));
        self.px[(dy + 2) as usize][(dx + 2) as usize]
    }
}

impl Neighborhood for Kernel5x5 {
    const HEIGHT: usize = 5;
    const PADDING: usize = 2;
    const OFFSET: isize = -2;

    #[inline]
    fn gather(rows: &WindowRows<'_>, x: usize) -> Self {
        let mut px = [[Rgb::default(); 5]; 5];
        for (dy, row) in (-2..=2).zip(px.iter_mut()) {
            for (dx, cell) in (-2..=2).zip(row.iter_mut()) {
                *cell = rows.at(x, dx, dy);
            }
        }
        Self { px }
    }

    #[inline]
    fn center(&self) -> Rgb {
        self.at(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Kernel3x3, Kernel4x4, Kernel5x5, Neighborhood};
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;
    use crate::window::DynamicWindow;

    fn labelled() -> ImageBuffer {
        ImageBuffer::from_fn(6, 6, |x, y| Rgb::from_u32((y * 10 + x) as u32))
    }

    fn gather_at<K: Neighborhood>(x: usize, y: usize) -> K {
        let img = labelled();
        let mut window = DynamicWindow::new(K::HEIGHT, img.width(), K::PADDING, K::OFFSET).unwrap();
        window.initialize(&img, y);
        K::gather(&window.rows(), x)
    }

    #[test]
    fn kernel_3x3_positions() {
        let k: Kernel3x3 = gather_at(2, 3);
        assert_eq!(k.a, Rgb::from_u32(21));
        assert_eq!(k.e, Rgb::from_u32(32));
        assert_eq!(k.i, Rgb::from_u32(43));
        assert_eq!(k.to_array()[5], k.f);
        assert_eq!(k.center(), k.e);
    }

    #[test]
    fn kernel_4x4_positions() {
        let k: Kernel4x4 = gather_at(2, 2);
        assert_eq!(k.a, Rgb::from_u32(11));
        assert_eq!(k.d, Rgb::from_u32(14));
        assert_eq!(k.f, Rgb::from_u32(22));
        assert_eq!(k.k, Rgb::from_u32(33));
        assert_eq!(k.p, Rgb::from_u32(44));
    }

    #[test]
    fn kernel_5x5_clamps_at_corner() {
        let k: Kernel5x5 = gather_at(0, 0);
        assert_eq!(k.at(-2, -2), Rgb::from_u32(0));
        assert_eq!(k.at(2, 2), Rgb::from_u32(22));
        assert_eq!(k.at(1, -1), Rgb::from_u32(1));
        assert_eq!(k.at(0, 1), Rgb::from_u32(10));
    }
}
