use std::fmt::{Debug, Formatter};

use crate::error::ScaleError;
use crate::oob_reader::{self, OutOfBounds};
use crate::pixel::Rgb;

/// Read access to a source image.
///
/// Kernels are generic over this trait, so `get_pixel` is inlined into the pixel loop.
pub trait InputImage {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Reads an in-range pixel. Behaviour for `x >= width` or `y >= height` is up to the
    /// implementation; use [`InputImage::safe_access`] for signed coordinates.
    fn get_pixel(&self, x: usize, y: usize) -> Rgb;

    /// Colour treated as transparent by the caller, inherited by images created from this one.
    fn color_key(&self) -> Option<Rgb> {
        None
    }

    #[inline]
    fn safe_access(&self, x: isize, y: isize, policy: OutOfBounds) -> Rgb {
        oob_reader::read(self, x, y, policy)
    }
}

/// Write access to a destination image.
pub trait OutputImage {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: usize, y: usize, value: Rgb);

    /// Contiguous row-major storage, when the image has one. Enables row-parallel scaling.
    fn pixels_mut(&mut self) -> Option<&mut [Rgb]> {
        None
    }
}

/// Output images that can be allocated with metadata inherited from a source image.
pub trait FromTemplate: OutputImage + Sized {
    fn create<I: InputImage + ?Sized>(width: usize, height: usize, template: &I) -> Self;
}

/// Owned, row-major RGB image.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    color_key: Option<Rgb>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::default())
    }

    pub fn filled(width: usize, height: usize, value: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
            color_key: None,
        }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
            color_key: None,
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, ScaleError> {
        if pixels.len() != width * height {
            return Err(ScaleError::InvalidBuffer {
                expected: width * height * 3,
                actual: pixels.len() * 3,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            color_key: None,
        })
    }

    /// Wraps packed `RGB888` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ScaleError> {
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(ScaleError::InvalidBuffer {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytemuck::cast_slice::<u8, Rgb>(bytes).to_vec();
        Self::from_pixels(width, height, pixels)
    }

    pub fn with_color_key(mut self, key: Option<Rgb>) -> Self {
        self.color_key = key;
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: Rgb) {
        self.pixels[y * self.width + x] = value;
    }

    pub fn color_key(&self) -> Option<Rgb> {
        self.color_key
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_rgb_bytes(self) -> Vec<u8> {
        bytemuck::cast_slice::<Rgb, u8>(&self.pixels).to_vec()
    }
}

impl Debug for ImageBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color_key", &self.color_key)
            .finish_non_exhaustive()
    }
}

impl InputImage for ImageBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    fn color_key(&self) -> Option<Rgb> {
        self.color_key
    }
}

impl OutputImage for ImageBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, value: Rgb) {
        self.pixels[y * self.width + x] = value;
    }

    fn pixels_mut(&mut self) -> Option<&mut [Rgb]> {
        Some(&mut self.pixels)
    }
}

impl FromTemplate for ImageBuffer {
    fn create<I: InputImage + ?Sized>(width: usize, height: usize, template: &I) -> Self {
        Self::new(width, height).with_color_key(template.color_key())
    }
}

/// Mutable band of consecutive rows borrowed from contiguous image storage, addressed from its
/// own first row.
pub(crate) struct StripeMut<'a> {
    width: usize,
    height: usize,
    pixels: &'a mut [Rgb],
}

impl<'a> StripeMut<'a> {
    pub(crate) fn new(width: usize, pixels: &'a mut [Rgb]) -> Self {
        debug_assert!(width > 0 && pixels.len() % width == 0);
        Self {
            height: pixels.len() / width,
            width,
            pixels,
        }
    }
}

impl OutputImage for StripeMut<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, value: Rgb) {
        self.pixels[y * self.width + x] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{FromTemplate, ImageBuffer, OutputImage, StripeMut};
    use crate::error::ScaleError;
    use crate::pixel::Rgb;

    #[test]
    fn template_inherits_color_key() {
        let key = Rgb::new(0xFF, 0, 0xFF);
        let src = ImageBuffer::new(2, 2).with_color_key(Some(key));
        let out = ImageBuffer::create(4, 4, &src);
        assert_eq!(out.color_key(), Some(key));
        assert_eq!((out.width(), out.height()), (4, 4));
    }

    #[test]
    fn rgb_bytes_round_trip() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let img = ImageBuffer::from_rgb_bytes(2, 1, &bytes).unwrap();
        assert_eq!(img.get_pixel(1, 0), Rgb::new(4, 5, 6));
        assert_eq!(img.as_bytes(), &bytes);
        assert_eq!(img.into_rgb_bytes(), bytes.to_vec());
    }

    #[test]
    fn rgb_bytes_length_checked() {
        let err = ImageBuffer::from_rgb_bytes(2, 2, &[0; 11]).unwrap_err();
        assert_eq!(
            err,
            ScaleError::InvalidBuffer {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn stripes_address_their_own_rows() {
        let mut img = ImageBuffer::new(3, 5);
        let width = img.width();
        let pixels = img.pixels_mut().unwrap();
        for (i, chunk) in pixels.chunks_mut(width * 2).enumerate() {
            let mut stripe = StripeMut::new(width, chunk);
            for y in 0..stripe.height() {
                stripe.set_pixel(0, y, Rgb::new(i as u8, y as u8, 0));
            }
        }
        let column: Vec<_> = (0..5).map(|y| img.get_pixel(0, y)).collect();
        assert_eq!(
            column,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(0, 1, 0),
                Rgb::new(1, 0, 0),
                Rgb::new(1, 1, 0),
                Rgb::new(2, 0, 0),
            ]
        );
    }
}
