use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::image::{FromTemplate, InputImage};
use crate::kernel::Kernel3x3;
use crate::matrix::Block;
use crate::scaler::{run, set, with_template, Scaler};

/// Eagle 2x: a corner of the block takes the diagonal neighbour when that neighbour and the
/// two edge pixels beside it are all equal.
pub(crate) struct Eagle;

impl Scaler<2> for Eagle {
    type Kernel = Kernel3x3;

    #[inline]
    fn expand(k: &Kernel3x3, _config: &ScalerConfig) -> Block<2> {
        let mut out = Block::filled(k.e);

        if k.a == k.b && k.b == k.c {
            set!(out[0, 0], k.a);
        }
        if k.b == k.c && k.c == k.f {
            set!(out[1, 0], k.c);
        }
        if k.d == k.g && k.g == k.h {
            set!(out[0, 1], k.g);
        }
        if k.f == k.i && k.i == k.h {
            set!(out[1, 1], k.i);
        }

        out
    }
}

pub fn scale_eagle<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 2, source.height() * 2, |out| {
        run::<2, Eagle, _, _>(source, out, config)
    })
}

#[cfg(test)]
mod tests {
    use super::scale_eagle;
    use crate::config::ScalerConfig;
    use crate::image::ImageBuffer;
    use crate::pixel::Rgb;

    #[test]
    fn l_shapes_fill_corners() {
        let (x, o) = (Rgb::new(200, 0, 0), Rgb::new(0, 0, 200));
        // a row of x above the centre fills both upper corners
        let mut src = ImageBuffer::from_fn(3, 3, |_, y| if y == 0 { x } else { o });
        src.set_pixel(1, 1, Rgb::WHITE);
        src.set_pixel(2, 1, x);

        let out: ImageBuffer = scale_eagle(&src, &ScalerConfig::default()).unwrap();
        assert_eq!(out.get_pixel(2, 2), x);
        assert_eq!(out.get_pixel(3, 2), x);
        assert_eq!(out.get_pixel(2, 3), o);
        assert_eq!(out.get_pixel(3, 3), Rgb::WHITE);
    }

    #[test]
    fn isolated_pixel_is_absorbed() {
        let mut src = ImageBuffer::filled(3, 3, Rgb::BLACK);
        src.set_pixel(1, 1, Rgb::WHITE);
        let out: ImageBuffer = scale_eagle(&src, &ScalerConfig::default()).unwrap();

        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(out.get_pixel(x, y), Rgb::BLACK);
        }
        assert_eq!(out.get_pixel(0, 0), Rgb::BLACK);
    }
}
