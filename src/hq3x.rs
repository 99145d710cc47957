use crate::blend::{interpolate2, interpolate277, interpolate3};
use crate::config::{ScalerConfig, YuvThreshold};
use crate::error::ScaleError;
use crate::hq3x_table::{CellRule, Mix, CELL_RULES, PATTERN_RULES};
use crate::image::{FromTemplate, InputImage};
use crate::kernel::Kernel3x3;
use crate::matrix::Block;
use crate::pixel::Rgb;
use crate::scaler::{run, with_template, Scaler};

impl Mix {
    #[inline]
    fn eval(self, w: &[Rgb; 9]) -> Rgb {
        let px = |i: u8| w[i as usize];
        match self {
            Mix::Center => w[4],
            Mix::Blend31(a, b) => interpolate2::<3, 1, 2>(px(a), px(b)),
            Mix::Blend71(a, b) => interpolate2::<7, 1, 3>(px(a), px(b)),
            Mix::Blend11(a, b) => interpolate2::<1, 1, 1>(px(a), px(b)),
            Mix::Blend211(a, b, c) => interpolate3(px(a), px(b), px(c)),
            Mix::Blend277(a, b, c) => interpolate277(px(a), px(b), px(c)),
        }
    }
}

/// HQ3x colour difference. The 8-bit YUV weights apply to the signed RGB difference, which
/// is floored by the shift before taking its magnitude, so the test is not symmetric near a
/// threshold.
#[inline]
pub(crate) fn is_different(lhs: Rgb, rhs: Rgb, threshold: &YuvThreshold) -> bool {
    if lhs == rhs {
        return false;
    }
    let dr = lhs.r as i32 - rhs.r as i32;
    let dg = lhs.g as i32 - rhs.g as i32;
    let db = lhs.b as i32 - rhs.b as i32;

    ((77 * dr + 150 * dg + 29 * db) >> 8).unsigned_abs() > threshold.y as u32
        || ((-43 * dr - 85 * dg + 128 * db) >> 8).unsigned_abs() > threshold.u as u32
        || ((128 * dr - 107 * dg - 21 * db) >> 8).unsigned_abs() > threshold.v as u32
}

/// HQ3x: the eight-bit difference pattern of the neighbours (bit `n` for `w[n]`, skipping the
/// centre) selects a rule for each of the nine output cells.
pub(crate) struct Hq3x;

impl Scaler<3> for Hq3x {
    type Kernel = Kernel3x3;

    fn expand(k: &Kernel3x3, config: &ScalerConfig) -> Block<3> {
        let threshold = &config.yuv_threshold;
        let w = k.to_array();
        let differs = |a: u8, b: u8| is_different(w[a as usize], w[b as usize], threshold);

        let pattern = [0u8, 1, 2, 3, 5, 6, 7, 8]
            .iter()
            .enumerate()
            .fold(0usize, |acc, (bit, &n)| acc | ((differs(4, n) as usize) << bit));

        let rules = &PATTERN_RULES[pattern];
        let mut out = Block::filled(w[4]);
        for (cell, &rule) in rules.iter().enumerate() {
            let mix = match CELL_RULES[rule as usize] {
                CellRule::Always(mix) => mix,
                CellRule::IfDifferent { pair: (a, b), then, otherwise } => {
                    if differs(a, b) {
                        then
                    } else {
                        otherwise
                    }
                }
            };
            out.set(cell % 3, cell / 3, mix.eval(&w));
        }
        out
    }
}

pub fn scale_hq3x<I, O>(source: &I, config: &ScalerConfig) -> Result<O, ScaleError>
where
    I: InputImage + Sync + ?Sized,
    O: FromTemplate,
{
    with_template(source, source.width() * 3, source.height() * 3, |out| {
        run::<3, Hq3x, _, _>(source, out, config)
    })
}
