//! Hexagonal neighbourhood.
//!
//! A square grid approximation of a hex lattice: rows at or below the
//! centre keep the full `[-xrange, xrange]` span (the "lower triangle" of
//! the bounding rectangle), while rows above the centre taper their span
//! down by one column per row (the "upper triangle"), reflecting the skew
//! of a hex tiling mapped onto a square grid. Each row slides left-to-right
//! exactly like [`super::shaped::Shaped`].

use super::{CountShape, ShapeContext};

#[derive(Clone, Copy, Debug)]
pub struct Hexagonal;

impl Hexagonal {
    fn half_width(xrange: i32, dy: i32) -> i32 {
        if dy <= 0 {
            xrange
        } else {
            (xrange - dy).max(0)
        }
    }
}

impl CountShape for Hexagonal {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        let mut first = true;

        for x in lo..=hi {
            if first {
                let mut sum = 0i32;
                for dy in -ctx.yrange..=ctx.yrange {
                    let width = Self::half_width(ctx.xrange, dy);
                    for dx in -width..=width {
                        sum += ctx.indicator(x + dx, y + dy);
                    }
                }
                out[(x - lo) as usize] = sum;
                first = false;
            } else {
                let mut sum = out[(x - lo - 1) as usize];
                for dy in -ctx.yrange..=ctx.yrange {
                    let width = Self::half_width(ctx.xrange, dy);
                    sum -= ctx.indicator(x - 1 - width, y + dy);
                    sum += ctx.indicator(x + width, y + dy);
                }
                out[(x - lo) as usize] = sum;
            }
        }
    }
}
