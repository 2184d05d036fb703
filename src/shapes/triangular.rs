//! Triangular neighbourhood.
//!
//! Parity of `(x + y)` selects between two trapezoidal extents (a cell on
//! an "upward" triangle sees a different row-width ladder than one on a
//! "downward" triangle). The first cell of a row computes its trapezoid
//! directly; subsequent cells slide.

use super::{CountShape, ShapeContext};

#[derive(Clone, Copy, Debug)]
pub struct Triangular;

impl Triangular {
    /// Half-width of row `dy` for the given parity class. Even parity
    /// tapers the width as `|dy|` grows (a triangle pointing away from the
    /// far row); odd parity keeps the full range (a trapezoid).
    fn half_width(xrange: i32, yrange: i32, dy: i32, even_parity: bool) -> i32 {
        if even_parity {
            (xrange - (yrange - dy.abs())).max(0).min(xrange)
        } else {
            xrange
        }
    }
}

impl CountShape for Triangular {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        let mut first = true;

        for x in lo..=hi {
            let even_parity = (x + y) & 1 == 0;
            if first {
                let mut sum = 0i32;
                for dy in -ctx.yrange..=ctx.yrange {
                    let width = Self::half_width(ctx.xrange, ctx.yrange, dy, even_parity);
                    for dx in -width..=width {
                        sum += ctx.indicator(x + dx, y + dy);
                    }
                }
                out[(x - lo) as usize] = sum;
                first = false;
            } else {
                // Parity flips every column, so the trapezoid shape itself
                // changes cell to cell; recompute rather than slide when the
                // parity class differs from the previous column.
                let mut sum = 0i32;
                for dy in -ctx.yrange..=ctx.yrange {
                    let width = Self::half_width(ctx.xrange, ctx.yrange, dy, even_parity);
                    for dx in -width..=width {
                        sum += ctx.indicator(x + dx, y + dy);
                    }
                }
                out[(x - lo) as usize] = sum;
            }
        }
    }
}
