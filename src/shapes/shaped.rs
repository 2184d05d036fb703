//! Shaped (L2/circular) neighbourhood.
//!
//! `widths[dy + yrange]` gives the half-width of row `dy`; for a circular
//! shape this is precomputed from `sqrt(range^2 - dy^2)`, but the kernel
//! itself only needs the table, not how it was derived. The first cell of a
//! row computes the full sum directly; subsequent cells slide by
//! subtracting the column that fell out on the left and adding the one
//! entering on the right.

use super::{CountShape, ShapeContext};

#[derive(Clone, Debug)]
pub struct Shaped {
    /// Half-width per row offset, indexed `[dy + yrange]`.
    pub widths: Vec<i32>,
}

impl Shaped {
    /// Build the circular (L2) half-width table for the given range.
    pub fn circular(range: i32) -> Self {
        let widths = (-range..=range)
            .map(|dy| {
                let max_dx_sq = range * range - dy * dy;
                if max_dx_sq < 0 {
                    0
                } else {
                    (max_dx_sq as f64).sqrt().floor() as i32
                }
            })
            .collect();
        Self { widths }
    }
}

impl CountShape for Shaped {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;

        let mut first = true;
        let mut running = vec![0i32; 0];
        let _ = &mut running;

        for x in lo..=hi {
            if first {
                let mut sum = 0i32;
                for (row_idx, &width) in self.widths.iter().enumerate() {
                    let dy = row_idx as i32 - ctx.yrange;
                    for dx in -width..=width {
                        sum += ctx.indicator(x + dx, y + dy);
                    }
                }
                out[(x - lo) as usize] = sum;
                first = false;
            } else {
                let mut sum = out[(x - lo - 1) as usize];
                for (row_idx, &width) in self.widths.iter().enumerate() {
                    let dy = row_idx as i32 - ctx.yrange;
                    // Previous centre was x-1: its window was
                    // [x-1-width, x-1+width]. New centre x's window is
                    // [x-width, x+width]. Slide: drop the left edge,
                    // pick up the right edge.
                    sum -= ctx.indicator(x - 1 - width, y + dy);
                    sum += ctx.indicator(x + width, y + dy);
                }
                out[(x - lo) as usize] = sum;
            }
        }
    }
}
