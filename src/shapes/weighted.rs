//! Weighted and WeightedStates shapes.
//!
//! `Weighted` sums `weight(dx, dy) * indicator(x+dx, y+dy)` over the full
//! `(2*xrange+1) x (2*yrange+1)` table, with a fast path for the common
//! `xrange = yrange = 1`, non-triangular case (an unrolled 3x3, mirroring
//! the original's `nextGenerationWeighted2R1` special case). `isTriangular`
//! flips which half of the weight table is consulted on odd `(x+y)` parity.
//! `WeightedStates` additionally distinguishes alive/dead neighbour weight
//! multipliers.

use super::{CountShape, ShapeContext};

/// Row-major weight table, `(2*xrange+1)` columns by `(2*yrange+1)` rows,
/// indexed `[(dy+yrange) * width + (dx+xrange)]`.
#[derive(Clone, Debug)]
pub struct WeightTable {
    pub weights: Vec<i32>,
    pub xrange: i32,
    pub yrange: i32,
}

impl WeightTable {
    #[inline]
    fn at(&self, dx: i32, dy: i32) -> i32 {
        let width = 2 * self.xrange + 1;
        self.weights[((dy + self.yrange) * width + (dx + self.xrange)) as usize]
    }
}

#[derive(Clone, Debug)]
pub struct Weighted {
    pub table: WeightTable,
    pub is_triangular: bool,
}

impl Weighted {
    fn fast_path_3x3(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let w = &self.table;
        let lo = ctx.left_x - 1;
        let hi = ctx.right_x + 1;
        for x in lo..=hi {
            let mut sum = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    sum += w.at(dx, dy) * ctx.indicator(x + dx, y + dy);
                }
            }
            out[(x - lo) as usize] = sum;
        }
    }
}

impl CountShape for Weighted {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        if ctx.xrange == 1 && ctx.yrange == 1 && !self.is_triangular {
            return self.fast_path_3x3(ctx, y, out);
        }

        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let mut sum = 0i32;
            let flip = self.is_triangular && ((x + y) & 1 == 0);
            for dy in -ctx.yrange..=ctx.yrange {
                let eff_dy = if flip { -dy } else { dy };
                for dx in -ctx.xrange..=ctx.xrange {
                    sum += self.table.at(dx, dy) * ctx.indicator(x + dx, y + eff_dy);
                }
            }
            out[(x - lo) as usize] = sum;
        }
    }
}

#[derive(Clone, Debug)]
pub struct WeightedStates {
    pub table: WeightTable,
    pub is_triangular: bool,
    pub dead_weight: i32,
    pub alive_weight: i32,
}

impl CountShape for WeightedStates {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let mut sum = 0i32;
            let flip = self.is_triangular && ((x + y) & 1 == 0);
            for dy in -ctx.yrange..=ctx.yrange {
                let eff_dy = if flip { -dy } else { dy };
                for dx in -ctx.xrange..=ctx.xrange {
                    let alive = ctx.indicator(x + dx, y + eff_dy) != 0;
                    let mult = if alive { self.alive_weight } else { self.dead_weight };
                    sum += self.table.at(dx, dy) * mult;
                }
            }
            out[(x - lo) as usize] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ColourGrid;
    use crate::shapes::CellPredicate;

    fn ctx(grid: &ColourGrid, xrange: i32, yrange: i32) -> ShapeContext {
        ShapeContext {
            colour: grid,
            predicate: CellPredicate::TwoState { alive_start: 64 },
            left_x: 10,
            bottom_y: 10,
            right_x: 10,
            top_y: 10,
            xrange,
            yrange,
        }
    }

    #[test]
    fn fast_path_matches_direct_3x3_weights() {
        let mut grid = ColourGrid::new(32, 32).unwrap();
        grid.set(11, 10, 200);
        let table = WeightTable { weights: vec![1; 9], xrange: 1, yrange: 1 };
        let shape = Weighted { table, is_triangular: false };
        let c = ctx(&grid, 1, 1);
        let mut out = vec![0i32; 3];
        shape.count_row(&c, 10, &mut out);
        assert_eq!(out[1], 1);
    }

    #[test]
    fn weighted_states_uses_alive_weight_for_live_neighbour() {
        let mut grid = ColourGrid::new(32, 32).unwrap();
        grid.set(11, 10, 200);
        let table = WeightTable { weights: vec![1; 9], xrange: 1, yrange: 1 };
        let shape = WeightedStates {
            table,
            is_triangular: false,
            dead_weight: 0,
            alive_weight: 5,
        };
        let c = ctx(&grid, 1, 1);
        let mut out = vec![0i32; 3];
        shape.count_row(&c, 10, &mut out);
        assert_eq!(out[1], 5);
    }
}
