//! Custom shape: an explicit offset list supplied by the rule definition
//! rather than a formula. Encoded as repeated `(dy, k,
//! dx_1, ..., dx_k)` groups, mirroring the packed list format the original
//! engine reads directly out of its rule-table bytes — rule-table *parsing*
//! stays out of scope, so here the caller has already decoded the groups
//! into [`CustomRow`]s.

use super::{CountShape, ShapeContext};

#[derive(Clone, Debug)]
pub struct CustomRow {
    pub dy: i32,
    pub dxs: Vec<i32>,
}

#[derive(Clone, Debug)]
pub struct Custom {
    pub rows: Vec<CustomRow>,
    pub is_triangular: bool,
}

impl CountShape for Custom {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;

        for x in lo..=hi {
            let mut sum = 0i32;
            let flip = self.is_triangular && ((x + y) & 1 == 0);
            for row in &self.rows {
                let dy = if flip { -row.dy } else { row.dy };
                for &dx in &row.dxs {
                    sum += ctx.indicator(x + dx, y + dy);
                }
            }
            out[(x - lo) as usize] = sum;
        }
    }
}
