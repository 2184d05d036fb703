//! Corner/Edge neighbourhood.
//!
//! Two independent ranges: `corner_range` places four sample points at the
//! diagonal corners (`±corner_range, ±corner_range`), `edge_range` places
//! four at the orthogonal edge midpoints (`±edge_range, 0` / `0, ±edge_range`);
//! plus the centre cell (the survival term).

use super::{CountShape, ShapeContext};

#[derive(Clone, Copy, Debug)]
pub struct CornerEdge {
    pub corner_range: i32,
    pub edge_range: i32,
}

impl CornerEdge {
    fn offsets(&self) -> [(i32, i32); 9] {
        let c = self.corner_range;
        let e = self.edge_range;
        [
            (0, 0),
            (c, c),
            (c, -c),
            (-c, c),
            (-c, -c),
            (e, 0),
            (-e, 0),
            (0, e),
            (0, -e),
        ]
    }
}

impl CountShape for CornerEdge {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let offsets = self.offsets();
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let sum: i32 = offsets.iter().map(|&(dx, dy)| ctx.indicator(x + dx, y + dy)).sum();
            out[(x - lo) as usize] = sum;
        }
    }
}
