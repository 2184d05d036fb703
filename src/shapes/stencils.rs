//! Fixed-offset stencil shapes: Tripod, Asterisk, Star, Saltire, Cross,
//! Hash. Each is a small fixed set of ray directions
//! scaled out to `range`; none of them need a weight table or a parity
//! flip, so they share one generic "stamp a ray pattern, slide the row"
//! implementation parameterised only by which directions the ray set
//! includes.

use super::{CountShape, ShapeContext};

/// Which compass rays a stencil includes, each walked out to `range`.
#[derive(Clone, Copy, Debug)]
pub struct RaySet {
    pub orthogonal: bool, // N, S, E, W
    pub diagonal: bool,   // NE, NW, SE, SW
    pub centre: bool,
}

impl RaySet {
    fn offsets(&self, range: i32) -> Vec<(i32, i32)> {
        let mut offsets = Vec::new();
        if self.centre {
            offsets.push((0, 0));
        }
        for r in 1..=range {
            if self.orthogonal {
                offsets.extend_from_slice(&[(r, 0), (-r, 0), (0, r), (0, -r)]);
            }
            if self.diagonal {
                offsets.extend_from_slice(&[(r, r), (r, -r), (-r, r), (-r, -r)]);
            }
        }
        offsets
    }
}

/// Cross: the four orthogonal rays (a plus shape), with survival centre.
pub const CROSS: RaySet = RaySet { orthogonal: true, diagonal: false, centre: true };
/// Saltire: the four diagonal rays (an X shape), with survival centre.
pub const SALTIRE: RaySet = RaySet { orthogonal: false, diagonal: true, centre: true };
/// Star: both orthogonal and diagonal rays combined (an 8-point star).
pub const STAR: RaySet = RaySet { orthogonal: true, diagonal: true, centre: true };
/// Asterisk: same eight directions as Star, without the survival centre.
pub const ASTERISK: RaySet = RaySet { orthogonal: true, diagonal: true, centre: false };

#[derive(Clone, Copy, Debug)]
pub struct Stencil {
    pub rays: RaySet,
}

impl CountShape for Stencil {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let range = ctx.xrange.max(ctx.yrange);
        let offsets = self.rays.offsets(range);
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let sum: i32 = offsets.iter().map(|&(dx, dy)| ctx.indicator(x + dx, y + dy)).sum();
            out[(x - lo) as usize] = sum;
        }
    }
}

/// Tripod: three rays at 0 degrees (east), 120 degrees and 240 degrees,
/// approximated on a square grid as east, south-west and north-west.
#[derive(Clone, Copy, Debug)]
pub struct Tripod;

impl CountShape for Tripod {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let range = ctx.xrange.max(ctx.yrange);
        let mut offsets = Vec::with_capacity(3 * range as usize);
        for r in 1..=range {
            offsets.push((r, 0));
            offsets.push((-r, r));
            offsets.push((-r, -r));
        }
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let sum: i32 = offsets.iter().map(|&(dx, dy)| ctx.indicator(x + dx, y + dy)).sum();
            out[(x - lo) as usize] = sum;
        }
    }
}

/// Hash: the two vertical and two horizontal lines offset from centre,
/// like the `#` glyph, at columns/rows `+-1..=range` excluding the centre
/// cross itself.
#[derive(Clone, Copy, Debug)]
pub struct Hash;

impl CountShape for Hash {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]) {
        let lo = ctx.left_x - ctx.xrange;
        let hi = ctx.right_x + ctx.xrange;
        for x in lo..=hi {
            let mut sum = 0i32;
            for dy in -ctx.yrange..=ctx.yrange {
                for dx in -ctx.xrange..=ctx.xrange {
                    let on_vertical_bar = dx == -1 || dx == 1;
                    let on_horizontal_bar = dy == -1 || dy == 1;
                    if on_vertical_bar || on_horizontal_bar {
                        sum += ctx.indicator(x + dx, y + dy);
                    }
                }
            }
            out[(x - lo) as usize] = sum;
        }
    }
}
