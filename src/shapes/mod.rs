//! HROT neighbourhood counters: one `CountShape` kernel per named shape
//! family, each callable with either a 2-state or N-state [`CellPredicate`]
//! so there is exactly one kernel per shape rather than two near-duplicates.
//!
//! Generalizes a fixed Moore-8 toroidal neighbour-counting loop
//! (`domain::bit_grid::BitGrid::count_neighbors`, `domain::grid::Grid`) to
//! an arbitrary shape and range.

pub mod checkerboard;
pub mod corner_edge;
pub mod cumulative;
pub mod custom;
pub mod gaussian;
pub mod hexagonal;
pub mod shaped;
pub mod stencils;
pub mod triangular;
pub mod weighted;

use crate::grid::ColourGrid;

/// Which "is this neighbour alive" test a kernel should apply. Both variants
/// of every shape reduce to the same counting code once this is
/// parameterised.
#[derive(Clone, Copy, Debug)]
pub enum CellPredicate {
    /// Two-state rules: colour >= aliveStart.
    TwoState { alive_start: u8 },
    /// Generations-style N-state rules: colour == maxGenState.
    NState { max_gen_state: u8 },
}

impl CellPredicate {
    #[inline]
    pub fn is_alive(&self, colour: u8) -> bool {
        match *self {
            CellPredicate::TwoState { alive_start } => colour >= alive_start,
            CellPredicate::NState { max_gen_state } => colour == max_gen_state,
        }
    }
}

/// The rectangle + range a counting pass operates over, and the predicate
/// it uses to test a neighbour colour. Shared by every `CountShape` impl so
/// none of them need their own copy of the bounds-handling boilerplate.
pub struct ShapeContext<'a> {
    pub colour: &'a ColourGrid,
    pub predicate: CellPredicate,
    pub left_x: i32,
    pub bottom_y: i32,
    pub right_x: i32,
    pub top_y: i32,
    pub xrange: i32,
    pub yrange: i32,
}

impl<'a> ShapeContext<'a> {
    #[inline]
    pub fn indicator(&self, x: i32, y: i32) -> i32 {
        self.predicate.is_alive(self.colour.get(x, y)) as i32
    }
}

/// A pure neighbourhood-counting kernel for one shape family. `count_row`
/// fills `out[x]` (indexed by absolute grid column, for
/// `ctx.left_x - ctx.xrange ..= ctx.right_x + ctx.xrange`) with the
/// neighbour-indicator sum for row `y`.
pub trait CountShape {
    fn count_row(&self, ctx: &ShapeContext, y: i32, out: &mut [i32]);
}

/// Reference triple-loop counter used by `tests/shapes_regression.rs` to
/// check every fast-path kernel against brute force.
/// `offsets` enumerates every `(dx, dy)` pair the shape considers a
/// neighbour of `(x, y)` — shapes whose membership depends on `(x, y)`
/// itself (checkerboard parity, triangular parity) pass a closure instead
/// via [`naive_count_with`].
pub fn naive_count(ctx: &ShapeContext, x: i32, y: i32, offsets: &[(i32, i32)]) -> i32 {
    offsets.iter().map(|&(dx, dy)| ctx.indicator(x + dx, y + dy)).sum()
}

/// Like [`naive_count`] but the offset list is recomputed per-cell by
/// `offsets_for`, for parity-dependent shapes.
pub fn naive_count_with(
    ctx: &ShapeContext,
    x: i32,
    y: i32,
    offsets_for: impl Fn(i32, i32) -> Vec<(i32, i32)>,
) -> i32 {
    offsets_for(x, y).iter().map(|&(dx, dy)| ctx.indicator(x + dx, y + dy)).sum()
}
