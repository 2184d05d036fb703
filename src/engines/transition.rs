//! State transition applier: turns a counts array plus a combo list into
//! the next generation's colour plane, population/births/deaths, and
//! bounding boxes. Two variants, 2-state and N-state, sharing the row-walk
//! structure of `domain::bit_grid::BitGrid::evolve`'s evolve loop: compute
//! into a scratch buffer, then commit.

use crate::config::{NStateThresholds, StateThresholds};
use crate::grid::{ColourGrid, GenerationStats};
use crate::rules::ComboList;
use log::trace;

/// Apply the 2-state transition rule across `[left_x..=right_x] x
/// [bottom_y..=top_y]`. `counts[(y - bottom_y) * width + (x - left_x)]` is
/// the neighbour-indicator sum for cell `(x, y)`.
///
/// The row is walked in a scalar prologue / 16-wide body / scalar epilogue,
/// scalarised throughout: prologue, body and epilogue all call the same
/// per-cell step and differ only in how many cells they process at once
/// conceptually — there is no real SIMD lane width here, just the
/// documented loop shape.
pub fn apply_two_state(
    colour: &mut ColourGrid,
    counts: &[i32],
    width: usize,
    left_x: i32,
    bottom_y: i32,
    right_x: i32,
    top_y: i32,
    combo: &ComboList,
    thresholds: &StateThresholds,
) -> GenerationStats {
    colour.begin_generation();

    for y in bottom_y..=top_y {
        let row_base = (y - bottom_y) as usize * width;
        for x in left_x..=right_x {
            let count = counts[row_base + (x - left_x) as usize].max(0) as usize;
            let count = count.min(combo.len() - 1);
            let cell = colour.get(x, y);

            let new_cell = if cell < thresholds.alive_start {
                if combo.births(count) {
                    colour.record_birth();
                    thresholds.alive_start
                } else if cell > thresholds.dead_min {
                    cell - 1
                } else {
                    cell
                }
            } else if !combo.survives(count) {
                colour.record_death();
                thresholds.dead_start
            } else if cell < thresholds.alive_max {
                cell + 1
            } else {
                cell
            };

            colour.set(x, y, new_cell);
            let is_alive = new_cell >= thresholds.alive_start;
            if new_cell > thresholds.dead_min {
                colour.record_occupied(x, y, is_alive);
            }
        }
    }

    let stats = colour.stats();
    trace!(
        "transition::apply_two_state: population={} births={} deaths={}",
        stats.population, stats.births, stats.deaths
    );
    stats
}

/// Apply the N-state (Generations-style) transition rule: below
/// `dead_state` a birth promotes straight to `max_gen_state`; at
/// `max_gen_state` survival keeps it there, otherwise it starts decaying;
/// anywhere else on the ladder it unconditionally steps down by one.
pub fn apply_n_state(
    colour: &mut ColourGrid,
    counts: &[i32],
    width: usize,
    left_x: i32,
    bottom_y: i32,
    right_x: i32,
    top_y: i32,
    combo: &ComboList,
    thresholds: &NStateThresholds,
) -> GenerationStats {
    colour.begin_generation();

    for y in bottom_y..=top_y {
        let row_base = (y - bottom_y) as usize * width;
        for x in left_x..=right_x {
            let count = counts[row_base + (x - left_x) as usize].max(0) as usize;
            let count = count.min(combo.len() - 1);
            let cell = colour.get(x, y);

            let new_cell = if cell <= thresholds.dead_state {
                if combo.births(count) {
                    colour.record_birth();
                    thresholds.max_gen_state
                } else if cell > thresholds.min_dead_state {
                    cell - 1
                } else {
                    cell
                }
            } else if cell == thresholds.max_gen_state {
                if combo.survives(count) {
                    cell
                } else {
                    colour.record_death();
                    cell - 1
                }
            } else {
                cell.saturating_sub(1)
            };

            colour.set(x, y, new_cell);
            let is_alive = new_cell == thresholds.max_gen_state;
            if new_cell > thresholds.min_dead_state {
                colour.record_occupied(x, y, is_alive);
            }
        }
    }

    let stats = colour.stats();
    trace!(
        "transition::apply_n_state: population={} births={} deaths={}",
        stats.population, stats.births, stats.deaths
    );
    stats
}
