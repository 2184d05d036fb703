//! Generations engine: promotes the Life-like engine's bit-grid output into
//! the byte colour plane. Alive bit -> `max_gen_state`; everything else
//! decays by one toward `min_dead_state`.

use crate::config::NStateThresholds;
use crate::grid::{BitPlane, ColourGrid, GenerationStats};
use log::trace;

/// Walk `bits` (the just-computed Life-like bit-grid, 1 = alive) against
/// `colour` and promote/decay each cell, 16-cell-word at a time — one word
/// is already exactly 16 cells wide so the scalarised block and the
/// bit-grid word coincide.
pub fn promote(bits: &BitPlane, colour: &mut ColourGrid, thresholds: &NStateThresholds) -> GenerationStats {
    colour.begin_generation();
    let (width, height) = colour.dimensions();

    for y in 0..height {
        for word_x in 0..bits.words_per_row() {
            let word = bits.get_word(word_x as i64, y as i64);
            for bit_pos in 0..16u32 {
                let x = word_x * 16 + (15 - bit_pos) as usize;
                if x >= width {
                    continue;
                }
                let alive_bit = word & (1 << bit_pos) != 0;
                let cell = colour.get(x as i32, y as i32);

                let new_cell = if alive_bit && (cell <= thresholds.dead_state || cell == thresholds.max_gen_state) {
                    if cell != thresholds.max_gen_state {
                        colour.record_birth();
                    }
                    thresholds.max_gen_state
                } else if cell > thresholds.min_dead_state {
                    if cell == thresholds.max_gen_state {
                        colour.record_death();
                    }
                    cell - 1
                } else {
                    cell
                };

                colour.set(x as i32, y as i32, new_cell);
                let is_alive = new_cell == thresholds.max_gen_state;
                if new_cell > thresholds.min_dead_state {
                    colour.record_occupied(x as i32, y as i32, is_alive);
                }
            }
        }
    }

    let stats = colour.stats();
    trace!(
        "generations::promote: population={} births={} deaths={}",
        stats.population, stats.births, stats.deaths
    );
    stats
}
