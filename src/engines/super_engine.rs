//! Super engine: the 0..=25-state extension of Life-like with
//! hand-tabulated succession and coloured-history markers. Even states are
//! dead, odd states alive. The case analysis below is reproduced from the
//! source engine's `nextGenerationSuperMoore` verbatim, only restated as a
//! Rust `match` instead of a C `switch`.

use crate::grid::{ColourGrid, GenerationStats};
use log::trace;

const ALIVE_WITH_14: u32 = (1 << 1)
    | (1 << 3)
    | (1 << 5)
    | (1 << 7)
    | (1 << 9)
    | (1 << 11)
    | (1 << 13)
    | (1 << 14)
    | (1 << 15)
    | (1 << 17)
    | (1 << 19)
    | (1 << 21)
    | (1 << 23)
    | (1 << 25);
const ALIVE_WITH_14_OR_18: u32 = ALIVE_WITH_14 | (1 << 18);
const ALIVE_1_3_5_7: u32 = (1 << 1) | (1 << 3) | (1 << 5) | (1 << 7);
const ALIVE_9_TO_25: u32 =
    (1 << 9) | (1 << 11) | (1 << 13) | (1 << 15) | (1 << 17) | (1 << 19) | (1 << 21) | (1 << 23) | (1 << 25);
const ALIVE_1_3_5_9_11: u32 = (1 << 1) | (1 << 3) | (1 << 5) | (1 << 9) | (1 << 11);
const ALIVE_7_13_15_17_19_21_23_25: u32 =
    (1 << 7) | (1 << 13) | (1 << 15) | (1 << 17) | (1 << 19) | (1 << 21) | (1 << 23) | (1 << 25);
const ALIVE_1_5_7_9_11: u32 = (1 << 1) | (1 << 5) | (1 << 7) | (1 << 9) | (1 << 11);
const ALIVE_13_15_17_19_21_23_25: u32 =
    (1 << 13) | (1 << 15) | (1 << 17) | (1 << 19) | (1 << 21) | (1 << 23) | (1 << 25);
const ALIVE_9_11: u32 = (1 << 9) | (1 << 11);
const ALIVE_1_3_5_13_15_17_19_21_23_25: u32 = (1 << 1)
    | (1 << 3)
    | (1 << 5)
    | (1 << 13)
    | (1 << 15)
    | (1 << 17)
    | (1 << 19)
    | (1 << 21)
    | (1 << 23)
    | (1 << 25);

/// Compute `typeMask`: one bit per state present anywhere in the 3x3
/// neighbourhood (including the centre, per the source's `lcol|ccol|rcol`
/// construction).
pub fn type_mask(neighbour_states: &[u8]) -> u32 {
    neighbour_states.iter().fold(0u32, |mask, &s| mask | (1 << s))
}

/// The per-cell succession table. `c` is the cell's current state,
/// `bit_alive` is the Life-like bit-grid's verdict for this cell this
/// generation, `mask` is `type_mask` over the 3x3 neighbourhood.
pub fn successor_state(c: u8, bit_alive: bool, mask: u32) -> u8 {
    // State 6 markers are handled before the normal alive/dead switch, as
    // in the source: most values of c short-circuit to a fixed successor
    // when a state-6 marker is present in the neighbourhood.
    if mask & (1 << 6) != 0 {
        if c == 7 || c == 8 || c >= 13 {
            return 0;
        }
        match c {
            1 => return 2,
            3 | 5 => return 4,
            9 => return 10,
            11 => return 12,
            _ => {} // falls through to normal processing below
        }
    }

    if bit_alive {
        if c & 1 == 0 {
            // was dead, now alive
            match c {
                4 => 3,
                6 => 6, // bit-grid birth suppressed; state 6 stays a marker
                8 => 7,
                _ => {
                    let calc = mask & ALIVE_9_TO_25;
                    if (mask & ALIVE_1_3_5_7) == 0 && calc.count_ones() == 1 {
                        31 - calc.leading_zeros() as u8
                    } else {
                        let calc = mask & ALIVE_13_15_17_19_21_23_25;
                        if (mask & (1 << 3)) != 0 && (mask & ALIVE_1_5_7_9_11) == 0 && calc.count_ones() == 1 {
                            31 - calc.leading_zeros() as u8
                        } else {
                            let calc = mask & ALIVE_9_11;
                            if (mask & (1 << 7)) != 0
                                && (mask & ALIVE_1_3_5_13_15_17_19_21_23_25) == 0
                                && calc.count_ones() == 1
                            {
                                31 - calc.leading_zeros() as u8
                            } else {
                                let calc = mask & ALIVE_7_13_15_17_19_21_23_25;
                                if calc != 0 && (mask & ALIVE_1_3_5_9_11) == 0 {
                                    13
                                } else {
                                    1
                                }
                            }
                        }
                    }
                }
            }
        } else {
            c // already alive and stays alive
        }
    } else if c & 1 != 0 {
        // was alive, now dead: step onto the history ladder
        if c <= 11 {
            if c == 5 { 4 } else { c + 1 }
        } else {
            0
        }
    } else if c >= 14 {
        match c {
            14 => 0,
            16 => if mask & ALIVE_WITH_14 != 0 { 14 } else { c },
            18 => if mask & (1 << 22) != 0 { 22 } else { c },
            20 => if mask & (1 << 18) != 0 { 18 } else { c },
            22 => if mask & (1 << 20) != 0 { 20 } else { c },
            24 => if mask & ALIVE_WITH_14_OR_18 != 0 { 18 } else { c },
            _ => c,
        }
    } else {
        c
    }
}

/// Advance one generation given the companion Life-like bit-grid's verdict
/// for every cell (`bit_alive_at`) and the current colour plane.
pub fn step(
    colour_in: &ColourGrid,
    colour_out: &mut ColourGrid,
    bit_alive_at: impl Fn(i32, i32) -> bool,
) -> GenerationStats {
    colour_out.begin_generation();
    let (width, height) = colour_in.dimensions();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let c = colour_in.get(x, y);
            let mut neighbours = Vec::with_capacity(9);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    neighbours.push(colour_in.get(x + dx, y + dy));
                }
            }
            let mask = type_mask(&neighbours);
            let bit_alive = bit_alive_at(x, y);
            let new_c = successor_state(c, bit_alive, mask);

            colour_out.set(x, y, new_c);
            let was_alive = c & 1 != 0;
            let is_alive = new_c & 1 != 0;
            if is_alive && !was_alive {
                colour_out.record_birth();
            } else if was_alive && !is_alive {
                colour_out.record_death();
            }
            if new_c > 0 {
                colour_out.record_occupied(x, y, is_alive);
            }
        }
    }

    let stats = colour_out.stats();
    trace!(
        "super_engine::step: population={} births={} deaths={}",
        stats.population, stats.births, stats.deaths
    );
    stats
}
