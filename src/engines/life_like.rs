//! Life-like engine: the bit-packed 16-cell evaluator.
//!
//! Generalizes `build_rule_lookup`/`compute_next_chunk_with_rule`
//! (`domain::simd_life`) — a rule table indexed by `(alive, count)` applied
//! per chunk bit by bit — to an `indexLookup63`-style table built from an
//! 18-bit index: three 6-bit windows (one per row of the 3x3 neighbourhood),
//! producing a 4-cell output nibble per lookup, four lookups per 16-cell
//! word.
//!
//! The three 18-bit "extended rows" generalize a `get_edge_bits`
//! toroidal-wrap helper to an MSB-first word layout: `val = (left
//! neighbour's rightmost bit << 17) | (word << 1) | (right neighbour's
//! leftmost bit)`.

use crate::grid::{BitPlane, BoundingBox, TileMask};
use crate::rules::ComboList;
use log::{debug, trace};

/// 2^18 entries; each holds a 4-bit nibble (low bits) giving the next state
/// of 4 consecutive output cells for one 18-bit neighbourhood window.
pub struct IndexLookup63 {
    table: Vec<u8>,
}

impl IndexLookup63 {
    /// Build the table from a Moore-8 combo list (length >= 9).
    pub fn build(combo: &ComboList) -> Self {
        debug_assert!(combo.len() >= 9, "life-like combo list must cover counts 0..=8");
        let mut table = vec![0u8; 1 << 18];
        for idx in 0..(1usize << 18) {
            let w0 = ((idx >> 12) & 0x3f) as u32;
            let w1 = ((idx >> 6) & 0x3f) as u32;
            let w2 = (idx & 0x3f) as u32;
            let mut nibble = 0u8;
            for sub in 0..4u32 {
                let k_left = 5 - sub;
                let k_centre = 4 - sub;
                let k_right = 3 - sub;
                let above = bit3(w0, k_left, k_centre, k_right);
                let below = bit3(w2, k_left, k_centre, k_right);
                let side = bit(w1, k_left) + bit(w1, k_right);
                let count = above + below + side;
                let self_alive = bit(w1, k_centre) != 0;
                let alive = if self_alive { combo.survives(count as usize) } else { combo.births(count as usize) };
                if alive {
                    nibble |= 1 << (3 - sub);
                }
            }
            table[idx] = nibble;
        }
        Self { table }
    }

    #[inline]
    fn lookup(&self, idx: usize) -> u8 {
        self.table[idx]
    }
}

#[inline]
fn bit(word: u32, k: u32) -> u32 {
    (word >> k) & 1
}

#[inline]
fn bit3(word: u32, a: u32, b_: u32, c: u32) -> u32 {
    bit(word, a) + bit(word, b_) + bit(word, c)
}

/// The Life-like engine: a precompiled `indexLookup63` table, with an
/// optional second table for B0 rules that alternate on odd/even
/// generations.
pub struct LifeLikeEngine {
    table: IndexLookup63,
    alt_table: Option<IndexLookup63>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeLikeStats {
    pub occupied_box: BoundingBox,
    pub population: u64,
    pub births: u64,
    pub deaths: u64,
}

impl LifeLikeEngine {
    pub fn new(combo: &ComboList) -> Self {
        Self { table: IndexLookup63::build(combo), alt_table: None }
    }

    /// Install a second table used on odd generations (B0 alternating-table
    /// support).
    pub fn with_alternate(mut self, combo: &ComboList) -> Self {
        self.alt_table = Some(IndexLookup63::build(combo));
        self
    }

    #[inline]
    fn extended_row(plane: &BitPlane, word_x: i64, y: i64) -> u32 {
        let word = plane.get_word(word_x, y) as u32;
        let left_bit = plane.get_word(word_x - 1, y) & 1;
        let right_bit = (plane.get_word(word_x + 1, y) >> 15) & 1;
        ((left_bit as u32) << 17) | (word << 1) | right_bit as u32
    }

    /// Advance one generation. Only tiles marked in `dirty` are visited;
    /// any tile whose output word changes is marked (with its eight
    /// neighbours) in `next_dirty`, so a later generation re-visits exactly
    /// the tiles that could have changed.
    pub fn step(
        &self,
        current: &BitPlane,
        next: &mut BitPlane,
        dirty: &TileMask,
        next_dirty: &mut TileMask,
        generation_is_odd: bool,
    ) -> LifeLikeStats {
        let table = match (&self.alt_table, generation_is_odd) {
            (Some(alt), true) => alt,
            _ => &self.table,
        };

        let words_per_row = current.words_per_row();
        let (_, height) = current.dimensions();
        let tile_rows = height.div_ceil(16);

        let mut stats = LifeLikeStats::default();

        for ty in 0..tile_rows {
            for tx in 0..words_per_row {
                if !dirty.is_set(tx as i64, ty as i64) {
                    continue;
                }
                let mut tile_changed = false;
                for local_row in 0..16usize {
                    let y = (ty * 16 + local_row) as i64;
                    if y as usize >= height {
                        break;
                    }
                    let word_x = tx as i64;
                    let val0 = Self::extended_row(current, word_x, y - 1);
                    let val1 = Self::extended_row(current, word_x, y);
                    let val2 = Self::extended_row(current, word_x, y + 1);

                    let mut new_word = 0u16;
                    for g in 0..4u32 {
                        let shift = 12 - 4 * g;
                        let w0 = (val0 >> shift) & 0x3f;
                        let w1 = (val1 >> shift) & 0x3f;
                        let w2 = (val2 >> shift) & 0x3f;
                        let idx = ((w0 as usize) << 12) | ((w1 as usize) << 6) | w2 as usize;
                        let nibble = table.lookup(idx);
                        new_word |= (nibble as u16) << shift;
                    }

                    let old_word = current.get_word(word_x, y);
                    next.set_word(tx, y as usize, new_word);

                    if new_word != old_word {
                        tile_changed = true;
                    }

                    let births = (new_word & !old_word).count_ones() as u64;
                    let deaths = (!new_word & old_word).count_ones() as u64;
                    stats.births += births;
                    stats.deaths += deaths;
                    stats.population += new_word.count_ones() as u64;

                    if new_word != 0 {
                        for bit_pos in 0..16u32 {
                            if new_word & (1 << bit_pos) != 0 {
                                let col = tx * 16 + (15 - bit_pos) as usize;
                                stats.occupied_box.grow(col as i32, y as i32);
                            }
                        }
                    }
                }
                if tile_changed {
                    next_dirty.mark_with_neighbours(tx as i64, ty as i64);
                }
            }
        }

        trace!(
            "life_like::step: population={} births={} deaths={}",
            stats.population, stats.births, stats.deaths
        );
        stats
    }

    /// Rayon-parallel sibling of [`Self::step`]: dirty tiles are computed
    /// concurrently (each reads only `current`, a shared reference), then
    /// applied to `next`/`next_dirty` sequentially. Mirrors
    /// `BitGrid::evolve_parallel`/
    /// `temporal_blocking::evolve_temporal_blocking_parallel`'s split
    /// between a parallel compute phase and a disjoint-write apply phase,
    /// reducing population/births/deaths by sum and the bounding box by
    /// min/max across tiles.
    pub fn step_parallel(
        &self,
        current: &BitPlane,
        next: &mut BitPlane,
        dirty: &TileMask,
        next_dirty: &mut TileMask,
        generation_is_odd: bool,
    ) -> LifeLikeStats {
        use rayon::prelude::*;

        let table = match (&self.alt_table, generation_is_odd) {
            (Some(alt), true) => alt,
            _ => &self.table,
        };

        let words_per_row = current.words_per_row();
        let (_, height) = current.dimensions();
        let tile_rows = height.div_ceil(16);

        struct TileResult {
            tx: usize,
            ty: usize,
            rows: Vec<(usize, u16, u16)>, // (local_row, old_word, new_word)
            stats: LifeLikeStats,
            changed: bool,
        }

        let tasks: Vec<(usize, usize)> = (0..tile_rows)
            .flat_map(|ty| (0..words_per_row).map(move |tx| (tx, ty)))
            .filter(|&(tx, ty)| dirty.is_set(tx as i64, ty as i64))
            .collect();
        debug!("life_like::step_parallel: {} dirty tiles queued", tasks.len());

        let results: Vec<TileResult> = tasks
            .into_par_iter()
            .map(|(tx, ty)| {
                let mut stats = LifeLikeStats::default();
                let mut rows = Vec::with_capacity(16);
                let mut changed = false;

                for local_row in 0..16usize {
                    let y = (ty * 16 + local_row) as i64;
                    if y as usize >= height {
                        break;
                    }
                    let word_x = tx as i64;
                    let val0 = Self::extended_row(current, word_x, y - 1);
                    let val1 = Self::extended_row(current, word_x, y);
                    let val2 = Self::extended_row(current, word_x, y + 1);

                    let mut new_word = 0u16;
                    for g in 0..4u32 {
                        let shift = 12 - 4 * g;
                        let w0 = (val0 >> shift) & 0x3f;
                        let w1 = (val1 >> shift) & 0x3f;
                        let w2 = (val2 >> shift) & 0x3f;
                        let idx = ((w0 as usize) << 12) | ((w1 as usize) << 6) | w2 as usize;
                        new_word |= (table.lookup(idx) as u16) << shift;
                    }

                    let old_word = current.get_word(word_x, y);
                    if new_word != old_word {
                        changed = true;
                    }
                    stats.births += (new_word & !old_word).count_ones() as u64;
                    stats.deaths += (!new_word & old_word).count_ones() as u64;
                    stats.population += new_word.count_ones() as u64;
                    if new_word != 0 {
                        for bit_pos in 0..16u32 {
                            if new_word & (1 << bit_pos) != 0 {
                                let col = tx * 16 + (15 - bit_pos) as usize;
                                stats.occupied_box.grow(col as i32, y as i32);
                            }
                        }
                    }
                    rows.push((local_row, old_word, new_word));
                }

                TileResult { tx, ty, rows, stats, changed }
            })
            .collect();

        let mut total = LifeLikeStats::default();
        for result in results {
            for (local_row, _old, new_word) in result.rows {
                next.set_word(result.tx, result.ty * 16 + local_row, new_word);
            }
            if result.changed {
                next_dirty.mark_with_neighbours(result.tx as i64, result.ty as i64);
            }
            total.population += result.stats.population;
            total.births += result.stats.births;
            total.deaths += result.stats.deaths;
            if !result.stats.occupied_box.is_empty() {
                total.occupied_box.grow(result.stats.occupied_box.min_x, result.stats.occupied_box.min_y);
                total.occupied_box.grow(result.stats.occupied_box.max_x, result.stats.occupied_box.max_y);
            }
        }

        trace!(
            "life_like::step_parallel: population={} births={} deaths={}",
            total.population, total.births, total.deaths
        );
        total
    }
}
