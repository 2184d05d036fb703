//! Occupancy & hashing: deterministic content hash of the live region,
//! occupancy bit frames, per-cell "times seen alive" counters for
//! oscillator analysis, and the multi-resolution max-pool "small colour
//! grid" reduction.

use crate::config::{HASH_MULTIPLIER, HASH_SEED};
use crate::grid::{BoundingBox, ColourGrid};

/// Which extra XOR term a hash pass mixes in, per rule family: for Super,
/// also XOR in the state if it is 6; for Generations/PCA/Extended/
/// RuleLoader, XOR in the rule-specific state value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashRuleFamily {
    TwoState,
    Generations,
    Super,
    /// `[R]History`: consult the given overlay state when the base cell is
    /// in history-marker state 6.
    History,
}

/// Hash the live region inside `bbox`. `alive_start` decides the two-state
/// alive test; `history_states` is the count of history/overlay states that
/// precede the real generation-counter range in a Generations cell's colour
/// byte, subtracted out before the Generations state term is folded in.
/// Seed and multiplier are fixed constants so the hash is reproducible
/// across runs; both the hash and its terms are `u32`, matching the
/// `uint32_t` arithmetic the original hash function wraps on.
///
/// `yshift`/`xshift` (box-relative row/column, not absolute grid
/// coordinates) are what go into the mix: a live region that has only
/// translated hashes identically to its pre-translation self, which is what
/// lets oscillator/spaceship detection key off this hash at all.
pub fn hash_region(
    colour: &ColourGrid,
    bbox: BoundingBox,
    family: HashRuleFamily,
    alive_start: u8,
    history_states: u8,
    overlay: Option<&ColourGrid>,
) -> u32 {
    if bbox.is_empty() {
        return HASH_SEED;
    }

    let mut hash = HASH_SEED;
    for y in bbox.min_y..=bbox.max_y {
        let yshift = (y - bbox.min_y) as u32;
        for x in bbox.min_x..=bbox.max_x {
            let value = colour.get(x, y);
            let alive = match family {
                HashRuleFamily::TwoState => value >= alive_start,
                HashRuleFamily::Generations => value > 0,
                HashRuleFamily::Super => value & 1 != 0,
                HashRuleFamily::History => value >= alive_start,
            };
            if !alive {
                continue;
            }

            let xshift = (x - bbox.min_x) as u32;
            hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ yshift;
            hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ xshift;

            match family {
                HashRuleFamily::Super if value == 6 => {
                    hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ value as u32;
                }
                HashRuleFamily::Generations => {
                    let state = value.wrapping_sub(history_states);
                    hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ state as u32;
                }
                HashRuleFamily::History if value == 6 => {
                    if let Some(overlay) = overlay {
                        hash = hash.wrapping_mul(HASH_MULTIPLIER) ^ overlay.get(x, y) as u32;
                    }
                }
                _ => {}
            }
        }
    }
    hash
}

/// One bit-packed occupancy frame: 1 if the cell is alive, 0 otherwise,
/// packed left-to-right starting at `bit_start` within the first word.
pub struct OccupancyFrame {
    words: Vec<u32>,
}

impl OccupancyFrame {
    pub fn capture(colour: &ColourGrid, alive_start: u8, bit_start: u32) -> Self {
        let (width, height) = colour.dimensions();
        let total_bits = bit_start as usize + width * height;
        let mut words = vec![0u32; total_bits.div_ceil(32)];

        let mut bit_index = bit_start as usize;
        for y in 0..height {
            for x in 0..width {
                if colour.get(x as i32, y as i32) >= alive_start {
                    words[bit_index / 32] |= 1 << (31 - (bit_index % 32));
                }
                bit_index += 1;
            }
        }
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

/// Per-cell "times seen alive" accumulator, for oscillator rotor/stator
/// analysis.
pub struct CellSeenCounts {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl CellSeenCounts {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, counts: vec![0u32; width * height] }
    }

    pub fn accumulate(&mut self, colour: &ColourGrid, alive_start: u8) {
        let (width, height) = colour.dimensions();
        debug_assert_eq!((width, height), (self.width, self.height));
        for y in 0..height {
            for x in 0..width {
                if colour.get(x as i32, y as i32) >= alive_start {
                    self.counts[y * width + x] += 1;
                }
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.counts[y * self.width + x]
    }
}

/// Max-pool reduction of a `size x size` block of the colour grid into one
/// cell of a "small colour grid" (2x2..32x32 reductions). The Super variant
/// additionally ORs each source cell's LSB into a dedicated high bit so the
/// alive signal survives downsampling.
pub fn small_colour_grid(colour: &ColourGrid, block: usize, super_variant: bool) -> (Vec<u8>, usize, usize) {
    debug_assert!(block.is_power_of_two());
    let (width, height) = colour.dimensions();
    let out_width = width.div_ceil(block);
    let out_height = height.div_ceil(block);
    let mut out = vec![0u8; out_width * out_height];

    for oy in 0..out_height {
        for ox in 0..out_width {
            let mut max_val = 0u8;
            let mut any_alive = false;
            for by in 0..block {
                let y = oy * block + by;
                if y >= height {
                    break;
                }
                for bx in 0..block {
                    let x = ox * block + bx;
                    if x >= width {
                        break;
                    }
                    let v = colour.get(x as i32, y as i32);
                    max_val = max_val.max(v);
                    if super_variant && v & 1 != 0 {
                        any_alive = true;
                    }
                }
            }
            if super_variant && any_alive {
                max_val |= 0x80;
            }
            out[oy * out_width + ox] = max_val;
        }
    }

    (out, out_width, out_height)
}
