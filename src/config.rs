//! Engine-construction configuration.
//!
//! Rule-table *parsing* is out of scope; what remains is the handful of
//! plain parameters a driver must supply when it builds a grid and picks an
//! engine: state thresholds, tile geometry, and the bounded-grid
//! rectangle/wrap mode. These are grouped into small `Copy` structs rather
//! than a file format, optionally `serde`-serializable (feature `serde`)
//! the way `life_core` gates its `serde`/`candid` serialization behind
//! cargo features instead of hard-wiring one format.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateThresholds {
    /// Colour value at which a 2-state cell counts as alive (conventionally 64).
    pub alive_start: u8,
    /// Maximum colour value for the longevity ladder above `alive_start`.
    pub alive_max: u8,
    /// Colour value a freshly-dead cell drops to.
    pub dead_start: u8,
    /// Colour floor below which history fade stops decrementing.
    pub dead_min: u8,
}

impl StateThresholds {
    /// The conventional 2-state thresholds used throughout this crate.
    pub const fn two_state_default() -> Self {
        Self {
            alive_start: 64,
            alive_max: 255,
            dead_start: 63,
            dead_min: 0,
        }
    }
}

impl Default for StateThresholds {
    fn default() -> Self {
        Self::two_state_default()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NStateThresholds {
    /// Colour value a dead cell sits at just below the alive state (often 0).
    pub dead_state: u8,
    /// Colour value meaning "fully alive" (top of the decay ladder).
    pub max_gen_state: u8,
    /// Terminal dead colour value; decay never drops below this.
    pub min_dead_state: u8,
}

impl NStateThresholds {
    pub const fn generations_default(num_states: u8) -> Self {
        Self {
            dead_state: 0,
            max_gen_state: num_states.saturating_sub(1),
            min_dead_state: 0,
        }
    }
}

/// Which bounded-grid mode, if any, applies to the neighbourhood counters
/// and the Life-like engine's border-clearing rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundedGridMode {
    #[default]
    Unbounded,
    Torus,
    ClearOutside,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedGridConfig {
    pub mode: BoundedGridMode,
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundedGridConfig {
    pub const fn unbounded() -> Self {
        Self {
            mode: BoundedGridMode::Unbounded,
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// Cells per tile edge (16x16 tiles).
pub const TILE_SIZE: usize = 16;

/// Fixed seed for the deterministic content hash.
pub const HASH_SEED: u32 = 31415962;

/// Fixed multiplier for the deterministic content hash.
pub const HASH_MULTIPLIER: u32 = 1000003;
