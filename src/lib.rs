//! Generation-advancement engine for Life-like, Generations and HROT
//! cellular automata over a tiled bit/byte grid substrate.
//!
//! This crate is the compute core only: no rule-table parsing, no pattern
//! file I/O, no rendering, no CLI. A host application owns those and drives
//! this crate's grids and engines one generation at a time.

pub mod bounded;
pub mod cell;
pub mod config;
pub mod engines;
pub mod error;
pub mod grid;
pub mod occupancy;
pub mod rules;
pub mod shapes;

pub use cell::Cell;
pub use config::{BoundedGridConfig, BoundedGridMode, NStateThresholds, StateThresholds};
pub use error::GridError;
pub use grid::{BitPlane, BoundingBox, ColourGrid, GenerationStats, PingPong, TileMask};
pub use rules::{ComboList, Rule};
