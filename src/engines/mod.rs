//! The generation-advancement engines, sharing the `grid`/`shapes`
//! substrate but otherwise independent: callers pick one per rule family.

pub mod generations;
pub mod life_like;
pub mod super_engine;
pub mod transition;

pub use life_like::{LifeLikeEngine, LifeLikeStats};
