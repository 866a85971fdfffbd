//! Progression module - XP curve, levels, and level-gated unlocks.

pub mod level;
pub mod plugin;

pub use level::*;
pub use plugin::{MatchXpEvent, ProgressionPlugin};
