//! World module - combat environment selection.

pub mod environments;
pub mod plugin;

pub use environments::{ActiveEnvironment, CombatEnvironment};
pub use plugin::WorldPlugin;
