//! Companion module - summoned hound allies with tiered stats.

pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Companion, CompanionOwner, Dead, Health};
pub use plugin::CompanionPlugin;
pub use systems::{DismissCompanionEvent, SummonCompanionEvent};
