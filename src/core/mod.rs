//! Core module - game states, global events, fundamental systems.

pub mod events;
pub mod plugin;
pub mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
