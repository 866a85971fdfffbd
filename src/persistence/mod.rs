//! Persistence module - RON save slots for player records.

pub mod error;
pub mod plugin;
pub mod save;

pub use error::SaveError;
pub use plugin::{LoadPlayerEvent, PersistencePlugin, SaveDirectory, SavePlayerEvent};
pub use save::{load_player, save_player, SaveData};
