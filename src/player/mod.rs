//! Player module - profile record, player entity, and the castle store.

pub mod components;
pub mod plugin;
pub mod profile;
pub mod store;

pub use components::{spawn_caster, Player};
pub use plugin::PlayerPlugin;
pub use profile::{Appearance, Language, PlayerProfile, SpellLogEntry};
pub use store::{
    buy_hound, buy_robe, buy_shout, equip_robe, equip_shout, RobeData, RobeRegistry,
};
