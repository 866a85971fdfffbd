//! Wager module - bet-match escrow and arena pools.

pub mod arena;
pub mod ledger;
pub mod plugin;

pub use arena::{ArenaOutcome, ArenaSession, ARENA_CAPACITY, MIN_SURVIVAL_SECONDS};
pub use ledger::BetLedger;
pub use plugin::{ArenaEndedEvent, BetResolvedEvent, DailyDeathmatchEvent, WagerPlugin};
