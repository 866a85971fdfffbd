//! Token catalog - immutable definitions of the pieces spells are built from.

pub mod catalog;

pub use catalog::*;
