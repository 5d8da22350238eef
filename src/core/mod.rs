//! Core types: factions and deck rules configuration.
//!
//! These are catalog-agnostic. Catalogs define their factions via
//! `FactionSet`, sessions pick their limits via `DeckRules`.

pub mod faction;
pub mod config;

pub use faction::{Faction, FactionId, FactionSet};
pub use config::{DeckRules, DEFAULT_MAX_COPIES};
