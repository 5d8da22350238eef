//! Error types.
//!
//! Disallowed deck edits (over the limit, wrong faction, nothing to remove)
//! are not errors: they come back as `Change::Rejected`. Errors here mean
//! the caller named something the catalog doesn't have, or the catalog
//! data itself is malformed.

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no factions")]
    NoFactions,

    #[error("duplicate faction key: {0}")]
    DuplicateFaction(String),

    #[error("duplicate card name: {0}")]
    DuplicateCard(String),

    #[error("card {card:?} references unknown faction {faction:?}")]
    UnknownFaction { card: String, faction: String },

    #[error("too many factions: {0} (at most 256)")]
    TooManyFactions(usize),

    #[error("too many cards: {0} (at most 65536)")]
    TooManyCards(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating deck rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("copy limit must be 1 to 3, got {0}")]
    CopyLimit(u8),
}

/// Errors raised by deck operations addressed by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("unknown faction: {0}")]
    UnknownFaction(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
