//! # faction-deck
//!
//! Deck composition state for a faction-filtered collectible card deck
//! builder.
//!
//! ## Design Principles
//!
//! 1. **Catalog-Agnostic**: No hardcoded factions or cards. Catalogs
//!    define their factions and card pool at startup; the reference pool
//!    ships in `cards::reference`.
//!
//! 2. **Silent Clamping**: Disallowed edits never fail. They leave the
//!    deck untouched and report a `Rejection`, so the rules hold even
//!    when a caller offers actions it shouldn't.
//!
//! 3. **Explicit Reconciliation**: Selecting a faction zeroes every held
//!    card outside it before returning. No deferred correction.
//!
//! ## Rules
//!
//! - Every catalog card has a copy count, starting at zero
//! - No card exceeds `DeckRules::max_copies` (3 by default)
//! - Only cards of the selected faction may be added or held
//! - Any held card may be removed
//!
//! ## Modules
//!
//! - `core`: Factions, deck rules configuration
//! - `cards`: Card definitions and the catalog
//! - `deck`: Copy counts and the rules store
//! - `session`: Command dispatch and history
//! - `view`: Derived screen model
//!
//! ## Example
//!
//! ```
//! use faction_deck::session::DeckSession;
//!
//! let mut session = DeckSession::reference();
//! session.add("Floopie Grunt").unwrap();
//! session.add("Mega Floopie").unwrap();
//!
//! assert_eq!(
//!     session.store().non_zero_entries(),
//!     vec![("Floopie Grunt", 1), ("Mega Floopie", 1)]
//! );
//! ```

pub mod core;
pub mod error;
pub mod cards;
pub mod deck;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{DeckRules, Faction, FactionId, FactionSet, DEFAULT_MAX_COPIES};

pub use crate::error::{CatalogError, DeckError, Result, RulesError};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardEntry, CardId, CatalogBuilder,
    reference_catalog,
};

pub use crate::deck::{Change, Cleared, DeckComposition, DeckStore, Rejection};

pub use crate::session::{DeckCommand, DeckEvent, DeckSession};

pub use crate::view::BuilderView;
