//! Deck composition: copy counts, the selected faction and the rules
//! that govern them.
//!
//! ## Key Types
//!
//! - `DeckComposition`: One copy count per catalog card
//! - `DeckStore`: Owns counts + selected faction, enforces the rules
//! - `Change`: What an operation did (or why it did nothing)

pub mod change;
pub mod composition;
pub mod store;

pub use change::{Change, Cleared, ClearedCards, Rejection};
pub use composition::DeckComposition;
pub use store::DeckStore;
