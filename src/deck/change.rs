//! Outcomes of deck operations.
//!
//! Every store mutation reports a `Change`. Disallowed edits are not
//! errors: the state is left untouched and the change is `Rejected` with
//! the reason, which presentation code can use to disable controls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::FactionId;

/// Why an edit left the deck unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The card's faction isn't the selected one.
    NotSelectable,
    /// The card is already at the copy limit.
    AtLimit,
    /// There are no copies to remove.
    NoCopies,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::NotSelectable => "card is not in the selected faction",
            Rejection::AtLimit => "card is at the copy limit",
            Rejection::NoCopies => "card has no copies to remove",
        };
        f.write_str(reason)
    }
}

/// A card zeroed by reconciliation, with the count it held before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleared {
    pub card: CardId,
    pub previous: u8,
}

/// Cards zeroed by one reconciliation pass. Usually few.
pub type ClearedCards = SmallVec<[Cleared; 4]>;

/// Result of a deck operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// One copy added; `count` is the new count.
    Added { card: CardId, count: u8 },

    /// One copy removed; `count` is the new count.
    Removed { card: CardId, count: u8 },

    /// Active faction set. `cleared` lists cards reconciliation zeroed.
    ///
    /// Selecting the already-active faction reports `from == to`.
    FactionSelected {
        from: FactionId,
        to: FactionId,
        cleared: ClearedCards,
    },

    /// Nothing changed.
    Rejected { card: CardId, reason: Rejection },
}

impl Change {
    /// Whether the operation was accepted.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Change::Rejected { .. })
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Change::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// The card an add/remove targeted.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Change::Added { card, .. }
            | Change::Removed { card, .. }
            | Change::Rejected { card, .. } => Some(*card),
            Change::FactionSelected { .. } => None,
        }
    }
}
