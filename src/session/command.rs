//! Inbound commands and the session history they produce.

use serde::{Deserialize, Serialize};

use crate::deck::Change;

/// A user action, addressed by catalog names.
///
/// Serialized adjacently tagged, e.g.
/// `{"type":"Add","target":"Floopie Grunt"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target")]
pub enum DeckCommand {
    /// Select a faction by key.
    SelectFaction(String),
    /// Add one copy of a card.
    Add(String),
    /// Remove one copy of a card.
    Remove(String),
}

impl std::fmt::Display for DeckCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckCommand::SelectFaction(key) => write!(f, "select faction {key}"),
            DeckCommand::Add(name) => write!(f, "add {name}"),
            DeckCommand::Remove(name) => write!(f, "remove {name}"),
        }
    }
}

/// A dispatched command and what it did.
///
/// Used for:
/// - Replay/debugging
/// - Showing why an edit had no effect
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEvent {
    /// Dispatch order within the session, starting at 0.
    pub sequence: u64,

    pub command: DeckCommand,

    pub change: Change,
}

impl DeckEvent {
    #[must_use]
    pub fn new(sequence: u64, command: DeckCommand, change: Change) -> Self {
        Self {
            sequence,
            command,
            change,
        }
    }
}
