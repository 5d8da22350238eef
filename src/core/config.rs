//! Deck-building rules configuration.
//!
//! Sessions are configured at startup with a `DeckRules` value:
//! - `max_copies`: per-card copy limit, 1 to 3 (default 3)
//! - `initial_faction`: faction selected when a session starts
//!   (default: the catalog's first faction)

use serde::{Deserialize, Serialize};

use super::FactionId;
use crate::error::RulesError;

/// Default per-card copy limit, also the highest allowed.
pub const DEFAULT_MAX_COPIES: u8 = 3;

/// Rules a deck store enforces.
///
/// ## Example
///
/// ```
/// use faction_deck::core::{DeckRules, FactionId};
///
/// let rules = DeckRules::new()
///     .with_max_copies(2)
///     .with_initial_faction(FactionId::new(1));
///
/// assert_eq!(rules.max_copies, 2);
/// assert_eq!(rules.initial_faction, Some(FactionId::new(1)));
/// ```
///
/// Deserializing goes through the same validation as the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeckRules")]
pub struct DeckRules {
    /// Maximum copies of any single card (1 to 3).
    pub max_copies: u8,

    /// Faction selected at session start. `None` selects the first faction.
    pub initial_faction: Option<FactionId>,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_copies: DEFAULT_MAX_COPIES,
            initial_faction: None,
        }
    }
}

impl DeckRules {
    /// Create the default rules (3 copies, first faction).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-card copy limit.
    ///
    /// Panics unless `max` is 1 to 3.
    #[must_use]
    pub fn with_max_copies(mut self, max: u8) -> Self {
        if let Err(err) = check_max_copies(max) {
            panic!("{err}");
        }
        self.max_copies = max;
        self
    }

    /// Set the faction selected at session start.
    #[must_use]
    pub fn with_initial_faction(mut self, faction: FactionId) -> Self {
        self.initial_faction = Some(faction);
        self
    }
}

fn check_max_copies(max: u8) -> Result<u8, RulesError> {
    if (1..=DEFAULT_MAX_COPIES).contains(&max) {
        Ok(max)
    } else {
        Err(RulesError::CopyLimit(max))
    }
}

/// Unvalidated wire form of `DeckRules`.
#[derive(Deserialize)]
struct RawDeckRules {
    max_copies: u8,
    #[serde(default)]
    initial_faction: Option<FactionId>,
}

impl TryFrom<RawDeckRules> for DeckRules {
    type Error = RulesError;

    fn try_from(raw: RawDeckRules) -> Result<Self, Self::Error> {
        Ok(Self {
            max_copies: check_max_copies(raw.max_copies)?,
            initial_faction: raw.initial_faction,
        })
    }
}
