//! Faction identification and the closed faction set.
//!
//! Every catalog defines its own factions at startup. The store never
//! hardcodes them: a `FactionId` is an index into the catalog's
//! `FactionSet`, and the set's first entry is the default selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Faction identifier, the 0-based position of the faction in its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactionId(pub u8);

impl FactionId {
    /// Create a new faction ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Faction({})", self.0)
    }
}

/// A single faction: a stable key used for lookup and a display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,

    /// Lookup key (e.g. `"floopies"`).
    pub key: String,

    /// Human-readable label (e.g. `"Floopies"`).
    pub label: String,
}

/// Closed, ordered set of factions.
///
/// Most catalogs have a handful of factions, so storage is inline.
///
/// ```
/// use faction_deck::core::{FactionId, FactionSet};
///
/// let mut factions = FactionSet::new();
/// let red = factions.push("red", "Red");
/// let blue = factions.push("blue", "Blue");
///
/// assert_eq!(factions.first(), Some(red));
/// assert_eq!(factions.id_of("blue"), Some(blue));
/// assert_eq!(blue, FactionId::new(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FactionSet {
    factions: SmallVec<[Faction; 4]>,
}

impl FactionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a faction and return its ID.
    ///
    /// Panics if the key is already present or the set is full.
    pub fn push(&mut self, key: impl Into<String>, label: impl Into<String>) -> FactionId {
        let key = key.into();
        assert!(self.id_of(&key).is_none(), "Faction {key:?} already defined");
        assert!(self.factions.len() < 256, "At most 256 factions supported");

        let id = FactionId(self.factions.len() as u8);
        self.factions.push(Faction {
            id,
            key,
            label: label.into(),
        });
        id
    }

    /// Get a faction by ID.
    #[must_use]
    pub fn get(&self, id: FactionId) -> Option<&Faction> {
        self.factions.get(id.index())
    }

    /// Find a faction by key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.key == key)
    }

    /// Resolve a key to its ID.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<FactionId> {
        self.find(key).map(|f| f.id)
    }

    /// The default selection: the first faction defined.
    #[must_use]
    pub fn first(&self) -> Option<FactionId> {
        self.factions.first().map(|f| f.id)
    }

    #[must_use]
    pub fn contains(&self, id: FactionId) -> bool {
        id.index() < self.factions.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }

    /// Iterate in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Faction> {
        self.factions.iter()
    }
}
