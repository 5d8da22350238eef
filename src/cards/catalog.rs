//! Card catalog: the fixed, ordered card pool.
//!
//! The `CardCatalog` stores every card definition in definition order
//! (display order) along with the faction set they are partitioned into.
//! It provides lookup by `CardId` or name and never changes once built.
//!
//! Catalogs are assembled with a `CatalogBuilder`, either in code or from
//! JSON:
//!
//! ```json
//! {
//!   "factions": [{ "key": "floopies", "label": "Floopies" }],
//!   "cards": [
//!     { "name": "Floopie Grunt", "faction": "floopies",
//!       "mainText": "Just a grunt.", "atk": 1, "def": 2 }
//!   ]
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::{Faction, FactionId, FactionSet};
use crate::error::CatalogError;

/// Faction entry in a catalog source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionEntry {
    pub key: String,
    pub label: String,
}

/// Card entry in a catalog source. The faction is referenced by key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub main_text: String,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub def: u32,
}

impl CardEntry {
    /// Create an entry with empty text and zero stats.
    #[must_use]
    pub fn new(name: impl Into<String>, faction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            main_text: String::new(),
            atk: 0,
            def: 0,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.main_text = text.into();
        self
    }

    #[must_use]
    pub fn with_stats(mut self, atk: u32, def: u32) -> Self {
        self.atk = atk;
        self.def = def;
        self
    }
}

/// Builder for a `CardCatalog`.
///
/// Validation happens in `build`, so entries can be added in any order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogBuilder {
    #[serde(default)]
    factions: Vec<FactionEntry>,
    #[serde(default)]
    cards: Vec<CardEntry>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a faction. The first faction added is the default selection.
    #[must_use]
    pub fn with_faction(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.factions.push(FactionEntry {
            key: key.into(),
            label: label.into(),
        });
        self
    }

    /// Add a card. Cards keep the order they are added in.
    #[must_use]
    pub fn with_card(mut self, card: CardEntry) -> Self {
        self.cards.push(card);
        self
    }

    /// Validate the entries and build the catalog.
    ///
    /// Fails if there are no factions, a faction key or card name repeats,
    /// or a card names a faction that isn't defined.
    pub fn build(self) -> Result<CardCatalog, CatalogError> {
        if self.factions.is_empty() {
            return Err(CatalogError::NoFactions);
        }
        if self.factions.len() > usize::from(u8::MAX) + 1 {
            return Err(CatalogError::TooManyFactions(self.factions.len()));
        }
        if self.cards.len() > usize::from(u16::MAX) + 1 {
            return Err(CatalogError::TooManyCards(self.cards.len()));
        }

        let mut factions = FactionSet::new();
        for entry in self.factions {
            if factions.id_of(&entry.key).is_some() {
                return Err(CatalogError::DuplicateFaction(entry.key));
            }
            factions.push(entry.key, entry.label);
        }

        let mut cards = Vec::with_capacity(self.cards.len());
        let mut by_name = FxHashMap::default();

        for entry in self.cards {
            let Some(faction) = factions.id_of(&entry.faction) else {
                return Err(CatalogError::UnknownFaction {
                    card: entry.name,
                    faction: entry.faction,
                });
            };
            if by_name.contains_key(&entry.name) {
                return Err(CatalogError::DuplicateCard(entry.name));
            }

            let id = CardId(cards.len() as u16);
            by_name.insert(entry.name.clone(), id);
            cards.push(
                CardDefinition::new(id, entry.name, faction)
                    .with_text(entry.main_text)
                    .with_stats(entry.atk, entry.def),
            );
        }

        Ok(CardCatalog {
            factions,
            cards,
            by_name,
        })
    }
}

/// Immutable, ordered card pool.
///
/// ## Example
///
/// ```
/// use faction_deck::cards::{CardEntry, CatalogBuilder};
///
/// let catalog = CatalogBuilder::new()
///     .with_faction("red", "Red")
///     .with_faction("blue", "Blue")
///     .with_card(CardEntry::new("Ember", "red").with_stats(2, 1))
///     .with_card(CardEntry::new("Tide", "blue"))
///     .build()
///     .unwrap();
///
/// let blue = catalog.factions().id_of("blue").unwrap();
/// let tide = catalog.find("Tide").unwrap();
/// assert!(catalog.is_selectable(tide, blue));
/// assert_eq!(catalog.all_cards()[0].name, "Ember");
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    factions: FactionSet,
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let builder: CatalogBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    /// The full pool, in definition order.
    #[must_use]
    pub fn all_cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Whether `card` may be added while `active` is selected.
    #[must_use]
    pub fn is_selectable(&self, card: &CardDefinition, active: FactionId) -> bool {
        card.faction == active
    }

    /// The catalog's factions.
    #[must_use]
    pub fn factions(&self) -> &FactionSet {
        &self.factions
    }

    /// Find a faction by key.
    #[must_use]
    pub fn faction(&self, key: &str) -> Option<&Faction> {
        self.factions.find(key)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    /// Get a card definition by ID, panicking if it isn't from this catalog.
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardDefinition {
        self.cards
            .get(id.index())
            .unwrap_or_else(|| panic!("{id} not found in catalog"))
    }

    /// Find a card definition by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CardDefinition> {
        self.id_of(name).map(|id| &self.cards[id.index()])
    }

    /// Resolve a card name to its ID.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over the cards of one faction, in definition order.
    pub fn cards_in(&self, faction: FactionId) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.faction == faction)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_faction_builder() -> CatalogBuilder {
        CatalogBuilder::new()
            .with_faction("red", "Red")
            .with_faction("blue", "Blue")
    }

    #[test]
    fn test_build_and_lookup() {
        let catalog = two_faction_builder()
            .with_card(CardEntry::new("Ember", "red").with_text("Hot.").with_stats(2, 1))
            .with_card(CardEntry::new("Tide", "blue"))
            .build()
            .unwrap();

        assert_eq!(catalog.len(), 2);

        let ember = catalog.find("Ember").unwrap();
        assert_eq!(ember.id, CardId::new(0));
        assert_eq!(ember.main_text, "Hot.");
        assert_eq!((ember.atk, ember.def), (2, 1));

        assert_eq!(catalog.id_of("Tide"), Some(CardId::new(1)));
        assert!(catalog.find("Nothing").is_none());
        assert!(catalog.get(CardId::new(2)).is_none());
    }

    #[test]
    fn test_definition_order_is_kept() {
        let catalog = two_faction_builder()
            .with_card(CardEntry::new("Z", "blue"))
            .with_card(CardEntry::new("A", "red"))
            .with_card(CardEntry::new("M", "blue"))
            .build()
            .unwrap();

        let names: Vec<_> = catalog.all_cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);

        for (i, card) in catalog.iter().enumerate() {
            assert_eq!(card.id.index(), i);
        }
    }

    #[test]
    fn test_is_selectable() {
        let catalog = two_faction_builder()
            .with_card(CardEntry::new("Ember", "red"))
            .build()
            .unwrap();

        let red = catalog.factions().id_of("red").unwrap();
        let blue = catalog.factions().id_of("blue").unwrap();
        let ember = catalog.find("Ember").unwrap();

        assert!(catalog.is_selectable(ember, red));
        assert!(!catalog.is_selectable(ember, blue));
    }

    #[test]
    fn test_cards_in() {
        let catalog = two_faction_builder()
            .with_card(CardEntry::new("A", "red"))
            .with_card(CardEntry::new("B", "blue"))
            .with_card(CardEntry::new("C", "red"))
            .build()
            .unwrap();

        let red = catalog.factions().id_of("red").unwrap();
        let reds: Vec<_> = catalog.cards_in(red).map(|c| c.name.as_str()).collect();
        assert_eq!(reds, vec!["A", "C"]);
    }

    #[test]
    fn test_no_factions() {
        let result = CatalogBuilder::new().build();
        assert!(matches!(result, Err(CatalogError::NoFactions)));
    }

    #[test]
    fn test_duplicate_faction() {
        let result = two_faction_builder().with_faction("red", "Crimson").build();
        assert!(matches!(result, Err(CatalogError::DuplicateFaction(k)) if k == "red"));
    }

    #[test]
    fn test_duplicate_card() {
        let result = two_faction_builder()
            .with_card(CardEntry::new("Ember", "red"))
            .with_card(CardEntry::new("Ember", "blue"))
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateCard(n)) if n == "Ember"));
    }

    #[test]
    fn test_unknown_faction() {
        let result = two_faction_builder()
            .with_card(CardEntry::new("Leaf", "green"))
            .build();

        match result {
            Err(CatalogError::UnknownFaction { card, faction }) => {
                assert_eq!(card, "Leaf");
                assert_eq!(faction, "green");
            }
            other => panic!("expected UnknownFaction, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_card_pool_is_allowed() {
        let catalog = two_faction_builder().build().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.factions().len(), 2);
    }

    #[test]
    #[should_panic(expected = "not found in catalog")]
    fn test_card_panics_on_foreign_id() {
        let catalog = two_faction_builder().build().unwrap();
        let _ = catalog.card(CardId::new(5));
    }
}
