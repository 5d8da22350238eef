//! Screen model for the deck builder.
//!
//! `BuilderView` is everything a presentation layer needs to draw the
//! builder, derived from a `DeckStore` in one pass: the deck list, the
//! faction buttons and one row per catalog card with its affordances.
//! It carries no layout.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::deck::DeckStore;

/// One line of the deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLine {
    pub card: CardId,
    pub name: String,
    pub count: u8,
}

impl std::fmt::Display for DeckLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.name, self.count)
    }
}

/// A faction selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionButton {
    pub key: String,
    pub label: String,
    /// Set on the faction that is already selected.
    pub disabled: bool,
}

/// One card in the pool, with its add/remove affordances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRow {
    pub card: CardId,
    pub name: String,
    /// Faction key.
    pub faction: String,
    pub main_text: String,
    pub atk: u32,
    pub def: u32,
    pub count: u8,
    pub selectable: bool,
    pub can_add: bool,
    pub can_remove: bool,
    /// Drawn de-emphasized (outside the selected faction).
    pub dimmed: bool,
}

/// Derived screen model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderView {
    /// Held cards in catalog order.
    pub deck: Vec<DeckLine>,
    pub total_cards: u32,
    pub factions: Vec<FactionButton>,
    /// Every catalog card in catalog order.
    pub cards: Vec<CardRow>,
}

impl BuilderView {
    /// Build the view from the store's current state.
    #[must_use]
    pub fn from_store(store: &DeckStore) -> Self {
        let catalog = store.catalog();
        let active = store.active_faction();

        let deck = store
            .held_cards()
            .map(|(card, count)| DeckLine {
                card: card.id,
                name: card.name.clone(),
                count,
            })
            .collect();

        let factions = catalog
            .factions()
            .iter()
            .map(|faction| FactionButton {
                key: faction.key.clone(),
                label: faction.label.clone(),
                disabled: faction.id == active,
            })
            .collect();

        let cards = catalog
            .iter()
            .map(|card| {
                let selectable = catalog.is_selectable(card, active);
                let faction_key = catalog
                    .factions()
                    .get(card.faction)
                    .map(|f| f.key.clone())
                    .unwrap_or_default();

                CardRow {
                    card: card.id,
                    name: card.name.clone(),
                    faction: faction_key,
                    main_text: card.main_text.clone(),
                    atk: card.atk,
                    def: card.def,
                    count: store.count(card.id),
                    selectable,
                    can_add: store.can_add(card.id),
                    can_remove: store.can_remove(card.id),
                    dimmed: !selectable,
                }
            })
            .collect();

        Self {
            deck,
            total_cards: store.total_copies(),
            factions,
            cards,
        }
    }

    /// Find a card row by name.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&CardRow> {
        self.cards.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DeckSession;

    #[test]
    fn test_initial_view() {
        let view = DeckSession::reference().view();

        assert!(view.deck.is_empty());
        assert_eq!(view.total_cards, 0);
        assert_eq!(view.cards.len(), 19);

        let disabled: Vec<_> = view.factions.iter().map(|b| b.disabled).collect();
        assert_eq!(disabled, vec![true, false, false]);
        assert_eq!(view.factions[1].label, "Wizwoz");
    }

    #[test]
    fn test_row_affordances() {
        let mut session = DeckSession::reference();
        for _ in 0..3 {
            session.add("Floopie Grunt").unwrap();
        }
        let view = session.view();

        let grunt = view.row("Floopie Grunt").unwrap();
        assert_eq!(grunt.count, 3);
        assert!(grunt.selectable);
        assert!(!grunt.can_add);
        assert!(grunt.can_remove);
        assert!(!grunt.dimmed);

        let captain = view.row("Floopie Captain").unwrap();
        assert!(captain.can_add);
        assert!(!captain.can_remove);

        let pyro = view.row("Wizwoz Pyromancer").unwrap();
        assert_eq!(pyro.faction, "wizwoz");
        assert!(!pyro.selectable);
        assert!(!pyro.can_add);
        assert!(pyro.dimmed);
        assert_eq!((pyro.atk, pyro.def), (4, 2));
    }

    #[test]
    fn test_deck_lines() {
        let mut session = DeckSession::reference();
        session.add("Mega Floopie").unwrap();
        session.add("Floopie Grunt").unwrap();
        session.add("Floopie Grunt").unwrap();

        let view = session.view();
        let lines: Vec<_> = view.deck.iter().map(ToString::to_string).collect();

        assert_eq!(lines, vec!["Floopie Grunt x2", "Mega Floopie x1"]);
        assert_eq!(view.total_cards, 3);
    }

    #[test]
    fn test_view_after_faction_switch() {
        let mut session = DeckSession::reference();
        session.add("Floopie Grunt").unwrap();
        session.select_faction("gazimbotron").unwrap();

        let view = session.view();

        assert!(view.deck.is_empty());
        assert!(view.factions[2].disabled);
        assert!(view.row("Gazimbot Sentinel").unwrap().can_add);
        assert!(!view.row("Floopie Grunt").unwrap().can_remove);
    }

    #[test]
    fn test_view_json_field_names() {
        let view = DeckSession::reference().view();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["totalCards"], 0);
        assert_eq!(json["cards"][0]["mainText"], "Just a grunt.");
        assert_eq!(json["cards"][0]["canAdd"], true);
    }
}
