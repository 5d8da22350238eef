//! The reference card pool.
//!
//! Nineteen cards over three factions:
//! - Floopies: balanced stats
//! - Wizwoz: high attack, low defense
//! - Gazimbotron: high defense, mechanical
//!
//! Floopies is defined first, so it is the default selection.

use super::catalog::{CardCatalog, CardEntry, CatalogBuilder};

pub const FLOOPIES: &str = "floopies";
pub const WIZWOZ: &str = "wizwoz";
pub const GAZIMBOTRON: &str = "gazimbotron";

/// (name, faction, text, atk, def) in display order.
const CARD_POOL: &[(&str, &str, &str, u32, u32)] = &[
    ("Floopie Grunt", FLOOPIES, "Just a grunt.", 1, 2),
    ("Floopie Captain", FLOOPIES, "Leader of the grunts.", 3, 3),
    ("Mega Floopie", FLOOPIES, "The biggest of the Floopies.", 5, 5),
    ("Sneaky Floopie", FLOOPIES, "Quick and agile.", 3, 1),
    ("Floopie Shield Bearer", FLOOPIES, "Protector of the realm.", 1, 5),
    ("Floopie Elder", FLOOPIES, "Ancient wisdom incarnate.", 2, 4),
    ("Apprentice Wizwoz", WIZWOZ, "Still learning the arts.", 2, 1),
    ("Wizwoz Pyromancer", WIZWOZ, "Master of flames.", 4, 2),
    ("Grand Wizwoz", WIZWOZ, "Leader of the magical order.", 6, 3),
    ("Wizwoz Illusionist", WIZWOZ, "Now you see them...", 3, 2),
    ("Dark Wizwoz", WIZWOZ, "Practitioner of forbidden arts.", 5, 1),
    ("Wizwoz Scholar", WIZWOZ, "Knowledge is power.", 2, 2),
    ("Gazimbot Scout", GAZIMBOTRON, "Scanning perimeter.", 1, 3),
    ("Gazimbot Defender", GAZIMBOTRON, "Shields at maximum.", 2, 6),
    ("Supreme Gazimbotron", GAZIMBOTRON, "Ultimate mechanical evolution.", 4, 7),
    ("Gazimbot Repair Unit", GAZIMBOTRON, "Self-maintenance protocols active.", 1, 4),
    ("Gazimbot Artillery", GAZIMBOTRON, "Long-range elimination protocols.", 3, 5),
    ("Ancient Gazimbotron", GAZIMBOTRON, "From the first generation.", 2, 8),
    ("Gazimbot Sentinel", GAZIMBOTRON, "Always vigilant.", 3, 6),
];

/// Builder preloaded with the reference factions and cards.
///
/// Useful as a starting point for catalogs that extend the pool.
#[must_use]
pub fn reference_builder() -> CatalogBuilder {
    CARD_POOL.iter().fold(
        CatalogBuilder::new()
            .with_faction(FLOOPIES, "Floopies")
            .with_faction(WIZWOZ, "Wizwoz")
            .with_faction(GAZIMBOTRON, "Gazimbotron"),
        |builder, &(name, faction, text, atk, def)| {
            builder.with_card(CardEntry::new(name, faction).with_text(text).with_stats(atk, def))
        },
    )
}

/// Build the reference catalog.
///
/// ```
/// use faction_deck::cards::reference_catalog;
///
/// let catalog = reference_catalog();
/// assert_eq!(catalog.len(), 19);
/// assert_eq!(catalog.factions().len(), 3);
/// ```
#[must_use]
pub fn reference_catalog() -> CardCatalog {
    reference_builder()
        .build()
        .expect("reference card pool is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FactionId;

    #[test]
    fn test_reference_factions() {
        let catalog = reference_catalog();
        let keys: Vec<_> = catalog.factions().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec![FLOOPIES, WIZWOZ, GAZIMBOTRON]);
        assert_eq!(catalog.factions().first(), Some(FactionId::new(0)));
        assert_eq!(catalog.faction(GAZIMBOTRON).unwrap().label, "Gazimbotron");
    }

    #[test]
    fn test_reference_faction_sizes() {
        let catalog = reference_catalog();
        let count = |key| {
            let id = catalog.factions().id_of(key).unwrap();
            catalog.cards_in(id).count()
        };

        assert_eq!(count(FLOOPIES), 6);
        assert_eq!(count(WIZWOZ), 6);
        assert_eq!(count(GAZIMBOTRON), 7);
    }

    #[test]
    fn test_reference_order() {
        let catalog = reference_catalog();
        let cards = catalog.all_cards();

        assert_eq!(cards[0].name, "Floopie Grunt");
        assert_eq!(cards[2].name, "Mega Floopie");
        assert_eq!(cards[6].name, "Apprentice Wizwoz");
        assert_eq!(cards[18].name, "Gazimbot Sentinel");
    }

    #[test]
    fn test_reference_stats() {
        let catalog = reference_catalog();
        let ancient = catalog.find("Ancient Gazimbotron").unwrap();
        assert_eq!((ancient.atk, ancient.def), (2, 8));
        assert_eq!(ancient.main_text, "From the first generation.");
    }
}
