//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Position of a card in catalog order
//! - `CardDefinition`: Static card data (name, faction, text, stats)
//! - `CardCatalog`: Immutable ordered card pool with lookup
//! - `CatalogBuilder`: Validating catalog construction (code or JSON)
//!
//! `reference_catalog()` builds the stock 19-card pool.

pub mod catalog;
pub mod definition;
pub mod reference;

pub use catalog::{CardCatalog, CardEntry, CatalogBuilder, FactionEntry};
pub use definition::{CardDefinition, CardId};
pub use reference::{reference_builder, reference_catalog};
