//! Derived view state for presentation layers.

pub mod builder;

pub use builder::{BuilderView, CardRow, DeckLine, FactionButton};
