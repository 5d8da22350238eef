//! Sessions: command dispatch and history.
//!
//! - `DeckCommand`: Inbound user action (select faction, add, remove)
//! - `DeckEvent`: A recorded command with its `Change`
//! - `DeckSession`: Owns one `DeckStore` and its history

pub mod command;
pub mod controller;

pub use command::{DeckCommand, DeckEvent};
pub use controller::DeckSession;
