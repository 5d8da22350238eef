//! Session controller.
//!
//! A `DeckSession` is the single owner of one user's deck-building state.
//! Commands are applied strictly in the order they arrive, each one fully
//! (reconciliation included) before the next. Every accepted command is
//! appended to the session history.

use std::sync::Arc;

use im::Vector;

use super::command::{DeckCommand, DeckEvent};
use crate::cards::{reference_catalog, CardCatalog};
use crate::core::DeckRules;
use crate::deck::{Change, DeckStore};
use crate::error::Result;
use crate::view::BuilderView;

/// One deck-building session.
///
/// ## Example
///
/// ```
/// use faction_deck::session::{DeckCommand, DeckSession};
///
/// let mut session = DeckSession::reference();
/// session.apply(DeckCommand::Add("Mega Floopie".into())).unwrap();
///
/// let view = session.view();
/// assert_eq!(view.deck[0].to_string(), "Mega Floopie x1");
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeckSession {
    store: DeckStore,
    history: Vector<DeckEvent>,
    next_sequence: u64,
}

impl DeckSession {
    /// Start a session over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rules: DeckRules) -> Self {
        Self {
            store: DeckStore::new(catalog, rules),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Start a session over the reference catalog with default rules.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(Arc::new(reference_catalog()), DeckRules::default())
    }

    /// Apply a command.
    ///
    /// Unknown card or faction names return an error and are not recorded.
    /// Disallowed edits are recorded as `Change::Rejected`.
    pub fn apply(&mut self, command: DeckCommand) -> Result<Change> {
        let change = match &command {
            DeckCommand::SelectFaction(key) => self.store.select_faction(key)?,
            DeckCommand::Add(name) => self.store.increment(name)?,
            DeckCommand::Remove(name) => self.store.decrement(name)?,
        };

        self.history
            .push_back(DeckEvent::new(self.next_sequence, command, change.clone()));
        self.next_sequence += 1;

        Ok(change)
    }

    /// Apply commands in order, stopping at the first error.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = DeckCommand>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    pub fn select_faction(&mut self, key: &str) -> Result<Change> {
        self.apply(DeckCommand::SelectFaction(key.to_string()))
    }

    pub fn add(&mut self, name: &str) -> Result<Change> {
        self.apply(DeckCommand::Add(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Change> {
        self.apply(DeckCommand::Remove(name.to_string()))
    }

    #[must_use]
    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    /// Every accepted command so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<DeckEvent> {
        &self.history
    }

    /// Derive the screen model from the current state.
    #[must_use]
    pub fn view(&self) -> BuilderView {
        BuilderView::from_store(&self.store)
    }

    /// End the session: counts back to zero, initial faction, no history.
    pub fn end(&mut self) {
        self.store.reset();
        self.history.clear();
        self.next_sequence = 0;
    }
}
