//! # Session
//!
//! A [`Dispatcher`] paired with the [`History`] it appends to.
//!
//! `submit` takes `&mut self`, so a second line cannot be submitted while
//! one is still being awaited: entries land in exactly the order lines were
//! submitted, and each entry is appended only after its command finished.
//!
//! One-shot mode drives a `Session` directly. The TUI spawns the dispatcher
//! onto tokio instead and keeps the same ordering through the reducer queue
//! (see [`crate::core::action`]).

use log::debug;

use crate::core::dispatcher::Dispatcher;
use crate::core::history::{History, HistoryEntry};

pub struct Session {
    dispatcher: Dispatcher,
    history: History,
}

impl Session {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            history: History::new(),
        }
    }

    /// Executes `line` and appends its entry. Blank lines leave history untouched.
    pub async fn submit(&mut self, line: &str) -> Option<&HistoryEntry> {
        let entry = self.dispatcher.execute(line).await?;
        debug!("Appending entry #{} for {:?}", self.history.len(), entry.command);
        Some(self.history.push(entry))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
