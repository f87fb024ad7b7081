//! # Application State
//!
//! Core business state for the interactive terminal. Domain data only;
//! presentation state (scroll offsets, the input buffer) lives in `tui`.
//!
//! ```text
//! App
//! ├── history: History              // transcript shown on screen
//! ├── settings: Settings            // profile, for the prompt
//! ├── status_message: String        // status bar text
//! ├── in_flight: Option<String>     // line currently being dispatched
//! ├── pending: VecDeque<String>     // lines submitted while busy
//! └── recall: Vec<String>           // submitted lines, for ↑/↓
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::VecDeque;

use crate::core::history::History;
use crate::core::settings::Settings;

pub struct App {
    pub history: History,
    pub settings: Settings,
    pub status_message: String,
    /// The line whose command is still running, if any.
    pub in_flight: Option<String>,
    pub pending: VecDeque<String>,
    pub recall: Vec<String>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            history: History::new(),
            settings,
            status_message: String::from("Type 'help' to get started"),
            in_flight: None,
            pending: VecDeque::new(),
            recall: Vec::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn prompt(&self) -> String {
        self.settings.prompt()
    }
}
