//! # Core Application Logic
//!
//! The command interpreter and session-history engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Registry (commands)  │
//!                    │  • Dispatcher (lines)   │
//!                    │  • History (transcript) │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  One-shot  │      │ Providers  │
//!     │  Adapter   │      │   (main)   │      │ (reqwest,  │
//!     │ (ratatui)  │      │            │      │  opener)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`commands`]: The `Command` trait, the builtin set and the `Registry`
//! - [`dispatcher`]: Line → `HistoryEntry`
//! - [`session`]: Dispatcher + history, strictly sequential
//! - [`state`]: The `App` struct the TUI reducer drives
//! - [`action`]: The `Action` enum and `update()`

pub mod action;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod history;
pub mod html;
pub mod session;
pub mod settings;
pub mod state;
