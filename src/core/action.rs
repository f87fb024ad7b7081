//! # Actions
//!
//! Everything that can happen in the terminal becomes an `Action`.
//! User presses Enter? That's `Action::Submit(line)`.
//! A spawned command returns? That's `Action::CommandFinished(entry)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an [`Effect`] for the adapter to carry
//! out. No I/O here: dispatching a line is the adapter's job.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Only one command runs at a time. Lines submitted while one is in flight
//! wait in `App::pending` and are handed out one per `CommandFinished`, so
//! history order always equals submission order.

use log::debug;

use crate::core::history::HistoryEntry;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Submit(String),
    /// Runs `banner` at startup. Not recorded for ↑/↓ recall.
    ShowBanner,
    /// A dispatched line finished. `None` when the line was blank after all.
    CommandFinished(Option<HistoryEntry>),
    ClearHistory,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run this line through the dispatcher, then report `CommandFinished`.
    Dispatch(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {action:?}");
    match action {
        Action::Submit(line) => {
            if line.trim().is_empty() {
                return Effect::None;
            }
            app.recall.push(line.clone());
            enqueue(app, line)
        }
        Action::ShowBanner => enqueue(app, String::from("banner")),
        Action::CommandFinished(entry) => {
            if let Some(entry) = entry {
                app.history.push(entry);
            }
            app.in_flight = None;
            match app.pending.pop_front() {
                Some(next) => start(app, next),
                None => {
                    app.status_message = String::from("Ready");
                    Effect::None
                }
            }
        }
        Action::ClearHistory => {
            app.history.clear();
            app.status_message = String::from("Cleared");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn enqueue(app: &mut App, line: String) -> Effect {
    if app.is_busy() {
        app.pending.push_back(line);
        app.status_message = format!("Queued ({} waiting)", app.pending.len());
        Effect::None
    } else {
        start(app, line)
    }
}

fn start(app: &mut App, line: String) -> Effect {
    app.status_message = format!("Running {}", line.trim());
    app.in_flight = Some(line.clone());
    Effect::Dispatch(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn finished(command: &str, output: &str) -> Action {
        Action::CommandFinished(Some(HistoryEntry::new(command, output)))
    }

    #[test]
    fn submit_when_idle_dispatches() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("help".into()));
        assert_eq!(effect, Effect::Dispatch("help".into()));
        assert_eq!(app.in_flight.as_deref(), Some("help"));
        assert_eq!(app.recall, vec!["help"]);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit("   ".into())), Effect::None);
        assert!(!app.is_busy());
        assert!(app.recall.is_empty());
    }

    #[test]
    fn submit_while_busy_is_queued_in_order() {
        let mut app = test_app();
        update(&mut app, Action::Submit("weather london".into()));
        assert_eq!(update(&mut app, Action::Submit("echo a".into())), Effect::None);
        assert_eq!(update(&mut app, Action::Submit("echo b".into())), Effect::None);
        assert_eq!(app.pending.len(), 2);

        let effect = update(&mut app, finished("weather london", "Sunny"));
        assert_eq!(effect, Effect::Dispatch("echo a".into()));
        let effect = update(&mut app, finished("echo a", "a"));
        assert_eq!(effect, Effect::Dispatch("echo b".into()));
        let effect = update(&mut app, finished("echo b", "b"));
        assert_eq!(effect, Effect::None);

        let commands: Vec<&str> = app
            .history
            .entries()
            .iter()
            .map(|e| e.command.as_str())
            .collect();
        assert_eq!(commands, vec!["weather london", "echo a", "echo b"]);
        assert!(!app.is_busy());
    }

    #[test]
    fn finished_without_entry_only_frees_the_slot() {
        let mut app = test_app();
        update(&mut app, Action::Submit("x".into()));
        update(&mut app, Action::CommandFinished(None));
        assert!(app.history.is_empty());
        assert!(!app.is_busy());
    }

    #[test]
    fn clear_keeps_recall() {
        let mut app = test_app();
        update(&mut app, Action::Submit("ls".into()));
        update(&mut app, finished("ls", "a"));
        update(&mut app, Action::ClearHistory);
        assert!(app.history.is_empty());
        assert_eq!(app.recall, vec!["ls"]);
    }

    #[test]
    fn banner_is_dispatched_but_not_recalled() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ShowBanner);
        assert_eq!(effect, Effect::Dispatch("banner".into()));
        assert!(app.recall.is_empty());

        update(&mut app, Action::Submit("help".into()));
        update(&mut app, finished("banner", "hi"));
        assert_eq!(app.recall, vec!["help"]);
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
