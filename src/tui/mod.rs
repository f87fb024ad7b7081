//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. One-shot
//! mode in `main.rs` reuses [`html`] to print entries and nothing else.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (a command is running): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
pub mod html;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::commands::Registry;
use crate::core::config::ResolvedConfig;
use crate::core::dispatcher::Dispatcher;
use crate::core::state::App;
use crate::providers::{HttpProvider, SystemNavigator};
use crate::tui::component::EventHandler;
use crate::tui::components::{HistoryListState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub history_list: HistoryListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new(prompt: String) -> Self {
        Self {
            history_list: HistoryListState::new(),
            input_box: InputBox::new(prompt),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Starts the interactive terminal. Must be called inside a tokio runtime:
/// every dispatched line runs on its own task.
pub fn run(config: ResolvedConfig, show_banner: bool) -> std::io::Result<()> {
    let dispatcher = Dispatcher::new(
        Arc::new(Registry::builtin()),
        Arc::new(config.settings.clone()),
        Arc::new(SystemNavigator),
        Arc::new(HttpProvider::new(config.provider)),
    );
    let mut app = App::new(config.settings);
    let mut tui = TuiState::new(app.prompt());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if show_banner {
        apply(update(&mut app, Action::ShowBanner), &dispatcher, &tx);
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let busy = app.is_busy();
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ClearScreen => {
                    update(&mut app, Action::ClearHistory);
                    tui.history_list = HistoryListState::new();
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.history_list.handle_event(&event);
                }
                _ => {
                    // End also jumps the transcript back to the latest entry
                    if matches!(event, TuiEvent::CursorEnd) {
                        tui.history_list.handle_event(&event);
                    }
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        handle_input_event(input_event, &mut app, &mut tui, &dispatcher, &tx);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (finished commands)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {action:?}");
            let effect = update(&mut app, action);
            apply(effect, &dispatcher, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_input_event(
    input_event: InputEvent,
    app: &mut App,
    tui: &mut TuiState,
    dispatcher: &Dispatcher,
    tx: &mpsc::Sender<Action>,
) {
    match input_event {
        InputEvent::Submit(line) => {
            tui.history_list.pin_to_bottom();
            apply(update(app, Action::Submit(line)), dispatcher, tx);
        }
        InputEvent::Complete(prefix) => complete(&prefix, app, tui, dispatcher.registry()),
        InputEvent::RecallPrevious => {
            tui.input_box.recall_previous(&app.recall);
        }
        InputEvent::RecallNext => {
            tui.input_box.recall_next(&app.recall);
        }
        InputEvent::ContentChanged => {}
    }
}

/// Tab: a single match replaces the input, several are listed in the status bar.
fn complete(prefix: &str, app: &mut App, tui: &mut TuiState, registry: &Registry) {
    let prefix = prefix.trim_start();
    if prefix.is_empty() || prefix.contains(char::is_whitespace) {
        return;
    }
    match registry.complete(prefix).as_slice() {
        [] => {}
        [only] => tui.input_box.set_buffer(format!("{only} ")),
        many => app.status_message = many.join("  "),
    }
}

fn apply(effect: Effect, dispatcher: &Dispatcher, tx: &mpsc::Sender<Action>) {
    if let Effect::Dispatch(line) = effect {
        spawn_dispatch(line, dispatcher.clone(), tx.clone());
    }
}

fn spawn_dispatch(line: String, dispatcher: Dispatcher, tx: mpsc::Sender<Action>) {
    info!("Dispatching {line:?}");
    tokio::spawn(async move {
        let entry = dispatcher.execute(&line).await;
        if tx.send(Action::CommandFinished(entry)).is_err() {
            warn!("Failed to report {line:?}: receiver dropped");
        }
    });
}
