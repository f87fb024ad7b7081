//! # InputBox Component
//!
//! The prompt line: `visitor@host:$ ~ ` followed by what the user is typing.
//!
//! ## Responsibilities
//!
//! - Capture text input and single-line editing (backspace, delete, ←/→, Home/End)
//! - Handle submission (Enter)
//! - Ask the parent for recall (↑/↓) and completion (Tab)
//! - Scroll horizontally so the cursor stays visible
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The prompt is a prop. Recall
//! needs the list of submitted lines, which the parent owns, so ↑/↓ are
//! emitted as events and answered through [`InputBox::recall_previous`] /
//! [`InputBox::recall_next`].

mod recall;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::entry::prompt_style;
use crate::tui::event::TuiEvent;

use recall::Recall;

/// Rows taken by the box: one line plus top and bottom border.
pub const HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Tab pressed; carries the text typed so far
    Complete(String),
    RecallPrevious,
    RecallNext,
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Prompt shown before the buffer (Prop)
    pub prompt: String,
    /// Dimmed while a command is running (Prop)
    pub busy: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    recall: Recall,
}

impl InputBox {
    pub fn new(prompt: String) -> Self {
        Self {
            buffer: String::new(),
            prompt,
            busy: false,
            cursor: 0,
            recall: Recall::default(),
        }
    }

    /// Replaces the buffer and moves the cursor to its end.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn recall_previous(&mut self, lines: &[String]) -> bool {
        match self.recall.previous(lines, &self.buffer) {
            Some(line) => {
                self.set_buffer(line);
                true
            }
            None => false,
        }
    }

    pub fn recall_next(&mut self, lines: &[String]) -> bool {
        match self.recall.next(lines) {
            Some(line) => {
                self.set_buffer(line);
                true
            }
            None => false,
        }
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Characters of the buffer skipped so the cursor fits in `available` columns.
    fn horizontal_skip(&self, available: usize) -> usize {
        let cursor_col = self.buffer[..self.cursor].chars().count();
        cursor_col.saturating_sub(available.saturating_sub(1))
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let prompt_cols = self.prompt.chars().count() + 1;
        let available = inner_width.saturating_sub(prompt_cols);
        let skip = self.horizontal_skip(available);
        let visible: String = self.buffer.chars().skip(skip).take(available).collect();

        let text_style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(self.prompt.as_str(), prompt_style()),
            Span::raw(" "),
            Span::styled(visible, text_style),
        ]);

        let block = Block::bordered().border_type(BorderType::Rounded);
        frame.render_widget(Paragraph::new(line).block(block), area);

        let cursor_col = self.buffer[..self.cursor].chars().count() - skip;
        let x = area.x + 1 + u16::try_from(prompt_cols + cursor_col).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line prompt: pasted newlines become spaces
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.recall.reset();
                Some(InputEvent::Submit(text))
            }
            TuiEvent::CursorUp => Some(InputEvent::RecallPrevious),
            TuiEvent::CursorDown => Some(InputEvent::RecallNext),
            TuiEvent::Complete => Some(InputEvent::Complete(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new("visitor@folio:$ ~".to_string());
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_handle_input() {
        let mut input = typed("ab");
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = typed("hllo");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(input.buffer, "hello");
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "helo");
    }

    #[test]
    fn test_multibyte_backspace() {
        let mut input = typed("café");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");
    }

    #[test]
    fn test_submit() {
        let mut input = typed("hello");
        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {other:?}"),
        }
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_blank_submit_is_swallowed() {
        let mut input = typed("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = typed("");
        input.handle_event(&TuiEvent::Paste("echo a\nb".into()));
        assert_eq!(input.buffer, "echo a b");
    }

    #[test]
    fn test_tab_reports_prefix() {
        let mut input = typed("we");
        assert_eq!(
            input.handle_event(&TuiEvent::Complete),
            Some(InputEvent::Complete("we".into()))
        );
    }

    #[test]
    fn test_recall_round_trip() {
        let lines = vec!["help".to_string(), "ls".to_string()];
        let mut input = typed("draft");
        assert!(input.recall_previous(&lines));
        assert_eq!(input.buffer, "ls");
        assert!(input.recall_previous(&lines));
        assert_eq!(input.buffer, "help");
        assert!(input.recall_next(&lines));
        assert!(input.recall_next(&lines));
        assert_eq!(input.buffer, "draft");
    }

    #[test]
    fn test_render_shows_prompt_and_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = typed("whoami");

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("visitor@folio:$ ~ whoami"));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new("$".to_string());
        input.set_buffer("abcdefghijklmnopqrstuvwxyz0123456789");

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("789"));
        assert!(!text.contains("abc"));
    }
}
