//! # TitleBar Component
//!
//! One line at the top of the screen: the program name, the current status
//! message, and a "↓ New" marker when the transcript has grown below the
//! visible area.
//!
//! Stateless: every field is a prop copied in from `App` / `TuiState` by
//! the parent right before rendering.
//!
//! ```text
//! shellfolio | Running weather london | ↓ New
//! shellfolio | Ready
//! shellfolio
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub status_message: String,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(status_message: String, has_unseen_content: bool) -> Self {
        Self {
            status_message,
            has_unseen_content,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("shellfolio");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.has_unseen_content {
            text.push_str(" | ↓ New");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
