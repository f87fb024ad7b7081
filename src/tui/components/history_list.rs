//! # HistoryList Component
//!
//! Scrollable view of the session transcript.
//!
//! ## Responsibilities
//!
//! - Display every [`HistoryEntry`] as prompt + command + output
//! - Show a spinner line for the command still running
//! - Manage scrolling and stick-to-bottom
//! - Cache per-entry heights and plain-text output
//!
//! ## Architecture
//!
//! `HistoryList` is a transient component (created each frame) that wraps
//! `&'a mut HistoryListState` (persistent state) and the entries (props).
//! Entries never change once appended, so a cached height stays valid until
//! the width changes or the transcript is cleared.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::history::HistoryEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::entry::{Entry, prompt_style};
use crate::tui::event::TuiEvent;
use crate::tui::html::to_plain_text;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Layout and scroll state for the transcript.
/// Must be persisted in the parent TuiState.
pub struct HistoryListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Set after render when content extends below the viewport
    pub has_unseen_content: bool,
}

impl Default for HistoryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true,
            viewport_height: 0,
            has_unseen_content: false,
        }
    }

    fn max_offset(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll if the user has scrolled back to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    pub fn pin_to_bottom(&mut self) {
        self.stick_to_bottom = true;
        self.scroll_state.scroll_to_bottom();
    }
}

/// Scrollable transcript component.
/// Created fresh each frame with references to state and data.
pub struct HistoryList<'a> {
    pub state: &'a mut HistoryListState,
    pub entries: &'a [HistoryEntry],
    pub prompt: &'a str,
    /// Line still being dispatched, shown under a spinner.
    pub in_flight: Option<&'a str>,
    pub spinner_frame: usize,
}

impl<'a> HistoryList<'a> {
    pub fn new(
        state: &'a mut HistoryListState,
        entries: &'a [HistoryEntry],
        prompt: &'a str,
        in_flight: Option<&'a str>,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            entries,
            prompt,
            in_flight,
            spinner_frame,
        }
    }
}

impl Component for HistoryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Bring the layout cache up to date
        self.state
            .layout
            .sync(self.entries, self.prompt, content_width);

        let content_height = self.state.layout.total_height();
        let spinner_height = u16::from(self.in_flight.is_some());
        let canvas_height = content_height.saturating_add(spinner_height);

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        // When pinned, the offset is only moved to the bottom after rendering,
        // so measure visibility from where it will land.
        let scroll_offset = if self.state.stick_to_bottom {
            canvas_height.saturating_sub(area.height)
        } else {
            self.state.scroll_state.offset().y
        };
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible entries into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let layout = &self.state.layout;
        let mut y_offset: u16 = if visible_range.start > 0 {
            layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let entry = &self.entries[i];
            let height = layout.heights[i];
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(
                Entry::new(self.prompt, &entry.command, &layout.outputs[i]),
                rect,
            );
            y_offset = y_offset.saturating_add(height);
        }

        if let Some(line) = self.in_flight {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            let spinner = Line::from(vec![
                Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
                Span::styled(self.prompt, prompt_style()),
                Span::raw(" "),
                Span::styled(
                    line.to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]);
            scroll_view.render_widget(spinner, Rect::new(0, content_height, content_width, 1));
        }

        // Auto-scroll logic (Mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        let current_offset = self.state.scroll_state.offset().y;
        self.state.has_unseen_content = canvas_height > area.height
            && current_offset < canvas_height.saturating_sub(area.height);
    }
}

/// Scroll handling lives on the persistent state, not the per-frame component.
impl EventHandler for HistoryListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::CursorEnd => self.pin_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Cached layout measurements, one slot per entry.
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    /// Entry output converted from HTML once.
    pub outputs: Vec<String>,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            outputs: Vec::new(),
            content_width: 0,
        }
    }

    /// How many cached slots are still valid for `entry_count` entries at `content_width`.
    pub fn reusable_count(&self, entry_count: usize, content_width: u16) -> usize {
        if entry_count < self.heights.len() {
            // Transcript was cleared and refilled
            return 0;
        }
        if self.content_width != content_width {
            return 0;
        }
        self.heights.len()
    }

    pub fn sync(&mut self, entries: &[HistoryEntry], prompt: &str, content_width: u16) {
        let reusable = self.reusable_count(entries.len(), content_width);
        self.heights.truncate(reusable);
        if self.outputs.len() > entries.len() {
            self.outputs.clear();
        }

        for (i, entry) in entries.iter().enumerate().skip(reusable) {
            if i >= self.outputs.len() {
                self.outputs.push(to_plain_text(&entry.output));
            }
            let height =
                Entry::calculate_height(prompt, &entry.command, &self.outputs[i], content_width);
            self.heights.push(height);
        }

        self.content_width = content_width;
        self.rebuild_prefix_heights();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn entries(n: usize) -> Vec<HistoryEntry> {
        (0..n)
            .map(|i| HistoryEntry::new(format!("echo {i}"), format!("{i}")))
            .collect()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_cache_reuses_until_width_changes() {
        let mut cache = LayoutCache::new();
        cache.sync(&entries(3), "p", 80);
        assert_eq!(cache.reusable_count(3, 80), 3);
        assert_eq!(cache.reusable_count(4, 80), 3);
        assert_eq!(cache.reusable_count(3, 40), 0);
        assert_eq!(cache.reusable_count(1, 80), 0);
    }

    #[test]
    fn test_sync_converts_output_once() {
        let mut cache = LayoutCache::new();
        let list = vec![HistoryEntry::new("echo", "&lt;hi&gt;")];
        cache.sync(&list, "p", 80);
        assert_eq!(cache.outputs, vec!["<hi>"]);
        // "p echo" + "<hi>" + spacer
        assert_eq!(cache.heights, vec![3]);
        assert_eq!(cache.total_height(), 3);
    }

    #[test]
    fn test_sync_after_clear_rebuilds() {
        let mut cache = LayoutCache::new();
        cache.sync(&entries(3), "p", 80);
        cache.sync(&entries(1), "p", 80);
        assert_eq!(cache.heights.len(), 1);
        assert_eq!(cache.outputs, vec!["0"]);
    }

    #[test]
    fn test_visible_range_covers_viewport() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![3; 20];
        cache.rebuild_prefix_heights();
        let range = cache.visible_range(30, 9);
        assert!(range.start <= 10 && range.end >= 13);
    }

    #[test]
    fn test_render_shows_latest_entries_and_spinner() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = HistoryListState::new();
        let list = entries(5);

        terminal
            .draw(|f| {
                HistoryList::new(&mut state, &list, "u@h:$ ~", Some("weather oslo"), 0)
                    .render(f, f.area());
            })
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("u@h:$ ~ echo 4"));
        assert!(text.contains("weather oslo"));
        assert!(!text.contains("echo 0"));
    }

    #[test]
    fn test_oversized_transcript_saturates_layout() {
        let mut cache = LayoutCache::new();
        let body = "line\n".repeat(70_000);
        let list = vec![
            HistoryEntry::new("readme", body.as_str()),
            HistoryEntry::new("echo tail", "tail"),
        ];
        cache.sync(&list, "u@h:$ ~", 40);
        assert_eq!(cache.heights[0], u16::MAX);
        assert_eq!(cache.total_height(), u16::MAX);
        assert!(!cache.visible_range(u16::MAX - 6, 6).is_empty());
    }

    #[test]
    fn test_scroll_up_unpins() {
        let mut state = HistoryListState::new();
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
        state.handle_event(&TuiEvent::CursorEnd);
        assert!(state.stick_to_bottom);
    }
}
