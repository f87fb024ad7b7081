use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A piece of the screen: the title bar, the transcript, the prompt line.
///
/// Props are struct fields set by the parent before rendering. `render`
/// takes `&mut self` so components can refresh caches (entry heights,
/// scroll offsets) while they draw, the way a `StatefulWidget` would.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
