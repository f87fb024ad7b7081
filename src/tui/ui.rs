use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HistoryList, TitleBar, input_box};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(input_box::HEIGHT)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let prompt = app.prompt();

    // Transcript first: it decides whether there is unseen content
    HistoryList::new(
        &mut tui.history_list,
        app.history.entries(),
        &prompt,
        app.in_flight.as_deref(),
        spinner_frame,
    )
    .render(frame, main_area);

    TitleBar::new(
        app.status_message.clone(),
        tui.history_list.has_unseen_content,
    )
    .render(frame, title_area);

    tui.input_box.prompt = prompt;
    tui.input_box.busy = app.is_busy();
    tui.input_box.render(frame, input_area);
}
