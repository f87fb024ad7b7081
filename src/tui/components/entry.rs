use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// Blank row left under every entry.
const SPACER: u16 = 1;

/// One transcript entry: the prompt and command on the first line, the
/// command's output below it.
///
/// Transient: built each frame by `HistoryList` for the visible entries.
/// `output` is already converted to plain text (see [`crate::tui::html`]).
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap`, using options that mirror how `Paragraph` wraps, so the
/// list can lay out its scroll canvas without rendering anything.
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    pub prompt: &'a str,
    pub command: &'a str,
    pub output: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(prompt: &'a str, command: &'a str, output: &'a str) -> Self {
        Self {
            prompt,
            command,
            output,
        }
    }

    pub fn calculate_height(prompt: &str, command: &str, output: &str, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }
        let header = format!("{prompt} {command}");
        let output_lines = if output.is_empty() {
            0
        } else {
            wrapped_line_count(output, width)
        };
        wrapped_line_count(&header, width)
            .saturating_add(output_lines)
            .saturating_add(SPACER)
    }
}

fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(text, options).len();
    u16::try_from(lines.max(1)).unwrap_or(u16::MAX)
}

pub fn prompt_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

impl Widget for Entry<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(vec![
            Span::styled(self.prompt, prompt_style()),
            Span::raw(" "),
            Span::raw(self.command),
        ])];
        if !self.output.is_empty() {
            lines.extend(self.output.lines().map(Line::raw));
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn height_counts_header_output_and_spacer() {
        assert_eq!(Entry::calculate_height("u@h:$ ~", "ls", "a\nb\nc", 80), 1 + 3 + SPACER);
    }

    #[test]
    fn empty_output_takes_no_rows() {
        assert_eq!(Entry::calculate_height("u@h:$ ~", "echo", "", 80), 1 + SPACER);
    }

    #[test]
    fn long_lines_wrap() {
        // "u@h:$ ~ echo" at width 5: "u@h:$" | "~" | "echo"
        assert_eq!(Entry::calculate_height("u@h:$ ~", "echo", "", 5), 3 + SPACER);
    }

    #[test]
    fn huge_output_saturates_instead_of_overflowing() {
        let body = "x\n".repeat(70_000);
        assert_eq!(Entry::calculate_height("u@h:$ ~", "readme", &body, 80), u16::MAX);
    }

    #[test]
    fn zero_width_returns_minimum() {
        assert_eq!(Entry::calculate_height("p", "c", "o", 0), 1);
    }

    #[test]
    fn renders_prompt_command_and_output() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(Entry::new("visitor@folio:$ ~", "whoami", "visitor"), f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..40).map(|x| buffer[(x, y)].symbol()).collect::<String>()
        };
        assert!(row(0).starts_with("visitor@folio:$ ~ whoami"));
        assert!(row(1).starts_with("visitor"));
        assert_eq!(buffer[(0, 0)].fg, Color::Green);
    }
}
