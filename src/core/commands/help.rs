//! The categorized `help` screen.

use crate::core::html;
use crate::core::settings::Settings;

use super::Registry;

const BOX_WIDTH: usize = 78;
const RULE_WIDTH: usize = 50;
const COLUMNS: usize = 2;
const NAME_WIDTH: usize = 12;

const QUICK_START: &str = "\
Try these commands to get started:
  • sumfetch    - Display my summary and contact info
  • about       - Learn more about me
  • resume      - View my latest resume
  • projects    - See my GitHub projects
  • weather     - Check weather (e.g., weather london)

Navigation:
  • [Tab]       - Trigger command completion
  • [Ctrl+L]    - Clear terminal
  • [↑/↓]       - Navigate command history

Quick Links:
  • GitHub:     github
  • LinkedIn:   linkedin
  • Email:      email
  • Repository: repo
";

/// A double-lined box with `title` centered inside, already HTML-escaped.
pub(super) fn boxed(title: &str) -> String {
    let len = title.chars().count();
    let left = BOX_WIDTH.saturating_sub(len) / 2;
    let right = BOX_WIDTH.saturating_sub(len + left);
    format!(
        "╔{bar}╗\n║{lpad}{title}{rpad}║\n╚{bar}╝\n",
        bar = "═".repeat(BOX_WIDTH),
        lpad = " ".repeat(left),
        title = html::escape(title),
        rpad = " ".repeat(right),
    )
}

pub(super) fn render(settings: &Settings, registry: &Registry) -> String {
    let mut out = String::from("\n");
    out.push_str(&boxed(&format!(
        "Welcome to {}'s Terminal!",
        settings.display_name()
    )));
    out.push_str("\nAvailable Commands:\n");

    for (category, names) in registry.by_category() {
        out.push_str(&format!("\n{}:\n", category.label()));
        out.push_str(&"─".repeat(RULE_WIDTH));
        out.push('\n');
        for row in names.chunks(COLUMNS) {
            for name in row {
                out.push_str(&format!("  {name:<width$}", width = NAME_WIDTH));
            }
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&boxed("Quick Start Guide"));
    out.push('\n');
    out.push_str(QUICK_START);
    out.push('\n');
    out.push_str(&boxed(&format!("Total Commands: {}", registry.len())));
    out
}
