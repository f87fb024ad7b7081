//! # TUI Components
//!
//! Every piece of the screen, one file each.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: program name, status message, unseen-content marker
//! - `Entry`: one transcript entry (prompt, command, output)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: the prompt line, with recall and completion requests
//! - `HistoryList`: scrollable transcript with layout caching
//!
//! Components receive external data as props (struct fields or constructor
//! arguments) instead of reaching into `App`, so each one can be rendered
//! against a `TestBackend` on its own.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── entry.rs         (single transcript entry)
//! ├── history_list.rs  (scrollable transcript)
//! └── input_box/       (prompt line and ↑/↓ recall)
//! ```

mod entry;
mod title_bar;

pub mod history_list;
pub mod input_box;

pub use history_list::{HistoryList, HistoryListState};
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
