//! ↑/↓ command recall for the InputBox.
//!
//! The submitted lines themselves live in `App::recall`; this only tracks
//! where in that list the user currently is, and what they had typed before
//! they started walking back.

#[derive(Debug, Default)]
pub(super) struct Recall {
    /// Index into the submitted lines, `None` while editing the draft.
    index: Option<usize>,
    draft: String,
}

impl Recall {
    /// Steps one line further back. `None` when there is nothing older.
    pub fn previous(&mut self, lines: &[String], current: &str) -> Option<String> {
        let target = match self.index {
            None if lines.is_empty() => return None,
            None => {
                self.draft = current.to_string();
                lines.len() - 1
            }
            Some(0) => return None,
            Some(i) => i - 1,
        };
        self.index = Some(target);
        lines.get(target).cloned()
    }

    /// Steps one line forward, ending on the saved draft.
    pub fn next(&mut self, lines: &[String]) -> Option<String> {
        let i = self.index?;
        if i + 1 < lines.len() {
            self.index = Some(i + 1);
            lines.get(i + 1).cloned()
        } else {
            self.index = None;
            Some(std::mem::take(&mut self.draft))
        }
    }

    pub fn reset(&mut self) {
        self.index = None;
        self.draft.clear();
    }
}
