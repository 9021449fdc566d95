use std::fmt;

use crate::models::storage::{DRAFT_KEY, LocalStorage, StorageError, THEME_KEY};

/// Content must be longer than this many characters before generating.
pub const MIN_CONTENT_CHARS: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{repr}")
    }
}

/// In-memory editor state: the markdown being written and the last
/// generated summary.
#[derive(Debug, Default)]
pub struct Editor {
    markdown: String,
    summary: String,
    theme: Theme,
}

impl Editor {
    /// Start with an empty document, keeping the stored theme preference.
    pub fn restore(storage: &LocalStorage) -> Self {
        let theme = storage
            .get_item(THEME_KEY)
            .and_then(Theme::parse)
            .unwrap_or_default();
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn append_line(&mut self, line: &str) {
        if !self.markdown.is_empty() {
            self.markdown.push('\n');
        }
        self.markdown.push_str(line);
    }

    pub fn clear(&mut self) {
        self.markdown.clear();
    }

    /// Whether there's enough text to be worth generating from.
    pub fn is_long_enough(&self) -> bool {
        self.markdown.chars().count() > MIN_CONTENT_CHARS
    }

    /// Put a generated introduction in front of the current markdown.
    pub fn apply_intro(&mut self, intro: &str) {
        self.markdown = format!("{intro}\n\n{}", self.markdown);
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    pub fn clear_summary(&mut self) {
        self.summary.clear();
    }

    pub fn save_draft(&self, storage: &mut LocalStorage) -> Result<(), StorageError> {
        storage.set_item(DRAFT_KEY, &self.markdown)
    }

    /// Replace the markdown with the saved draft, or nothing if there's
    /// no draft.
    pub fn load_draft(&mut self, storage: &LocalStorage) {
        self.markdown = storage.get_item(DRAFT_KEY).unwrap_or_default().to_string();
    }

    /// Save the draft if there's something new to save. Returns whether a
    /// save happened.
    pub fn autosave(&self, storage: &mut LocalStorage) -> Result<bool, StorageError> {
        if self.markdown.is_empty() || storage.get_item(DRAFT_KEY) == Some(self.markdown.as_str())
        {
            return Ok(false);
        }
        self.save_draft(storage)?;
        Ok(true)
    }

    /// Flip the theme. Nothing changes if the preference can't be stored.
    pub fn toggle_theme(&mut self, storage: &mut LocalStorage) -> Result<Theme, StorageError> {
        let theme = self.theme.toggled();
        storage.set_item(THEME_KEY, &theme.to_string())?;
        self.theme = theme;
        Ok(theme)
    }

    /// Document as shown to the user, with the summary (if any) below it.
    pub fn preview(&self) -> String {
        let rule = "─".repeat(40);
        let mut repr = format!("{rule}\n{}\n{rule}", self.markdown);
        if !self.summary.is_empty() {
            repr.push_str(&format!("\nSummary\n\n{}\n{rule}", self.summary));
        }
        repr
    }
}
