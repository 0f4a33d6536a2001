//! The state machine behind the terminal browser.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user navigates.
//! Sections are parsed once per file when the file is opened; nothing is ever written back, so the
//! state only tracks what is selected and how far the detail view has scrolled.

use crate::input;
use crate::section::Section;
use std::path::PathBuf;
use tracing::warn;

#[derive(PartialEq, Eq, Debug)]
/// Determines navigation scope and quit behavior based on how many files were given.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(PartialEq, Eq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files for multi-file projects.
    FileList,
    /// Shows the sections of the open file.
    List,
    /// Shows one section's blocks and media.
    Detail,
}

/// Bridges parsed sections and the terminal UI, maintaining session state.
pub struct AppState {
    /// Sections of the currently open file.
    pub sections: Vec<Section>,
    /// Content files available for browsing.
    pub files: Vec<PathBuf>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls navigation behavior and file list visibility.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Selected section in the section list.
    pub current_section_index: usize,
    /// Lines scrolled past in the detail view.
    pub scroll: u16,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum line width for text wrapping in the detail view.
    pub wrap_width: usize,
}

impl AppState {
    #[must_use]
    /// Initialises application state and determines file mode.
    ///
    /// Single-file sessions open straight into the section list; multi-file sessions start at the
    /// file selector.
    pub fn new(files: Vec<PathBuf>, sections: Vec<Section>, wrap_width: usize) -> Self {
        let (file_mode, current_view) = if files.len() == 1 {
            (FileMode::Single, View::List)
        } else {
            (FileMode::Multi, View::FileList)
        };

        Self {
            sections,
            files,
            current_file_index: 0,
            file_mode,
            current_view,
            current_section_index: 0,
            scroll: 0,
            message: None,
            wrap_width,
        }
    }

    #[must_use]
    /// The section under the cursor, if the open file has any.
    pub fn current_section(&self) -> Option<&Section> {
        self.sections.get(self.current_section_index)
    }

    /// Parses the selected file and shows its sections.
    ///
    /// A file that cannot be read leaves the view unchanged and reports the error in the help bar.
    pub fn open_current_file(&mut self) {
        let Some(path) = self.files.get(self.current_file_index) else {
            return;
        };

        match input::load_sections(path) {
            Ok(sections) if sections.is_empty() => {
                self.message = Some(format!("No sections in {}", path.display()));
            }
            Ok(sections) => {
                self.sections = sections;
                self.current_section_index = 0;
                self.scroll = 0;
                self.message = None;
                self.current_view = View::List;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open content file");
                self.message = Some(format!("Error opening {}: {e}", path.display()));
            }
        }
    }

    /// Moves the file cursor up one entry.
    pub fn prev_file(&mut self) {
        self.current_file_index = self.current_file_index.saturating_sub(1);
    }

    /// Moves the file cursor down one entry.
    pub fn next_file(&mut self) {
        if self.current_file_index + 1 < self.files.len() {
            self.current_file_index += 1;
        }
    }

    /// Moves the section cursor up one entry.
    pub fn prev_section(&mut self) {
        self.current_section_index = self.current_section_index.saturating_sub(1);
    }

    /// Moves the section cursor down one entry.
    pub fn next_section(&mut self) {
        if self.current_section_index + 1 < self.sections.len() {
            self.current_section_index += 1;
        }
    }

    #[must_use]
    /// Index of the first section, if any.
    pub fn navigate_to_first(&self) -> Option<usize> {
        (!self.sections.is_empty()).then_some(0)
    }

    #[must_use]
    /// Index of the last section, if any.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.sections.len().checked_sub(1)
    }

    /// Shows the selected section in full.
    pub fn enter_detail_view(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        self.scroll = 0;
        self.current_view = View::Detail;
    }

    /// Returns from the detail view to the section list.
    pub fn exit_detail_view(&mut self) {
        self.scroll = 0;
        self.current_view = View::List;
    }

    /// Scrolls the detail view down by `lines`.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scrolls the detail view up by `lines`.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Steps back one level, returning `true` when the application should exit.
    ///
    /// Detail goes back to the list; the list goes back to the file selector in multi-file mode
    /// and quits in single-file mode.
    pub fn back(&mut self) -> bool {
        match self.current_view {
            View::Detail => {
                self.exit_detail_view();
                false
            }
            View::List if self.file_mode == FileMode::Multi => {
                self.current_view = View::FileList;
                self.message = None;
                false
            }
            View::List | View::FileList => true,
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
