//! Tri-state checkbox glyph.
//!
//! The checkbox owns no state. Its checked and indeterminate flags are read
//! from the caller on every render, so a partial selection shows up as soon as
//! the owner's flag changes.

use crate::icons::IconService;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checkbox {
    checked: bool,
    indeterminate: bool,
}

impl Checkbox {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            indeterminate: false,
        }
    }

    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Indeterminate wins over checked.
    #[must_use]
    pub fn state(&self) -> CheckState {
        if self.indeterminate {
            CheckState::Indeterminate
        } else if self.checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    #[must_use]
    pub fn symbol(&self, icons: &IconService) -> &'static str {
        match self.state() {
            CheckState::Unchecked => icons.checkbox_unchecked(),
            CheckState::Checked => icons.checkbox_checked(),
            CheckState::Indeterminate => icons.checkbox_indeterminate(),
        }
    }

    #[must_use]
    pub fn span(&self, icons: &IconService) -> Span<'static> {
        let style = match self.state() {
            CheckState::Unchecked => Style::default().fg(Color::Gray),
            CheckState::Checked | CheckState::Indeterminate => Style::default().fg(Color::Magenta),
        };
        Span::styled(self.symbol(icons), style)
    }
}
