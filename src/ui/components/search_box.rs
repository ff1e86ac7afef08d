//! Global search input with a trailing debounce.
//!
//! The displayed value changes on every keystroke. The value handed to the
//! search callback only comes out of [`SearchBox::poll`] once the debounce
//! window has passed without further input.

use crate::icons::IconService;
use crate::table::Debouncer;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

pub struct SearchBox {
    value: String,
    placeholder: String,
    focused: bool,
    debouncer: Debouncer<String>,
}

impl SearchBox {
    pub fn new(placeholder: impl Into<String>, debounce: Duration) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.into(),
            focused: false,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn input(&mut self, ch: char, now: Instant) {
        self.value.push(ch);
        self.changed(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.value.pop().is_some() {
            self.changed(now);
        }
    }

    pub fn clear(&mut self, now: Instant) {
        if !self.value.is_empty() {
            self.value.clear();
            self.changed(now);
        }
    }

    /// Replace the whole value, as a paste would.
    pub fn set_value(&mut self, value: impl Into<String>, now: Instant) {
        self.value = value.into();
        self.changed(now);
    }

    /// The settled search text, once the debounce window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    fn changed(&mut self, now: Instant) {
        self.debouncer.push(self.value.clone(), now);
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, icons: &IconService) {
        let border_color = if self.focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let text = if self.value.is_empty() && !self.focused {
            Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.value.clone())
        };
        let mut spans = vec![Span::styled(format!("{} ", icons.search()), Style::default().fg(Color::Gray)), text];
        if self.focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Magenta)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }
}
