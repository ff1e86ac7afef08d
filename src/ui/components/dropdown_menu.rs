//! Popup menu anchored to a trigger cell or button.

use crate::icons::IconService;
use crate::table::DropdownDirection;
use crate::ui::components::checkbox::Checkbox;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// One menu line. Entries with `checked` render a checkbox instead of an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: String,
    pub checked: Option<bool>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            checked: None,
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            icon: String::new(),
            checked: Some(checked),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropdownMenu {
    title: String,
    entries: Vec<MenuEntry>,
    highlighted: usize,
    direction: DropdownDirection,
    list_area: Option<Rect>,
}

impl DropdownMenu {
    pub fn new(title: impl Into<String>, entries: Vec<MenuEntry>, direction: DropdownDirection) -> Self {
        Self {
            title: title.into(),
            entries,
            highlighted: 0,
            direction,
            list_area: None,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Swap the entries, keeping the highlight in range.
    pub fn set_entries(&mut self, entries: Vec<MenuEntry>) {
        self.entries = entries;
        self.highlighted = self.highlighted.min(self.entries.len().saturating_sub(1));
    }

    pub fn direction(&self) -> DropdownDirection {
        self.direction
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight(&mut self, index: usize) {
        if index < self.entries.len() {
            self.highlighted = index;
        }
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.entries.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.highlighted = if self.highlighted == 0 {
                self.entries.len() - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    /// Entry under a screen position, from the last render.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if !super::data_table::contains(area, column, row) {
            return None;
        }
        let index = (row - area.y) as usize;
        (index < self.entries.len()).then_some(index)
    }

    /// Whether a screen position falls inside the last rendered popup.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.list_area.is_some_and(|area| {
            let outer = Rect::new(
                area.x.saturating_sub(1),
                area.y.saturating_sub(1),
                area.width + 2,
                area.height + 2,
            );
            super::data_table::contains(outer, column, row)
        })
    }

    /// Popup rectangle next to `anchor`, kept inside `bounds`.
    pub fn popup_area(&self, anchor: Rect, bounds: Rect) -> Rect {
        let content_width = self
            .entries
            .iter()
            .map(|entry| entry.label.chars().count() + entry.icon.chars().count().max(3) + 2)
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        let width = (content_width + 4).min(bounds.width);
        let height = (self.entries.len() as u16 + 2).min(bounds.height);

        let right = (anchor.x + anchor.width).min(bounds.x + bounds.width);
        let x = right.saturating_sub(width).max(bounds.x);
        let bottom = bounds.y + bounds.height;
        let y = match self.direction {
            DropdownDirection::Down => (anchor.y + anchor.height).min(bottom.saturating_sub(height)),
            DropdownDirection::Up => anchor.y.saturating_sub(height).max(bounds.y),
        };

        Rect::new(x, y, width, height)
    }

    pub fn render(&mut self, f: &mut Frame, anchor: Rect, bounds: Rect, icons: &IconService) {
        let area = self.popup_area(anchor, bounds);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let marker = match entry.checked {
                    Some(checked) => Checkbox::new(checked).span(icons),
                    None => Span::styled(entry.icon.clone(), Style::default().fg(Color::Gray)),
                };
                ListItem::new(Line::from(vec![marker, Span::raw(" "), Span::raw(entry.label.clone())]))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .border_style(Style::default().fg(Color::Gray));
        self.list_area = Some(block.inner(area));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(Some(self.highlighted));

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut state);
    }
}
