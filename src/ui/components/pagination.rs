use crate::constants::{PAGINATION_NEXT, PAGINATION_PREVIOUS};
use crate::table::PaginationState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen areas of the rendered page buttons, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationButtons {
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
}

/// Stateless page indicator with Previous / Next buttons.
///
/// A button is drawn only when its capability flag allows the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_count: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
}

impl Pagination {
    #[must_use]
    pub fn from_state(state: &PaginationState) -> Self {
        Self {
            page_index: state.page_index(),
            page_count: state.page_count(),
            can_previous_page: state.can_previous_page(),
            can_next_page: state.can_next_page(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }

    /// Button labels in display order.
    #[must_use]
    pub fn buttons(&self) -> Vec<&'static str> {
        let mut buttons = Vec::new();
        if self.can_previous_page {
            buttons.push(PAGINATION_PREVIOUS);
        }
        if self.can_next_page {
            buttons.push(PAGINATION_NEXT);
        }
        buttons
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) -> PaginationButtons {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.height == 0 {
            return PaginationButtons::default();
        }

        let label = Line::from(vec![
            Span::raw("Page "),
            Span::styled((self.page_index + 1).to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" of "),
            Span::styled(self.page_count.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        f.render_widget(Paragraph::new(label).alignment(Alignment::Left), inner);

        // Buttons are laid out from the right edge inward
        let mut buttons = PaginationButtons::default();
        let mut right = inner.x + inner.width;
        if self.can_next_page {
            let area = button_area(inner, right, PAGINATION_NEXT);
            render_button(f, area, PAGINATION_NEXT);
            right = area.x.saturating_sub(1);
            buttons.next = Some(area);
        }
        if self.can_previous_page {
            let area = button_area(inner, right, PAGINATION_PREVIOUS);
            render_button(f, area, PAGINATION_PREVIOUS);
            buttons.previous = Some(area);
        }

        buttons
    }
}

fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

fn button_area(inner: Rect, right: u16, label: &str) -> Rect {
    let width = button_width(label).min(right.saturating_sub(inner.x));
    Rect::new(right.saturating_sub(width), inner.y, width, 1)
}

fn render_button(f: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(format!("[ {label} ]"))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(button, area);
}
