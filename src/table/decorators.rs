//! Column decorators.
//!
//! A decorator takes the column list and returns a new one. The table applies
//! an ordered list of them once, at construction: first the selection column is
//! prepended, then the actions column is appended when there are actions.

use super::column::{Column, ColumnKind};
use crate::constants::{ACTIONS_COLUMN_HEADER, ACTIONS_COLUMN_ID, SELECTION_COLUMN_ID};
use crate::ui::components::checkbox::Checkbox;
use ratatui::{
    layout::Constraint,
    style::{Color, Style},
    text::{Line, Span},
};

pub type ColumnDecorator<R> = Box<dyn Fn(Vec<Column<R>>) -> Vec<Column<R>>>;

const SELECTION_COLUMN_WIDTH: u16 = 4;
const ACTIONS_COLUMN_WIDTH: u16 = 3;

/// Prepend the selection column: a select-all checkbox header and a checkbox per row.
pub fn selection_column<R: 'static>() -> ColumnDecorator<R> {
    Box::new(|columns: Vec<Column<R>>| {
        let selection = Column::synthetic(
            SELECTION_COLUMN_ID,
            "",
            ColumnKind::Selection,
            Constraint::Length(SELECTION_COLUMN_WIDTH),
        )
        .with_header_renderer(|ctx| {
            let checkbox = Checkbox::new(ctx.all_rows_selected).indeterminate(ctx.some_rows_selected);
            Line::from(checkbox.span(ctx.icons))
        })
        .with_cell_renderer(|ctx| Line::from(Checkbox::new(ctx.selected).span(ctx.icons)));

        std::iter::once(selection).chain(columns).collect()
    })
}

/// Append the actions column, whose cells hold the row menu trigger.
///
/// With no actions the column list is returned untouched.
pub fn actions_column<R: 'static>(action_count: usize) -> ColumnDecorator<R> {
    Box::new(move |mut columns: Vec<Column<R>>| {
        if action_count == 0 {
            return columns;
        }

        let actions = Column::synthetic(
            ACTIONS_COLUMN_ID,
            ACTIONS_COLUMN_HEADER,
            ColumnKind::Actions,
            Constraint::Length(ACTIONS_COLUMN_WIDTH),
        )
        .with_header_renderer(|_| Line::default())
        .with_cell_renderer(|ctx| {
            Line::from(Span::styled(ctx.icons.row_menu(), Style::default().fg(Color::Gray)))
        });

        columns.push(actions);
        columns
    })
}

/// Run `columns` through every decorator, in order.
pub fn apply_decorators<R>(columns: Vec<Column<R>>, decorators: &[ColumnDecorator<R>]) -> Vec<Column<R>> {
    decorators.iter().fold(columns, |columns, decorate| decorate(columns))
}
