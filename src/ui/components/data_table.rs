//! The interactive data table.
//!
//! `DataTable` owns all widget state (page, selection, sort direction, column
//! visibility, search text, open menu) and reports user intent through the
//! callbacks in its [`TableConfig`]. Row data, filtering and ordering stay with
//! the caller: a sort header click only reports the new direction.

use crate::constants::{
    MENU_TITLE_ACTIONS, MENU_TITLE_BULK_ACTIONS, MENU_TITLE_COLUMNS, SEARCH_PLACEHOLDER, SELECTION_COLUMN_ID,
};
use crate::icons::IconService;
use crate::table::{
    actions_column, apply_decorators, dropdown_direction, selection_column, ActionDescriptor, BulkActionDescriptor,
    CellContext, ClickTracker, Column, ColumnDecorator, ColumnKind, DropdownDirection, HeaderContext,
    PaginationState, RowId, RowSelection, SortDirection, TableCallbacks, TableConfig, TableError, TableOptions,
};
use crate::ui::components::dropdown_menu::{DropdownMenu, MenuEntry};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::search_box::SearchBox;
use crate::ui::core::{Action, Component, MenuKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use std::collections::BTreeSet;
use std::ops::Range;
use std::time::Instant;

const TOOLBAR_HEIGHT: u16 = 3;
const PAGINATION_HEIGHT: u16 = 2;
const TOOLBAR_BUTTON_WIDTH: u16 = 7;
const SPINNER_WIDTH: u16 = 3;

/// What the table body shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Placeholder rows while loading
    Skeleton(usize),
    /// The single "no data" row
    Empty,
    /// Row ids of the current page
    Rows(Range<RowId>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Table,
    Search,
}

struct OpenMenu {
    kind: MenuKind,
    menu: DropdownMenu,
}

/// Screen rectangles from the last render, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
struct HitAreas {
    bounds: Rect,
    search: Option<Rect>,
    bulk_button: Option<Rect>,
    columns_button: Option<Rect>,
    header_row: Option<Rect>,
    /// (x range start, width, index into visible columns)
    column_spans: Vec<(u16, u16, usize)>,
    rows: Vec<(Rect, RowId)>,
    previous_page: Option<Rect>,
    next_page: Option<Rect>,
}

pub(crate) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    data: Vec<R>,
    hidden_columns: BTreeSet<String>,
    hidden_columns_on_mobile: Vec<String>,
    viewport_applied: bool,
    actions: Vec<ActionDescriptor>,
    bulk_actions: Vec<BulkActionDescriptor>,
    is_loading: bool,
    is_mutation_loading: bool,
    pagination: PaginationState,
    selection: RowSelection,
    selected_rows: Vec<RowId>,
    sort_direction: SortDirection,
    search: SearchBox,
    callbacks: TableCallbacks<R>,
    options: TableOptions,
    icons: IconService,
    focus: Focus,
    cursor_row: usize,
    /// First page row drawn when the body is shorter than the page
    row_offset: usize,
    cursor_column: usize,
    open_menu: Option<OpenMenu>,
    clicks: ClickTracker,
    hit_areas: HitAreas,
    tick: usize,
}

impl<R: 'static> DataTable<R> {
    /// Build a table with the default options.
    pub fn new(config: TableConfig<R>) -> Result<Self, TableError> {
        Self::with_options(config, TableOptions::default())
    }

    pub fn with_options(config: TableConfig<R>, options: TableOptions) -> Result<Self, TableError> {
        validate_columns(&config.columns)?;

        let decorators: Vec<ColumnDecorator<R>> = vec![selection_column(), actions_column(config.actions.len())];
        let columns = apply_decorators(config.columns, &decorators);
        let row_count = config.data.len();
        let placeholder = config
            .search_input_placeholder
            .unwrap_or_else(|| SEARCH_PLACEHOLDER.to_string());

        log::debug!(
            "Mounting table with {} columns, {} rows, {} actions, {} bulk actions",
            columns.len(),
            row_count,
            config.actions.len(),
            config.bulk_actions.len()
        );

        Ok(Self {
            columns,
            data: config.data,
            hidden_columns: config.hidden_columns.into_iter().collect(),
            hidden_columns_on_mobile: config.hidden_columns_on_mobile,
            viewport_applied: false,
            actions: config.actions,
            bulk_actions: config.bulk_actions,
            is_loading: config.is_loading,
            is_mutation_loading: config.is_mutation_loading,
            pagination: PaginationState::new(options.page_size, row_count),
            selection: RowSelection::new(row_count),
            selected_rows: Vec::new(),
            sort_direction: SortDirection::None,
            search: SearchBox::new(placeholder, options.search_debounce),
            callbacks: config.callbacks,
            icons: IconService::new(options.icon_theme),
            clicks: ClickTracker::new(options.double_click),
            options,
            focus: Focus::Table,
            cursor_row: 0,
            row_offset: 0,
            cursor_column: 0,
            open_menu: None,
            hit_areas: HitAreas::default(),
            tick: 0,
        })
    }

    /// Hide the mobile column list on narrow viewports. Only the first call has any effect.
    pub fn apply_viewport_width(&mut self, width: u16) {
        if self.viewport_applied {
            return;
        }
        self.viewport_applied = true;

        if width < self.options.narrow_viewport_width {
            log::debug!(
                "Viewport width {} below {}, hiding {:?}",
                width,
                self.options.narrow_viewport_width,
                self.hidden_columns_on_mobile
            );
            self.hidden_columns.extend(self.hidden_columns_on_mobile.iter().cloned());
            self.clamp_cursor_column();
        }
    }

    /// Replace the rows. The page and the selection reset.
    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.pagination.reset(self.data.len());
        self.selection.reset(self.data.len());
        self.sync_selected_rows();
        self.cursor_row = 0;
        self.row_offset = 0;
        self.clicks.reset();
        if matches!(
            self.open_menu_kind(),
            Some(MenuKind::RowActions(_) | MenuKind::BulkActions)
        ) {
            self.open_menu = None;
        }
    }

    /// Toggle the skeleton body. Row menus close while rows are hidden.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        if is_loading && matches!(self.open_menu_kind(), Some(MenuKind::RowActions(_))) {
            self.open_menu = None;
        }
    }

    pub fn set_mutation_loading(&mut self, is_mutation_loading: bool) {
        self.is_mutation_loading = is_mutation_loading;
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_mutation_loading(&self) -> bool {
        self.is_mutation_loading
    }

    pub fn icons_mut(&mut self) -> &mut IconService {
        &mut self.icons
    }

    /// All columns, injected ones included, in display order.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        self.columns
            .iter()
            .filter(|column| !self.hidden_columns.contains(column.id()))
            .collect()
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        !self.hidden_columns.contains(column_id)
    }

    pub fn hidden_columns(&self) -> Vec<&str> {
        self.hidden_columns.iter().map(String::as_str).collect()
    }

    pub fn toggle_column_visibility(&mut self, column_id: &str) -> Result<(), TableError> {
        if !self.columns.iter().any(|column| column.id() == column_id) {
            return Err(TableError::UnknownColumn(column_id.to_string()));
        }

        if !self.hidden_columns.remove(column_id) {
            self.hidden_columns.insert(column_id.to_string());
        }
        log::debug!("Column '{}' visible: {}", column_id, self.is_column_visible(column_id));
        self.clamp_cursor_column();
        Ok(())
    }

    /// Columns listed in the visibility menu: everything but the selection column.
    fn toggleable_columns(&self) -> Vec<&Column<R>> {
        self.columns
            .iter()
            .filter(|column| column.kind() != ColumnKind::Selection)
            .collect()
    }

    fn clamp_cursor_column(&mut self) {
        let visible = self.visible_columns().len();
        self.cursor_column = self.cursor_column.min(visible.saturating_sub(1));
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn next_page(&mut self) {
        if self.pagination.next_page() {
            self.cursor_row = 0;
            self.row_offset = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.pagination.previous_page() {
            self.cursor_row = 0;
            self.row_offset = 0;
        }
    }

    /// Rows of the current page.
    pub fn page(&self) -> &[R] {
        &self.data[self.pagination.page_range()]
    }

    pub fn body(&self) -> TableBody {
        if self.is_loading {
            TableBody::Skeleton(self.options.skeleton_rows)
        } else if self.pagination.page_len() == 0 {
            TableBody::Empty
        } else {
            TableBody::Rows(self.pagination.page_range())
        }
    }

    /// Open direction of the action menu for a row on the current page.
    pub fn dropdown_direction_for(&self, row_id: RowId) -> DropdownDirection {
        let range = self.pagination.page_range();
        let index_in_page = row_id.saturating_sub(range.start);
        dropdown_direction(index_in_page, range.len())
    }

    /// Row under the keyboard cursor. None while the body shows no rows.
    pub fn cursor_row_id(&self) -> Option<RowId> {
        let TableBody::Rows(range) = self.body() else {
            return None;
        };
        let row_id = range.start + self.cursor_row;
        range.contains(&row_id).then_some(row_id)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Header click: advance the sort cycle and report it.
    ///
    /// The selection and actions columns do not sort; unknown ids are ignored.
    pub fn sort_by(&mut self, column_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.id() == column_id && !column.is_synthetic());
        if !sortable {
            return;
        }

        self.sort_direction = self.sort_direction.next();
        log::debug!("Sorting by '{}' {}", column_id, self.sort_direction);
        self.callbacks.sort_table(column_id, self.sort_direction);
    }

    pub fn toggle_row_selected(&mut self, row_id: RowId) {
        self.selection.toggle_row(row_id);
        self.sync_selected_rows();
    }

    pub fn toggle_all_rows_selected(&mut self) {
        self.selection.toggle_all();
        self.sync_selected_rows();
    }

    pub fn is_row_selected(&self, row_id: RowId) -> bool {
        self.selection.is_selected(row_id)
    }

    pub fn is_all_rows_selected(&self) -> bool {
        self.selection.is_all_selected()
    }

    pub fn selected_row_ids(&self) -> &[RowId] {
        &self.selected_rows
    }

    /// Original payloads of the selected rows, in data order.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.selected_rows.iter().filter_map(|row_id| self.data.get(*row_id)).collect()
    }

    fn sync_selected_rows(&mut self) {
        self.selected_rows = self.selection.selected_ids();
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    pub fn bulk_actions(&self) -> &[BulkActionDescriptor] {
        &self.bulk_actions
    }

    /// Run a per-row action against `row_id`'s payload.
    pub fn select_action(&mut self, row_id: RowId, action_name: &str) {
        if let Some(row) = self.data.get(row_id) {
            log::debug!("Action '{}' on row {}", action_name, row_id);
            self.callbacks.select_action(action_name, row);
        }
    }

    /// Run a bulk action against the current selection. Does nothing without a selection.
    pub fn select_bulk_action(&mut self, bulk_action_name: &str) {
        if self.selected_rows.is_empty() {
            return;
        }

        let all_rows_selected = self.selection.is_all_selected();
        let rows: Vec<&R> = self.selected_rows.iter().filter_map(|row_id| self.data.get(*row_id)).collect();
        log::debug!("Bulk action '{}' on {} rows (all: {})", bulk_action_name, rows.len(), all_rows_selected);
        self.callbacks.select_bulk_action(&rows, all_rows_selected, bulk_action_name);
    }

    /// Row activation (double-click or Enter).
    pub fn activate_row(&mut self, row_id: RowId) {
        if let Some(row) = self.data.get(row_id) {
            log::debug!("Row {} activated", row_id);
            self.callbacks.select_row(row);
        }
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search
    }

    /// Whether keystrokes are consumed as text or menu navigation rather than table commands.
    pub fn is_capturing_input(&self) -> bool {
        self.focus == Focus::Search || self.open_menu.is_some()
    }

    pub fn search_input(&mut self, ch: char, now: Instant) {
        self.search.input(ch, now);
    }

    pub fn search_backspace(&mut self, now: Instant) {
        self.search.backspace(now);
    }

    pub fn set_search_value(&mut self, value: impl Into<String>, now: Instant) {
        self.search.set_value(value, now);
    }

    /// Advance time-based state: releases a settled search and steps the spinner.
    pub fn tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(query) = self.search.poll(now) {
            log::debug!("Search settled: '{}'", query);
            self.callbacks.search(&query);
        }
    }

    pub fn open_menu_kind(&self) -> Option<MenuKind> {
        self.open_menu.as_ref().map(|open| open.kind)
    }

    pub fn open_menu(&self) -> Option<&DropdownMenu> {
        self.open_menu.as_ref().map(|open| &open.menu)
    }

    fn open(&mut self, kind: MenuKind) {
        let menu = match kind {
            MenuKind::RowActions(row_id) => {
                let shown = matches!(self.body(), TableBody::Rows(range) if range.contains(&row_id));
                if self.actions.is_empty() || !shown {
                    return;
                }
                let entries = self
                    .actions
                    .iter()
                    .map(|action| MenuEntry::new(action.name.clone(), action.icon.clone()))
                    .collect();
                DropdownMenu::new(MENU_TITLE_ACTIONS, entries, self.dropdown_direction_for(row_id))
            }
            MenuKind::BulkActions => {
                // Disabled until something is selected
                if self.selected_rows.is_empty() || self.bulk_actions.is_empty() {
                    return;
                }
                let entries = self
                    .bulk_actions
                    .iter()
                    .map(|action| MenuEntry::new(action.name.clone(), action.icon.clone()))
                    .collect();
                DropdownMenu::new(MENU_TITLE_BULK_ACTIONS, entries, DropdownDirection::Down)
            }
            MenuKind::Columns => DropdownMenu::new(MENU_TITLE_COLUMNS, self.column_entries(), DropdownDirection::Down),
        };

        self.focus = Focus::Table;
        self.search.set_focused(false);
        self.open_menu = Some(OpenMenu { kind, menu });
    }

    fn column_entries(&self) -> Vec<MenuEntry> {
        self.toggleable_columns()
            .into_iter()
            .map(|column| MenuEntry::checkbox(column.header(), self.is_column_visible(column.id())))
            .collect()
    }

    fn confirm_menu(&mut self, index: usize) {
        let Some(kind) = self.open_menu_kind() else {
            return;
        };

        match kind {
            MenuKind::RowActions(row_id) => {
                self.open_menu = None;
                if let Some(name) = self.actions.get(index).map(|action| action.name.clone()) {
                    self.select_action(row_id, &name);
                }
            }
            MenuKind::BulkActions => {
                self.open_menu = None;
                if let Some(name) = self.bulk_actions.get(index).map(|action| action.name.clone()) {
                    self.select_bulk_action(&name);
                }
            }
            MenuKind::Columns => {
                // The column menu stays open so several columns can be toggled
                let column_id = self.toggleable_columns().get(index).map(|column| column.id().to_string());
                if let Some(column_id) = column_id {
                    if let Err(e) = self.toggle_column_visibility(&column_id) {
                        log::warn!("Column toggle failed: {e}");
                    }
                }
                let entries = self.column_entries();
                if let Some(open) = self.open_menu.as_mut() {
                    open.menu.set_entries(entries);
                    open.menu.highlight(index);
                }
            }
        }
    }

    /// Route a mouse event using the areas of the last render.
    pub fn handle_mouse_at(&mut self, mouse: MouseEvent, now: Instant) -> Action {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => return Action::NextRow,
            MouseEventKind::ScrollUp => return Action::PreviousRow,
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return Action::None,
        }

        if let Some(open) = &self.open_menu {
            return match open.menu.entry_at(column, row) {
                Some(index) => Action::MenuSelect(index),
                None if open.menu.contains(column, row) => Action::None,
                None => Action::CloseMenu,
            };
        }

        let areas = &self.hit_areas;
        let hit = |rect: Option<Rect>| rect.is_some_and(|rect| contains(rect, column, row));

        if hit(areas.search) {
            return Action::FocusSearch;
        }
        if hit(areas.bulk_button) {
            return Action::OpenMenu(MenuKind::BulkActions);
        }
        if hit(areas.columns_button) {
            return Action::OpenMenu(MenuKind::Columns);
        }
        if hit(areas.previous_page) {
            return Action::PreviousPage;
        }
        if hit(areas.next_page) {
            return Action::NextPage;
        }

        let visible_index = areas
            .column_spans
            .iter()
            .find(|(x, width, _)| column >= *x && column < x + width)
            .map(|(_, _, index)| *index);
        let Some(visible_index) = visible_index else {
            return Action::None;
        };
        let visible = self.visible_columns();
        let Some(target) = visible.get(visible_index) else {
            return Action::None;
        };

        if hit(areas.header_row) {
            return match target.kind() {
                ColumnKind::Selection => Action::ToggleAllRows,
                ColumnKind::Actions => Action::None,
                ColumnKind::Data => Action::SortBy(target.id().to_string()),
            };
        }

        let Some(row_id) = areas
            .rows
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, row_id)| *row_id)
        else {
            return Action::None;
        };

        match target.kind() {
            // Interactive cells never count towards a double-click
            ColumnKind::Selection => {
                self.clicks.reset();
                Action::ToggleRow(row_id)
            }
            ColumnKind::Actions => {
                self.clicks.reset();
                Action::OpenMenu(MenuKind::RowActions(row_id))
            }
            ColumnKind::Data => {
                if self.clicks.register(row_id, now) {
                    Action::ActivateRow(row_id)
                } else {
                    Action::FocusRow(row_id)
                }
            }
        }
    }

    fn render_toolbar(&mut self, f: &mut Frame, rect: Rect) {
        let [search_area, spinner_area, _, bulk_area, columns_area] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Length(SPINNER_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(TOOLBAR_BUTTON_WIDTH),
            Constraint::Length(TOOLBAR_BUTTON_WIDTH),
        ])
        .areas(rect);

        self.search.render(f, search_area, &self.icons);
        self.hit_areas.search = Some(search_area);

        if self.is_mutation_loading {
            let spinner = Paragraph::new(self.icons.spinner_frame(self.tick))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            let centered = Rect::new(spinner_area.x, spinner_area.y + 1, spinner_area.width, 1);
            f.render_widget(spinner, centered);
        }

        let bulk_enabled = !self.selected_rows.is_empty() && !self.bulk_actions.is_empty();
        let bulk_color = if bulk_enabled { Color::White } else { Color::DarkGray };
        render_toolbar_button(f, bulk_area, self.icons.bulk_menu(), bulk_color);
        render_toolbar_button(f, columns_area, self.icons.columns_menu(), Color::White);
        self.hit_areas.bulk_button = Some(bulk_area);
        self.hit_areas.columns_button = Some(columns_area);
    }

    fn render_grid(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.hit_areas.column_spans.clear();
        self.hit_areas.rows.clear();
        self.hit_areas.header_row = None;
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let TableBody::Rows(range) = self.body() {
            let height = inner.height.saturating_sub(1) as usize;
            self.row_offset = scroll_offset(self.cursor_row, self.row_offset, range.len(), height);
        }

        let visible = self.visible_columns();
        let column_areas = column_areas(&visible, inner);
        let table_focused = self.focus == Focus::Table && self.open_menu.is_none();

        // Header
        let header_ctx = HeaderContext {
            icons: &self.icons,
            all_rows_selected: self.selection.is_all_selected(),
            some_rows_selected: self.selection.is_some_selected(),
            sort: self.sort_direction,
        };
        let header_row = Rect::new(inner.x, inner.y, inner.width, 1);
        let mut column_spans = Vec::with_capacity(visible.len());
        for (index, (column, area)) in visible.iter().zip(column_areas.iter()).enumerate() {
            let mut line = column.render_header(&header_ctx);
            if !column.is_synthetic() {
                match self.sort_direction {
                    SortDirection::Asc => line.push_span(Span::raw(format!(" {}", self.icons.sort_ascending()))),
                    SortDirection::Desc => line.push_span(Span::raw(format!(" {}", self.icons.sort_descending()))),
                    SortDirection::None => {}
                }
            }
            let mut style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
            if table_focused && index == self.cursor_column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let cell = Rect::new(area.x, header_row.y, area.width, 1);
            f.render_widget(Paragraph::new(line).style(style), cell);
            column_spans.push((area.x, area.width, index));
        }

        // Body
        let body_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));
        let mut rows = Vec::new();
        match self.body() {
            TableBody::Skeleton(count) => {
                let bar = self.icons.skeleton().repeat(body_area.width as usize);
                for offset in 0..count.min(body_area.height as usize) {
                    let area = Rect::new(body_area.x, body_area.y + offset as u16, body_area.width, 1);
                    f.render_widget(Paragraph::new(bar.clone()).style(Style::default().fg(Color::DarkGray)), area);
                }
            }
            TableBody::Empty => {
                if body_area.height > 0 {
                    let area = Rect::new(body_area.x, body_area.y, body_area.width, 1);
                    let message = Paragraph::new(self.options.empty_message.clone())
                        .style(Style::default().fg(Color::Gray))
                        .alignment(Alignment::Center);
                    f.render_widget(message, area);
                }
            }
            TableBody::Rows(range) => {
                let page_len = range.len();
                let height = body_area.height as usize;
                let offset = self.row_offset;

                for (index_in_page, row_id) in range.enumerate().skip(offset).take(height) {
                    let y = body_area.y + (index_in_page - offset) as u16;
                    let row_area = Rect::new(body_area.x, y, body_area.width, 1);
                    let selected = self.selection.is_selected(row_id);

                    let mut style = Style::default();
                    if selected {
                        style = style.fg(Color::Magenta);
                    }
                    if table_focused && index_in_page == self.cursor_row {
                        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                    }
                    f.render_widget(Block::default().style(style), row_area);

                    let ctx = CellContext {
                        row: &self.data[row_id],
                        row_id,
                        index_in_page,
                        page_len,
                        selected,
                        icons: &self.icons,
                    };
                    for (column, area) in visible.iter().zip(column_areas.iter()) {
                        let cell = Rect::new(area.x, y, area.width, 1);
                        f.render_widget(Paragraph::new(column.render_cell(&ctx)).style(style), cell);
                    }
                    rows.push((row_area, row_id));
                }

                if page_len > height && height > 0 {
                    let track = Rect::new(rect.x + rect.width.saturating_sub(1), body_area.y, 1, body_area.height);
                    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                        .begin_symbol(None)
                        .end_symbol(None)
                        .style(Style::default().fg(Color::DarkGray));
                    let mut state = ScrollbarState::new(page_len.saturating_sub(height) + 1).position(offset);
                    f.render_stateful_widget(scrollbar, track, &mut state);
                }
            }
        }

        self.hit_areas.column_spans = column_spans;
        self.hit_areas.header_row = Some(header_row);
        self.hit_areas.rows = rows;
    }

    fn render_menu(&mut self, f: &mut Frame) {
        let Some(kind) = self.open_menu_kind() else {
            return;
        };

        let anchor = match kind {
            MenuKind::RowActions(row_id) => {
                let row_area = self
                    .hit_areas
                    .rows
                    .iter()
                    .find(|(_, id)| *id == row_id)
                    .map(|(rect, _)| *rect);
                let actions_span = {
                    let visible = self.visible_columns();
                    self.hit_areas
                        .column_spans
                        .iter()
                        .find(|(_, _, index)| visible.get(*index).is_some_and(|c| c.kind() == ColumnKind::Actions))
                        .copied()
                };
                match (row_area, actions_span) {
                    (Some(row), Some((x, width, _))) => Rect::new(x, row.y, width, 1),
                    // Actions column hidden: anchor on the row's right edge
                    (Some(row), None) => Rect::new((row.x + row.width).saturating_sub(1), row.y, 1, 1),
                    (None, _) => {
                        self.open_menu = None;
                        return;
                    }
                }
            }
            MenuKind::BulkActions => match self.hit_areas.bulk_button {
                Some(rect) => rect,
                None => return,
            },
            MenuKind::Columns => match self.hit_areas.columns_button {
                Some(rect) => rect,
                None => return,
            },
        };

        let bounds = self.hit_areas.bounds;
        if let Some(open) = self.open_menu.as_mut() {
            open.menu.render(f, anchor, bounds, &self.icons);
        }
    }
}

/// Keep the cursor row inside a window of `height` rows over a page of `page_len` rows.
fn scroll_offset(cursor: usize, offset: usize, page_len: usize, height: usize) -> usize {
    if height == 0 || page_len <= height {
        return 0;
    }
    let offset = if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    };
    offset.min(page_len - height)
}

/// Split `inner` into one area per column with a one-cell gap between columns.
fn column_areas<R>(columns: &[&Column<R>], inner: Rect) -> Vec<Rect> {
    let mut constraints = Vec::with_capacity(columns.len() * 2);
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(column.width());
    }

    Layout::horizontal(constraints)
        .split(inner)
        .iter()
        .step_by(2)
        .copied()
        .collect()
}

fn render_toolbar_button(f: &mut Frame, rect: Rect, icon: &str, color: Color) {
    let button = Paragraph::new(icon.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(button, rect);
}

fn validate_columns<R>(columns: &[Column<R>]) -> Result<(), TableError> {
    let mut seen = BTreeSet::new();
    for column in columns {
        let id = column.id();
        if id == SELECTION_COLUMN_ID || id == crate::constants::ACTIONS_COLUMN_ID {
            return Err(TableError::ReservedColumnId(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(TableError::DuplicateColumn(id.to_string()));
        }
    }
    Ok(())
}

impl<R: 'static> Component for DataTable<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.open_menu.is_some() {
            return match key.code {
                KeyCode::Up | KeyCode::Char('k') => Action::MenuPrevious,
                KeyCode::Down | KeyCode::Char('j') => Action::MenuNext,
                KeyCode::Enter | KeyCode::Char(' ') => Action::MenuConfirm,
                KeyCode::Esc | KeyCode::Char('q') => Action::CloseMenu,
                _ => Action::None,
            };
        }

        if self.focus == Focus::Search {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Action::BlurSearch,
                KeyCode::Backspace => Action::SearchBackspace,
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SearchClear,
                KeyCode::Char(ch) => Action::SearchInput(ch),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousColumn,
            KeyCode::Right | KeyCode::Char('l') => Action::NextColumn,
            KeyCode::PageDown | KeyCode::Char('n') => Action::NextPage,
            KeyCode::PageUp | KeyCode::Char('p') => Action::PreviousPage,
            KeyCode::Char('/') | KeyCode::Tab => Action::FocusSearch,
            KeyCode::Char('s') => match self.visible_columns().get(self.cursor_column) {
                Some(column) if column.kind() == ColumnKind::Selection => Action::ToggleAllRows,
                Some(column) if !column.is_synthetic() => Action::SortBy(column.id().to_string()),
                _ => Action::None,
            },
            KeyCode::Char(' ') => self.cursor_row_id().map_or(Action::None, Action::ToggleRow),
            KeyCode::Char('a') => Action::ToggleAllRows,
            KeyCode::Enter => self.cursor_row_id().map_or(Action::None, Action::ActivateRow),
            KeyCode::Char('m') | KeyCode::Char('.') => self
                .cursor_row_id()
                .map_or(Action::None, |row_id| Action::OpenMenu(MenuKind::RowActions(row_id))),
            KeyCode::Char('b') => Action::OpenMenu(MenuKind::BulkActions),
            KeyCode::Char('c') => Action::OpenMenu(MenuKind::Columns),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.handle_mouse_at(mouse, Instant::now())
    }

    fn update(&mut self, action: Action) -> Action {
        let now = Instant::now();
        match action {
            Action::NextRow => {
                let page_len = self.pagination.page_len();
                if page_len > 0 {
                    self.cursor_row = (self.cursor_row + 1) % page_len;
                }
            }
            Action::PreviousRow => {
                let page_len = self.pagination.page_len();
                if page_len > 0 {
                    self.cursor_row = if self.cursor_row == 0 { page_len - 1 } else { self.cursor_row - 1 };
                }
            }
            Action::NextColumn => {
                let visible = self.visible_columns().len();
                if visible > 0 {
                    self.cursor_column = (self.cursor_column + 1) % visible;
                }
            }
            Action::PreviousColumn => {
                let visible = self.visible_columns().len();
                if visible > 0 {
                    self.cursor_column = if self.cursor_column == 0 { visible - 1 } else { self.cursor_column - 1 };
                }
            }
            Action::NextPage => self.next_page(),
            Action::PreviousPage => self.previous_page(),
            Action::FocusRow(row_id) => {
                let range = self.pagination.page_range();
                if range.contains(&row_id) {
                    self.cursor_row = row_id - range.start;
                }
                self.focus = Focus::Table;
                self.search.set_focused(false);
            }
            Action::SortBy(column_id) => self.sort_by(&column_id),
            Action::ToggleRow(row_id) => self.toggle_row_selected(row_id),
            Action::ToggleAllRows => self.toggle_all_rows_selected(),
            Action::ActivateRow(row_id) => self.activate_row(row_id),
            Action::ToggleColumn(column_id) => {
                if let Err(e) = self.toggle_column_visibility(&column_id) {
                    log::warn!("{e}");
                }
            }
            Action::OpenMenu(kind) => self.open(kind),
            Action::CloseMenu => self.open_menu = None,
            Action::MenuNext => {
                if let Some(open) = self.open_menu.as_mut() {
                    open.menu.next();
                }
            }
            Action::MenuPrevious => {
                if let Some(open) = self.open_menu.as_mut() {
                    open.menu.previous();
                }
            }
            Action::MenuConfirm => {
                if let Some(index) = self.open_menu().map(DropdownMenu::highlighted) {
                    self.confirm_menu(index);
                }
            }
            Action::MenuSelect(index) => self.confirm_menu(index),
            Action::FocusSearch => {
                self.open_menu = None;
                self.focus = Focus::Search;
                self.search.set_focused(true);
            }
            Action::BlurSearch => {
                self.focus = Focus::Table;
                self.search.set_focused(false);
            }
            Action::SearchInput(ch) => self.search.input(ch, now),
            Action::SearchBackspace => self.search.backspace(now),
            Action::SearchClear => self.search.clear(now),
            Action::Quit => return Action::Quit,
            Action::None => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hit_areas.bounds = rect;
        let [toolbar, grid, footer] = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(PAGINATION_HEIGHT),
        ])
        .areas(rect);

        self.render_toolbar(f, toolbar);
        self.render_grid(f, grid);

        let buttons = Pagination::from_state(&self.pagination).render(f, footer);
        self.hit_areas.previous_page = buttons.previous;
        self.hit_areas.next_page = buttons.next;

        self.render_menu(f);
    }
}
