//! Caller-facing configuration bundle and callbacks.

use super::column::Column;
use super::descriptor::{ActionDescriptor, BulkActionDescriptor};
use super::sort::SortDirection;

pub type ActionCallback<R> = Box<dyn FnMut(&str, &R)>;
pub type RowCallback<R> = Box<dyn FnMut(&R)>;
pub type BulkActionCallback<R> = Box<dyn FnMut(&[&R], bool, &str)>;
pub type SearchCallback = Box<dyn FnMut(&str)>;
pub type SortCallback = Box<dyn FnMut(&str, SortDirection)>;

/// Notifications flowing out of the table. Every callback is optional;
/// an absent one turns the matching interaction into a no-op.
pub struct TableCallbacks<R> {
    pub on_select_action: Option<ActionCallback<R>>,
    pub on_select_row: Option<RowCallback<R>>,
    pub on_select_bulk_action: Option<BulkActionCallback<R>>,
    pub on_search: Option<SearchCallback>,
    pub on_sort_table: Option<SortCallback>,
}

impl<R> Default for TableCallbacks<R> {
    fn default() -> Self {
        Self {
            on_select_action: None,
            on_select_row: None,
            on_select_bulk_action: None,
            on_search: None,
            on_sort_table: None,
        }
    }
}

impl<R> TableCallbacks<R> {
    pub(crate) fn select_action(&mut self, action_name: &str, row: &R) {
        if let Some(callback) = self.on_select_action.as_mut() {
            callback(action_name, row);
        }
    }

    pub(crate) fn select_row(&mut self, row: &R) {
        if let Some(callback) = self.on_select_row.as_mut() {
            callback(row);
        }
    }

    pub(crate) fn select_bulk_action(&mut self, rows: &[&R], all_rows_selected: bool, bulk_action_name: &str) {
        if let Some(callback) = self.on_select_bulk_action.as_mut() {
            callback(rows, all_rows_selected, bulk_action_name);
        }
    }

    pub(crate) fn search(&mut self, value: &str) {
        if let Some(callback) = self.on_search.as_mut() {
            callback(value);
        }
    }

    pub(crate) fn sort_table(&mut self, column_id: &str, direction: SortDirection) {
        if let Some(callback) = self.on_sort_table.as_mut() {
            callback(column_id, direction);
        }
    }
}

/// Everything a table needs at mount time.
pub struct TableConfig<R> {
    pub columns: Vec<Column<R>>,
    pub data: Vec<R>,
    pub hidden_columns: Vec<String>,
    pub hidden_columns_on_mobile: Vec<String>,
    pub actions: Vec<ActionDescriptor>,
    pub bulk_actions: Vec<BulkActionDescriptor>,
    pub is_loading: bool,
    pub is_mutation_loading: bool,
    pub search_input_placeholder: Option<String>,
    pub callbacks: TableCallbacks<R>,
}

impl<R> TableConfig<R> {
    pub fn new(columns: Vec<Column<R>>, data: Vec<R>) -> Self {
        Self {
            columns,
            data,
            hidden_columns: Vec::new(),
            hidden_columns_on_mobile: Vec::new(),
            actions: Vec::new(),
            bulk_actions: Vec::new(),
            is_loading: false,
            is_mutation_loading: false,
            search_input_placeholder: None,
            callbacks: TableCallbacks::default(),
        }
    }

    #[must_use]
    pub fn hidden_columns<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.hidden_columns = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn hidden_columns_on_mobile<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.hidden_columns_on_mobile = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: Vec<ActionDescriptor>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn bulk_actions(mut self, bulk_actions: Vec<BulkActionDescriptor>) -> Self {
        self.bulk_actions = bulk_actions;
        self
    }

    #[must_use]
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn mutation_loading(mut self, is_mutation_loading: bool) -> Self {
        self.is_mutation_loading = is_mutation_loading;
        self
    }

    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_input_placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn on_select_action(mut self, callback: impl FnMut(&str, &R) + 'static) -> Self {
        self.callbacks.on_select_action = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_select_row(mut self, callback: impl FnMut(&R) + 'static) -> Self {
        self.callbacks.on_select_row = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_select_bulk_action(mut self, callback: impl FnMut(&[&R], bool, &str) + 'static) -> Self {
        self.callbacks.on_select_bulk_action = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_search(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_search = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_sort_table(mut self, callback: impl FnMut(&str, SortDirection) + 'static) -> Self {
        self.callbacks.on_sort_table = Some(Box::new(callback));
        self
    }
}
