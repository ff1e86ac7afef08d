use std::collections::BTreeSet;

/// Identity of a row: its position in the caller's data list.
pub type RowId = usize;

/// Set of selected rows over the whole data set (not just the current page).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: BTreeSet<RowId>,
    row_count: usize,
}

impl RowSelection {
    pub fn new(row_count: usize) -> Self {
        Self {
            selected: BTreeSet::new(),
            row_count,
        }
    }

    /// Clear the selection for a new row set.
    pub fn reset(&mut self, row_count: usize) {
        self.selected.clear();
        self.row_count = row_count;
    }

    /// Flip one row. Ids outside the data set are ignored.
    pub fn toggle_row(&mut self, row_id: RowId) {
        let selected = self.is_selected(row_id);
        self.set_row_selected(row_id, !selected);
    }

    pub fn set_row_selected(&mut self, row_id: RowId, selected: bool) {
        if row_id >= self.row_count {
            return;
        }
        if selected {
            self.selected.insert(row_id);
        } else {
            self.selected.remove(&row_id);
        }
    }

    /// Select every row, or clear everything when all rows already are selected.
    pub fn toggle_all(&mut self) {
        if self.is_all_selected() {
            self.selected.clear();
        } else {
            self.selected = (0..self.row_count).collect();
        }
    }

    #[must_use]
    pub fn is_selected(&self, row_id: RowId) -> bool {
        self.selected.contains(&row_id)
    }

    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.row_count > 0 && self.selected.len() == self.row_count
    }

    /// Partial selection, rendered as the indeterminate header checkbox.
    #[must_use]
    pub fn is_some_selected(&self) -> bool {
        !self.selected.is_empty() && !self.is_all_selected()
    }

    /// Selected ids in data order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.selected.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
