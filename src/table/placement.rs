use crate::constants::DROPDOWN_MIN_SPLIT_ROWS;

/// Which way a row's action menu unfolds from its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownDirection {
    Down,
    Up,
}

/// Decide the open direction for the menu of the row at `row_index` on a page of `page_len` rows.
///
/// Short pages always open downward. Otherwise the page is split in two halves:
/// rows in the top half open downward, rows in the bottom half open upward.
#[must_use]
pub fn dropdown_direction(row_index: usize, page_len: usize) -> DropdownDirection {
    if page_len < DROPDOWN_MIN_SPLIT_ROWS {
        return DropdownDirection::Down;
    }

    // floor(row_index / (page_len / 2)) computed without floats
    let half = (2 * row_index) / page_len;
    if half % 2 == 0 {
        DropdownDirection::Down
    } else {
        DropdownDirection::Up
    }
}
