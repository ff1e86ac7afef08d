//! Row filters for caller-side filtering.
//!
//! Every filter takes the rows, the column whose value is tested and the filter
//! value, and returns the matching rows in their original order. An empty
//! filter value matches every row.

use crate::table::{CellValue, Column};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Sorted distinct values of a column, flattening list values and skipping empty ones.
pub fn selection_options<R>(rows: &[R], column: &Column<R>) -> Vec<String> {
    rows.iter()
        .flat_map(|row| column.value(row).options())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Rows whose value renders exactly as `filter_value`.
pub fn single_select_filter<'a, R>(rows: &'a [R], column: &Column<R>, filter_value: &str) -> Vec<&'a R> {
    if filter_value.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| column.value(row).to_string() == filter_value)
        .collect()
}

/// Rows whose value renders as any of `filter_values`.
pub fn multi_select_filter<'a, R>(rows: &'a [R], column: &Column<R>, filter_values: &[String]) -> Vec<&'a R> {
    if filter_values.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| {
            let value = column.value(row).to_string();
            filter_values.iter().any(|candidate| *candidate == value)
        })
        .collect()
}

/// Rows whose list value contains at least one of `filter_values`.
///
/// Text values match on substring, other values never match.
pub fn multiple_select_array_filter<'a, R>(
    rows: &'a [R],
    column: &Column<R>,
    filter_values: &[String],
) -> Vec<&'a R> {
    if filter_values.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| {
            let value = column.value(row);
            filter_values.iter().any(|candidate| value.includes(candidate))
        })
        .collect()
}

/// Rows whose date falls strictly between the two bounds.
///
/// `None` matches every row. Values that cannot be read as a date never match.
pub fn date_range_filter<'a, R>(
    rows: &'a [R],
    column: &Column<R>,
    range: Option<(NaiveDateTime, NaiveDateTime)>,
) -> Vec<&'a R> {
    let Some((start, end)) = range else {
        return rows.iter().collect();
    };

    rows.iter()
        .filter(|row| {
            column
                .value(row)
                .as_date()
                .is_some_and(|date| date > start && date < end)
        })
        .collect()
}

/// Case-insensitive substring match across every data column of a row.
pub fn matches_search<R>(row: &R, columns: &[Column<R>], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    columns
        .iter()
        .filter(|column| !column.is_synthetic())
        .map(|column| column.value(row))
        .filter(|value| *value != CellValue::Empty)
        .any(|value| value.to_string().to_lowercase().contains(&query))
}
