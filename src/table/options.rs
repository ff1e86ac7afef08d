use crate::constants::{
    DEFAULT_PAGE_SIZE, DOUBLE_CLICK_MS, EMPTY_TABLE_MESSAGE, NARROW_VIEWPORT_WIDTH, SEARCH_DEBOUNCE_MS,
    SKELETON_ROW_COUNT,
};
use crate::icons::IconTheme;
use std::time::Duration;

/// Presentation and timing knobs of a table instance.
///
/// Defaults match the widget's fixed behaviour; the application config can
/// override them through [`crate::config::TableSettings::options`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub page_size: usize,
    pub skeleton_rows: usize,
    pub search_debounce: Duration,
    pub double_click: Duration,
    pub narrow_viewport_width: u16,
    pub empty_message: String,
    pub icon_theme: IconTheme,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            skeleton_rows: SKELETON_ROW_COUNT,
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            double_click: Duration::from_millis(DOUBLE_CLICK_MS),
            narrow_viewport_width: NARROW_VIEWPORT_WIDTH,
            empty_message: EMPTY_TABLE_MESSAGE.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}
