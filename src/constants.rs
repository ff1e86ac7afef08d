//! Constants used throughout the widget and the demo application
//!
//! This module centralizes magic strings, UI text, and default values
//! to keep the widget and its configuration consistent.

// Reserved column ids
pub const SELECTION_COLUMN_ID: &str = "selection";
pub const ACTIONS_COLUMN_ID: &str = "actions";
pub const ACTIONS_COLUMN_HEADER: &str = "Actions";

// Table defaults
/// Rows shown per page
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Placeholder rows shown while data is loading
pub const SKELETON_ROW_COUNT: usize = 8;
/// Trailing debounce applied to search keystrokes
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
/// Upper bound accepted for the search debounce
pub const SEARCH_DEBOUNCE_MAX_MS: u64 = 10_000;
/// Two clicks on the same row within this window activate it
pub const DOUBLE_CLICK_MS: u64 = 400;
/// Terminals narrower than this merge the mobile hidden-column list
pub const NARROW_VIEWPORT_WIDTH: u16 = 80;
/// Pages shorter than this always open row menus downward
pub const DROPDOWN_MIN_SPLIT_ROWS: usize = 5;

// UI text
pub const SEARCH_PLACEHOLDER: &str = "Search Documents";
pub const EMPTY_TABLE_MESSAGE: &str = "There are no files here yet";
pub const PAGINATION_PREVIOUS: &str = "Previous";
pub const PAGINATION_NEXT: &str = "Next";
pub const MENU_TITLE_ACTIONS: &str = "Options";
pub const MENU_TITLE_BULK_ACTIONS: &str = "Bulk actions";
pub const MENU_TITLE_COLUMNS: &str = "Columns";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "tablekit.log";
