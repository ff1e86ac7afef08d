//! Reusable UI components

pub mod checkbox;
pub mod dropdown_menu;
pub mod pagination;
pub mod search_box;

// Component architecture
pub mod data_table;

// Component exports
pub use checkbox::{CheckState, Checkbox};
pub use data_table::{DataTable, TableBody};
pub use dropdown_menu::{DropdownMenu, MenuEntry};
pub use pagination::Pagination;
pub use search_box::SearchBox;
