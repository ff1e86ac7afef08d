//! Table state shared by the data-table widget.
//!
//! Everything in here is plain state with no terminal dependency beyond the
//! `ratatui` text types used by column renderers. The interactive widget in
//! [`crate::ui::components::data_table`] composes these pieces.
//!
//! # Module Components
//!
//! - [`column`] - Column descriptors, accessors and renderers
//! - [`decorators`] - Ordered column decorators (selection and actions columns)
//! - [`pagination`] - Page index bookkeeping
//! - [`selection`] - Row selection set
//! - [`sort`] - Table-wide sort direction cycle
//! - [`placement`] - Dropdown open-direction heuristic
//! - [`debounce`] - Trailing debouncer and double-click tracking

pub mod callbacks;
pub mod column;
pub mod debounce;
pub mod decorators;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod pagination;
pub mod placement;
pub mod selection;
pub mod sort;
pub mod value;

pub use callbacks::{TableCallbacks, TableConfig};
pub use column::{CellContext, Column, ColumnKind, HeaderContext};
pub use debounce::{ClickTracker, Debouncer};
pub use decorators::{actions_column, apply_decorators, selection_column, ColumnDecorator};
pub use descriptor::{ActionDescriptor, BulkActionDescriptor};
pub use error::TableError;
pub use options::TableOptions;
pub use pagination::PaginationState;
pub use placement::{dropdown_direction, DropdownDirection};
pub use selection::{RowId, RowSelection};
pub use sort::SortDirection;
pub use value::CellValue;
