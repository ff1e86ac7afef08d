//! UI module for tablekit
//!
//! This module holds the data-table widget, its leaf components, and the
//! terminal loop used by the demo application.

pub mod components;
pub mod core;
pub mod renderer;

pub use components::DataTable;
pub use renderer::run_app;
