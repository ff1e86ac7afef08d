//! tablekit - A data table widget for terminal user interfaces
//!
//! This library provides a paginated, selectable, searchable and sortable
//! table built on Ratatui. Filtering and sorting stay with the caller: the
//! table reports what the user asked for through callbacks, and the caller
//! hands back the rows to show.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`table`] - Table state: columns, pagination, selection, sorting, debounce
//! * [`filters`] - Row filters callers apply before handing rows to the table
//! * [`ui`] - The table widget, its leaf components and the terminal loop
//! * [`demo`] - The notification inbox run by the bundled binary

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Notification inbox shown by the binary
pub mod demo;

/// Caller-side row filters
pub mod filters;

/// Icon themes for table glyphs
pub mod icons;

/// File logging setup
pub mod logger;

/// Column descriptors and table state
pub mod table;

/// User interface components and rendering
pub mod ui;
