//! Core UI functionality shared by the table components.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//!
//! # Architecture
//!
//! Components translate raw terminal events into [`Action`]s in
//! `handle_key_events` / `handle_mouse_events`, then apply them in `update`.
//! Keeping the two steps apart lets tests drive components with actions
//! directly, without a terminal.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, MenuKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
