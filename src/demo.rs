//! Notification inbox used by the bundled terminal application.
//!
//! The table itself never filters or sorts; callbacks report what the user asked
//! for and [`Inbox`] recomputes the visible rows, the way a server-backed page
//! would.

use crate::config::Config;
use crate::filters::{matches_search, selection_options, single_select_filter};
use crate::table::{ActionDescriptor, BulkActionDescriptor, CellValue, Column, SortDirection, TableConfig, TableError};
use crate::ui::DataTable;
use anyhow::{Context, Result};
use ratatui::{
    layout::Constraint,
    style::{Color, Style},
    text::{Line, Span},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::mpsc::UnboundedSender;

const SAMPLE_NOTIFICATIONS: &str = include_str!("../assets/notifications.json");

pub const ACTION_VIEW: &str = "View";
pub const ACTION_CLEAR: &str = "Clear";
pub const ACTION_SNOOZE: &str = "Snooze Until Later";
pub const BULK_CLEAR: &str = "Clear selected";
pub const BULK_DELETE: &str = "Delete selected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub user: String,
    pub when: String,
}

/// What the table reported, forwarded to the application loop.
#[derive(Debug, Clone, PartialEq)]
pub enum InboxEvent {
    RowAction { action: String, id: String },
    Opened { id: String },
    BulkAction { action: String, ids: Vec<String>, all_rows_selected: bool },
    Search(String),
    Sort { column_id: String, direction: SortDirection },
}

/// The bundled sample notifications.
pub fn sample_notifications() -> Result<Vec<Notification>> {
    serde_json::from_str(SAMPLE_NOTIFICATIONS).context("Failed to parse bundled notifications")
}

/// Notifications from a JSON array on disk.
pub fn load_notifications<P: AsRef<Path>>(path: P) -> Result<Vec<Notification>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read data file: {}", path.as_ref().display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse data file: {}", path.as_ref().display()))
}

pub fn columns() -> Vec<Column<Notification>> {
    vec![
        Column::new("id", "ID", |n: &Notification| CellValue::from(n.id.as_str())).with_width(Constraint::Length(4)),
        Column::new("site", "Site", |n: &Notification| CellValue::from(n.site.as_str())),
        Column::new("type", "Type", |n: &Notification| CellValue::from(n.kind.as_str())),
        Column::new("status", "Status", |n: &Notification| CellValue::from(n.status.as_str()))
            .with_width(Constraint::Length(9))
            .with_cell_renderer(|ctx| status_line(&ctx.row.status)),
        Column::new("user", "User", |n: &Notification| CellValue::from(n.user.as_str())),
        Column::new("when", "When", |n: &Notification| CellValue::from(n.when.as_str()))
            .with_width(Constraint::Length(12)),
    ]
}

fn status_line(status: &str) -> Line<'static> {
    let color = match status {
        "new" => Color::Cyan,
        "cleared" => Color::DarkGray,
        "snoozed" => Color::Yellow,
        _ => Color::Green,
    };
    Line::from(Span::styled(status.to_string(), Style::default().fg(color)))
}

pub fn actions() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new(ACTION_VIEW, ">"),
        ActionDescriptor::new(ACTION_CLEAR, "x"),
        ActionDescriptor::new(ACTION_SNOOZE, "z"),
    ]
}

pub fn bulk_actions() -> Vec<BulkActionDescriptor> {
    vec![BulkActionDescriptor::new(BULK_CLEAR, "x"), BulkActionDescriptor::new(BULK_DELETE, "-")]
}

/// Build the inbox table with every callback forwarding into `events`.
pub fn build_table(
    config: &Config,
    data: Vec<Notification>,
    events: UnboundedSender<InboxEvent>,
) -> Result<DataTable<Notification>, TableError> {
    let on_action = events.clone();
    let on_row = events.clone();
    let on_bulk = events.clone();
    let on_search = events.clone();
    let on_sort = events;

    let table_config = TableConfig::new(columns(), data)
        .hidden_columns(["id"])
        .hidden_columns_on_mobile(["type", "when"])
        .actions(actions())
        .bulk_actions(bulk_actions())
        .loading(true)
        .search_placeholder(config.table.search_placeholder.clone())
        .on_select_action(move |action, row: &Notification| {
            forward(&on_action, InboxEvent::RowAction {
                action: action.to_string(),
                id: row.id.clone(),
            });
        })
        .on_select_row(move |row: &Notification| {
            forward(&on_row, InboxEvent::Opened { id: row.id.clone() });
        })
        .on_select_bulk_action(move |rows: &[&Notification], all_rows_selected, action| {
            forward(&on_bulk, InboxEvent::BulkAction {
                action: action.to_string(),
                ids: rows.iter().map(|row| row.id.clone()).collect(),
                all_rows_selected,
            });
        })
        .on_search(move |value| {
            forward(&on_search, InboxEvent::Search(value.to_string()));
        })
        .on_sort_table(move |column_id, direction| {
            forward(&on_sort, InboxEvent::Sort {
                column_id: column_id.to_string(),
                direction,
            });
        });

    DataTable::with_options(table_config, config.table_options())
}

fn forward(events: &UnboundedSender<InboxEvent>, event: InboxEvent) {
    if let Err(e) = events.send(event) {
        log::warn!("Dropped table event, inbox is gone: {e}");
    }
}

/// Owned notification store plus the query the table last reported.
pub struct Inbox {
    notifications: Vec<Notification>,
    columns: Vec<Column<Notification>>,
    query: String,
    sort: Option<(String, SortDirection)>,
    status_filter: Option<String>,
    status: String,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            columns: columns(),
            query: String::new(),
            sort: None,
            status_filter: None,
            status: String::new(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    /// Last thing that happened, for the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn column(&self, id: &str) -> Option<&Column<Notification>> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Step the status filter through every distinct status, then back to none.
    pub fn cycle_status_filter(&mut self) {
        let Some(column) = self.column("status") else {
            return;
        };
        let options = selection_options(&self.notifications, column);
        self.status_filter = match &self.status_filter {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|option| option == current)
                .and_then(|index| options.get(index + 1).cloned()),
        };
        self.status = match &self.status_filter {
            Some(status) => format!("Showing {status} notifications"),
            None => "Showing all notifications".to_string(),
        };
    }

    /// Rows to hand to the table: status filter, then search, then sort.
    pub fn view(&self) -> Vec<Notification> {
        let Some(status_column) = self.column("status") else {
            return self.notifications.clone();
        };
        let filter = self.status_filter.as_deref().unwrap_or("");
        let mut rows: Vec<Notification> = single_select_filter(&self.notifications, status_column, filter)
            .into_iter()
            .filter(|row| matches_search(*row, &self.columns, &self.query))
            .cloned()
            .collect();

        if let Some((column_id, direction)) = &self.sort {
            if let Some(column) = self.column(column_id) {
                match direction {
                    SortDirection::Asc => rows.sort_by_key(|row| column.value(row).to_string().to_lowercase()),
                    SortDirection::Desc => {
                        rows.sort_by_key(|row| std::cmp::Reverse(column.value(row).to_string().to_lowercase()))
                    }
                    SortDirection::None => {}
                }
            }
        }

        rows
    }

    /// Apply a row action or a search/sort report. Returns true when the rows changed.
    pub fn handle_event(&mut self, event: InboxEvent) -> bool {
        log::debug!("Inbox event: {event:?}");
        match event {
            InboxEvent::RowAction { action, id } => {
                let new_status = match action.as_str() {
                    ACTION_CLEAR => Some("cleared"),
                    ACTION_SNOOZE => Some("snoozed"),
                    _ => None,
                };
                self.status = format!("{action}: notification {id}");
                match new_status {
                    Some(status) => self.set_notification_status(std::slice::from_ref(&id), status),
                    None => false,
                }
            }
            InboxEvent::Opened { id } => {
                self.status = match self.notifications.iter().find(|n| n.id == id) {
                    Some(n) => format!("Opened {} at {} ({})", n.kind, n.site, n.when),
                    None => format!("Opened notification {id}"),
                };
                false
            }
            InboxEvent::BulkAction {
                action,
                ids,
                all_rows_selected,
            } => {
                let scope = if all_rows_selected { "all" } else { "selected" };
                self.status = format!("{action}: {} {scope} notifications", ids.len());
                match action.as_str() {
                    BULK_CLEAR => self.set_notification_status(&ids, "cleared"),
                    BULK_DELETE => {
                        let before = self.notifications.len();
                        self.notifications.retain(|n| !ids.contains(&n.id));
                        before != self.notifications.len()
                    }
                    _ => false,
                }
            }
            InboxEvent::Search(query) => {
                self.status = if query.is_empty() {
                    "Search cleared".to_string()
                } else {
                    format!("Searching for \"{query}\"")
                };
                self.query = query;
                true
            }
            InboxEvent::Sort { column_id, direction } => {
                self.status = format!("Sorted by {column_id} ({direction})");
                self.sort = (direction != SortDirection::None).then_some((column_id, direction));
                true
            }
        }
    }

    fn set_notification_status(&mut self, ids: &[String], status: &str) -> bool {
        let mut changed = false;
        for notification in self.notifications.iter_mut().filter(|n| ids.contains(&n.id)) {
            if notification.status != status {
                notification.status = status.to_string();
                changed = true;
            }
        }
        changed
    }
}
