//! Terminal loop for the notification inbox

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::components::DataTable;
use super::core::{Action, Component, EventHandler, EventType};
use crate::config::Config;
use crate::demo::{self, Inbox, InboxEvent, Notification};

/// Simulated latency of the initial fetch
const INITIAL_LOAD_DELAY: Duration = Duration::from_millis(600);
/// Simulated latency of a bulk mutation
const MUTATION_DELAY: Duration = Duration::from_millis(800);

const HELP_TEXT: &str =
    "q quit  / search  s sort  space select  a all  m row menu  b bulk  c columns  n/p page  f status  i icons";

struct AppState {
    table: DataTable<Notification>,
    inbox: Inbox,
    events: UnboundedReceiver<InboxEvent>,
    load_task: Option<JoinHandle<Vec<Notification>>>,
    mutation_task: Option<JoinHandle<InboxEvent>>,
}

/// Run the notification inbox until the user quits.
pub async fn run_app(config: Config, notifications: Vec<Notification>) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut table = demo::build_table(&config, Vec::new(), tx)?;
    let (width, _) = crossterm::terminal::size()?;
    table.apply_viewport_width(width);

    let initial = notifications.clone();
    let load_task = tokio::spawn(async move {
        tokio::time::sleep(INITIAL_LOAD_DELAY).await;
        initial
    });

    let mut state = AppState {
        table,
        inbox: Inbox::new(notifications),
        events: rx,
        load_task: Some(load_task),
        mutation_task: None,
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_ui(&mut terminal, &mut state).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, state: &mut AppState) -> Result<()> {
    let mut events = EventHandler::default();

    loop {
        terminal.draw(|f| render_ui(f, state))?;

        let action = match events.next_event().await? {
            EventType::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    Action::Quit
                } else if key.code == KeyCode::Char('f') && !state.table.is_capturing_input() {
                    state.inbox.cycle_status_filter();
                    state.table.set_data(state.inbox.view());
                    Action::None
                } else if key.code == KeyCode::Char('i') && !state.table.is_capturing_input() {
                    state.table.icons_mut().cycle_icon_theme();
                    Action::None
                } else {
                    state.table.handle_key_events(key)
                }
            }
            EventType::Mouse(mouse) => state.table.handle_mouse_events(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        if state.table.update(action) == Action::Quit {
            break;
        }

        state.table.tick(Instant::now());
        finish_background_tasks(state).await;
        drain_table_events(state);
    }

    Ok(())
}

/// Collect the simulated fetch and mutation once they complete.
async fn finish_background_tasks(state: &mut AppState) {
    if state.load_task.as_ref().is_some_and(|handle| handle.is_finished()) {
        if let Some(handle) = state.load_task.take() {
            match handle.await {
                Ok(rows) => {
                    log::info!("Loaded {} notifications", rows.len());
                    state.table.set_data(state.inbox.view());
                    state.inbox.set_status(format!("{} notifications", rows.len()));
                }
                Err(join_err) => state.inbox.set_status(format!("Load task error: {join_err}")),
            }
            state.table.set_loading(false);
        }
    }

    if state.mutation_task.as_ref().is_some_and(|handle| handle.is_finished()) {
        if let Some(handle) = state.mutation_task.take() {
            match handle.await {
                Ok(event) => {
                    if state.inbox.handle_event(event) {
                        state.table.set_data(state.inbox.view());
                    }
                }
                Err(join_err) => state.inbox.set_status(format!("Bulk action error: {join_err}")),
            }
            state.table.set_mutation_loading(false);
        }
    }
}

/// Forward callback reports into the inbox, refreshing the rows when they change.
fn drain_table_events(state: &mut AppState) {
    while let Ok(event) = state.events.try_recv() {
        if matches!(event, InboxEvent::BulkAction { .. }) {
            if state.mutation_task.is_some() {
                log::warn!("Bulk action ignored while another is running");
                continue;
            }
            state.table.set_mutation_loading(true);
            state.mutation_task = Some(tokio::spawn(async move {
                tokio::time::sleep(MUTATION_DELAY).await;
                event
            }));
            continue;
        }

        if state.inbox.handle_event(event) {
            state.table.set_data(state.inbox.view());
        }
    }
}

fn render_ui(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8), Constraint::Length(1)])
        .split(f.area());

    render_title(f, chunks[0], &state.inbox);
    state.table.render(f, chunks[1]);
    render_status(f, chunks[2], &state.inbox);
}

fn render_title(f: &mut Frame, rect: Rect, inbox: &Inbox) {
    let mut spans = vec![Span::styled(
        "Notifications",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(status) = inbox.status_filter() {
        spans.push(Span::styled(format!("  [{status}]"), Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rect);
}

fn render_status(f: &mut Frame, rect: Rect, inbox: &Inbox) {
    let mut spans = Vec::new();
    if !inbox.status().is_empty() {
        spans.push(Span::styled(inbox.status().to_string(), Style::default().fg(Color::White)));
        spans.push(Span::raw("  |  "));
    }
    spans.push(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(Line::from(spans)), rect);
}
