use tablekit::config::Config;
use tablekit::demo::{self, Inbox, InboxEvent, ACTION_CLEAR, ACTION_VIEW, BULK_CLEAR, BULK_DELETE};
use tablekit::table::SortDirection;
use tokio::sync::mpsc;

fn ids(rows: &[demo::Notification]) -> Vec<String> {
    rows.iter().map(|row| row.id.clone()).collect()
}

#[test]
fn test_sample_notifications_load() {
    let notifications = demo::sample_notifications().unwrap();
    assert!(notifications.len() > 12);
    assert_eq!(notifications[0].site, "The Edge Apartments");
    assert_eq!(notifications[0].kind, "Maintenance request");
}

#[test]
fn test_search_filters_view() {
    let mut inbox = Inbox::new(demo::sample_notifications().unwrap());
    assert!(inbox.handle_event(InboxEvent::Search("esther".to_string())));

    let view = inbox.view();
    assert_eq!(ids(&view), vec!["3", "4"]);
    assert!(view.iter().all(|row| row.site == "Esther Howard"));
}

#[test]
fn test_sort_orders_view() {
    let mut inbox = Inbox::new(demo::sample_notifications().unwrap());
    inbox.handle_event(InboxEvent::Sort {
        column_id: "site".to_string(),
        direction: SortDirection::Asc,
    });
    let view = inbox.view();
    assert_eq!(view[0].site, "111 Victoria Street");

    inbox.handle_event(InboxEvent::Sort {
        column_id: "site".to_string(),
        direction: SortDirection::Desc,
    });
    assert_eq!(inbox.view()[0].site, "The Edge Apartments");

    inbox.handle_event(InboxEvent::Sort {
        column_id: "site".to_string(),
        direction: SortDirection::None,
    });
    assert_eq!(ids(&inbox.view()), ids(inbox.notifications()));
}

#[test]
fn test_status_filter_cycles_through_options() {
    let mut inbox = Inbox::new(demo::sample_notifications().unwrap());
    let mut seen = Vec::new();
    loop {
        inbox.cycle_status_filter();
        match inbox.status_filter() {
            Some(status) => {
                assert!(inbox.view().iter().all(|row| row.status == status));
                seen.push(status.to_string());
            }
            None => break,
        }
    }
    assert_eq!(seen, vec!["active", "cleared", "new", "snoozed"]);
    assert_eq!(inbox.view().len(), inbox.notifications().len());
}

#[test]
fn test_row_and_bulk_actions_update_notifications() {
    let mut inbox = Inbox::new(demo::sample_notifications().unwrap());

    assert!(!inbox.handle_event(InboxEvent::RowAction {
        action: ACTION_VIEW.to_string(),
        id: "1".to_string(),
    }));
    assert!(inbox.handle_event(InboxEvent::RowAction {
        action: ACTION_CLEAR.to_string(),
        id: "1".to_string(),
    }));
    assert_eq!(inbox.notifications()[0].status, "cleared");

    assert!(inbox.handle_event(InboxEvent::BulkAction {
        action: BULK_CLEAR.to_string(),
        ids: vec!["3".to_string(), "9".to_string()],
        all_rows_selected: false,
    }));
    assert!(inbox.handle_event(InboxEvent::BulkAction {
        action: BULK_DELETE.to_string(),
        ids: vec!["2".to_string()],
        all_rows_selected: false,
    }));
    assert!(inbox.notifications().iter().all(|row| row.id != "2"));
    assert!(inbox.status().contains("1 selected"));
}

#[test]
fn test_table_callbacks_forward_events() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let notifications = demo::sample_notifications().unwrap();
    let mut table = demo::build_table(&Config::default(), notifications, tx).unwrap();
    assert!(table.is_loading());
    assert!(!table.is_column_visible("id"));

    table.sort_by("site");
    table.toggle_row_selected(0);
    table.select_bulk_action(BULK_CLEAR);
    table.activate_row(2);

    assert_eq!(
        rx.try_recv().unwrap(),
        InboxEvent::Sort {
            column_id: "site".to_string(),
            direction: SortDirection::Asc,
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        InboxEvent::BulkAction {
            action: BULK_CLEAR.to_string(),
            ids: vec!["1".to_string()],
            all_rows_selected: false,
        }
    );
    assert_eq!(rx.try_recv().unwrap(), InboxEvent::Opened { id: "3".to_string() });
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_callbacks_survive_closed_inbox() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut table = demo::build_table(&Config::default(), demo::sample_notifications().unwrap(), tx).unwrap();
    drop(rx);

    table.sort_by("site");
    table.activate_row(0);
    assert_eq!(table.sort_direction(), SortDirection::Asc);
}
