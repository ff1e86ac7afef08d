use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use tablekit::icons::{IconService, IconTheme};
use tablekit::table::{DropdownDirection, PaginationState};
use tablekit::ui::components::{CheckState, Checkbox, DropdownMenu, MenuEntry, Pagination};

fn render_pagination(pagination: Pagination) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
    terminal
        .draw(|f| {
            pagination.render(f, f.area());
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_checkbox_state_precedence() {
    assert_eq!(Checkbox::new(false).state(), CheckState::Unchecked);
    assert_eq!(Checkbox::new(true).state(), CheckState::Checked);
    assert_eq!(Checkbox::new(false).indeterminate(true).state(), CheckState::Indeterminate);
    // Indeterminate wins over checked
    assert_eq!(Checkbox::new(true).indeterminate(true).state(), CheckState::Indeterminate);
}

#[test]
fn test_checkbox_glyphs_follow_theme() {
    let ascii = IconService::new(IconTheme::Ascii);
    assert_eq!(Checkbox::new(false).symbol(&ascii), "[ ]");
    assert_eq!(Checkbox::new(true).symbol(&ascii), "[x]");
    assert_eq!(Checkbox::new(true).indeterminate(true).symbol(&ascii), "[-]");

    let unicode = IconService::new(IconTheme::Unicode);
    assert_eq!(Checkbox::new(true).symbol(&unicode), "☑");
}

#[test]
fn test_pagination_first_page_has_no_previous() {
    let pagination = Pagination::from_state(&PaginationState::new(12, 30));
    assert_eq!(pagination.label(), "Page 1 of 3");
    assert_eq!(pagination.buttons(), vec!["Next"]);

    let text = render_pagination(pagination);
    assert!(text.contains("Page 1 of 3"));
    assert!(text.contains("Next"));
    assert!(!text.contains("Previous"));
}

#[test]
fn test_pagination_last_page_has_no_next() {
    let mut state = PaginationState::new(12, 30);
    state.go_to_page(2);
    let pagination = Pagination::from_state(&state);
    assert_eq!(pagination.buttons(), vec!["Previous"]);

    let text = render_pagination(pagination);
    assert!(text.contains("Page 3 of 3"));
    assert!(text.contains("Previous"));
    assert!(!text.contains("Next"));
}

#[test]
fn test_pagination_middle_page_has_both_buttons() {
    let mut state = PaginationState::new(12, 30);
    state.next_page();
    let pagination = Pagination::from_state(&state);
    assert_eq!(pagination.buttons(), vec!["Previous", "Next"]);

    let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
    let mut buttons = None;
    terminal
        .draw(|f| {
            buttons = Some(pagination.render(f, f.area()));
        })
        .unwrap();
    let buttons = buttons.unwrap();
    let (previous, next) = (buttons.previous.unwrap(), buttons.next.unwrap());
    assert!(previous.x + previous.width <= next.x);
    assert_eq!(next.x + next.width, 60);
}

#[test]
fn test_single_page_has_no_buttons() {
    let pagination = Pagination::from_state(&PaginationState::new(12, 0));
    assert_eq!(pagination.label(), "Page 1 of 1");
    assert!(pagination.buttons().is_empty());
}

#[test]
fn test_dropdown_menu_wraps_highlight() {
    let entries = vec![
        MenuEntry::new("View", ">"),
        MenuEntry::new("Clear", "x"),
        MenuEntry::new("Snooze Until Later", "z"),
    ];
    let mut menu = DropdownMenu::new("Options", entries, DropdownDirection::Down);
    assert_eq!(menu.highlighted(), 0);

    menu.previous();
    assert_eq!(menu.highlighted(), 2);
    menu.next();
    assert_eq!(menu.highlighted(), 0);

    menu.highlight(9);
    assert_eq!(menu.highlighted(), 0);

    menu.highlight(2);
    menu.set_entries(vec![MenuEntry::checkbox("Name", true)]);
    assert_eq!(menu.highlighted(), 0);
}

#[test]
fn test_dropdown_popup_placement() {
    let entries = vec![MenuEntry::new("View", ">"), MenuEntry::new("Clear", "x")];
    let bounds = Rect::new(0, 0, 80, 30);
    let anchor = Rect::new(70, 15, 3, 1);

    let down = DropdownMenu::new("Options", entries.clone(), DropdownDirection::Down);
    let area = down.popup_area(anchor, bounds);
    assert_eq!(area.y, 16);
    assert_eq!(area.height, 4);
    assert_eq!(area.x + area.width, 73);

    let up = DropdownMenu::new("Options", entries, DropdownDirection::Up);
    let area = up.popup_area(anchor, bounds);
    assert_eq!(area.y + area.height, 15);
}

#[test]
fn test_icon_theme_cycle() {
    let mut icons = IconService::default();
    assert_eq!(icons.theme(), IconTheme::Ascii);
    assert_eq!(icons.sort_ascending(), "^");

    icons.cycle_icon_theme();
    assert_eq!(icons.theme(), IconTheme::Unicode);
    assert_eq!(icons.sort_ascending(), "↑");

    assert_eq!(icons.spinner_frame(0), icons.spinner_frame(4));
}
