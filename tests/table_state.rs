use tablekit::table::{dropdown_direction, DropdownDirection, PaginationState, RowSelection, SortDirection};

#[test]
fn test_sort_cycle() {
    let mut direction = SortDirection::default();
    assert_eq!(direction, SortDirection::None);

    direction = direction.next();
    assert_eq!(direction, SortDirection::Asc);
    direction = direction.next();
    assert_eq!(direction, SortDirection::Desc);
    direction = direction.next();
    assert_eq!(direction, SortDirection::None);
}

#[test]
fn test_sort_direction_names() {
    assert_eq!(SortDirection::None.to_string(), "none");
    assert_eq!(SortDirection::Asc.as_str(), "asc");
    assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"desc\"");
}

#[test]
fn test_pagination_page_count() {
    assert_eq!(PaginationState::new(12, 30).page_count(), 3);
    assert_eq!(PaginationState::new(12, 24).page_count(), 2);
    assert_eq!(PaginationState::new(12, 1).page_count(), 1);
    // An empty table still has one page
    assert_eq!(PaginationState::new(12, 0).page_count(), 1);
}

#[test]
fn test_pagination_navigation_stays_in_bounds() {
    let mut state = PaginationState::new(12, 30);
    assert!(!state.can_previous_page());
    assert!(state.can_next_page());
    assert!(!state.previous_page());
    assert_eq!(state.page_index(), 0);

    assert!(state.next_page());
    assert!(state.next_page());
    assert_eq!(state.page_index(), 2);
    assert!(!state.can_next_page());
    assert!(!state.next_page());
    assert_eq!(state.page_index(), 2);

    // Last page holds the remainder
    assert_eq!(state.page_range(), 24..30);
    assert_eq!(state.page_len(), 6);
}

#[test]
fn test_pagination_reset_and_jump() {
    let mut state = PaginationState::new(5, 23);
    state.go_to_page(99);
    assert_eq!(state.page_index(), 4);

    state.reset(3);
    assert_eq!(state.page_index(), 0);
    assert_eq!(state.page_range(), 0..3);
    assert!(!state.can_next_page());

    state.reset(0);
    assert_eq!(state.page_len(), 0);
    assert!(!state.can_previous_page());
    assert!(!state.can_next_page());
}

#[test]
fn test_selection_toggle_all() {
    let mut selection = RowSelection::new(4);
    assert!(!selection.is_all_selected());
    assert!(!selection.is_some_selected());

    selection.toggle_all();
    assert!(selection.is_all_selected());
    assert_eq!(selection.selected_ids(), vec![0, 1, 2, 3]);

    selection.toggle_all();
    assert!(selection.is_empty());
}

#[test]
fn test_selection_partial_state() {
    let mut selection = RowSelection::new(3);
    selection.toggle_row(1);
    assert!(selection.is_some_selected());
    assert!(!selection.is_all_selected());

    // Toggle-all from a partial selection selects everything
    selection.toggle_all();
    assert!(selection.is_all_selected());
}

#[test]
fn test_individual_toggles_match_toggle_all() {
    let mut by_row = RowSelection::new(5);
    for row_id in 0..5 {
        by_row.toggle_row(row_id);
    }

    let mut by_header = RowSelection::new(5);
    by_header.toggle_all();

    assert_eq!(by_row.selected_ids(), by_header.selected_ids());
    assert!(by_row.is_all_selected());
}

#[test]
fn test_selection_ignores_unknown_rows() {
    let mut selection = RowSelection::new(2);
    selection.toggle_row(7);
    selection.set_row_selected(2, true);
    assert!(selection.is_empty());

    // Nothing to select in an empty table
    let mut empty = RowSelection::new(0);
    empty.toggle_all();
    assert!(!empty.is_all_selected());
}

#[test]
fn test_dropdown_direction_short_page() {
    for row_index in 0..4 {
        assert_eq!(dropdown_direction(row_index, 4), DropdownDirection::Down);
    }
}

#[test]
fn test_dropdown_direction_split_page() {
    for row_index in 0..5 {
        assert_eq!(dropdown_direction(row_index, 10), DropdownDirection::Down);
    }
    for row_index in 5..10 {
        assert_eq!(dropdown_direction(row_index, 10), DropdownDirection::Up);
    }
}

#[test]
fn test_dropdown_direction_odd_page() {
    assert_eq!(dropdown_direction(0, 5), DropdownDirection::Down);
    assert_eq!(dropdown_direction(2, 5), DropdownDirection::Down);
    assert_eq!(dropdown_direction(3, 5), DropdownDirection::Up);
    assert_eq!(dropdown_direction(4, 5), DropdownDirection::Up);
}
