use crate::table::RowId;

/// Which dropdown menu an action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    RowActions(RowId),
    BulkActions,
    Columns,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextRow,
    PreviousRow,
    NextColumn,
    PreviousColumn,
    NextPage,
    PreviousPage,
    FocusRow(RowId),

    // Table interactions
    SortBy(String),
    ToggleRow(RowId),
    ToggleAllRows,
    ActivateRow(RowId),
    ToggleColumn(String),

    // Menus
    OpenMenu(MenuKind),
    CloseMenu,
    MenuNext,
    MenuPrevious,
    MenuConfirm,
    MenuSelect(usize),

    // Search
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,

    // App control
    Quit,
    None,
}
