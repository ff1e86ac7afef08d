//! Column descriptors.
//!
//! A column couples an id and a header label with a typed accessor over the
//! row type `R`. Header and cell renderers are optional; without them the
//! header shows its label and the cell shows the accessor's value.

use super::selection::RowId;
use super::sort::SortDirection;
use super::value::CellValue;
use crate::icons::IconService;
use ratatui::{layout::Constraint, text::Line};
use std::fmt;

pub type Accessor<R> = Box<dyn Fn(&R) -> CellValue>;
pub type HeaderRenderer = Box<dyn Fn(&HeaderContext<'_>) -> Line<'static>>;
pub type CellRenderer<R> = Box<dyn Fn(&CellContext<'_, R>) -> Line<'static>>;

/// What a column represents. Selection and actions columns are injected by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Data,
    Selection,
    Actions,
}

/// Table state visible to header renderers
pub struct HeaderContext<'a> {
    pub icons: &'a IconService,
    pub all_rows_selected: bool,
    pub some_rows_selected: bool,
    pub sort: SortDirection,
}

/// Row state visible to cell renderers
pub struct CellContext<'a, R> {
    pub row: &'a R,
    pub row_id: RowId,
    pub index_in_page: usize,
    pub page_len: usize,
    pub selected: bool,
    pub icons: &'a IconService,
}

pub struct Column<R> {
    id: String,
    header: String,
    kind: ColumnKind,
    width: Constraint,
    accessor: Option<Accessor<R>>,
    header_renderer: Option<HeaderRenderer>,
    cell_renderer: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    /// A data column reading its value through `accessor`.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            kind: ColumnKind::Data,
            width: Constraint::Fill(1),
            accessor: Some(Box::new(accessor)),
            header_renderer: None,
            cell_renderer: None,
        }
    }

    /// A column without an accessor, rendered entirely by its renderers.
    pub(crate) fn synthetic(id: &str, header: &str, kind: ColumnKind, width: Constraint) -> Self {
        Self {
            id: id.to_string(),
            header: header.to_string(),
            kind,
            width,
            accessor: None,
            header_renderer: None,
            cell_renderer: None,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_header_renderer(mut self, renderer: impl Fn(&HeaderContext<'_>) -> Line<'static> + 'static) -> Self {
        self.header_renderer = Some(Box::new(renderer));
        self
    }

    #[must_use]
    pub fn with_cell_renderer(mut self, renderer: impl Fn(&CellContext<'_, R>) -> Line<'static> + 'static) -> Self {
        self.cell_renderer = Some(Box::new(renderer));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn width(&self) -> Constraint {
        self.width
    }

    /// Injected columns never sort and never carry data.
    pub fn is_synthetic(&self) -> bool {
        self.kind != ColumnKind::Data
    }

    /// The accessor's value for `row`; synthetic columns yield [`CellValue::Empty`].
    pub fn value(&self, row: &R) -> CellValue {
        self.accessor.as_ref().map(|accessor| accessor(row)).unwrap_or_default()
    }

    pub fn render_header(&self, ctx: &HeaderContext<'_>) -> Line<'static> {
        match &self.header_renderer {
            Some(renderer) => renderer(ctx),
            None => Line::from(self.header.clone()),
        }
    }

    pub fn render_cell(&self, ctx: &CellContext<'_, R>) -> Line<'static> {
        match &self.cell_renderer {
            Some(renderer) => renderer(ctx),
            None => Line::from(self.value(ctx.row).to_string()),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
