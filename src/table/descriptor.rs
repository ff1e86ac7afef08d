/// A named menu entry with its icon glyph, offered per row or for the whole selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub name: String,
    pub icon: String,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Bulk actions share the per-row descriptor shape.
pub type BulkActionDescriptor = ActionDescriptor;
