use thiserror::Error;

/// Errors raised while assembling or reconfiguring a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),

    #[error("column id '{0}' is reserved by the table")]
    ReservedColumnId(String),

    #[error("unknown column id '{0}'")]
    UnknownColumn(String),
}
