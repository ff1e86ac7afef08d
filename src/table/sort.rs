use serde::{Deserialize, Serialize};
use std::fmt;

/// Table-wide sort direction reported to the caller on header clicks.
///
/// The widget never reorders rows itself; the caller receives the new
/// direction and supplies reordered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

const SORT_CYCLE: [SortDirection; 3] = [SortDirection::None, SortDirection::Asc, SortDirection::Desc];

impl SortDirection {
    /// Advance the cycle: none -> asc -> desc -> none.
    #[must_use]
    pub fn next(self) -> Self {
        let index = SORT_CYCLE.iter().position(|direction| *direction == self).unwrap_or(0);
        SORT_CYCLE[(index + 1) % SORT_CYCLE.len()]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
