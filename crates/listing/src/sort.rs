use model::core::identifiers::Identified;
use std::{cmp::Reverse, fmt};

/// Sort direction for the id column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The direction after the sort control is clicked again.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Stable numeric sort on the id column. Callers keep the backend's arrival
/// order until sorting is switched on.
pub fn sort_by_id<T: Identified>(records: &mut [T], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by_key(|r| r.id()),
        SortDirection::Descending => records.sort_by_key(|r| Reverse(r.id())),
    }
}
