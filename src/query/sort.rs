// ============================================================================
// src/query/sort.rs - Record ordering
// ============================================================================
//
// Single-key ordering over employee records:
// - Typed comparison per field (numeric, lexicographic, chronological)
// - Stable sort, equal keys keep their store order
// - Descending reverses the comparison, not the slice
//
// ============================================================================

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::{HrError, Result};
use crate::model::Employee;
use crate::query::field::SortField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascend => "ascend",
            Self::Descend => "descend",
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascend => ordering,
            Self::Descend => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = HrError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "ascend" | "asc" => Ok(Self::Ascend),
            "descend" | "desc" => Ok(Self::Descend),
            _ => Err(HrError::validation(format!(
                "sort order must be one of: ascend, descend (got {raw})"
            ))),
        }
    }
}

// ============================================================================
// SORT SPEC
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortOrder::Ascend)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortOrder::Descend)
    }

    pub fn compare(&self, left: &Employee, right: &Employee) -> Ordering {
        self.order.apply(self.field.compare(left, right))
    }

    /// Sort in place. `sort_by` is stable, so ties keep their prior order
    /// in both directions.
    pub fn sort<E: Borrow<Employee>>(&self, records: &mut [E]) {
        records.sort_by(|left, right| self.compare(left.borrow(), right.borrow()));
    }
}
