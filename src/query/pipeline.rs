use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{HrError, Result};
use crate::model::Employee;
use crate::query::field::{FilterField, SortField};
use crate::query::pattern::{Pattern, PatternSet};
use crate::query::sort::{SortOrder, SortSpec};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 1-based page addressing. Both numbers are at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Result<Self> {
        if page == 0 {
            return Err(HrError::validation("page must be at least 1"));
        }
        if page_size == 0 {
            return Err(HrError::validation("pageSize must be at least 1"));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }

    fn window<T>(&self, items: &[T]) -> std::ops::Range<usize> {
        let start = self.offset().min(items.len());
        let end = start
            .saturating_add(self.page_size as usize)
            .min(items.len());
        start..end
    }
}

/// Field filters: patterns on one field are OR-ed, distinct fields AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: BTreeMap<FilterField, PatternSet>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FilterField, pattern: impl Into<String>) {
        self.entries
            .entry(field)
            .or_default()
            .push(Pattern::new(pattern));
    }

    /// Add every pattern as an alternative for `field`. An empty list adds
    /// no constraint.
    pub fn insert_any<I, S>(&mut self, field: FilterField, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.insert(field, pattern);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &PatternSet)> {
        self.entries.iter().map(|(field, set)| (*field, set))
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.entries
            .iter()
            .all(|(field, patterns)| patterns.matches(&field.text_of(employee)))
    }
}

/// Filter, sort and page request over the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub pagination: Pagination,
    pub filters: Filters,
    pub sort: Option<SortSpec>,
}

impl EmployeeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn filter(mut self, field: FilterField, pattern: impl Into<String>) -> Self {
        self.filters.insert(field, pattern);
        self
    }

    pub fn filter_any<I, S>(mut self, field: FilterField, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.insert_any(field, patterns);
        self
    }

    pub fn sort_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(SortSpec::new(field, order));
        self
    }

    /// Filter, then sort, then cut out the requested page. `total` counts
    /// every record passing the filters.
    pub fn run(&self, records: &[Employee]) -> QueryPage {
        let mut matched: Vec<&Employee> = records
            .iter()
            .filter(|employee| self.filters.matches(employee))
            .collect();

        if let Some(spec) = self.sort {
            spec.sort(&mut matched);
        }

        let window = self.pagination.window(&matched);
        let page = matched[window].iter().copied().cloned().collect();

        QueryPage {
            records: page,
            total: matched.len() as u64,
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
        }
    }
}

/// One page of query results plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    #[serde(rename = "data", alias = "records")]
    pub records: Vec<Employee>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl QueryPage {
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 || self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(u64::from(self.page_size))
        }
    }
}
