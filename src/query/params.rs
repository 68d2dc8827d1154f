//! Query-string form of [`EmployeeQuery`], shared by the HTTP handlers and
//! the remote store client.
//!
//! Reserved keys are `page`, `pageSize`, `sortField` and `sortOrder`. Every
//! other key must name a filterable field; repeating a key adds an
//! alternative pattern for that field.

use crate::core::{HrError, Result};
use crate::query::field::{FilterField, SortField};
use crate::query::pipeline::{EmployeeQuery, Pagination};
use crate::query::sort::{SortOrder, SortSpec};

pub const PAGE: &str = "page";
pub const PAGE_SIZE: &str = "pageSize";
pub const SORT_FIELD: &str = "sortField";
pub const SORT_ORDER: &str = "sortOrder";

impl EmployeeQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            (PAGE.to_string(), self.pagination.page().to_string()),
            (PAGE_SIZE.to_string(), self.pagination.page_size().to_string()),
        ];

        if let Some(spec) = self.sort {
            params.push((SORT_FIELD.to_string(), spec.field.to_string()));
            params.push((SORT_ORDER.to_string(), spec.order.to_string()));
        }

        for (field, patterns) in self.filters.iter() {
            for pattern in patterns.iter() {
                params.push((field.to_string(), pattern.as_str().to_string()));
            }
        }

        params
    }

    pub fn from_params<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = EmployeeQuery::new();
        let mut page = None;
        let mut page_size = None;
        let mut sort_field = None;
        let mut sort_order = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                PAGE => page = Some(parse_positive(PAGE, value)?),
                PAGE_SIZE => page_size = Some(parse_positive(PAGE_SIZE, value)?),
                SORT_FIELD => sort_field = Some(value.parse::<SortField>()?),
                SORT_ORDER => sort_order = Some(value.parse::<SortOrder>()?),
                other => {
                    let field = other.parse::<FilterField>()?;
                    query.filters.insert(field, value);
                }
            }
        }

        query.pagination = Pagination::new(
            page.unwrap_or(crate::query::DEFAULT_PAGE),
            page_size.unwrap_or(crate::query::DEFAULT_PAGE_SIZE),
        )?;

        query.sort = match (sort_field, sort_order) {
            (Some(field), Some(order)) => Some(SortSpec::new(field, order)),
            // A cleared column sort arrives as a field with no order.
            (Some(_), None) => None,
            (None, Some(_)) => {
                return Err(HrError::validation("sortOrder requires sortField"));
            }
            (None, None) => None,
        };

        Ok(query)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| HrError::validation(format!("{key} must be a positive integer")))
}
