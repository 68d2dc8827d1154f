//! The employee query pipeline: filter, then sort, then paginate.

pub mod field;
pub mod params;
pub mod pattern;
pub mod pipeline;
pub mod sort;

pub use field::{FilterField, SortField};
pub use pattern::{Pattern, PatternSet};
pub use pipeline::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, EmployeeQuery, Filters, Pagination, QueryPage};
pub use sort::{SortOrder, SortSpec};
