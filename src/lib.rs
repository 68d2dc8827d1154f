// ============================================================================
// pulse_hr - employee directory service
// ============================================================================

pub mod config;
pub mod core;
pub mod model;
pub mod query;
pub mod store;
pub mod web;

// Re-export main types for convenience
pub use crate::core::{HrError, Result};
pub use model::{Employee, EmployeeId, EmployeePatch, EmployeePayload, Insights};
pub use query::{EmployeeQuery, FilterField, Pagination, QueryPage, SortField, SortOrder};
pub use store::{BulkDeleteReport, EmployeeStore, InMemoryEmployeeStore, RemoteEmployeeStore};
pub use web::{AppState, build_router};
