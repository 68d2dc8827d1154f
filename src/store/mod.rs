//! Record stores behind the query pipeline.
//!
//! [`EmployeeStore`] is the seam between the HTTP layer and whatever owns the
//! authoritative records: [`InMemoryEmployeeStore`] keeps them in process,
//! [`RemoteEmployeeStore`] forwards every operation to another instance of
//! the directory API.

pub mod memory;
pub mod remote;
pub mod seed;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::model::{Employee, EmployeeId, EmployeePatch, EmployeePayload};
use crate::query::{EmployeeQuery, QueryPage};

pub use memory::InMemoryEmployeeStore;
pub use remote::{RemoteConfig, RemoteEmployeeStore};

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Run the filter, sort and paginate pipeline against the current records.
    async fn query(&self, query: &EmployeeQuery) -> Result<QueryPage>;

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Insert a record under a freshly assigned identifier.
    async fn create(&self, payload: EmployeePayload) -> Result<Employee>;

    /// Merge `patch` into the record; `HrError::NotFound` when absent.
    async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee>;

    /// Remove one record; `HrError::NotFound` when absent.
    async fn delete(&self, id: EmployeeId) -> Result<()>;

    /// Remove every listed record that exists. Unknown identifiers are
    /// reported back, never raised as errors.
    async fn delete_bulk(&self, ids: &[EmployeeId]) -> Result<BulkDeleteReport>;
}

/// Outcome of a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteReport {
    pub deleted: Vec<EmployeeId>,
    pub missing: Vec<EmployeeId>,
}

impl BulkDeleteReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
