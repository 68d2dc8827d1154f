use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::{HrError, Result};
use crate::model::{Employee, EmployeeId, EmployeePatch, EmployeePayload};
use crate::query::{EmployeeQuery, QueryPage};
use crate::store::seed::mock_employees;
use crate::store::{BulkDeleteReport, EmployeeStore};

#[derive(Debug)]
struct Directory {
    /// Most recently created first.
    records: Vec<Employee>,
    next_id: u64,
}

impl Directory {
    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.records.iter().position(|employee| employee.id == id)
    }

    fn issue_id(&mut self) -> Result<EmployeeId> {
        let id = EmployeeId(self.next_id);
        self.next_id = next_after(self.next_id)?;
        Ok(id)
    }
}

fn next_after(id: u64) -> Result<u64> {
    id.checked_add(1)
        .ok_or_else(|| HrError::validation("employee id space exhausted"))
}

/// Process-local record store.
///
/// Each instance owns its records; construct one per server or per test and
/// share it through an `Arc`. Identifiers are issued from a counter that
/// starts above the highest seeded id and never moves backwards, so a
/// deleted id is never reused.
#[derive(Debug)]
pub struct InMemoryEmployeeStore {
    directory: RwLock<Directory>,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Directory {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store preloaded with `records` in the given order. Fails on duplicate
    /// identifiers.
    pub fn with_records(records: Vec<Employee>) -> Result<Self> {
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for employee in &records {
            if !seen.insert(employee.id) {
                return Err(HrError::validation(format!(
                    "duplicate employee id in seed data: {}",
                    employee.id
                )));
            }
        }

        let next_id = records
            .iter()
            .map(|employee| employee.id.0)
            .max()
            .map_or(Ok(1), next_after)?;

        Ok(Self {
            directory: RwLock::new(Directory { records, next_id }),
        })
    }

    /// Store holding the mock directory.
    pub fn seeded() -> Self {
        let records = mock_employees();
        let next_id = records.len() as u64 + 1;
        Self {
            directory: RwLock::new(Directory { records, next_id }),
        }
    }

    pub async fn len(&self) -> usize {
        self.directory.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn query(&self, query: &EmployeeQuery) -> Result<QueryPage> {
        let directory = self.directory.read().await;
        let page = query.run(&directory.records);
        debug!(
            total = page.total,
            returned = page.records.len(),
            page = page.page,
            pages = page.total_pages(),
            "employee query"
        );
        Ok(page)
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let directory = self.directory.read().await;
        Ok(directory
            .records
            .iter()
            .find(|employee| employee.id == id)
            .cloned())
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee> {
        let mut directory = self.directory.write().await;
        let id = directory.issue_id()?;
        let employee = Employee::from_payload(id, payload);
        directory.records.insert(0, employee.clone());
        info!(%id, "employee created");
        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee> {
        let mut directory = self.directory.write().await;
        let index = directory.position(id).ok_or(HrError::NotFound(id))?;
        let employee = &mut directory.records[index];
        employee.apply(patch);
        info!(%id, "employee updated");
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<()> {
        let mut directory = self.directory.write().await;
        let index = directory.position(id).ok_or(HrError::NotFound(id))?;
        directory.records.remove(index);
        info!(%id, "employee deleted");
        Ok(())
    }

    async fn delete_bulk(&self, ids: &[EmployeeId]) -> Result<BulkDeleteReport> {
        let mut directory = self.directory.write().await;
        let mut report = BulkDeleteReport::default();

        for &id in ids {
            if report.deleted.contains(&id) || report.missing.contains(&id) {
                continue;
            }
            match directory.position(id) {
                Some(index) => {
                    directory.records.remove(index);
                    report.deleted.push(id);
                }
                None => report.missing.push(id),
            }
        }

        if report.is_complete() {
            info!(deleted = report.deleted.len(), "bulk delete");
        } else {
            info!(
                deleted = report.deleted.len(),
                missing = ?report.missing,
                "bulk delete skipped unknown ids"
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterField;
    use chrono::NaiveDate;

    fn payload(email: &str) -> EmployeePayload {
        EmployeePayload {
            first_name: "Rosa".to_string(),
            last_name: "Quint".to_string(),
            email: email.to_string(),
            department: "Finance".to_string(),
            role: "Controller".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            performance_score: 84,
        }
    }

    #[tokio::test]
    async fn create_then_query_by_email_returns_new_record() {
        let store = InMemoryEmployeeStore::seeded();
        let before = store.query(&EmployeeQuery::new()).await.unwrap();
        let existing: Vec<EmployeeId> = before.records.iter().map(|e| e.id).collect();

        let created = store.create(payload("rosa.quint@finance.hr")).await.unwrap();
        assert!(!existing.contains(&created.id));

        let found = store
            .query(&EmployeeQuery::new().filter(FilterField::Email, "rosa.quint@finance.hr"))
            .await
            .unwrap();
        assert_eq!(found.total, 1);
        assert_eq!(found.records, vec![created]);
    }

    #[tokio::test]
    async fn created_records_appear_first_in_store_order() {
        let store = InMemoryEmployeeStore::seeded();
        let created = store.create(payload("rosa.quint@finance.hr")).await.unwrap();

        let page = store.query(&EmployeeQuery::new()).await.unwrap();
        assert_eq!(page.records[0].id, created.id);
        assert_eq!(page.total, 6);
    }

    #[tokio::test]
    async fn identifiers_are_never_reused() {
        let store = InMemoryEmployeeStore::seeded();
        let first = store.create(payload("a@finance.hr")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(payload("b@finance.hr")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_id() {
        let store = InMemoryEmployeeStore::seeded();
        let patch = EmployeePatch {
            role: Some("VP People".to_string()),
            ..EmployeePatch::default()
        };

        let updated = store.update(EmployeeId(1), patch).await.unwrap();
        assert_eq!(updated.id, EmployeeId(1));
        assert_eq!(updated.role, "VP People");
        assert_eq!(updated.first_name, "Ava");

        let fetched = store.get(EmployeeId(1)).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = InMemoryEmployeeStore::seeded();
        let err = store
            .update(EmployeeId(404), EmployeePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HrError::NotFound(EmployeeId(404))));
    }

    #[tokio::test]
    async fn deleting_twice_fails_the_second_time() {
        let store = InMemoryEmployeeStore::seeded();
        store.delete(EmployeeId(2)).await.unwrap();

        let err = store.delete(EmployeeId(2)).await.unwrap_err();
        assert!(matches!(err, HrError::NotFound(EmployeeId(2))));
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn bulk_delete_skips_unknown_ids() {
        let store = InMemoryEmployeeStore::seeded();
        let report = store
            .delete_bulk(&[EmployeeId(3), EmployeeId(99), EmployeeId(3)])
            .await
            .unwrap();

        assert_eq!(report.deleted, vec![EmployeeId(3)]);
        assert_eq!(report.missing, vec![EmployeeId(99)]);
        assert!(!report.is_complete());
        assert!(store.get(EmployeeId(3)).await.unwrap().is_none());
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn stores_are_isolated() {
        let left = InMemoryEmployeeStore::seeded();
        let right = InMemoryEmployeeStore::seeded();
        left.delete(EmployeeId(1)).await.unwrap();

        assert!(right.get(EmployeeId(1)).await.unwrap().is_some());
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let mut records = mock_employees();
        records[1].id = records[0].id;
        assert!(matches!(
            InMemoryEmployeeStore::with_records(records),
            Err(HrError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn exhausted_id_space_is_an_error_not_a_panic() {
        let mut records = mock_employees();
        records[0].id = EmployeeId(u64::MAX);
        assert!(matches!(
            InMemoryEmployeeStore::with_records(records),
            Err(HrError::Validation(_))
        ));

        let mut records = mock_employees();
        records[0].id = EmployeeId(u64::MAX - 1);
        let store = InMemoryEmployeeStore::with_records(records).unwrap();
        let err = store.create(payload("d@finance.hr")).await.unwrap_err();
        assert!(matches!(err, HrError::Validation(_)));
        assert_eq!(store.len().await, 5);
    }

    #[tokio::test]
    async fn counter_starts_above_highest_seeded_id() {
        let mut records = mock_employees();
        records[2].id = EmployeeId(40);
        let store = InMemoryEmployeeStore::with_records(records).unwrap();

        let created = store.create(payload("c@finance.hr")).await.unwrap();
        assert_eq!(created.id, EmployeeId(41));
        assert_eq!(store.len().await, 6);
        assert!(InMemoryEmployeeStore::new().is_empty().await);
    }
}
