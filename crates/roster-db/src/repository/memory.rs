//! In-memory [`EmployeeRepository`].
//!
//! A store stand-in for tests and tooling that must not touch SQLite. It
//! mirrors the `employees` schema: ids come from a counter that never goes
//! backwards, and emails are unique.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::EmployeeRepository;
use roster_core::Employee;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl Table {
    fn email_taken_by_other(&self, email: &str, own_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != own_id)
    }
}

/// `BTreeMap`-backed employee store.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: Employee) -> DbResult<Employee> {
        let mut table = self.table.write().await;

        if table.email_taken_by_other(&employee.email, employee.id) {
            return Err(DbError::duplicate("employees.email", employee.email));
        }

        let employee = match employee.id {
            Some(id) if !table.rows.contains_key(&id) => {
                return Err(DbError::not_found("Employee", id));
            }
            Some(_) => employee,
            None => {
                table.last_id += 1;
                employee.with_id(table.last_id)
            }
        };

        debug!(id = ?employee.id, email = %employee.email, "Saved employee in memory");
        if let Some(id) = employee.id {
            table.rows.insert(id, employee.clone());
        }
        Ok(employee)
    }

    async fn find_all(&self) -> DbResult<Vec<Employee>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> DbResult<Option<Employee>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        let removed = self.table.write().await.rows.remove(&id);
        debug!(id, deleted = removed.is_some(), "Deleted employee in memory");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn count(&self) -> DbResult<i64> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryEmployeeRepository::new();

        let a = repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();
        let b = repo.save(Employee::new("Lucas", "Oliveira", "lucas@lucas")).await.unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_ids_not_reused() {
        let repo = InMemoryEmployeeRepository::new();
        let a = repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();
        repo.delete_by_id(a.id.unwrap()).await.unwrap();

        let b = repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();

        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();

        let err = repo
            .save(Employee::new("Bruno", "Martins", "bruno@bruno"))
            .await
            .unwrap_err();

        assert!(err.is_unique_violation_on("email"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let repo = InMemoryEmployeeRepository::new();
        let mut saved = repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();

        saved.last_name = "Martins".to_string();
        let updated = repo.save(saved.clone()).await.unwrap();

        assert_eq!(updated, saved);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = InMemoryEmployeeRepository::new();

        let err = repo
            .save(Employee::new("Bruno", "Oliveira", "bruno@bruno").with_id(9))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_lookups() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await.unwrap();
        repo.save(Employee::new("Lucas", "Oliveira", "lucas@lucas")).await.unwrap();

        let by_email = repo.find_by_email("lucas@lucas").await.unwrap().unwrap();
        assert_eq!(by_email.first_name, "Lucas");

        let by_name = repo.find_by_name("Bruno", "Oliveira").await.unwrap().unwrap();
        assert_eq!(by_name.email, "bruno@bruno");

        assert!(repo.find_by_name("Bruno", "Martins").await.unwrap().is_none());
        assert!(repo.find_by_email("x@y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = InMemoryEmployeeRepository::new();
        repo.delete_by_id(1).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
