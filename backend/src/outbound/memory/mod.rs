//! Process-local `EmployeeRepository` implementation.
//!
//! Records live in a mutex-guarded map for the lifetime of the process. Each
//! call takes the lock once, so individual operations are consistent while
//! sequences of calls are not atomic, matching the database adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

/// In-memory employee store.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: Mutex<HashMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<EmployeeId, Employee>>, EmployeeRepositoryError> {
        self.records
            .lock()
            .map_err(|_| EmployeeRepositoryError::query("employee store lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(self.records()?.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        Ok(self.records()?.contains_key(id))
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, EmployeeRepositoryError> {
        Ok(self
            .records()?
            .values()
            .any(|e| e.first_name() == first_name && e.last_name() == last_name))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        self.records()?.insert(*employee.id(), employee.clone());
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError> {
        self.records()?.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn save_inserts_then_overwrites(repository: InMemoryEmployeeRepository) {
        let id = EmployeeId::random();
        repository
            .save(&Employee::new(id, "Ana", "Doe"))
            .await
            .expect("insert");
        repository
            .save(&Employee::new(id, "Ann", "Roe"))
            .await
            .expect("overwrite");

        let all = repository.find_all().await.expect("list");
        assert_eq!(all, vec![Employee::new(id, "Ann", "Roe")]);
    }

    #[rstest]
    #[tokio::test]
    async fn exists_by_name_matches_exact_pair(repository: InMemoryEmployeeRepository) {
        repository
            .save(&Employee::new(EmployeeId::random(), "Ana", "Doe"))
            .await
            .expect("insert");

        assert!(repository.exists_by_name("Ana", "Doe").await.expect("query"));
        assert!(!repository.exists_by_name("Ana", "Roe").await.expect("query"));
        assert!(!repository.exists_by_name("ana", "doe").await.expect("query"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_by_id_removes_and_tolerates_missing(repository: InMemoryEmployeeRepository) {
        let id = EmployeeId::random();
        repository
            .save(&Employee::new(id, "Ana", "Doe"))
            .await
            .expect("insert");

        repository.delete_by_id(&id).await.expect("delete");
        repository.delete_by_id(&id).await.expect("second delete is a no-op");

        assert!(!repository.exists_by_id(&id).await.expect("query"));
        assert!(repository.find_by_id(&id).await.expect("query").is_none());
    }
}
