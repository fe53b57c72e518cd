//! Employee domain service.
//!
//! Implements the employee driving ports on top of any
//! [`EmployeeRepository`]. Two rules live here: a name pair may only be
//! created once, and update/delete/find require the id to exist. Both are
//! check-then-act sequences with no atomicity beyond what the store offers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, EmployeesCommand, EmployeesQuery,
};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Message carried by the conflict raised on duplicate creation.
pub const EMPLOYEE_EXISTS_MESSAGE: &str = "Employee already exists";
/// Message carried by the not-found error for unknown ids.
pub const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Employee not found";

/// Employee service implementing [`EmployeesCommand`] and [`EmployeesQuery`].
pub struct EmployeeService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> EmployeeService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
    }
}

fn not_found() -> Error {
    Error::not_found(EMPLOYEE_NOT_FOUND_MESSAGE)
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn fetch(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }
}

#[async_trait]
impl<R> EmployeesCommand for EmployeeService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn create(&self, candidate: EmployeeDraft) -> Result<Employee, Error> {
        let taken = self
            .repository
            .exists_by_name(&candidate.first_name, &candidate.last_name)
            .await
            .map_err(map_repository_error)?;
        if taken {
            return Err(Error::conflict(EMPLOYEE_EXISTS_MESSAGE));
        }

        let employee = Employee::from_draft(EmployeeId::random(), candidate);
        self.repository
            .save(&employee)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: &EmployeeId, patch: EmployeeDraft) -> Result<Employee, Error> {
        let renamed = self.fetch(id).await?.rename(patch);
        self.repository
            .save(&renamed)
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<Employee, Error> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !exists {
            return Err(not_found());
        }

        let snapshot = self.fetch(id).await?;
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        Ok(snapshot)
    }
}

#[async_trait]
impl<R> EmployeesQuery for EmployeeService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_one(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.fetch(id).await
    }
}

#[cfg(test)]
mod tests {
    //! Service rules exercised against a mocked repository.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockEmployeeRepository;
    use crate::outbound::memory::InMemoryEmployeeRepository;
    use mockall::{Sequence, predicate::eq};
    use rstest::{fixture, rstest};

    #[fixture]
    fn ana() -> Employee {
        Employee::new(EmployeeId::random(), "Ana", "Doe")
    }

    fn service(repository: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
        EmployeeService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_fresh_id_and_saves() {
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_exists_by_name()
            .withf(|first, last| first == "Ana" && last == "Doe")
            .times(1)
            .return_once(|_, _| Ok(false));
        repository
            .expect_save()
            .times(1)
            .returning(|employee| Ok(employee.clone()));

        let created = service(repository)
            .create(EmployeeDraft::new("Ana", "Doe"))
            .await
            .expect("create succeeds");

        assert_eq!(created.first_name(), "Ana");
        assert_eq!(created.last_name(), "Doe");
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_taken_name_without_saving() {
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_exists_by_name()
            .return_once(|_, _| Ok(true));
        repository.expect_save().never();

        let err = service(repository)
            .create(EmployeeDraft::new("Ana", "Doe"))
            .await
            .expect_err("duplicate names conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), EMPLOYEE_EXISTS_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_snapshot_after_removal(ana: Employee) {
        let id = *ana.id();
        let stored = ana.clone();
        let mut seq = Sequence::new();
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_exists_by_id()
            .with(eq(id))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_| Ok(true));
        repository
            .expect_find_by_id()
            .with(eq(id))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(Some(stored)));
        repository
            .expect_delete_by_id()
            .with(eq(id))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_| Ok(()));

        let deleted = service(repository).delete(&id).await.expect("delete succeeds");

        assert_eq!(deleted, ana);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_exists_by_id().return_once(|_| Ok(false));
        repository.expect_delete_by_id().never();

        let err = service(repository)
            .delete(&EmployeeId::random())
            .await
            .expect_err("unknown id");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), EMPLOYEE_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_names_and_keeps_id(ana: Employee) {
        let id = *ana.id();
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(id))
            .return_once(move |_| Ok(Some(ana)));
        repository
            .expect_save()
            .withf(move |employee| {
                employee.id() == &id
                    && employee.first_name() == "Ann"
                    && employee.last_name() == "Roe"
            })
            .times(1)
            .returning(|employee| Ok(employee.clone()));

        let updated = service(repository)
            .update(&id, EmployeeDraft::new("Ann", "Roe"))
            .await
            .expect("update succeeds");

        assert_eq!(updated.id(), &id);
    }

    #[rstest]
    #[tokio::test]
    async fn update_does_not_check_name_uniqueness(ana: Employee) {
        let id = *ana.id();
        let mut repository = MockEmployeeRepository::new();
        repository.expect_exists_by_name().never();
        repository
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(ana)));
        repository
            .expect_save()
            .returning(|employee| Ok(employee.clone()));

        service(repository)
            .update(&id, EmployeeDraft::new("Taken", "Name"))
            .await
            .expect("update skips uniqueness");
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_find_by_id().return_once(|_| Ok(None));
        repository.expect_save().never();

        let err = service(repository)
            .update(&EmployeeId::random(), EmployeeDraft::new("Ann", "Roe"))
            .await
            .expect_err("unknown id");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn find_one_returns_stored_record(ana: Employee) {
        let id = *ana.id();
        let stored = ana.clone();
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(stored)));

        let found = service(repository).find_one(&id).await.expect("found");
        assert_eq!(found, ana);
    }

    #[rstest]
    #[tokio::test]
    async fn created_record_is_found_by_its_id() {
        let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));

        let created = service
            .create(EmployeeDraft::new("Ana", "Doe"))
            .await
            .expect("create succeeds");
        let found = service.find_one(created.id()).await.expect("found");

        assert_eq!(found, created);
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_record_leaves_the_listing() {
        let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
        let kept = service
            .create(EmployeeDraft::new("Bo", "Lee"))
            .await
            .expect("create succeeds");
        let removed = service
            .create(EmployeeDraft::new("Ana", "Doe"))
            .await
            .expect("create succeeds");

        let snapshot = service.delete(removed.id()).await.expect("delete succeeds");

        assert_eq!(snapshot, removed);
        assert_eq!(service.list_all().await.expect("listed"), vec![kept]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_one_unknown_id_is_not_found() {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_find_by_id().return_once(|_| Ok(None));

        let err = service(repository)
            .find_one(&EmployeeId::random())
            .await
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(EmployeeRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(EmployeeRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_all_maps_repository_failures(
        #[case] failure: EmployeeRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_find_all().return_once(move || Err(failure));

        let err = service(repository)
            .list_all()
            .await
            .expect_err("repository failure propagates");
        assert_eq!(err.code(), expected);
    }
}
