//! Driven port for employee persistence.
//!
//! The contract is deliberately thin: lookups, existence checks, an upserting
//! save and a delete. Business rules such as name uniqueness live in
//! [`EmployeeService`](crate::domain::EmployeeService), not here.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
    }
}

/// Port for employee storage and retrieval.
///
/// Implementations provide no atomicity across calls: a caller that checks
/// `exists_by_name` and then calls `save` may race with another caller doing
/// the same.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored record, in no particular order.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// The record with `id`, or `None`.
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Whether a record with `id` exists.
    async fn exists_by_id(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError>;

    /// Whether a record with exactly this name pair exists.
    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, EmployeeRepositoryError>;

    /// Insert the record, or overwrite the record sharing its id.
    ///
    /// Returns the record as stored.
    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError>;

    /// Remove the record with `id`. Removing a missing id is not an error.
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError>;
}
