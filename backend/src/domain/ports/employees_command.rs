//! Driving port for employee mutations.
//!
//! Inbound adapters create, rename and remove employees through this trait
//! without knowing which repository backs the service.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Domain use-case port for changing employee records.
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Store a new employee under a freshly issued id.
    ///
    /// Fails with [`ErrorCode::Conflict`](crate::domain::ErrorCode::Conflict)
    /// when the name pair is already taken.
    async fn create(&self, candidate: EmployeeDraft) -> Result<Employee, Error>;

    /// Replace the names of an existing employee.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when `id` is unknown. Names are not checked for uniqueness here.
    async fn update(&self, id: &EmployeeId, patch: EmployeeDraft) -> Result<Employee, Error>;

    /// Remove an employee and return the record as it was before removal.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when `id` is unknown.
    async fn delete(&self, id: &EmployeeId) -> Result<Employee, Error>;
}
