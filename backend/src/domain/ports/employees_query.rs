//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Domain use-case port for reading employee records.
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every employee, in no particular order.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// The employee with `id`.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when `id` is unknown.
    async fn find_one(&self, id: &EmployeeId) -> Result<Employee, Error>;
}
