//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Each method checks out one pooled connection and issues a single
//! statement. `save` is an upsert on the primary key.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

use super::models::{EmployeeNamesUpdate, EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the `EmployeeRepository` port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmployeeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EmployeeRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeRepositoryError::connection("database connection error")
        }
        _ => EmployeeRepositoryError::query("database error"),
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.as_uuid())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn exists_by_id(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            employees::table.filter(employees::id.eq(id.as_uuid())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            employees::table
                .filter(employees::first_name.eq(first_name))
                .filter(employees::last_name.eq(last_name)),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(employee))
            .on_conflict(employees::id)
            .do_update()
            .set(EmployeeNamesUpdate::from(employee))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
