//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! - **Thin adapter**: [`DieselEmployeeRepository`] only translates between
//!   row structs and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: `bb8` pools through `diesel-async`.
//! - **Typed errors**: Diesel and pool failures map to
//!   [`EmployeeRepositoryError`](crate::domain::ports::EmployeeRepositoryError).
//!
//! # Example
//!
//! ```no_run
//! use employeemgt::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repository = DieselEmployeeRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
