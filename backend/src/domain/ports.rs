//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`EmployeeRepository`]) describe what the domain needs from
//! storage and expose strongly typed errors, so adapters map their failures
//! into predictable variants. Driving ports ([`EmployeesCommand`],
//! [`EmployeesQuery`]) are what inbound adapters call; they speak the domain
//! [`Error`](crate::domain::Error).

mod employee_repository;
mod employees_command;
mod employees_query;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
pub use employees_command::EmployeesCommand;
pub use employees_query::EmployeesQuery;
