//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; the repository converts
//! them to and from [`Employee`](crate::domain::Employee).

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeId};

use super::schema::employees;

/// Row read from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(EmployeeId::from_uuid(row.id), row.first_name, row.last_name)
    }
}

/// Insertable row for new employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> From<&'a Employee> for NewEmployeeRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            id: *employee.id().as_uuid(),
            first_name: employee.first_name(),
            last_name: employee.last_name(),
        }
    }
}

/// Changeset applied when a save hits an existing id.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeNamesUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> From<&'a Employee> for EmployeeNamesUpdate<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            first_name: employee.first_name(),
            last_name: employee.last_name(),
        }
    }
}
