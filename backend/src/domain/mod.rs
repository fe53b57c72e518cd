//! Domain primitives, ports and services.
//!
//! Purpose: hold the employee record, its business rules and the port traits
//! adapters plug into. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - `Employee`, `EmployeeId`, `EmployeeDraft`: the record and its inputs.
//! - `EmployeeService`: the rules, behind the `ports` driving traits.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeValidationError};
pub use self::employee_service::{
    EMPLOYEE_EXISTS_MESSAGE, EMPLOYEE_NOT_FOUND_MESSAGE, EmployeeService,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
