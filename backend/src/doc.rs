//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the employee and health handlers plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document is served by
//! Swagger UI in debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    EmployeeDraftSchema, EmployeeSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee management API",
        description = "Create, list, rename and delete employee records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::add_employee,
        crate::inbound::http::employees::all_employees,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeSchema, EmployeeDraftSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "employees", description = "Employee record management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
