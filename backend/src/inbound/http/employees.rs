//! Employee API handlers.
//!
//! ```text
//! POST   /employee/add                      {"firstName":"Ana","lastName":"Doe"}
//! GET    /employee/allEmployee
//! PUT    /employee/updateEmployee/{id}      {"firstName":"Ann","lastName":"Roe"}
//! DELETE /employee/deleteEmployee/{id}
//! ```
//!
//! Only the delete handler maps `NotFound`. Duplicate names on create and
//! unknown ids on update are passed through [`unhandled`] and reach the
//! client as 500s.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Scope, delete, get, post, put, web};
use serde_json::json;

use crate::domain::{
    Employee, EmployeeDraft, EmployeeId, EmployeeValidationError, Error, ErrorCode,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::unhandled;
use crate::inbound::http::schemas::{EmployeeDraftSchema, EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Plain-text body returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully.";
/// Plain-text body returned when deleting an unknown id.
pub const DELETE_NOT_FOUND_MESSAGE: &str = "Employee not found.";

/// Routes mounted under `/employee`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employeemgt::inbound::http::employees::employee_routes;
///
/// let app = App::new().service(employee_routes());
/// ```
#[must_use]
pub fn employee_routes() -> Scope {
    web::scope("/employee")
        .service(add_employee)
        .service(all_employees)
        .service(update_employee)
        .service(delete_employee)
}

fn parse_employee_id(raw: &str) -> ApiResult<EmployeeId> {
    EmployeeId::new(raw).map_err(|err| {
        let code = match err {
            EmployeeValidationError::EmptyId => "empty_id",
            EmployeeValidationError::InvalidId => "invalid_id",
        };
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "id", "code": code }))
    })
}

fn plain_text(mut builder: actix_web::HttpResponseBuilder, body: &'static str) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(body)
}

/// Create an employee from a name pair.
#[utoipa::path(
    post,
    path = "/employee/add",
    request_body = EmployeeDraftSchema,
    responses(
        (status = 201, description = "Employee created", body = EmployeeSchema),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Duplicate name or storage failure", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "addEmployee"
)]
#[post("/add")]
pub async fn add_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDraft>,
) -> ApiResult<HttpResponse> {
    let created = state
        .employees
        .create(payload.into_inner())
        .await
        .map_err(unhandled)?;
    Ok(HttpResponse::Created().json(created))
}

/// List every stored employee.
#[utoipa::path(
    get,
    path = "/employee/allEmployee",
    responses(
        (status = 200, description = "Employees", body = [EmployeeSchema]),
        (status = 500, description = "Storage failure", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "allEmployee"
)]
#[get("/allEmployee")]
pub async fn all_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees_query.list_all().await?;
    Ok(web::Json(employees))
}

/// Replace both names of an existing employee.
#[utoipa::path(
    put,
    path = "/employee/updateEmployee/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    request_body = EmployeeDraftSchema,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeSchema),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 500, description = "Unknown id or storage failure", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/updateEmployee/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EmployeeDraft>,
) -> ApiResult<web::Json<Employee>> {
    let id = parse_employee_id(&path.into_inner())?;
    let updated = state
        .employees
        .update(&id, payload.into_inner())
        .await
        .map_err(unhandled)?;
    Ok(web::Json(updated))
}

/// Delete an employee by id.
#[utoipa::path(
    delete,
    path = "/employee/deleteEmployee/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    responses(
        (status = 200, description = "Employee deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/deleteEmployee/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_employee_id(&path.into_inner())?;
    match state.employees.delete(&id).await {
        Ok(_) => Ok(plain_text(HttpResponse::Ok(), DELETED_MESSAGE)),
        Err(err) if err.code() == ErrorCode::NotFound => {
            Ok(plain_text(HttpResponse::NotFound(), DELETE_NOT_FOUND_MESSAGE))
        }
        Err(err) => Err(err),
    }
}
