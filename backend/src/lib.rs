//! Employee management service.
//!
//! Layout follows ports and adapters:
//!
//! - [`domain`]: the employee record, its service rules and the ports.
//! - [`outbound`]: repository adapters (PostgreSQL via Diesel, in-memory).
//! - [`inbound`]: actix-web handlers translating HTTP into port calls.
//! - [`middleware`]: request-scoped trace identifiers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
