//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel.
//! - **memory**: process-local repository used when no database is
//!   configured, and by tests.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
