//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Employee records. `id` is the primary key (UUID v4).
    employees (id) {
        /// Primary key issued by the service on creation.
        id -> Uuid,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
    }
}
