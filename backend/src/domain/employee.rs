//! Employee record and its identifier.
//!
//! ## Serialisation
//! Records serialise in camelCase: `{"id": "<uuid>", "firstName": "...",
//! "lastName": "..."}`. Identifiers travel as hyphenated UUID strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors raised when parsing an [`EmployeeId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeValidationError {
    /// The identifier is empty.
    #[error("employee id must not be empty")]
    EmptyId,
    /// The identifier is not a UUID.
    #[error("employee id must be a valid UUID")]
    InvalidId,
}

/// Store-assigned employee identifier. Immutable once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Parse an identifier from its textual form.
    ///
    /// # Examples
    /// ```
    /// use employeemgt::domain::EmployeeId;
    ///
    /// let id = EmployeeId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(EmployeeId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeValidationError> {
        let raw = id.as_ref();
        if raw.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| EmployeeValidationError::InvalidId)
    }

    /// Issue a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name pair supplied when creating or renaming an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl EmployeeDraft {
    /// Build a draft from its two names.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A stored employee record.
///
/// ## Invariants
/// - `id` never changes after creation; [`Employee::rename`] only touches the
///   names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
}

impl Employee {
    /// Assemble a record from its parts.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Assemble a record from a draft and an issued identifier.
    #[must_use]
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft {
            first_name,
            last_name,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
        }
    }

    /// Replace both names, keeping the identifier.
    ///
    /// # Examples
    /// ```
    /// use employeemgt::domain::{Employee, EmployeeDraft, EmployeeId};
    ///
    /// let id = EmployeeId::random();
    /// let renamed = Employee::new(id, "Ana", "Doe").rename(EmployeeDraft::new("Ana", "Smith"));
    /// assert_eq!(renamed.id(), &id);
    /// assert_eq!(renamed.last_name(), "Smith");
    /// ```
    #[must_use]
    pub fn rename(self, draft: EmployeeDraft) -> Self {
        Self::from_draft(self.id, draft)
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}
