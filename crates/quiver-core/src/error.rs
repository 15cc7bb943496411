use crate::types::RecordId;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// ErrorClass
/// Stable internal classification for runtime failures.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Corruption,
    Internal,
    InvariantViolation,
    Unsupported,
}

///
/// ErrorOrigin
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Executor,
    Relation,
    Serialize,
    Slug,
    Store,
}

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// These conditions are never expected during normal operation; callers
/// surface them as process faults, not user-facing field errors.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a store-origin invariant violation.
    pub(crate) fn store_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvariantViolation, ErrorOrigin::Store, message)
    }

    /// Construct a store-origin corruption error.
    pub(crate) fn store_corruption(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Corruption, ErrorOrigin::Store, message)
    }

    /// Construct an executor-origin invariant violation.
    pub(crate) fn executor_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Executor,
            message,
        )
    }

    /// Construct a serialize-origin internal error.
    pub(crate) fn serialize_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Serialize, message)
    }
}

///
/// Issue
/// One field-level validation finding.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

///
/// ValidationError
///

#[derive(Clone, Debug, ThisError)]
#[error("{entity} failed validation: {}", join(.issues, "; "))]
pub struct ValidationError {
    pub entity: &'static str,
    pub issues: Vec<Issue>,
}

// Join display items for error formatting.
fn join<T: Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

///
/// UniquenessError
///

#[derive(Clone, Debug, ThisError)]
#[error("{entity} already has a row with {} = {value}", join(.fields, ", "))]
pub struct UniquenessError {
    pub entity: &'static str,
    pub fields: Vec<&'static str>,
    pub value: String,
}

///
/// RecordKey
/// The lookup key a caller used, for diagnostics.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordKey {
    Id(RecordId),
    Slug(String),
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Slug(slug) => write!(f, "slug '{slug}'"),
        }
    }
}

///
/// NotFoundError
///

#[derive(Clone, Debug, ThisError)]
#[error("{entity} not found: {key}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: RecordKey,
}

///
/// BlockingRelation
/// One relation type still referencing a delete target.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockingRelation {
    pub entity: &'static str,
    pub count: u64,
}

impl Display for BlockingRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.entity, self.count)
    }
}

///
/// ReferentialIntegrityError
///

#[derive(Clone, Debug, ThisError)]
#[error("{entity} {id} is still referenced by: {}", join(.blocking, ", "))]
pub struct ReferentialIntegrityError {
    pub entity: &'static str,
    pub id: RecordId,
    pub blocking: Vec<BlockingRelation>,
}

///
/// Error
///
/// The public error surface. The first four variants are local,
/// recoverable conditions the caller surfaces to the end user;
/// `Internal` indicates corruption or a broken invariant.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    ReferentialIntegrity(#[from] ReferentialIntegrityError),

    #[error(transparent)]
    Uniqueness(#[from] UniquenessError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
