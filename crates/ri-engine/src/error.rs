//! Error types for engine operations
//!
//! Three distinct failure classes, deliberately kept apart:
//! construction-time ([`EngineError`], fatal), build-time ([`BuildError`],
//! a caller bug surfaced immediately), and authorization denial
//! ([`AuthorizeError`], expected to propagate to the boundary).
//!
//! Parse failure is intentionally absent here: it is an ordinary value,
//! [`crate::parse::InvalidRi`], because parsing handles untrusted input.

use thiserror::Error;

use ri_schema::SchemaError;

/// Engine construction error types.
///
/// Construction is fatal on failure; an engine never exists over an invalid
/// schema or app name, and nothing retries it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Application name contains characters outside `[a-zA-Z0-9-]`.
    #[error("invalid application name \"{name}\": must contain only ASCII letters, digits, and '-'")]
    InvalidAppName {
        /// The offending name.
        name: String,
    },

    /// The supplied resource schema failed validation.
    #[error("invalid resource schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Builder error types.
///
/// These indicate caller mistakes while constructing an RI and fail the
/// offending [`crate::RiBuilder::step`] call immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The resource type does not exist at the current schema level.
    #[error("unknown resource type \"{given}\" at this level; valid types are: [{}]", .expected.join(", "))]
    UnknownResource {
        /// The name the caller supplied.
        given: String,
        /// Resource types valid at this level, in declaration order.
        expected: Vec<String>,
    },

    /// The id is neither a ULID nor the wildcard.
    #[error("invalid id for \"{resource}\": expected a 26-character ULID or \"*\", got \"{given}\"")]
    InvalidId {
        /// The resource type the id was supplied for.
        resource: String,
        /// The id the caller supplied.
        given: String,
    },
}

/// Authorization denial.
///
/// Returned by [`crate::RiEngine::authorize`]; callers at the application
/// boundary map it to a permission-denied response.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("action \"{action}\" is not permitted on resource \"{ri}\"")]
pub struct AuthorizeError {
    /// The denied action.
    pub action: String,
    /// The RI the action was checked against.
    pub ri: String,
}
