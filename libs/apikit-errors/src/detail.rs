//! Serializable error detail and its reconstruction into live error values

use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::registry::{self, BoxError, ErrorRegistry};

/// Bare type name of `E`: the last path segment, generic arguments stripped.
///
/// `my_app::errors::QuotaExceeded` and `Wrapper<T>` become `QuotaExceeded`
/// and `Wrapper`. This is the name [`ErrorDetail::from_error`] records and
/// the name [`ErrorRegistry::register_kind`] keys on, so the two stay in
/// agreement for any concrete error type.
pub fn kind_name_of<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Serializable record of an error's kind name and message.
///
/// The wire shape is fixed: `{"type": "<kind>", "message": "<message>"}`.
/// Both fields are required strings; a payload missing either one fails
/// deserialization before any resolution is attempted. The record holds no
/// reference to the originating error, only its name and message survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ErrorDetail",
        description = "Serializable error for embedding in a response"
    )
)]
#[must_use]
pub struct ErrorDetail {
    /// Error kind name, e.g. the type name of the error that was caught.
    ///
    /// Need not correspond to any currently resolvable kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorDetail {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Capture an error's type name and message at the point it is caught.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self {
            kind: kind_name_of::<E>().to_owned(),
            message: error.to_string(),
        }
    }

    /// Parse a freshly deserialized payload into a detail.
    ///
    /// Fails with the structural deserialization error when the payload does
    /// not match the two-string-field shape.
    pub fn from_serialized(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Reconstruct the error this detail describes, resolving the kind name
    /// against the process-wide registry.
    ///
    /// Total: when the kind is not resolvable the result is an
    /// [`UnknownKindError`] carrying `"<kind>: <message>"`, so the original
    /// information is never dropped. Callers propagate the returned value as
    /// the raised error:
    ///
    /// ```
    /// # use apikit_errors::ErrorDetail;
    /// fn relay(detail: ErrorDetail) -> Result<(), apikit_errors::BoxError> {
    ///     Err(detail.into_error())
    /// }
    /// ```
    #[must_use]
    pub fn into_error(self) -> BoxError {
        match registry::resolve_global(&self.kind) {
            Some(factory) => factory(self.message),
            None => Box::new(UnknownKindError {
                kind: self.kind,
                message: self.message,
            }),
        }
    }

    /// Reconstruct the error using an explicit registry instead of the
    /// process-wide one.
    #[must_use]
    pub fn into_error_with(self, registry: &ErrorRegistry) -> BoxError {
        match registry.resolve(&self.kind) {
            Some(factory) => factory(self.message),
            None => Box::new(UnknownKindError {
                kind: self.kind,
                message: self.message,
            }),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Fallback error raised when a kind name cannot be resolved.
///
/// Displays as `"<kind>: <message>"` so the unresolved kind name stays
/// visible in logs and downstream messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct UnknownKindError {
    pub kind: String,
    pub message: String,
}

/// Parse a serialized error payload and reconstruct the error it describes.
///
/// The two failure spaces stay distinct: a malformed payload surfaces as the
/// `Err` variant and never reaches resolution, while an unresolvable kind
/// still produces an `Ok` value (the [`UnknownKindError`] fallback).
pub fn error_from_serialized(value: serde_json::Value) -> Result<BoxError, serde_json::Error> {
    Ok(ErrorDetail::from_serialized(value)?.into_error())
}
