//! Base response envelopes (pure data model, no HTTP framework dependencies)

use apikit_errors::ErrorDetail;
use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Structural violations of the envelope shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// A failed envelope arrived without error detail.
    #[error("failed response must carry an error detail")]
    MissingErrorDetail,
}

/// Reject a failed envelope with no error detail during deserialization.
pub(crate) fn deny_failure_without_error<E: serde::de::Error>(
    success: bool,
    error: Option<&ErrorDetail>,
) -> Result<(), E> {
    if !success && error.is_none() {
        return Err(E::custom(EnvelopeError::MissingErrorDetail));
    }
    Ok(())
}

/// Minimal envelope: a free-text detail and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "utoipa", schema(title = "BaseResponse"))]
pub struct BaseResponse {
    pub detail: Option<String>,
}

impl BaseResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

/// Standard operation-result envelope.
///
/// A failed envelope always carries an [`ErrorDetail`]; the invariant is
/// upheld both by the constructors and on deserialization, where a failure
/// without error detail is rejected as [`EnvelopeError::MissingErrorDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "DefaultResponse",
        description = "Operation result with success flag and optional error detail"
    )
)]
#[must_use]
pub struct DefaultResponse {
    pub success: bool,
    pub detail: Option<String>,
    pub error: Option<ErrorDetail>,
}

impl DefaultResponse {
    /// Successful envelope with no detail.
    pub fn ok() -> Self {
        Self {
            success: true,
            detail: None,
            error: None,
        }
    }

    /// Failed envelope carrying the given error detail.
    pub fn failed(error: ErrorDetail) -> Self {
        Self {
            success: false,
            detail: None,
            error: Some(error),
        }
    }

    /// Failed envelope built directly from a caught error.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self::failed(ErrorDetail::from_error(error))
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Deserialize)]
struct RawDefaultResponse {
    success: bool,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

impl<'de> Deserialize<'de> for DefaultResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDefaultResponse::deserialize(deserializer)?;
        deny_failure_without_error(raw.success, raw.error.as_ref())?;
        Ok(Self {
            success: raw.success,
            detail: raw.detail,
            error: raw.error,
        })
    }
}

/// Axum integration: make the envelope directly usable as a response
///
/// Success maps to 200, failure to 500; the body is the JSON envelope either
/// way, so callers always get the same shape back.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for DefaultResponse {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if let Some(error) = &self.error {
            tracing::debug!(kind = %error.kind, "returning failed response");
        }
        (status, axum::Json(self)).into_response()
    }
}
