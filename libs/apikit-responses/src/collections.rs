//! Collection-shaped envelopes with computed wire fields
//!
//! The list and matrix envelopes mirror the base envelope but add derived
//! fields (`length`, `shape`) to the serialized form. Derived fields are
//! write-only: they are recomputed from `detail` on every serialization and
//! ignored when present in an incoming payload.

use std::collections::BTreeMap;

use apikit_errors::ErrorDetail;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::envelope::deny_failure_without_error;

/// List-shaped envelope; serializes with a computed `length` field.
///
/// The declared schema covers the stored fields only; the serialized form
/// additionally carries the derived `length`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "utoipa", schema(title = "ListResponse"))]
#[must_use]
pub struct ListResponse<T> {
    pub success: bool,
    pub detail: Option<Vec<T>>,
    pub error: Option<ErrorDetail>,
}

/// List envelope carrying strings.
pub type StringListResponse = ListResponse<String>;

/// List envelope carrying strings with possible gaps.
pub type StringOptionalListResponse = ListResponse<Option<String>>;

/// List envelope carrying floats.
pub type FloatListResponse = ListResponse<f64>;

/// Alias of [`FloatListResponse`] for vector-flavored endpoints.
pub type VectorResponse = FloatListResponse;

impl<T> ListResponse<T> {
    pub fn ok(detail: Vec<T>) -> Self {
        Self {
            success: true,
            detail: Some(detail),
            error: None,
        }
    }

    pub fn failed(error: ErrorDetail) -> Self {
        Self {
            success: false,
            detail: None,
            error: Some(error),
        }
    }

    /// Number of items in `detail`, `None` when there is no payload.
    pub fn length(&self) -> Option<usize> {
        self.detail.as_ref().map(Vec::len)
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ListResponse", 4)?;
        state.serialize_field("success", &self.success)?;
        state.serialize_field("detail", &self.detail)?;
        state.serialize_field("error", &self.error)?;
        state.serialize_field("length", &self.length())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawListResponse<T> {
    success: bool,
    #[serde(default)]
    detail: Option<Vec<T>>,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawListResponse::<T>::deserialize(deserializer)?;
        deny_failure_without_error(raw.success, raw.error.as_ref())?;
        Ok(Self {
            success: raw.success,
            detail: raw.detail,
            error: raw.error,
        })
    }
}

/// Matrix-shaped envelope; serializes with a computed `shape` field.
///
/// The declared schema covers the stored fields only; the serialized form
/// additionally carries the derived `shape`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "utoipa", schema(title = "MatrixResponse"))]
#[must_use]
pub struct MatrixResponse {
    pub success: bool,
    pub detail: Option<Vec<Vec<f64>>>,
    pub error: Option<ErrorDetail>,
}

impl MatrixResponse {
    pub fn ok(detail: Vec<Vec<f64>>) -> Self {
        Self {
            success: true,
            detail: Some(detail),
            error: None,
        }
    }

    pub fn failed(error: ErrorDetail) -> Self {
        Self {
            success: false,
            detail: None,
            error: Some(error),
        }
    }

    /// `(rows, columns)` of `detail`, where columns is the first row's
    /// length and an empty matrix has shape `(0, 0)`.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.detail
            .as_ref()
            .map(|rows| (rows.len(), rows.first().map_or(0, Vec::len)))
    }
}

impl Serialize for MatrixResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("MatrixResponse", 4)?;
        state.serialize_field("success", &self.success)?;
        state.serialize_field("detail", &self.detail)?;
        state.serialize_field("error", &self.error)?;
        state.serialize_field("shape", &self.shape())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawMatrixResponse {
    success: bool,
    #[serde(default)]
    detail: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

impl<'de> Deserialize<'de> for MatrixResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawMatrixResponse::deserialize(deserializer)?;
        deny_failure_without_error(raw.success, raw.error.as_ref())?;
        Ok(Self {
            success: raw.success,
            detail: raw.detail,
            error: raw.error,
        })
    }
}

/// Dictionary-shaped envelope with string keys and values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "utoipa", schema(title = "DictResponse"))]
#[must_use]
pub struct DictResponse {
    pub success: bool,
    pub detail: Option<BTreeMap<String, String>>,
    pub error: Option<ErrorDetail>,
}

impl DictResponse {
    pub fn ok(detail: BTreeMap<String, String>) -> Self {
        Self {
            success: true,
            detail: Some(detail),
            error: None,
        }
    }

    pub fn failed(error: ErrorDetail) -> Self {
        Self {
            success: false,
            detail: None,
            error: Some(error),
        }
    }
}

#[derive(Deserialize)]
struct RawDictResponse {
    success: bool,
    #[serde(default)]
    detail: Option<BTreeMap<String, String>>,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

impl<'de> Deserialize<'de> for DictResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDictResponse::deserialize(deserializer)?;
        deny_failure_without_error(raw.success, raw.error.as_ref())?;
        Ok(Self {
            success: raw.success,
            detail: raw.detail,
            error: raw.error,
        })
    }
}
