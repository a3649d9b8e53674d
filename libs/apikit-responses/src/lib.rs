//! Standardized response envelope models
//!
//! Every envelope shares the same skeleton: a `success` flag, an optional
//! `detail` payload whose shape varies by envelope, and an optional
//! [`ErrorDetail`]. A failed envelope must carry error detail; that
//! invariant is enforced by the constructors and again on deserialization.
//!
//! Collection-shaped envelopes additionally serialize derived fields
//! (`length` for lists, `shape` for matrices) computed from the payload.
//!
//! ```
//! use apikit_responses::{DefaultResponse, ErrorDetail};
//!
//! let response = DefaultResponse::failed(ErrorDetail::new("QuotaExceeded", "Womp"));
//! let json = serde_json::to_string(&response).unwrap();
//! assert!(json.contains(r#""type":"QuotaExceeded""#));
//! ```

pub mod collections;
pub mod envelope;

// Re-export commonly used types
pub use apikit_errors::ErrorDetail;
pub use collections::{
    DictResponse, FloatListResponse, ListResponse, MatrixResponse, StringListResponse,
    StringOptionalListResponse, VectorResponse,
};
pub use envelope::{BaseResponse, DefaultResponse, EnvelopeError};
