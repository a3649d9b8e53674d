//! Serializable error details for API responses
//!
//! This crate provides a pure data type for carrying an error across a
//! serialization boundary, with no dependencies on HTTP frameworks:
//! - [`ErrorDetail`] captures an error's kind name and message
//! - [`ErrorRegistry`] maps kind names back to constructible error types
//! - [`UnknownKindError`] is the fallback raised when a kind cannot be
//!   resolved, preserving both the kind name and the message
//!
//! A detail captured on one side of the wire can be turned back into a live
//! error value on the other side:
//!
//! ```
//! use apikit_errors::{ErrorDetail, ErrorRegistry};
//!
//! let source = std::io::Error::other("disk on fire");
//! let detail = ErrorDetail::from_error(&source);
//!
//! let registry = ErrorRegistry::with_builtins();
//! let revived = detail.into_error_with(&registry);
//! assert_eq!(revived.to_string(), "disk on fire");
//! ```

pub mod detail;
pub mod registry;

// Re-export commonly used types
pub use detail::{ErrorDetail, UnknownKindError, error_from_serialized, kind_name_of};
pub use registry::{
    BoxError, ErrorFactory, ErrorRegistry, register_error_kind, register_global_kind,
};
