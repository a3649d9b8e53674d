//! Registry mapping error kind names to constructible error types
//!
//! Dynamic "look the type up by name" resolution is replaced by an explicit,
//! inspectable table: each entry pairs a kind name with a factory that builds
//! an error value of that kind from a single message string. The hosting
//! application populates the table with its own kinds during startup.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::detail::kind_name_of;

/// Boxed error value produced by resolution.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds an error value of a registered kind from its message.
///
/// Factories are infallible by construction: only kinds that genuinely accept
/// a single message string can be registered.
pub type ErrorFactory = fn(String) -> BoxError;

/// Table of error kinds constructible by name.
#[derive(Clone, Default)]
pub struct ErrorRegistry {
    kinds: HashMap<String, ErrorFactory>,
}

impl ErrorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in kinds.
    ///
    /// `std::io::Error` is the one standard-library error constructible from
    /// a bare message, so it is registered under its type name `Error`.
    /// Everything else comes from the application via [`register`](Self::register).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(kind_name_of::<std::io::Error>(), |message| {
            Box::new(std::io::Error::other(message))
        });
        registry
    }

    /// Register a factory under an explicit kind name.
    ///
    /// Replaces any previous entry for the same name.
    pub fn register(&mut self, kind: impl Into<String>, factory: ErrorFactory) {
        self.kinds.insert(kind.into(), factory);
    }

    /// Register an error type under its own type name.
    ///
    /// The name is derived the same way [`ErrorDetail::from_error`] derives
    /// it, so details captured from `E` resolve back to `E`.
    ///
    /// [`ErrorDetail::from_error`]: crate::ErrorDetail::from_error
    pub fn register_kind<E>(&mut self)
    where
        E: std::error::Error + From<String> + Send + Sync + 'static,
    {
        self.register(kind_name_of::<E>(), |message| Box::new(E::from(message)));
    }

    /// Look up the factory for a kind name.
    pub fn resolve(&self, kind: &str) -> Option<ErrorFactory> {
        self.kinds.get(kind).copied()
    }

    /// Whether a kind name is resolvable.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over the registered kind names.
    pub fn kind_names(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ErrorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorRegistry")
            .field("kinds", &self.kinds.keys())
            .finish()
    }
}

static GLOBAL_REGISTRY: LazyLock<RwLock<ErrorRegistry>> =
    LazyLock::new(|| RwLock::new(ErrorRegistry::with_builtins()));

/// Register a kind in the process-wide registry.
///
/// Intended for application startup; resolution reads the same table via
/// [`ErrorDetail::into_error`](crate::ErrorDetail::into_error).
pub fn register_error_kind(kind: impl Into<String>, factory: ErrorFactory) {
    GLOBAL_REGISTRY.write().register(kind, factory);
}

/// Register an error type in the process-wide registry under its type name.
pub fn register_global_kind<E>()
where
    E: std::error::Error + From<String> + Send + Sync + 'static,
{
    GLOBAL_REGISTRY.write().register_kind::<E>();
}

pub(crate) fn resolve_global(kind: &str) -> Option<ErrorFactory> {
    GLOBAL_REGISTRY.read().resolve(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct FlakyUpstream(String);

    impl From<String> for FlakyUpstream {
        fn from(message: String) -> Self {
            Self(message)
        }
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ErrorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("Error").is_none());
    }

    #[test]
    fn builtins_include_io_error() {
        let registry = ErrorRegistry::with_builtins();
        assert!(registry.contains("Error"));

        let factory = registry.resolve("Error").unwrap();
        let err = factory("boom".to_owned());
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn register_kind_uses_type_name() {
        let mut registry = ErrorRegistry::new();
        registry.register_kind::<FlakyUpstream>();

        assert!(registry.contains("FlakyUpstream"));
        let err = registry.resolve("FlakyUpstream").unwrap()("timed out".to_owned());
        assert!(err.downcast_ref::<FlakyUpstream>().is_some());
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn register_replaces_previous_entry() {
        let mut registry = ErrorRegistry::new();
        registry.register("Custom", |message| Box::new(std::io::Error::other(message)));
        registry.register("Custom", |message| Box::new(FlakyUpstream(message)));

        assert_eq!(registry.len(), 1);
        let err = registry.resolve("Custom").unwrap()("later".to_owned());
        assert!(err.downcast_ref::<FlakyUpstream>().is_some());
    }

    #[test]
    fn global_registration_is_visible_to_resolution() {
        register_error_kind("RegistryTestKind", |message| {
            Box::new(FlakyUpstream(message))
        });
        let factory = resolve_global("RegistryTestKind").unwrap();
        assert_eq!(factory("hello".to_owned()).to_string(), "hello");
    }
}
