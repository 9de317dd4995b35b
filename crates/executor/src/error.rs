//! Error types for proxied calls.
//!
//! Two families live here:
//! - [`Error`]: what a caller of [`Proxy::invoke`](crate::Proxy::invoke) can
//!   observe. Execution faults from statements pass through unchanged.
//! - [`ConfigError`]: routing misconfiguration. These never reach the
//!   caller; the dispatcher logs them and returns the fallback value for the
//!   method's declared return type.

use sqlroute_core::ExecutionError;
use thiserror::Error;

/// Errors returned to the caller of a proxied method.
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Call | `UnknownMethod`, `ArityMismatch`, `Unrouted` | Bad call against the interface |
/// | Reply | `ReplyType` | Typed extraction did not match the shaped reply |
/// | Execution | `Execution`, `Delegate` | Faults raised behind the proxy |
/// | Setup | `Config` | Unreadable or invalid `sqlroute.toml` |
#[derive(Debug, Error)]
pub enum Error {
    /// The interface declares no method with this name
    #[error("unknown method: {interface}.{method}")]
    UnknownMethod { interface: String, method: String },

    /// The call passed a different number of arguments than declared
    #[error("wrong argument count for {interface}.{method}: expected {expected}, got {actual}")]
    ArityMismatch {
        interface: String,
        method: String,
        expected: usize,
        actual: usize,
    },

    /// The method has no routing metadata and no delegate handles it
    #[error("method {interface}.{method} is not routed and no delegate is set")]
    Unrouted { interface: String, method: String },

    /// The shaped reply cannot be converted to the requested type
    #[error("reply type mismatch: expected {expected}, got {actual}")]
    ReplyType {
        expected: &'static str,
        actual: &'static str,
    },

    /// Fault raised inside a statement or group
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Fault raised by the delegate implementation
    #[error("delegate error: {reason}")]
    Delegate { reason: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Routing misconfiguration detected while dispatching one call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two or more parameters but no names to bind them
    #[error("method parameter count >= 2 ({params}), but no parameter names are declared")]
    UnnamedParameters { params: usize },

    /// More parameter names than parameters
    #[error("declared parameter-name count ({names}) exceeds method parameter count ({params})")]
    TooManyParameterNames { names: usize, params: usize },

    /// Nothing is registered under the logical id
    #[error("logical id [{id}] is not registered")]
    UnknownId { id: String },

    /// The registry entry is neither a statement nor a group
    #[error("logical id [{id}] resolves to {type_name}, which is neither a statement nor a group")]
    UnsupportedTarget { id: String, type_name: String },
}
