//! # sqlroute Executor
//!
//! Method interception and dispatch for sqlroute.
//!
//! This crate turns calls on a described interface into executions of
//! statements and statement groups registered under logical ids:
//! - [`Proxy`] - intercepts calls and routes them by method
//! - [`Executor`] - validates, resolves, executes and shapes one call
//! - [`Reply`] - the shaped result, convertible with [`FromReply`]
//! - [`RouteConfig`] - `sqlroute.toml` settings
//!
//! ## Quick Start
//!
//! ```text
//! use sqlroute_executor::Proxy;
//!
//! let proxy = Proxy::new::<UserDao>(registry);
//! let updated: i64 = proxy.call("update_name", vec!["alice".into()])?;
//! ```
//!
//! ## Dispatch by statement kind
//!
//! | Kind | Entry point | Shaped to |
//! |------|-------------|-----------|
//! | Query | `query` | record set, or its first row with `return_one` |
//! | Insert/Update/Delete | `execute_update` | count, or `count >= 1` for bool |
//! | Ddl/Unknown | `execute` | outcome flag for bool |
//! | Call | `call` | opaque return |
//! | Group | `executes` | success flag, sub-results, or the whole result |

#![warn(missing_docs)]

pub mod config;
mod error;
mod executor;
mod index;
mod params;
mod proxy;
mod reply;
mod resolve;
pub mod shape;


pub use config::{RouteConfig, RouteEntry, UnroutedPolicy, CONFIG_FILE_NAME};
pub use error::{ConfigError, Error};
pub use executor::Executor;
pub use index::{IndexedMethod, MethodIndex};
pub use params::pack;
pub use proxy::{Delegate, Proxy, ProxyBuilder};
pub use reply::{FromReply, Reply};

/// Result type for proxied calls
pub type Result<T> = std::result::Result<T, Error>;
