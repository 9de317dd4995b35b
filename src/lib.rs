//! sqlroute - route interface method calls to registered SQL statements
//!
//! An interface describes its methods once; a [`Proxy`] built over it turns
//! each call into the execution of a statement or statement group looked up
//! by logical id, and shapes the result to the method's declared return type.
//!
//! # Quick Start
//!
//! ```ignore
//! use sqlroute::{InterfaceDescriptor, Proxy, ReturnType, RoutedInterface, RoutingMetadata};
//!
//! struct UserDao;
//!
//! impl RoutedInterface for UserDao {
//!     fn descriptor() -> InterfaceDescriptor {
//!         InterfaceDescriptor::new("UserDao")
//!             .routed("update_name", 1, ReturnType::Int, RoutingMetadata::new().params(["name"]))
//!     }
//! }
//!
//! let proxy = Proxy::new::<UserDao>(registry);
//! let updated: i64 = proxy.call("update_name", vec!["alice".into()])?;
//! ```
//!
//! # Architecture
//!
//! - `sqlroute-core`: values, descriptors and the collaborator traits
//!   ([`Statement`], [`Group`], [`Registry`])
//! - `sqlroute-executor`: the dispatch engine and the proxy front

pub use sqlroute_core::*;
pub use sqlroute_executor::*;
