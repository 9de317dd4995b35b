//! Core types and traits for sqlroute
//!
//! This crate defines the vocabulary shared by the dispatcher and the code
//! that plugs into it:
//! - Value: dynamic value for arguments and results
//! - ReturnType / StatementKind / MethodSignature: closed type descriptions
//! - RoutingMetadata / InterfaceDescriptor: per-method routing information
//! - PackedParams / RawResult / GroupResult: call-scoped data
//! - Statement / Group / Registry: collaborator traits
//! - ExecutionError: faults raised by executables

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod metadata;
pub mod result;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{ExecResult, ExecutionError};
pub use metadata::{InterfaceDescriptor, MethodDescriptor, RoutedInterface, RoutingMetadata};
pub use result::{GroupResult, PackedParams, RawResult};
pub use traits::{Executable, Group, Registry, Statement};
pub use types::{MethodSignature, ReturnType, StatementKind};
pub use value::Value;
