//! Collaborator traits: statements, groups and the registry.
//!
//! These are the seams between the dispatcher and the code that actually
//! talks to a database. The dispatcher only routes calls through them; SQL
//! execution, connection handling and transactions live behind them.
//!
//! Thread safety: implementations are shared across calling threads and
//! must be `Send + Sync`.

use std::fmt;
use std::sync::Arc;

use crate::error::{ExecResult, ExecutionError};
use crate::result::{GroupResult, PackedParams};
use crate::types::StatementKind;
use crate::value::Value;

/// A single registered statement.
///
/// Every entry point receives the packed parameters; [`PackedParams::Empty`]
/// selects the parameterless form. The dispatcher calls exactly one entry
/// point per call, chosen by [`Statement::kind`]. Entry points a statement
/// does not support keep their default, which reports the mismatch as an
/// [`ExecutionError`].
pub trait Statement: Send + Sync {
    /// Kind of SQL this statement carries.
    fn kind(&self) -> StatementKind;

    /// Run a query and return its record set.
    fn query(&self, params: &PackedParams) -> ExecResult<Value> {
        let _ = params;
        Err(ExecutionError::unsupported("query", self.kind().name()))
    }

    /// Run an INSERT/UPDATE/DELETE and return the affected-row count.
    fn execute_update(&self, params: &PackedParams) -> ExecResult<i64> {
        let _ = params;
        Err(ExecutionError::unsupported("execute_update", self.kind().name()))
    }

    /// Run a generic statement and return its outcome flag.
    fn execute(&self, params: &PackedParams) -> ExecResult<bool> {
        let _ = params;
        Err(ExecutionError::unsupported("execute", self.kind().name()))
    }

    /// Run a procedure call and return its opaque result.
    fn call(&self, params: &PackedParams) -> ExecResult<Value> {
        let _ = params;
        Err(ExecutionError::unsupported("call", self.kind().name()))
    }
}

/// A registered batch of statements with an aggregate outcome.
pub trait Group: Send + Sync {
    /// Execute the batch.
    fn executes(&self, params: &PackedParams) -> ExecResult<GroupResult>;

    /// Report a failed execution. Called once per failed `executes`.
    fn log_diagnostics(&self, result: &GroupResult);
}

/// What a logical id resolves to.
#[derive(Clone)]
pub enum Executable {
    /// A single statement
    Statement(Arc<dyn Statement>),
    /// A statement group
    Group(Arc<dyn Group>),
    /// A registry entry that is neither a statement nor a group
    Foreign {
        /// Type name, for diagnostics
        type_name: String,
    },
}

impl Executable {
    /// Wrap a statement.
    pub fn statement(statement: impl Statement + 'static) -> Self {
        Executable::Statement(Arc::new(statement))
    }

    /// Wrap a group.
    pub fn group(group: impl Group + 'static) -> Self {
        Executable::Group(Arc::new(group))
    }

    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &str {
        match self {
            Executable::Statement(_) => "Statement",
            Executable::Group(_) => "Group",
            Executable::Foreign { type_name } => type_name,
        }
    }
}

impl fmt::Debug for Executable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Executable::Statement(s) => f
                .debug_struct("Statement")
                .field("kind", &s.kind())
                .finish(),
            Executable::Group(_) => f.write_str("Group"),
            Executable::Foreign { type_name } => f
                .debug_struct("Foreign")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

/// Resolves logical ids to executables.
///
/// Injected into every proxy; never ambient global state.
pub trait Registry: Send + Sync {
    /// Look up the executable registered under `id`.
    fn resolve(&self, id: &str) -> Option<Executable>;
}

impl<R: Registry + ?Sized> Registry for Arc<R> {
    fn resolve(&self, id: &str) -> Option<Executable> {
        (**self).resolve(id)
    }
}
