//! The Executor - dispatch engine behind every proxy.
//!
//! The Executor is a stateless dispatcher: it validates a routed call,
//! resolves the logical id against the registry, runs the executable through
//! the entry point its kind selects, and shapes the output to the method's
//! declared return type.
//!
//! ```text
//! Validate → Resolve → Execute (by kind) → Shape → Return
//! ```
//!
//! Routing misconfiguration never escapes: it is logged and the fallback
//! value for the declared return type is returned instead.

use std::sync::Arc;

use sqlroute_core::{
    ExecutionError, Group, MethodSignature, PackedParams, Registry, RoutingMetadata, Statement,
    StatementKind, Value,
};
use tracing::{debug, trace, warn};

use crate::error::ConfigError;
use crate::resolve::{self, Target};
use crate::{params, shape, Error, Reply, Result};

/// Why a single dispatch stopped early.
#[derive(Debug)]
pub(crate) enum DispatchError {
    Config(ConfigError),
    Execution(ExecutionError),
}

impl From<ConfigError> for DispatchError {
    fn from(err: ConfigError) -> Self {
        DispatchError::Config(err)
    }
}

impl From<ExecutionError> for DispatchError {
    fn from(err: ExecutionError) -> Self {
        DispatchError::Execution(err)
    }
}

/// The dispatch engine.
///
/// Holds the injected registry and nothing else that changes between calls.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
#[derive(Clone)]
pub struct Executor {
    registry: Arc<dyn Registry>,
    trace_params: bool,
}

impl Executor {
    /// Create an executor over a registry.
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            trace_params: false,
        }
    }

    /// Log packed parameters at trace level on every dispatch.
    pub fn with_trace_params(mut self, enabled: bool) -> Self {
        self.trace_params = enabled;
        self
    }

    /// Dispatch one routed call.
    ///
    /// `interface` is used for diagnostics only. Configuration errors are
    /// logged and turned into the fallback value; execution faults from the
    /// executable propagate unchanged.
    pub fn dispatch(
        &self,
        interface: &str,
        signature: &MethodSignature,
        metadata: &RoutingMetadata,
        args: Vec<Value>,
    ) -> Result<Reply> {
        match self.try_dispatch(signature, metadata, args) {
            Ok(reply) => Ok(reply),
            Err(DispatchError::Config(err)) => {
                warn!(
                    interface = %interface,
                    method = %signature.name,
                    error = %err,
                    "Routing configuration error, returning fallback"
                );
                Ok(shape::fallback(signature.return_type))
            }
            Err(DispatchError::Execution(err)) => Err(Error::Execution(err)),
        }
    }

    pub(crate) fn try_dispatch(
        &self,
        signature: &MethodSignature,
        metadata: &RoutingMetadata,
        args: Vec<Value>,
    ) -> std::result::Result<Reply, DispatchError> {
        validate(signature, metadata)?;

        let id = metadata.logical_id(&signature.name);
        let target = resolve::resolve(self.registry.as_ref(), id)?;

        match target {
            Target::Statement(statement) => {
                self.execute_statement(id, signature, metadata, statement.as_ref(), args)
            }
            Target::Group(group) => self.execute_group(id, signature, metadata, group.as_ref(), args),
        }
    }

    fn execute_statement(
        &self,
        id: &str,
        signature: &MethodSignature,
        metadata: &RoutingMetadata,
        statement: &dyn Statement,
        args: Vec<Value>,
    ) -> std::result::Result<Reply, DispatchError> {
        let kind = statement.kind();
        let params = params::pack(metadata, args);
        debug!(
            id = %id,
            method = %signature.name,
            kind = %kind,
            returns = %signature.return_type,
            "Dispatching statement"
        );
        self.trace_packed(id, &params);

        let ret = signature.return_type;
        let reply = match kind {
            StatementKind::Query => {
                let raw = statement.query(&params)?;
                shape::query(ret, metadata.return_one, raw)
            }
            StatementKind::Insert | StatementKind::Update | StatementKind::Delete => {
                let count = statement.execute_update(&params)?;
                shape::update(ret, count)
            }
            StatementKind::Ddl | StatementKind::Unknown => {
                let flag = statement.execute(&params)?;
                shape::execute(ret, flag)
            }
            StatementKind::Call => {
                let raw = statement.call(&params)?;
                shape::call(ret, raw)
            }
        };
        Ok(reply)
    }

    fn execute_group(
        &self,
        id: &str,
        signature: &MethodSignature,
        metadata: &RoutingMetadata,
        group: &dyn Group,
        args: Vec<Value>,
    ) -> std::result::Result<Reply, DispatchError> {
        let params = params::pack(metadata, args);
        debug!(
            id = %id,
            method = %signature.name,
            returns = %signature.return_type,
            "Dispatching group"
        );
        self.trace_packed(id, &params);

        let result = group.executes(&params)?;
        if !result.success {
            debug!(id = %id, failure = ?result.failure, "Group execution failed");
            group.log_diagnostics(&result);
        }

        Ok(shape::group(signature.return_type, metadata.sub_id(), result))
    }

    fn trace_packed(&self, id: &str, params: &PackedParams) {
        if self.trace_params {
            trace!(id = %id, params = ?params, "Packed parameters");
        }
    }
}

/// Check parameter names against the method's arity.
pub(crate) fn validate(
    signature: &MethodSignature,
    metadata: &RoutingMetadata,
) -> std::result::Result<(), ConfigError> {
    let names = metadata.param_names.len();
    let params = signature.param_count;

    if names == 0 && params >= 2 {
        return Err(ConfigError::UnnamedParameters { params });
    }
    if names > params {
        return Err(ConfigError::TooManyParameterNames { names, params });
    }
    Ok(())
}
