//! Proxy - the intercepting front of a routed interface.
//!
//! A proxy owns the method index for one interface and routes each call:
//! routed methods go to the [`Executor`], the rest to an optional delegate.
//!
//! Interfaces are usually exposed through a small hand-written facade that
//! forwards each trait method to [`Proxy::call`]:
//!
//! ```ignore
//! struct UserDaoProxy(Proxy);
//!
//! impl UserDao for UserDaoProxy {
//!     fn update_name(&self, name: &str) -> sqlroute::Result<i64> {
//!         self.0.call("update_name", vec![name.into()])
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use sqlroute_core::{InterfaceDescriptor, Registry, RoutedInterface, Value};
use tracing::info;

use crate::config::{RouteConfig, UnroutedPolicy};
use crate::index::MethodIndex;
use crate::reply::FromReply;
use crate::{shape, Error, Executor, Reply, Result};

/// Implementation for interface methods that carry no routing metadata.
pub trait Delegate: Send + Sync {
    /// Handle a call to the unrouted method `method`.
    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Reply>;
}

/// Intercepting proxy for one interface.
///
/// Built once; the method index is immutable afterwards, so a proxy can be
/// shared across threads and called concurrently.
pub struct Proxy {
    index: MethodIndex,
    executor: Executor,
    delegate: Option<Arc<dyn Delegate>>,
    unrouted: UnroutedPolicy,
}

impl Proxy {
    /// Build a proxy for interface `I` with default configuration.
    pub fn new<I: RoutedInterface>(registry: Arc<dyn Registry>) -> Self {
        ProxyBuilder::new(I::descriptor(), registry).build()
    }

    /// Build a proxy for interface `I` whose unrouted methods go to `delegate`.
    pub fn with_delegate<I: RoutedInterface>(
        registry: Arc<dyn Registry>,
        delegate: Arc<dyn Delegate>,
    ) -> Self {
        ProxyBuilder::new(I::descriptor(), registry)
            .delegate(delegate)
            .build()
    }

    /// Start building a proxy from a runtime descriptor.
    pub fn builder(descriptor: InterfaceDescriptor, registry: Arc<dyn Registry>) -> ProxyBuilder {
        ProxyBuilder::new(descriptor, registry)
    }

    /// Intercept a call to `method`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownMethod`] if the interface has no such method
    /// - [`Error::ArityMismatch`] if `args` does not match the declared arity
    /// - [`Error::Unrouted`] for unrouted methods under the `error` policy
    /// - [`Error::Execution`] for faults raised by the executable
    pub fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Reply> {
        let entry = self.index.get(method).ok_or_else(|| Error::UnknownMethod {
            interface: self.index.interface().to_string(),
            method: method.to_string(),
        })?;

        let signature = &entry.signature;
        if args.len() != signature.param_count {
            return Err(Error::ArityMismatch {
                interface: self.index.interface().to_string(),
                method: method.to_string(),
                expected: signature.param_count,
                actual: args.len(),
            });
        }

        match (&entry.routing, &self.delegate) {
            (Some(routing), _) => {
                self.executor
                    .dispatch(self.index.interface(), signature, routing, args)
            }
            (None, Some(delegate)) => delegate.invoke(method, args),
            (None, None) => match self.unrouted {
                UnroutedPolicy::Noop => Ok(shape::fallback(signature.return_type)),
                UnroutedPolicy::Error => Err(Error::Unrouted {
                    interface: self.index.interface().to_string(),
                    method: method.to_string(),
                }),
            },
        }
    }

    /// Intercept a call and convert the reply to `T`.
    ///
    /// # Errors
    ///
    /// Everything [`Proxy::invoke`] returns, plus [`Error::ReplyType`] when
    /// the shaped reply does not convert to `T`.
    pub fn call<T: FromReply>(&self, method: &str, args: Vec<Value>) -> Result<T> {
        let reply = self.invoke(method, args)?;
        T::from_reply(reply).map_err(|other| Error::ReplyType {
            expected: T::EXPECTED,
            actual: other.kind_name(),
        })
    }

    /// Name of the proxied interface
    pub fn interface(&self) -> &str {
        self.index.interface()
    }

    /// The method index built at construction
    pub fn index(&self) -> &MethodIndex {
        &self.index
    }

    /// True when unrouted calls go to a delegate
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("interface", &self.index.interface())
            .field("methods", &self.index.len())
            .field("routed", &self.index.routed_count())
            .field("delegate", &self.delegate.is_some())
            .field("unrouted", &self.unrouted)
            .finish()
    }
}

/// Builder for [`Proxy`].
pub struct ProxyBuilder {
    descriptor: InterfaceDescriptor,
    registry: Arc<dyn Registry>,
    delegate: Option<Arc<dyn Delegate>>,
    config: RouteConfig,
}

impl ProxyBuilder {
    /// Start a builder for `descriptor` over `registry`.
    pub fn new(descriptor: InterfaceDescriptor, registry: Arc<dyn Registry>) -> Self {
        Self {
            descriptor,
            registry,
            delegate: None,
            config: RouteConfig::default(),
        }
    }

    /// Route unrouted methods to `delegate`.
    pub fn delegate(mut self, delegate: Arc<dyn Delegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Apply a configuration.
    pub fn config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the method index and the proxy.
    pub fn build(self) -> Proxy {
        let mut index = MethodIndex::build(&self.descriptor);
        let overlaid = index.apply_routes(&self.config.routes);
        info!(
            interface = %index.interface(),
            methods = index.len(),
            routed = index.routed_count(),
            configured = overlaid,
            delegate = self.delegate.is_some(),
            "Built routing proxy"
        );

        Proxy {
            index,
            executor: Executor::new(self.registry).with_trace_params(self.config.trace_params),
            delegate: self.delegate,
            unrouted: self.config.unrouted,
        }
    }
}
