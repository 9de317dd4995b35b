//! Method index: method name → signature and routing metadata.
//!
//! Built once per proxy from the interface descriptor and never mutated
//! afterwards, so concurrent callers read it without synchronization.

use rustc_hash::FxHashMap;

use sqlroute_core::{InterfaceDescriptor, MethodSignature, RoutingMetadata};

use crate::config::RouteEntry;

/// A method as the proxy sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedMethod {
    /// Declared signature
    pub signature: MethodSignature,
    /// Routing metadata; `None` routes the call to the delegate
    pub routing: Option<RoutingMetadata>,
}

/// Immutable lookup table for one interface.
#[derive(Debug, Clone)]
pub struct MethodIndex {
    interface: String,
    methods: FxHashMap<String, IndexedMethod>,
}

impl MethodIndex {
    /// Index every method of `descriptor`, inherited ones included.
    ///
    /// A redeclared method replaces the inherited entry of the same name.
    pub fn build(descriptor: &InterfaceDescriptor) -> Self {
        let mut methods = FxHashMap::default();
        for method in descriptor.all_methods() {
            methods.insert(
                method.signature.name.clone(),
                IndexedMethod {
                    signature: method.signature.clone(),
                    routing: method.routing.clone(),
                },
            );
        }
        Self {
            interface: descriptor.name.clone(),
            methods,
        }
    }

    /// Overlay routes declared in configuration.
    ///
    /// Entries for other interfaces, or for methods this interface does not
    /// declare, are skipped. Returns the number of routes applied.
    pub(crate) fn apply_routes(&mut self, routes: &[RouteEntry]) -> usize {
        let mut applied = 0;
        for route in routes.iter().filter(|r| r.interface == self.interface) {
            match self.methods.get_mut(&route.method) {
                Some(entry) => {
                    entry.routing = Some(route.to_metadata());
                    applied += 1;
                }
                None => {
                    tracing::warn!(
                        interface = %self.interface,
                        method = %route.method,
                        "Configured route names a method the interface does not declare"
                    );
                }
            }
        }
        applied
    }

    /// Look up a method by name.
    pub fn get(&self, method: &str) -> Option<&IndexedMethod> {
        self.methods.get(method)
    }

    /// Name of the indexed interface
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Number of indexed methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when the interface declares no methods
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Number of methods carrying routing metadata
    pub fn routed_count(&self) -> usize {
        self.methods.values().filter(|m| m.routing.is_some()).count()
    }
}
