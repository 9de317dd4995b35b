//! Routing metadata and interface descriptors.
//!
//! An interface that wants to be proxied describes itself through
//! [`RoutedInterface::descriptor`]: the ordered list of its methods, the
//! interfaces it extends, and for each routed method the
//! [`RoutingMetadata`] that tells the dispatcher which registered
//! executable to run and how to shape its result.

use serde::{Deserialize, Serialize};

use crate::types::{MethodSignature, ReturnType};

/// Per-method routing information.
///
/// The logical id used for registry lookup is `id`, else `alt_id`, else the
/// method's own name. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingMetadata {
    /// Explicit logical id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alternate logical id, used when `id` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    /// Names bound to positional arguments. An empty name leaves its slot unbound.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub param_names: Vec<String>,
    /// Collapse a list-shaped query result to its first element
    #[serde(default)]
    pub return_one: bool,
    /// Select one named sub-result from a group execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_sub_id: Option<String>,
}

impl RoutingMetadata {
    /// Metadata with every field defaulted: the method name is the logical id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit logical id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the alternate logical id.
    pub fn alt_id(mut self, alt_id: impl Into<String>) -> Self {
        self.alt_id = Some(alt_id.into());
        self
    }

    /// Set the positional parameter names.
    pub fn params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Collapse list results to their first element.
    pub fn return_one(mut self) -> Self {
        self.return_one = true;
        self
    }

    /// Return only the named sub-result of a group execution.
    pub fn return_sub_id(mut self, sub_id: impl Into<String>) -> Self {
        self.return_sub_id = Some(sub_id.into());
        self
    }

    /// Resolve the logical id for a method named `method`.
    pub fn logical_id<'a>(&'a self, method: &'a str) -> &'a str {
        non_empty(&self.id)
            .or_else(|| non_empty(&self.alt_id))
            .unwrap_or(method)
    }

    /// The sub-result id, if one is set and non-empty.
    pub fn sub_id(&self) -> Option<&str> {
        non_empty(&self.return_sub_id)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// One method of an interface, routed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// The method's signature
    pub signature: MethodSignature,
    /// Routing metadata; `None` for methods the proxy does not dispatch
    pub routing: Option<RoutingMetadata>,
}

/// Everything the dispatcher needs to know about an interface.
///
/// # Example
///
/// ```
/// use sqlroute_core::{InterfaceDescriptor, ReturnType, RoutingMetadata};
///
/// let base = InterfaceDescriptor::new("Auditable")
///     .routed("audit", 1, ReturnType::Void, RoutingMetadata::new().id("AUDIT_INSERT"));
///
/// let users = InterfaceDescriptor::new("UserDao")
///     .extends(base)
///     .routed("update_name", 1, ReturnType::Int, RoutingMetadata::new().params(["name"]))
///     .method("describe", 0, ReturnType::Record);
///
/// assert_eq!(users.routed_methods().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// Interface name, used in diagnostics
    pub name: String,
    /// Directly declared methods, in declaration order
    pub methods: Vec<MethodDescriptor>,
    /// Extended interfaces
    pub parents: Vec<InterfaceDescriptor>,
}

impl InterfaceDescriptor {
    /// Create an empty descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Inherit the methods of `parent`.
    pub fn extends(mut self, parent: InterfaceDescriptor) -> Self {
        self.parents.push(parent);
        self
    }

    /// Declare a routed method.
    pub fn routed(
        mut self,
        name: impl Into<String>,
        param_count: usize,
        return_type: ReturnType,
        routing: RoutingMetadata,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            signature: MethodSignature::new(name, param_count, return_type),
            routing: Some(routing),
        });
        self
    }

    /// Declare a method without routing metadata.
    pub fn method(
        mut self,
        name: impl Into<String>,
        param_count: usize,
        return_type: ReturnType,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            signature: MethodSignature::new(name, param_count, return_type),
            routing: None,
        });
        self
    }

    /// All methods, inherited first, then directly declared.
    ///
    /// A method may appear more than once when a child redeclares an
    /// inherited name; later entries win when building an index.
    pub fn all_methods(&self) -> Vec<&MethodDescriptor> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    /// Methods that carry routing metadata, inherited first.
    pub fn routed_methods(&self) -> Vec<&MethodDescriptor> {
        self.all_methods()
            .into_iter()
            .filter(|m| m.routing.is_some())
            .collect()
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a MethodDescriptor>) {
        for parent in &self.parents {
            parent.collect(out);
        }
        out.extend(self.methods.iter());
    }
}

/// Implemented by interface marker types to expose their descriptor.
pub trait RoutedInterface {
    /// Describe the interface's methods and routing metadata.
    fn descriptor() -> InterfaceDescriptor;
}
