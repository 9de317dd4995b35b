//! Call-scoped values: packed parameters, raw results and group results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::Value;

/// Parameters handed to an executable for one call.
///
/// `Empty` selects the executable's parameterless form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PackedParams {
    /// The call had no arguments
    Empty,
    /// A single unnamed argument
    Single(Value),
    /// Arguments bound to declared parameter names
    Named(HashMap<String, Value>),
}

impl PackedParams {
    /// True for the parameterless form
    pub fn is_empty(&self) -> bool {
        matches!(self, PackedParams::Empty)
    }

    /// Look up a named parameter. Always `None` for `Empty` and `Single`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            PackedParams::Named(map) => map.get(name),
            PackedParams::Empty | PackedParams::Single(_) => None,
        }
    }

    /// Flatten into a single value: `Null`, the argument, or an object.
    pub fn into_value(self) -> Value {
        match self {
            PackedParams::Empty => Value::Null,
            PackedParams::Single(v) => v,
            PackedParams::Named(map) => Value::Object(map),
        }
    }
}

/// Raw output of one statement execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawResult {
    /// Rows from a query; an `Array` when list-shaped
    RecordSet(Value),
    /// Affected-row count from a write
    Count(i64),
    /// Outcome flag from a generic execute
    Flag(bool),
    /// Opaque return of a procedure call
    Returned(Value),
}

impl RawResult {
    /// Collapse into a plain value.
    pub fn into_value(self) -> Value {
        match self {
            RawResult::RecordSet(v) | RawResult::Returned(v) => v,
            RawResult::Count(n) => Value::Int(n),
            RawResult::Flag(b) => Value::Bool(b),
        }
    }
}

/// Aggregate outcome of a group execution.
///
/// Carries the overall success flag and the sub-results that the group's
/// statements published under their own ids. A caller that declares a
/// `GroupResult` return type receives this whole value and may inspect it
/// before deciding what to do next.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupResult {
    /// Whether every statement in the group succeeded
    pub success: bool,
    /// Sub-results keyed by sub-id
    #[serde(default)]
    pub sub_results: HashMap<String, RawResult>,
    /// Failure description reported by the group, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl GroupResult {
    /// A successful result with no sub-results.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// A failed result carrying a description.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            sub_results: HashMap::new(),
            failure: Some(reason.into()),
        }
    }

    /// Publish a sub-result under `sub_id`.
    pub fn with_sub_result(mut self, sub_id: impl Into<String>, raw: RawResult) -> Self {
        self.sub_results.insert(sub_id.into(), raw);
        self
    }

    /// Look up a sub-result.
    pub fn sub_result(&self, sub_id: &str) -> Option<&RawResult> {
        self.sub_results.get(sub_id)
    }
}
