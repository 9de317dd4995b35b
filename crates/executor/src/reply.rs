//! Reply enum for shaped call results.
//!
//! Every dispatched call produces exactly one `Reply`. Which variant depends
//! on the executable kind and the method's declared
//! [`ReturnType`](sqlroute_core::ReturnType); the full decision table lives
//! in [`crate::shape`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use sqlroute_core::{GroupResult, RawResult, Value};

/// Shaped result of a proxied call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    /// No value (void methods, fallbacks, contract mismatches)
    Nothing,

    /// Success or outcome flag
    Bool(bool),

    /// Affected-row count
    Int(i64),

    /// Query record set, list head, or procedure return
    Value(Value),

    /// One named sub-result of a group
    SubResult(RawResult),

    /// Every sub-result of a group
    SubResults(HashMap<String, RawResult>),

    /// The whole group result
    Group(GroupResult),
}

impl Reply {
    /// Wrap a value; `Null` becomes `Nothing`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Reply::Nothing,
            other => Reply::Value(other),
        }
    }

    /// True for `Nothing`
    pub fn is_nothing(&self) -> bool {
        matches!(self, Reply::Nothing)
    }

    /// Variant name, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Reply::Nothing => "Nothing",
            Reply::Bool(_) => "Bool",
            Reply::Int(_) => "Int",
            Reply::Value(_) => "Value",
            Reply::SubResult(_) => "SubResult",
            Reply::SubResults(_) => "SubResults",
            Reply::Group(_) => "Group",
        }
    }
}

/// Conversion from a shaped reply into a typed return value.
///
/// Used by [`Proxy::call`](crate::Proxy::call) so hand-written interface
/// facades can return concrete Rust types. On mismatch the reply is handed
/// back so the caller can report what it actually got.
pub trait FromReply: Sized {
    /// Type name used in mismatch errors
    const EXPECTED: &'static str;

    /// Convert, or return the reply untouched.
    fn from_reply(reply: Reply) -> Result<Self, Reply>;
}

impl FromReply for Reply {
    const EXPECTED: &'static str = "Reply";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        Ok(reply)
    }
}

impl FromReply for () {
    const EXPECTED: &'static str = "()";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Nothing => Ok(()),
            other => Err(other),
        }
    }
}

impl FromReply for bool {
    const EXPECTED: &'static str = "bool";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Bool(b)
            | Reply::Value(Value::Bool(b))
            | Reply::SubResult(RawResult::Flag(b)) => Ok(b),
            other => Err(other),
        }
    }
}

impl FromReply for i64 {
    const EXPECTED: &'static str = "i64";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Int(n)
            | Reply::Value(Value::Int(n))
            | Reply::SubResult(RawResult::Count(n)) => Ok(n),
            other => Err(other),
        }
    }
}

impl FromReply for Value {
    const EXPECTED: &'static str = "Value";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Value(v) => Ok(v),
            Reply::Bool(b) => Ok(Value::Bool(b)),
            Reply::Int(n) => Ok(Value::Int(n)),
            Reply::SubResult(raw) => Ok(raw.into_value()),
            other => Err(other),
        }
    }
}

impl FromReply for RawResult {
    const EXPECTED: &'static str = "RawResult";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::SubResult(raw) => Ok(raw),
            other => Err(other),
        }
    }
}

impl FromReply for HashMap<String, RawResult> {
    const EXPECTED: &'static str = "HashMap<String, RawResult>";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::SubResults(map) => Ok(map),
            other => Err(other),
        }
    }
}

impl FromReply for GroupResult {
    const EXPECTED: &'static str = "GroupResult";

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Group(result) => Ok(result),
            other => Err(other),
        }
    }
}

impl<T: FromReply> FromReply for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_reply(reply: Reply) -> Result<Self, Reply> {
        match reply {
            Reply::Nothing => Ok(None),
            other => T::from_reply(other).map(Some),
        }
    }
}
