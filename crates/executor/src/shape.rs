//! Result shaping: raw execution output → the declared return type.
//!
//! | Source kind | void | bool | int | list / map / record / any | group_result |
//! |-------------|------|------|-----|---------------------------|--------------|
//! | Query | - | raw | raw | raw, or list head with `return_one` | raw |
//! | Insert/Update/Delete | - | `count >= 1` | `count` | - | - |
//! | Ddl/Unknown | - | flag | - | - | - |
//! | Call | - | raw | raw | raw | raw |
//! | Group | - | success | - | map: sub-results; any: whole result | whole result |
//!
//! "-" is [`Reply::Nothing`]. For groups a configured sub-result id takes
//! precedence over everything but `void`.

use sqlroute_core::{GroupResult, ReturnType, Value};

use crate::reply::Reply;

/// Value returned when dispatch cannot proceed.
///
/// `false` for bool methods so callers can treat it as "not done";
/// nothing for everything else.
pub fn fallback(return_type: ReturnType) -> Reply {
    match return_type {
        ReturnType::Bool => Reply::Bool(false),
        ReturnType::Void
        | ReturnType::Int
        | ReturnType::List
        | ReturnType::Map
        | ReturnType::Record
        | ReturnType::Any
        | ReturnType::GroupResult => Reply::Nothing,
    }
}

/// Shape a query record set.
///
/// With `return_one`, a non-empty list collapses to its first row; an empty
/// list is returned unchanged.
pub fn query(return_type: ReturnType, return_one: bool, raw: Value) -> Reply {
    if return_type == ReturnType::Void {
        return Reply::Nothing;
    }
    match raw {
        Value::Array(rows) if return_one && !rows.is_empty() => {
            Reply::from_value(rows.into_iter().next().unwrap_or(Value::Null))
        }
        other => Reply::from_value(other),
    }
}

/// Shape an affected-row count.
pub fn update(return_type: ReturnType, count: i64) -> Reply {
    match return_type {
        ReturnType::Bool => Reply::Bool(count >= 1),
        ReturnType::Int => Reply::Int(count),
        ReturnType::Void
        | ReturnType::List
        | ReturnType::Map
        | ReturnType::Record
        | ReturnType::Any
        | ReturnType::GroupResult => Reply::Nothing,
    }
}

/// Shape a generic-execute outcome flag.
pub fn execute(return_type: ReturnType, flag: bool) -> Reply {
    match return_type {
        ReturnType::Bool => Reply::Bool(flag),
        ReturnType::Void
        | ReturnType::Int
        | ReturnType::List
        | ReturnType::Map
        | ReturnType::Record
        | ReturnType::Any
        | ReturnType::GroupResult => Reply::Nothing,
    }
}

/// Shape a procedure-call return.
pub fn call(return_type: ReturnType, raw: Value) -> Reply {
    match return_type {
        ReturnType::Void => Reply::Nothing,
        ReturnType::Bool
        | ReturnType::Int
        | ReturnType::List
        | ReturnType::Map
        | ReturnType::Record
        | ReturnType::Any
        | ReturnType::GroupResult => Reply::from_value(raw),
    }
}

/// Shape a group result.
///
/// Precedence: void, then the configured sub-result, then the declared type.
pub fn group(return_type: ReturnType, sub_id: Option<&str>, mut result: GroupResult) -> Reply {
    if return_type == ReturnType::Void {
        return Reply::Nothing;
    }

    if let Some(sub_id) = sub_id {
        if !result.success {
            return Reply::Nothing;
        }
        return match result.sub_results.remove(sub_id) {
            Some(raw) => Reply::SubResult(raw),
            None => Reply::Nothing,
        };
    }

    match return_type {
        ReturnType::Map if result.success => Reply::SubResults(result.sub_results),
        ReturnType::Map => Reply::Nothing,
        ReturnType::Bool => Reply::Bool(result.success),
        ReturnType::GroupResult | ReturnType::Any => Reply::Group(result),
        ReturnType::Void | ReturnType::Int | ReturnType::List | ReturnType::Record => {
            Reply::Nothing
        }
    }
}
