//! Method signatures, declared return types and statement kinds.
//!
//! Both enums here are closed on purpose: every place that branches on a
//! return type or a statement kind matches exhaustively, so adding a variant
//! is a compile error until each dispatch path decides what to do with it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The return type a routed method declares.
///
/// | Variant | Typical declaration |
/// |---------|---------------------|
/// | `Void` | `fn purge(&self)` |
/// | `Bool` | `fn save(&self, ..) -> bool` |
/// | `Int` | `fn update(&self, ..) -> i64` |
/// | `List` | `fn find_all(&self) -> Vec<Row>` |
/// | `Map` | `fn load(&self) -> HashMap<String, RawResult>` |
/// | `Record` | `fn find_one(&self, id: i64) -> Row` |
/// | `Any` | fully generic return (`Value`) |
/// | `GroupResult` | `fn run(&self) -> GroupResult` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// No return value
    Void,
    /// Success flag
    Bool,
    /// Integer count
    Int,
    /// List of rows
    List,
    /// Generic string-keyed mapping
    Map,
    /// Any concrete non-list, non-map type
    Record,
    /// Fully generic value
    Any,
    /// The group execution result itself
    GroupResult,
}

impl ReturnType {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ReturnType::Void => "void",
            ReturnType::Bool => "bool",
            ReturnType::Int => "int",
            ReturnType::List => "list",
            ReturnType::Map => "map",
            ReturnType::Record => "record",
            ReturnType::Any => "any",
            ReturnType::GroupResult => "group_result",
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of SQL a single statement carries.
///
/// Decides which execution entry point the dispatcher invokes:
/// `Query` → `query`, `Insert`/`Update`/`Delete` → `execute_update`,
/// `Ddl`/`Unknown` → `execute`, `Call` → `call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// SELECT
    Query,
    /// INSERT
    Insert,
    /// UPDATE
    Update,
    /// DELETE
    Delete,
    /// CREATE / ALTER / DROP ...
    Ddl,
    /// Stored procedure or function call
    Call,
    /// Anything the statement could not classify
    Unknown,
}

impl StatementKind {
    /// True for INSERT, UPDATE and DELETE
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            StatementKind::Insert | StatementKind::Update | StatementKind::Delete
        )
    }

    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            StatementKind::Query => "query",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Ddl => "ddl",
            StatementKind::Call => "call",
            StatementKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of one interface method: name, arity and declared return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name, unique within its interface
    pub name: String,
    /// Number of declared parameters
    pub param_count: usize,
    /// Declared return type
    pub return_type: ReturnType,
}

impl MethodSignature {
    /// Create a signature.
    pub fn new(name: impl Into<String>, param_count: usize, return_type: ReturnType) -> Self {
        Self {
            name: name.into(),
            param_count,
            return_type,
        }
    }
}
