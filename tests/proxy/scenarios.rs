//! End-to-end dispatch scenarios through a typed interface facade.

use std::collections::HashMap;
use std::sync::Arc;

use sqlroute::{
    Delegate, Error, Executable, GroupResult, InterfaceDescriptor, Proxy, RawResult, Reply,
    Result, ReturnType, RoutedInterface, RoutingMetadata, Value,
};

use crate::common::*;

// ============================================================================
// The interface under test
// ============================================================================

/// Operations shared by every DAO.
struct Maintenance;

impl RoutedInterface for Maintenance {
    fn descriptor() -> InterfaceDescriptor {
        InterfaceDescriptor::new("Maintenance")
            .routed("create_schema", 0, ReturnType::Bool, RoutingMetadata::new().id("DDL_USERS"))
            .routed("next_id", 1, ReturnType::Int, RoutingMetadata::new().id("CALL_NEXT_ID"))
    }
}

struct UserDaoApi;

impl RoutedInterface for UserDaoApi {
    fn descriptor() -> InterfaceDescriptor {
        InterfaceDescriptor::new("UserDao")
            .extends(Maintenance::descriptor())
            .routed("all", 0, ReturnType::List, RoutingMetadata::new().id("USERS_SELECT"))
            .routed(
                "find_by_name",
                1,
                ReturnType::Record,
                RoutingMetadata::new().alt_id("USERS_SELECT").return_one(),
            )
            .routed(
                "rename",
                2,
                ReturnType::Bool,
                RoutingMetadata::new().id("USERS_RENAME").params(["id", "name"]),
            )
            .routed(
                "update_name",
                1,
                ReturnType::Int,
                RoutingMetadata::new().id("USERS_RENAME_ALL").params(["name"]),
            )
            .routed("find", 2, ReturnType::List, RoutingMetadata::new())
            .routed("snapshot", 0, ReturnType::GroupResult, RoutingMetadata::new().id("SNAPSHOT"))
            .routed("snapshot_ok", 0, ReturnType::Bool, RoutingMetadata::new().id("SNAPSHOT"))
            .routed("snapshot_all", 0, ReturnType::Map, RoutingMetadata::new().id("SNAPSHOT"))
            .routed(
                "snapshot_count",
                0,
                ReturnType::Int,
                RoutingMetadata::new().id("SNAPSHOT").return_sub_id("count"),
            )
            .method("greeting", 1, ReturnType::Record)
    }
}

trait UserDao {
    fn create_schema(&self) -> Result<bool>;
    fn next_id(&self, seq: i64) -> Result<i64>;
    fn all(&self) -> Result<Value>;
    fn find_by_name(&self, name: &str) -> Result<Option<Value>>;
    fn rename(&self, id: i64, name: &str) -> Result<bool>;
    fn update_name(&self, name: &str) -> Result<i64>;
    fn find(&self, a: &str, b: i64) -> Result<Option<Value>>;
    fn snapshot(&self) -> Result<GroupResult>;
    fn snapshot_ok(&self) -> Result<bool>;
    fn snapshot_all(&self) -> Result<Option<HashMap<String, RawResult>>>;
    fn snapshot_count(&self) -> Result<Option<i64>>;
    fn greeting(&self, name: &str) -> Result<Value>;
}

/// Hand-written facade: every method forwards to the proxy.
struct UserDaoProxy(Proxy);

impl UserDao for UserDaoProxy {
    fn create_schema(&self) -> Result<bool> {
        self.0.call("create_schema", vec![])
    }

    fn next_id(&self, seq: i64) -> Result<i64> {
        self.0.call("next_id", vec![seq.into()])
    }

    fn all(&self) -> Result<Value> {
        self.0.call("all", vec![])
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.0.call("find_by_name", vec![name.into()])
    }

    fn rename(&self, id: i64, name: &str) -> Result<bool> {
        self.0.call("rename", vec![id.into(), name.into()])
    }

    fn update_name(&self, name: &str) -> Result<i64> {
        self.0.call("update_name", vec![name.into()])
    }

    fn find(&self, a: &str, b: i64) -> Result<Option<Value>> {
        self.0.call("find", vec![a.into(), b.into()])
    }

    fn snapshot(&self) -> Result<GroupResult> {
        self.0.call("snapshot", vec![])
    }

    fn snapshot_ok(&self) -> Result<bool> {
        self.0.call("snapshot_ok", vec![])
    }

    fn snapshot_all(&self) -> Result<Option<HashMap<String, RawResult>>> {
        self.0.call("snapshot_all", vec![])
    }

    fn snapshot_count(&self) -> Result<Option<i64>> {
        self.0.call("snapshot_count", vec![])
    }

    fn greeting(&self, name: &str) -> Result<Value> {
        self.0.call("greeting", vec![name.into()])
    }
}

/// Implements the one unrouted method of the interface.
struct Greeter;

impl Delegate for Greeter {
    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Reply> {
        match (method, args.first().and_then(Value::as_str)) {
            ("greeting", Some(name)) => Ok(Reply::Value(Value::from(format!("hello, {}", name)))),
            _ => Err(Error::Delegate {
                reason: format!("unexpected call to {}", method),
            }),
        }
    }
}

struct Fixture {
    dao: UserDaoProxy,
    table: Arc<UserTable>,
    registry: Arc<MemoryRegistry>,
    group: Arc<SnapshotGroup>,
}

fn fixture(group_succeeds: bool) -> Fixture {
    init_tracing();
    let table = UserTable::with_users(&["ann", "bob", "cid"]);
    let group = SnapshotGroup::new(table.clone(), group_succeeds);

    let registry = MemoryRegistry::new();
    registry.register("DDL_USERS", Executable::statement(CreateTable));
    registry.register("CALL_NEXT_ID", Executable::statement(NextId));
    registry.register("USERS_SELECT", Executable::statement(SelectUsers(table.clone())));
    registry.register("USERS_RENAME", Executable::statement(RenameUser(table.clone())));
    registry.register("USERS_RENAME_ALL", Executable::statement(RenameAll(table.clone())));
    registry.register("SNAPSHOT", Executable::Group(group.clone()));

    let proxy = Proxy::with_delegate::<UserDaoApi>(registry.clone(), Arc::new(Greeter));
    Fixture {
        dao: UserDaoProxy(proxy),
        table,
        registry,
        group,
    }
}

fn name_of(row: &Value) -> Option<&str> {
    row.as_object()?.get("name")?.as_str()
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn inherited_ddl_method_returns_outcome_flag() {
    let f = fixture(true);
    assert!(f.dao.create_schema().unwrap());
}

#[test]
fn inherited_call_method_returns_procedure_result() {
    let f = fixture(true);
    assert_eq!(f.dao.next_id(41).unwrap(), 42);
}

#[test]
fn query_returns_full_record_set() {
    let f = fixture(true);
    let rows = f.dao.all().unwrap();
    assert_eq!(rows.as_array().map(|r| r.len()), Some(3));
}

#[test]
fn return_one_collapses_to_first_match() {
    let f = fixture(true);
    let row = f.dao.find_by_name("bob").unwrap().unwrap();
    assert_eq!(name_of(&row), Some("bob"));
}

#[test]
fn return_one_without_match_returns_empty_list() {
    let f = fixture(true);
    let row = f.dao.find_by_name("zed").unwrap();
    assert_eq!(row, Some(Value::Array(vec![])));
}

#[test]
fn named_update_shaped_to_bool() {
    let f = fixture(true);
    assert!(f.dao.rename(2, "bea").unwrap());
    assert!(!f.dao.rename(99, "nobody").unwrap());
    assert_eq!(f.table.names(), vec!["ann", "bea", "cid"]);
}

#[test]
fn update_name_returns_affected_count() {
    let f = fixture(true);
    assert_eq!(f.dao.update_name("same").unwrap(), 3);
    assert_eq!(f.table.names(), vec!["same", "same", "same"]);
}

#[test]
fn update_name_single_row_returns_one() {
    init_tracing();
    let table = UserTable::with_users(&["only"]);
    let registry = MemoryRegistry::new();
    registry.register("USERS_RENAME_ALL", Executable::statement(RenameAll(table.clone())));
    let dao = UserDaoProxy(Proxy::new::<UserDaoApi>(registry));

    assert_eq!(dao.update_name("alice").unwrap(), 1);
    assert_eq!(table.names(), vec!["alice"]);
}

#[test]
fn unnamed_two_parameter_method_falls_back_without_lookup() {
    let f = fixture(true);
    let before = f.registry.lookups();
    assert_eq!(f.dao.find("a", 1).unwrap(), None);
    assert_eq!(f.registry.lookups(), before);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn group_result_returned_whole() {
    let f = fixture(true);
    let result = f.dao.snapshot().unwrap();
    assert!(result.success);
    assert_eq!(result.sub_result("count"), Some(&RawResult::Count(3)));
}

#[test]
fn failed_group_returned_whole_for_inspection() {
    let f = fixture(false);
    let result = f.dao.snapshot().unwrap();
    assert!(!result.success);
    assert_eq!(result.failure.as_deref(), Some("snapshot step 2 failed"));
    assert_eq!(f.group.diagnostics(), 1);
}

#[test]
fn failed_group_bool_is_false_with_one_diagnostic() {
    let f = fixture(false);
    assert!(!f.dao.snapshot_ok().unwrap());
    assert_eq!(f.group.diagnostics(), 1);
}

#[test]
fn group_map_and_sub_result() {
    let f = fixture(true);
    let all = f.dao.snapshot_all().unwrap().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(f.dao.snapshot_count().unwrap(), Some(3));
}

#[test]
fn failed_group_map_and_sub_result_are_absent() {
    let f = fixture(false);
    assert_eq!(f.dao.snapshot_all().unwrap(), None);
    assert_eq!(f.dao.snapshot_count().unwrap(), None);
    assert_eq!(f.group.diagnostics(), 2);
}

// ============================================================================
// Delegation and misconfiguration
// ============================================================================

#[test]
fn unrouted_method_served_by_delegate() {
    let f = fixture(true);
    assert_eq!(f.dao.greeting("ann").unwrap(), Value::from("hello, ann"));
}

#[test]
fn registering_after_construction_is_visible() {
    init_tracing();
    let registry = MemoryRegistry::new();
    let dao = UserDaoProxy(Proxy::new::<UserDaoApi>(registry.clone()));

    // Not registered yet: bool fallback
    assert!(!dao.create_schema().unwrap());

    registry.register("DDL_USERS", Executable::statement(CreateTable));
    assert!(dao.create_schema().unwrap());
}

#[test]
fn foreign_registry_entry_falls_back() {
    init_tracing();
    let registry = MemoryRegistry::new();
    registry.register(
        "DDL_USERS",
        Executable::Foreign {
            type_name: "ConnectionPool".into(),
        },
    );
    let dao = UserDaoProxy(Proxy::new::<UserDaoApi>(registry));
    assert!(!dao.create_schema().unwrap());
}
