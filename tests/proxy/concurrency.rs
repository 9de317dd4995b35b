//! One proxy shared across threads.

use std::sync::Arc;
use std::thread;

use sqlroute::{
    Executable, InterfaceDescriptor, Proxy, ReturnType, RoutedInterface, RoutingMetadata, Value,
};

use crate::common::*;

struct CounterDao;

impl RoutedInterface for CounterDao {
    fn descriptor() -> InterfaceDescriptor {
        InterfaceDescriptor::new("CounterDao")
            .routed("next", 1, ReturnType::Int, RoutingMetadata::new().id("CALL_NEXT_ID"))
            .routed("users", 0, ReturnType::List, RoutingMetadata::new().id("USERS_SELECT"))
            .routed("healthy", 0, ReturnType::Bool, RoutingMetadata::new().id("SNAPSHOT"))
    }
}

const THREADS: usize = 8;
const CALLS: usize = 100;

#[test]
fn concurrent_calls_see_consistent_results() {
    init_tracing();
    let table = UserTable::with_users(&["ann", "bob", "cid"]);
    let registry = MemoryRegistry::new();
    registry.register("CALL_NEXT_ID", Executable::statement(NextId));
    registry.register("USERS_SELECT", Executable::statement(SelectUsers(table.clone())));
    registry.register("SNAPSHOT", Executable::Group(SnapshotGroup::new(table, true)));

    let proxy = Arc::new(Proxy::new::<CounterDao>(registry.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let proxy = Arc::clone(&proxy);
            thread::spawn(move || {
                for i in 0..CALLS {
                    let seq = (t * CALLS + i) as i64;
                    let next: i64 = proxy.call("next", vec![seq.into()]).unwrap();
                    assert_eq!(next, seq + 1);

                    let users: Value = proxy.call("users", vec![]).unwrap();
                    assert_eq!(users.as_array().map(|r| r.len()), Some(3));

                    let healthy: bool = proxy.call("healthy", vec![]).unwrap();
                    assert!(healthy);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every call resolves its id afresh
    assert_eq!(registry.lookups(), THREADS * CALLS * 3);
}

#[test]
fn registry_changes_during_use_are_picked_up() {
    init_tracing();
    let registry = MemoryRegistry::new();
    let proxy = Arc::new(Proxy::new::<CounterDao>(registry.clone()));

    let before: Option<i64> = proxy.call("next", vec![1.into()]).unwrap();
    assert_eq!(before, None);

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || registry.register("CALL_NEXT_ID", Executable::statement(NextId)))
    };
    writer.join().unwrap();

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let proxy = Arc::clone(&proxy);
            thread::spawn(move || proxy.call::<i64>("next", vec![9.into()]).unwrap())
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), 10);
    }
}
