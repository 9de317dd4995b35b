//! Parameter packing.
//!
//! Turns a call's positional arguments into the shape an executable expects:
//! - no declared names: nothing, or the first argument alone
//! - declared names: a name → argument mapping

use std::collections::HashMap;

use sqlroute_core::{PackedParams, RoutingMetadata, Value};

/// Pack positional `args` according to `metadata.param_names`.
///
/// Without names only the first argument is used; single-parameter methods
/// need no names. With names, slot `i` is bound to `param_names[i]` unless
/// that name is empty. Arguments past the last declared name are ignored.
pub fn pack(metadata: &RoutingMetadata, args: Vec<Value>) -> PackedParams {
    if metadata.param_names.is_empty() {
        return match args.into_iter().next() {
            Some(first) => PackedParams::Single(first),
            None => PackedParams::Empty,
        };
    }

    let mut named = HashMap::with_capacity(metadata.param_names.len());
    for (name, arg) in metadata.param_names.iter().zip(args) {
        if !name.is_empty() {
            named.insert(name.clone(), arg);
        }
    }
    PackedParams::Named(named)
}
