//! Proxy Integration Tests
//!
//! End-to-end tests through the public `sqlroute` API:
//! - Typed interface facades forwarding to `Proxy::call`
//! - Statement and group dispatch against an in-memory registry
//! - Inherited interface methods and delegate fall-through
//! - Configuration files overlaying routes
//! - Concurrent use of one proxy


mod concurrency;
mod scenarios;
