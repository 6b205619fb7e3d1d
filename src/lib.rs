//! Merit-order economic dispatch for a heterogeneous power plant fleet.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Cost model and the dispatch allocator.
pub mod dispatch;
pub mod fleet;
pub mod io;
pub mod telemetry;
