//! Merit-order economic dispatch.
//!
//! A request is served in three phases:
//! 1. [`capacity`] prices each plant and snaps its bounds onto a 0.1 MW grid
//! 2. [`merit_order`] fills the load cheapest-first in a single pass
//! 3. [`correction`] moves single units until output matches the load exactly

pub mod allocator;
pub mod capacity;
pub mod correction;
/// Marginal cost model.
pub mod cost;
pub mod error;
pub mod merit_order;
/// Cost breakdown of a finished allocation.
pub mod summary;
pub mod types;

pub use allocator::compute_allocation;
pub use cost::marginal_cost;
pub use error::DispatchError;
pub use summary::DispatchSummary;
pub use types::{Allocation, PlantOutput, SCALE};
