//! Fleet descriptors: plants, fuel prices and dispatch requests.

pub mod request;
pub mod types;

pub use request::DispatchRequest;
pub use types::{Fuels, Plant, PlantKind};
