//! HTTP handlers for the breeds API.

pub mod breeds;
pub use breeds::*;
