//! Route tables: breeds API plus common operational routes.

mod breeds;
mod common;
pub use breeds::breed_routes;
pub use common::{common_routes, common_routes_with_ready};
