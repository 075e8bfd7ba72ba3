//! Breedstore: breed catalog REST backend library.

pub mod error;
pub mod handlers;
pub mod loader;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use loader::populate_from_csv;
pub use model::{Breed, BreedFilter};
pub use routes::{breed_routes, common_routes, common_routes_with_ready};
pub use service::{validate_breed, BreedService};
pub use state::AppState;
pub use store::{connect, ensure_breeds_table};
