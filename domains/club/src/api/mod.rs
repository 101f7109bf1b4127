//! API layer: handlers, routes, and shared state

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ClubState;
pub use routes::routes;
