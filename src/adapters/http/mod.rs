pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use errors::ApiError;
pub use middleware::AuthMiddleware;
pub use routes::{RouteDependencies, configure_routes};
