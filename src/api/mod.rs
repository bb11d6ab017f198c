//! HTTP API module: routes, handlers, and the CORS policy layer.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
