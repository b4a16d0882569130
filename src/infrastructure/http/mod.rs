//! HTTP Layer - RESTful API

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use response::EnvelopeResponse;
pub use routes::create_routes;
pub use server::HttpServer;
pub use state::AppState;
