//! HTTP surface of AuthGate: actix-web app factory, middleware, routes and
//! the mapping from domain errors to JSON responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
