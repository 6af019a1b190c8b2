pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod transport;
pub mod validation;
