pub mod config;
pub mod openapi;
pub mod routes;
pub mod types;
