pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod server;

// Application layer: use cases and collaborator ports
pub mod app;

// Infrastructure adapters for the ports
pub mod infra;
