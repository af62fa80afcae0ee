pub mod app;
pub mod config;
pub mod extractors;
pub mod handlers;
