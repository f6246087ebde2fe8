/// Session credentials and their persistent storage
pub mod auth;
/// Authenticated request gateway
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the bookmark and notification services
pub mod services;
