/// Database configuration and connection management
pub mod database;

/// Business settings loading from config.toml
pub mod settings;
