use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, GenreMatch};

/// Loads the application configuration from the process environment.
///
/// This function is the primary entry point for this crate. Every setting has
/// a default, so an empty environment yields a working local configuration;
/// environment variables (`PORT`, `DB_HOST`, `DB_PORT`, `DB_USER`,
/// `DB_PASSWORD`, `DB_SCHEMA`, `GENRE_MATCH`) override the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .set_default("port", 3000_i64)?
        .set_default("db_host", "localhost")?
        .set_default("db_port", 3306_i64)?
        .set_default("db_user", "root")?
        .set_default("db_password", "changeit")?
        .set_default("db_schema", "leisure")?
        .set_default("genre_match", "exact")?
        .add_source(config::Environment::default())
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
