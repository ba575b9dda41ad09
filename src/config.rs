use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Endpoint and auth configuration for the CMS, loaded from an
/// optional `config.toml` and `APP_*` environment variables.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub sale_url: String,
    pub rent_url: String,
    pub upload_url: String,
    pub auth_token: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
