use std::env;

use anyhow::Context;

use crate::profile::ServiceProfile;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env(profile: &ServiceProfile) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to the profile defaults.
    pub fn from_lookup<F>(profile: &ServiceProfile, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => profile.default_port,
        };

        Ok(Self {
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            otel_service_name: lookup("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| profile.slug.to_string()),
            otel_exporter_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|| "http://localhost:4317".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
