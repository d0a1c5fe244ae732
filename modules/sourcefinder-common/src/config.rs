use std::env;

use tracing::info;

use crate::error::SourceFinderError;

const DEFAULT_PORT: u16 = 5000;

/// Web server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load the web config. Only `PORT` is read; the server always binds all interfaces.
    pub fn web_from_env() -> Result<Self, SourceFinderError> {
        dotenvy::dotenv().ok();

        let config = Self {
            web_host: "0.0.0.0".to_string(),
            web_port: parse_port(env::var("PORT").ok().as_deref())?,
        };

        info!(host = config.web_host.as_str(), port = config.web_port, "Loaded web config");
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, SourceFinderError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| SourceFinderError::Config(format!("PORT must be a number, got {value:?}"))),
    }
}
