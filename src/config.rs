//! Runtime configuration read from the environment (and `.env`).

use std::env;

use dotenvy::dotenv;
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin every API path is resolved against.
    pub base_url: Url,
    /// Externally issued bearer token.
    pub token: Option<String>,
    /// Send one `/health` request before the first real call.
    pub warm_up: bool,
    /// Secret for locally minted development tokens.
    pub dev_token_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            token: None,
            warm_up: true,
            dev_token_secret: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        let base_url = match get_env_opt("QUIZ_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => defaults.base_url,
        };

        Ok(Self {
            base_url,
            token: get_env_opt("QUIZ_API_TOKEN"),
            warm_up: get_env_parse("QUIZ_API_WARM_UP")?.unwrap_or(defaults.warm_up),
            dev_token_secret: get_env_opt("QUIZ_DEV_TOKEN_SECRET"),
        })
    }

    /// Replace the base URL, e.g. from a command line flag.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("Base URL {} cannot carry paths", raw)));
    }
    Ok(url)
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_opt(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert!(config.warm_up);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("https://example.org").is_ok());
        assert!(parse_base_url("  http://localhost:3000/api ").is_ok());
        assert!(matches!(parse_base_url("not a url"), Err(Error::Config(_))));
        assert!(matches!(parse_base_url("mailto:a@b.c"), Err(Error::Config(_))));
    }

    #[test]
    fn test_with_base_url_overrides() {
        let config = Config::default().with_base_url("http://10.0.0.1:9000").unwrap();
        assert_eq!(config.base_url.as_str(), "http://10.0.0.1:9000/");
    }
}
