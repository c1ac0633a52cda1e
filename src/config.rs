use thiserror::Error;

/// Build-time environment variable naming the hospital API base URL.
const API_URL_VAR: &str = "API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{API_URL_VAR} was not set at build time; rebuild with {API_URL_VAR} pointing at the hospital API")]
    MissingApiUrl,
}

/// Startup configuration. The base URL is the only knob the app has.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Resolves the API base URL baked into the WASM bundle at compile
    /// time. There is no runtime environment in the browser, so this is
    /// the moral equivalent of reading it from a `.env` on the server.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_raw(option_env!("API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Config {
                // Paths are joined with a leading slash, so a trailing one
                // here would produce `//api/login`.
                api_url: url.trim_end_matches('/').to_owned(),
            }),
            _ => Err(ConfigError::MissingApiUrl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_url_is_an_error() {
        assert!(Config::from_raw(None).is_err());
        assert!(Config::from_raw(Some("")).is_err());
        assert!(Config::from_raw(Some("   ")).is_err());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::from_raw(Some("http://localhost:5000/")).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
    }
}
