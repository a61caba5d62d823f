use eyre::{Result, WrapErr};
use serde::Deserialize;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Origin of the department and user services, e.g. an API gateway.
    pub backend_url: Url,
}

impl Config {
    /// Read `console.toml` from the working directory if there is one, then
    /// apply `CONSOLE_*` environment overrides.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name("console").required(false),
            config::Environment::with_prefix("CONSOLE"),
        )
    }

    fn from_sources(
        file: impl config::Source + Send + Sync + 'static,
        env: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self> {
        config::Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .add_source(file)
            .add_source(env)
            .build()
            .wrap_err("failed to read configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("CONSOLE").source(Some(source))
    }

    fn toml(contents: &str) -> config::File<config::FileSourceString, config::FileFormat> {
        config::File::from_str(contents, config::FileFormat::Toml)
    }

    #[test]
    fn defaults_to_local_gateway() {
        let config = Config::from_sources(toml(""), env(&[])).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn file_then_env() {
        const FILE: &str = r#"backend_url = "http://gateway.internal:9000""#;

        let config = Config::from_sources(toml(FILE), env(&[])).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://gateway.internal:9000/");

        let config = Config::from_sources(
            toml(FILE),
            env(&[("CONSOLE_BACKEND_URL", "https://api.example.com")]),
        )
        .unwrap();
        assert_eq!(config.backend_url.as_str(), "https://api.example.com/");
    }

    #[test]
    fn rejects_bad_url() {
        let result = Config::from_sources(toml(r#"backend_url = "not a url""#), env(&[]));
        assert!(result.is_err());
    }
}
