use crate::core::errors::ConfigError;
use dotenv::dotenv;
use std::env;
use std::net::IpAddr;

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub supabase_url: String,
    pub supabase_key: String,
    pub log_level: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. Store credentials are
    /// trimmed and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingStoreCredentials)
        };
        let supabase_url = required("SUPABASE_URL")?;
        let supabase_key = required("SUPABASE_KEY")?;

        let host: IpAddr = match lookup("HOST") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HOST", v.clone()))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT", v.clone()))?,
            None => 8000,
        };

        Ok(Self {
            host,
            port,
            supabase_url,
            supabase_key,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_and_trimming() {
        let config = Config::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "  https://project.supabase.co \n"),
            ("SUPABASE_KEY", " key "),
        ]))
        .unwrap();
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.supabase_key, "key");
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_key_refuses_to_start() {
        let result = Config::from_lookup(lookup_from(&[("SUPABASE_URL", "https://project.supabase.co")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingStoreCredentials);
    }

    #[test]
    fn test_blank_url_refuses_to_start() {
        let result = Config::from_lookup(lookup_from(&[("SUPABASE_URL", "   "), ("SUPABASE_KEY", "key")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingStoreCredentials);
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "key"),
            ("PORT", "eighty"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue("PORT", "eighty".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "super-secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(config.port, 9000);
    }
}
