use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://assignments.db?mode=rwc".to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let database_min_connections = lookup("DATABASE_MIN_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8888".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| "assignment-service".to_string());

        let metrics_port = match lookup("METRICS_PORT") {
            Some(port) => Some(port.parse().map_err(|_| ConfigError::InvalidMetricsPort)?),
            None => None,
        };

        Ok(Config {
            database_url,
            database_max_connections,
            database_min_connections,
            server_host,
            server_port,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid metrics port number")]
    InvalidMetricsPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, "sqlite://assignments.db?mode=rwc");
        assert_eq!(config.server_port, 8888);
        assert_eq!(config.service_name, "assignment-service");
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.database_min_connections, 5);
        assert!(config.metrics_port.is_none());
        assert!(config.otel_exporter_endpoint.is_none());
        assert_eq!(config.server_address(), "0.0.0.0:8888");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9090"),
            ("METRICS_PORT", "9100"),
            ("SERVICE_NAME", "assignments"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:9090");
        assert_eq!(config.metrics_port, Some(9100));
        assert_eq!(config.service_name, "assignments");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::InvalidPort)));

        let result = Config::from_lookup(lookup_from(&[("METRICS_PORT", "70000")]));
        assert!(matches!(result, Err(ConfigError::InvalidMetricsPort)));
    }
}
