use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token signing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// An empty signing secret is rejected here: without it no token can be
    /// issued or validated, so the process refuses to start instead of
    /// serving requests that can only fail.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            // No prefix: a prefixed source would filter every variable out.
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must not be empty".to_string(),
            ));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/taskboard".to_string(),
            },
            server: ServerConfig { http_port: 0 },
            jwt: JwtConfig {
                secret: secret.to_string(),
            },
        }
    }

    #[test]
    fn test_empty_jwt_secret_is_rejected() {
        let result = base_config("").validated();
        assert!(result.is_err());
    }

    #[test]
    fn test_populated_jwt_secret_is_accepted() {
        let result = base_config("a_real_secret_at_least_32_bytes_long!").validated();
        assert!(result.is_ok());
    }

    #[test]
    fn test_environment_variables_override_file_values() {
        env::set_var("JWT__SECRET", "secret-from-environment-32-bytes!!");
        env::set_var("DATABASE__URL", "postgresql://env-host:5432/taskboard");
        env::set_var("SERVER__HTTP_PORT", "9999");

        let result = Config::load();

        env::remove_var("JWT__SECRET");
        env::remove_var("DATABASE__URL");
        env::remove_var("SERVER__HTTP_PORT");

        let config = result.expect("failed to load configuration");
        assert_eq!(config.jwt.secret, "secret-from-environment-32-bytes!!");
        assert_eq!(config.database.url, "postgresql://env-host:5432/taskboard");
        assert_eq!(config.server.http_port, 9999);
    }
}
