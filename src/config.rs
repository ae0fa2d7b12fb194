use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Default gate password. The gate is cosmetic (see `Config::gate_password`),
/// so shipping a literal default mirrors the deployed behavior.
const DEFAULT_GATE_PASSWORD: &str = "Shunnani@2025";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub data_dir: String,
    /// Compared verbatim against `POST /session` bodies. This is a cosmetic
    /// gate, not a security boundary: the password ships in client code and
    /// nothing server-side is protected by it.
    pub gate_password: String,
    /// Enables dangerous operations like purge. Must never be true in production.
    pub test_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            data_dir: "./data".to_string(),
            gate_password: DEFAULT_GATE_PASSWORD.to_string(),
            test_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let gate_password = std::env::var("GATE_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_GATE_PASSWORD.to_string());

        let test_mode = std::env::var("TEST_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let config = Config {
            bind_address,
            data_dir,
            gate_password,
            test_mode,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::ValidationError(
                "BIND_ADDRESS cannot be empty".to_string(),
            ));
        }

        if self.gate_password.is_empty() {
            return Err(ConfigError::ValidationError(
                "GATE_PASSWORD cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
