use std::env;

use crate::error::AppError;

/// Address the HTTP server binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `CROUPIER_HOST` (default 0.0.0.0) and `CROUPIER_PORT` (default 3000).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("CROUPIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("CROUPIER_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("CROUPIER_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3000,
        };
        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::ServerConfig;

    #[test]
    #[serial]
    fn defaults() {
        env::remove_var("CROUPIER_HOST");
        env::remove_var("CROUPIER_PORT");
        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    #[serial]
    fn bad_port_is_config_error() {
        env::set_var("CROUPIER_PORT", "eighty");
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("CROUPIER_PORT"));
        env::remove_var("CROUPIER_PORT");
    }
}
