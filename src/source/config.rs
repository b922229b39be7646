// Identity Source Configuration
// Connection and query settings for the crt.sh certwatch database

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Upper bound on identities taken from one lookup
pub const DEFAULT_ROW_LIMIT: i64 = 1_000_000;

/// TLS requirement for the database connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    Disable,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl std::str::FromStr for SslMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCa),
            "verify-full" => Ok(Self::VerifyFull),
            other => Err(SearchError::Config {
                message: format!("Unknown sslmode: {}", other),
            }),
        }
    }
}

/// Identity source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub sslmode: SslMode,
    pub connect_timeout_secs: u64,
    pub query_timeout_secs: u64,
    pub row_limit: i64,
}

/// Full configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

impl SourceConfig {
    /// `host:port` label used in logs and errors
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Reject settings that could never produce a useful lookup
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.host.is_empty() {
            return Err(SearchError::Config {
                message: "Missing source host".to_string(),
            });
        }
        if self.database.is_empty() {
            return Err(SearchError::Config {
                message: "Missing database name".to_string(),
            });
        }
        if self.row_limit <= 0 {
            return Err(SearchError::Config {
                message: format!("row_limit must be positive (got {})", self.row_limit),
            });
        }
        if self.connect_timeout_secs == 0 || self.query_timeout_secs == 0 {
            return Err(SearchError::Config {
                message: "Timeouts must be at least one second".to_string(),
            });
        }
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("Failed to read config {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.source.validate()?;

        Ok(config.source)
    }

    /// Create example configuration file
    pub fn create_example_config(path: &Path) -> crate::error::Result<()> {
        let example = r#"[source]
# Public crt.sh certwatch replica
host = "crt.sh"
port = 5432
database = "certwatch"
username = "guest"
# password = ""

# One of: disable, prefer, require, verify-ca, verify-full
sslmode = "require"

connect_timeout_secs = 10
query_timeout_secs = 600

# Upper bound on identities returned by a single lookup
row_limit = 1000000
"#;

        std::fs::write(path, example).map_err(|e| SearchError::Config {
            message: format!("Failed to write config {}: {}", path.display(), e),
        })?;

        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: "crt.sh".to_string(),
            port: 5432,
            database: "certwatch".to_string(),
            username: "guest".to_string(),
            password: None,
            sslmode: SslMode::Require,
            connect_timeout_secs: 10,
            query_timeout_secs: 600,
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }
}
