// crt.sh Identity Source
// Queries the certwatch PostgreSQL database with sqlx

use super::config::{SourceConfig, SslMode};
use super::traits::IdentitySource;
use crate::error::{Result, SearchError};
use crate::security::ValidDomain;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info};

/// X.520 commonName attribute type as stored in `NAME_TYPE`
pub const COMMON_NAME_OID: &str = "2.5.4.3";

/// Common-name lookup.
///
/// `$1` is the domain and `$2` the row limit. The full-text predicate narrows
/// by certificate identities and the ILIKE keeps only values that actually
/// contain the domain; neither alone gives the right set.
pub const IDENTITY_QUERY: &str = r#"
SELECT cai.NAME_VALUE
FROM certificate_and_identities cai
WHERE plainto_tsquery('certwatch', $1) @@ identities(cai.CERTIFICATE)
  AND cai.NAME_VALUE ILIKE ('%' || $1 || '%')
  AND cai.NAME_TYPE = '2.5.4.3'
LIMIT $2
"#;

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

/// Identity source backed by the public crt.sh database
pub struct CrtShSource {
    config: SourceConfig,
}

impl CrtShSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.username)
            .database(&self.config.database)
            .ssl_mode(self.config.sslmode.into())
            .application_name("crtsearch")
            // crt.sh sits behind a pooler that does not keep named statements
            .statement_cache_capacity(0);

        match &self.config.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// Open one connection, bounded by the configured connect timeout
    async fn connect(&self) -> Result<PgConnection> {
        let endpoint = self.config.endpoint();
        let timeout = self.config.connect_timeout();

        debug!("Connecting to {} (timeout {:?})", endpoint, timeout);

        let options = self.connect_options();
        match tokio::time::timeout(timeout, options.connect()).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(SearchError::Connectivity {
                endpoint,
                details: e.to_string(),
            }),
            Err(_) => Err(SearchError::ConnectTimeout {
                endpoint,
                duration: timeout,
            }),
        }
    }
}

#[async_trait]
impl IdentitySource for CrtShSource {
    async fn check_connectivity(&self) -> Result<()> {
        let mut conn = self.connect().await?;

        conn.ping().await.map_err(|e| SearchError::Connectivity {
            endpoint: self.config.endpoint(),
            details: e.to_string(),
        })?;

        // A failed close only loses the goodbye message
        let _ = conn.close().await;
        debug!("Connectivity check to {} passed", self.config.endpoint());
        Ok(())
    }

    async fn fetch_identities(&self, domain: &ValidDomain) -> Result<Vec<String>> {
        let mut conn = self.connect().await?;
        let timeout = self.config.query_timeout();

        info!(
            "Querying {} for {} identities of {}",
            self.config.endpoint(),
            COMMON_NAME_OID,
            domain
        );

        let query = sqlx::query_scalar::<_, Option<String>>(IDENTITY_QUERY)
            .bind(domain.as_str())
            .bind(self.config.row_limit)
            .fetch_all(&mut conn);

        let rows = match tokio::time::timeout(timeout, query).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                return Err(SearchError::Source {
                    details: e.to_string(),
                });
            }
            Err(_) => return Err(SearchError::QueryTimeout { duration: timeout }),
        };

        let _ = conn.close().await;

        let limit = usize::try_from(self.config.row_limit).unwrap_or(usize::MAX);
        let identities: Vec<String> = rows
            .into_iter()
            .take(limit)
            .map(Option::unwrap_or_default)
            .collect();

        debug!("Fetched {} raw identities", identities.len());
        Ok(identities)
    }

    fn describe(&self) -> String {
        format!(
            "postgres://{}@{}/{}",
            self.config.username,
            self.config.endpoint(),
            self.config.database
        )
    }
}
