// Identity Source Module
// Access to the certificate-transparency database that backs crt.sh

pub mod config;
pub mod crtsh;
pub mod traits;

pub use config::{Config, SourceConfig, SslMode};
pub use crtsh::CrtShSource;
pub use traits::IdentitySource;
