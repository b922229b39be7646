// Identity Source Traits
// Narrow interface the collection pipeline uses to reach the CT database

use crate::error::Result;
use crate::security::ValidDomain;
use async_trait::async_trait;

/// Source of raw certificate common-name identities
#[async_trait]
pub trait IdentitySource: Send + Sync {
    /// Confirm the source can be reached and authenticated
    async fn check_connectivity(&self) -> Result<()>;

    /// Run the single parameterized lookup for `domain`
    ///
    /// The returned batch may contain duplicates and empty strings.
    async fn fetch_identities(&self, domain: &ValidDomain) -> Result<Vec<String>>;

    /// Human-readable label for logs
    fn describe(&self) -> String;
}
