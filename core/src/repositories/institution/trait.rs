//! Directory of universities and their approved e-mail domains.

use async_trait::async_trait;

use crate::errors::DomainResult;

#[async_trait]
pub trait InstitutionDirectory: Send + Sync {
    /// E-mail domain registered for `univ_name`, lowercase
    async fn find_email_domain(&self, univ_name: &str) -> DomainResult<Option<String>>;

    /// Whether `domain` belongs to any listed university (exact, lowercase match)
    async fn is_approved_domain(&self, domain: &str) -> DomainResult<bool>;
}
