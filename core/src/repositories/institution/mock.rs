//! In-memory InstitutionDirectory for tests

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::DomainResult;

use super::r#trait::InstitutionDirectory;

/// Fixed university -> domain table
#[derive(Clone, Default)]
pub struct MockInstitutionDirectory {
    domains: HashMap<String, String>,
}

impl MockInstitutionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, univ_name: &str, domain: &str) -> Self {
        self.domains
            .insert(univ_name.to_string(), domain.to_lowercase());
        self
    }
}

#[async_trait]
impl InstitutionDirectory for MockInstitutionDirectory {
    async fn find_email_domain(&self, univ_name: &str) -> DomainResult<Option<String>> {
        Ok(self.domains.get(univ_name).cloned())
    }

    async fn is_approved_domain(&self, domain: &str) -> DomainResult<bool> {
        Ok(self.domains.values().any(|d| d == domain))
    }
}
