//! MySQL implementation of the InstitutionDirectory trait, backed by the
//! `university_email` table.

use async_trait::async_trait;
use sqlx::MySqlPool;

use mc_core::errors::DomainResult;
use mc_core::repositories::InstitutionDirectory;

use super::db_error;

pub struct MySqlInstitutionDirectory {
    pool: MySqlPool,
}

impl MySqlInstitutionDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstitutionDirectory for MySqlInstitutionDirectory {
    async fn find_email_domain(&self, univ_name: &str) -> DomainResult<Option<String>> {
        let domain: Option<String> = sqlx::query_scalar(
            "SELECT email_domain FROM university_email WHERE univ_name = ? LIMIT 1",
        )
        .bind(univ_name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find university domain"))?;

        Ok(domain.map(|d| d.to_lowercase()))
    }

    async fn is_approved_domain(&self, domain: &str) -> DomainResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM university_email WHERE LOWER(email_domain) = ?) AS present",
        )
        .bind(domain.to_lowercase())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check university domain"))?;

        Ok(exists == 1)
    }
}
