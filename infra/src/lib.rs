//! # Infrastructure Layer
//!
//! Concrete implementations of the MentorConnect core traits:
//!
//! - **Database**: MySQL repositories using SQLx, with status changes written
//!   as compare-and-swap updates
//! - **Cache**: Redis and in-memory verification code stores
//! - **SMS / Mail**: HTTP provider clients and mocks, adapted to the core
//!   `NotificationGateway` contract
//! - **Logging**: `tracing-subscriber` bootstrap
//!
//! [`initialize`] wires everything from an [`AppConfig`] and hands out ready
//! core services.

use std::sync::Arc;

use mc_core::errors::DomainError;
use mc_core::services::appointment::AppointmentService;
use mc_core::services::housekeeping::RegistrationSweeper;
use mc_core::services::notification::NotificationMessages;
use mc_core::services::verification::{
    IdentityVerificationFlow, PhonePolicy, UniversityEmailPolicy, VerificationFlowConfig,
};
use mc_shared::AppConfig;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - verification code stores
pub mod cache;

/// SMS service module - external SMS providers
pub mod sms;

/// Mail service module - external e-mail providers
pub mod mail;

/// Adapters from SMS/mail services to the core notification contract
pub mod notification;

/// Tracing subscriber setup
pub mod logging;

/// Configuration module for infrastructure services
pub mod config {
    //! Re-exports of the shared configuration sections used here

    pub use mc_shared::config::{
        AppConfig, CacheConfig, DatabaseConfig, HousekeepingConfig, LoggingConfig,
        MailProviderConfig, NotificationConfig, SmsProviderConfig, StoreBackend,
        VerificationConfig,
    };
}

use cache::VerificationStoreBackend;
use database::{
    DatabasePool, MySqlAppointmentRepository, MySqlInstitutionDirectory, MySqlMemberRepository,
};
use notification::{MailNotificationGateway, SmsNotificationGateway};

/// Appointment lifecycle wired to MySQL and SMS
pub type AppAppointmentService =
    AppointmentService<MySqlAppointmentRepository, MySqlMemberRepository, SmsNotificationGateway>;

/// Phone verification wired to the configured store and SMS
pub type PhoneVerificationFlow = IdentityVerificationFlow<
    PhonePolicy<MySqlMemberRepository>,
    VerificationStoreBackend,
    SmsNotificationGateway,
>;

/// University e-mail verification wired to the configured store and mail
pub type UniversityVerificationFlow = IdentityVerificationFlow<
    UniversityEmailPolicy<MySqlInstitutionDirectory>,
    VerificationStoreBackend,
    MailNotificationGateway,
>;

/// Infrastructure service container
///
/// Holds the shared connections; the builders hand out core services that
/// share them.
#[derive(Clone)]
pub struct InfrastructureServices {
    pub database: DatabasePool,
    pub code_store: Arc<VerificationStoreBackend>,
    pub sms: Arc<SmsNotificationGateway>,
    pub mail: Arc<MailNotificationGateway>,
    pub config: AppConfig,
}

impl InfrastructureServices {
    fn messages(&self) -> NotificationMessages {
        NotificationMessages::new(self.config.notification.sender_tag.clone())
    }

    fn members(&self) -> Arc<MySqlMemberRepository> {
        Arc::new(MySqlMemberRepository::new(self.database.get_pool().clone()))
    }

    pub fn appointment_service(&self) -> AppAppointmentService {
        AppointmentService::new(
            Arc::new(MySqlAppointmentRepository::new(self.database.get_pool().clone())),
            self.members(),
            self.sms.clone(),
            self.messages(),
        )
    }

    pub fn phone_verification(&self) -> Result<PhoneVerificationFlow, InfrastructureError> {
        let policy = PhonePolicy::new(self.members(), &self.config.verification.phone_pattern)
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;

        Ok(IdentityVerificationFlow::new(
            policy,
            self.code_store.clone(),
            self.sms.clone(),
            VerificationFlowConfig::from(&self.config.verification),
            self.messages(),
        ))
    }

    pub fn university_verification(&self) -> UniversityVerificationFlow {
        let directory = Arc::new(MySqlInstitutionDirectory::new(self.database.get_pool().clone()));

        IdentityVerificationFlow::new(
            UniversityEmailPolicy::new(directory),
            self.code_store.clone(),
            self.mail.clone(),
            VerificationFlowConfig::from(&self.config.verification),
            self.messages(),
        )
    }

    pub fn registration_sweeper(&self) -> RegistrationSweeper<MySqlMemberRepository> {
        RegistrationSweeper::new(self.members(), self.config.housekeeping.clone())
    }
}

/// Initialize infrastructure services
///
/// Sets up:
/// - Database connection pool
/// - Verification code store (Redis or memory, per configuration)
/// - SMS and mail gateways
pub async fn initialize(config: AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(environment = ?config.environment, "Initializing infrastructure services");

    let database = DatabasePool::new(config.database.clone()).await?;
    let code_store = Arc::new(
        VerificationStoreBackend::from_config(&config.verification, &config.cache).await?,
    );

    let sms = Arc::new(SmsNotificationGateway::new(sms::create_sms_service(
        &config.notification,
    )));
    let mail = Arc::new(MailNotificationGateway::new(
        mail::create_mail_service(&config.notification),
        config.notification.mail.subject.clone(),
    ));

    tracing::info!(
        sms_provider = sms.provider_name(),
        mail_provider = mail.provider_name(),
        store = code_store.backend_name(),
        "Infrastructure services initialized successfully"
    );

    Ok(InfrastructureServices {
        database,
        code_store,
        sms,
        mail,
        config,
    })
}

/// Load configuration from the environment, reading `.env` first if present
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
