//! Wiring of concrete service implementations.

use std::time::Duration;

use folio_api_rest::{RestServer, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_core_resume_impl::{ResumeServiceConfig, ResumeServiceImpl};
use folio_email_impl::EmailServiceImpl;
use folio_persistence_postgres::{contact::PostgresContactRepository, PostgresDatabase};
use folio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

pub type ContactService = ContactServiceImpl<
    PostgresDatabase,
    PostgresContactRepository,
    TimeServiceImpl,
    IdServiceImpl,
    EmailServiceImpl,
    TemplateServiceImpl,
>;

pub type HealthService = HealthServiceImpl<TimeServiceImpl, PostgresDatabase, EmailServiceImpl>;

pub type Server = RestServer<HealthService, ContactService, ResumeServiceImpl>;

pub fn build_server(
    config: &Config,
    database: PostgresDatabase,
    email: EmailServiceImpl,
) -> Server {
    let health = HealthServiceImpl::new(
        TimeServiceImpl,
        database.clone(),
        email.clone(),
        HealthServiceConfig {
            cache_ttl: Duration::from_secs(config.health.cache_ttl_secs),
        },
    );

    let contact = ContactServiceImpl::new(
        database,
        PostgresContactRepository,
        TimeServiceImpl,
        IdServiceImpl,
        email,
        TemplateServiceImpl::new(),
        ContactServiceConfig {
            recipient: config.contact.recipient.clone(),
        },
    );

    let resume = ResumeServiceImpl::new(ResumeServiceConfig {
        api_key: config.resume.api_key.clone(),
        upload_dir: config.resume.upload_dir.clone().into(),
        filename: config.resume.filename.clone(),
        max_bytes: config.resume.max_bytes,
    });

    RestServer::new(
        health,
        contact,
        resume,
        RestServerConfig {
            resume_dir: config.resume.upload_dir.clone().into(),
        },
    )
}
