use std::{net::IpAddr, path::PathBuf};

use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_core_health_contracts::HealthService;
use folio_core_resume_contracts::ResumeService;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Resume> {
    health: Health,
    contact: Contact,
    resume: Resume,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Directory the uploaded resume is served from at `/resume`.
    pub resume_dir: PathBuf,
}

impl<Health, Contact, Resume> RestServer<Health, Contact, Resume>
where
    Health: HealthService,
    Contact: ContactService,
    Resume: ResumeService,
{
    pub fn new(health: Health, contact: Contact, resume: Resume, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            resume,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::resume::router(self.resume.into()))
            .nest_service("/resume", ServeDir::new(&self.config.resume_dir));

        // request_id must sit outside trace so the span can pick the id up;
        // the panic handler wraps everything.
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}
