use chrono::Datelike;
use folio_core_contact_contracts::{ContactService, ContactSubmitError, ContactSubmitRequest};
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddress};
use folio_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use folio_shared_contracts::{id::IdService, time::TimeService};
use folio_templates_contracts::{ContactNotificationTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Db, ContactRepo, Time, Id, Email, Template> {
    db: Db,
    contact_repo: ContactRepo,
    time: Time,
    id: Id,
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Address the notification email is sent to.
    pub recipient: EmailAddress,
}

impl<Db, ContactRepo, Time, Id, Email, Template>
    ContactServiceImpl<Db, ContactRepo, Time, Id, Email, Template>
{
    pub fn new(
        db: Db,
        contact_repo: ContactRepo,
        time: Time,
        id: Id,
        email: Email,
        template: Template,
        config: ContactServiceConfig,
    ) -> Self {
        Self {
            db,
            contact_repo,
            time,
            id,
            email,
            template,
            config,
        }
    }
}

impl<Db, ContactRepo, Time, Id, EmailS, Template> ContactService
    for ContactServiceImpl<Db, ContactRepo, Time, Id, EmailS, Template>
where
    Db: Database,
    ContactRepo: ContactRepository<Db::Transaction>,
    Time: TimeService,
    Id: IdService,
    EmailS: EmailService,
    Template: TemplateService,
{
    #[tracing::instrument(skip(self, request))]
    async fn submit(&self, request: ContactSubmitRequest) -> Result<(), ContactSubmitError> {
        let submission = ContactSubmission {
            id: self.id.generate(),
            name: request.name,
            email: request.email,
            message: request.message,
            created_at: self.time.now(),
        };

        // The row must be durable before the notification goes out. A
        // dispatch failure after the commit leaves the row in place.
        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .create(&mut txn, &submission)
            .await
            .map_err(ContactSubmitError::Persist)?;
        txn.commit().await.map_err(ContactSubmitError::Persist)?;

        let body = self.template.render(&ContactNotificationTemplate {
            name: (*submission.name).clone(),
            email: submission.email.as_str().into(),
            message: (*submission.message).clone(),
            submitted_at: submission.created_at.format("%d/%m/%Y %H:%M").to_string(),
            year: submission.created_at.year(),
        })?;

        let email = Email {
            recipient: self.config.recipient.clone().into(),
            subject: "New Contact Form Submission".into(),
            body,
            content_type: ContentType::Html,
            reply_to: Some(submission.email.with_name((*submission.name).clone())),
        };

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Dispatch);
        }

        Ok(())
    }
}
