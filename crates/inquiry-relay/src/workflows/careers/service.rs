use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::domain::{ApplicationForm, ApplicationRejection, JobApplication};
use crate::workflows::delivery::{
    DeliveryError, EmailAttachment, EmailSender, MailRouting, OutboundEmail,
};
use crate::workflows::ledger::{RowAppender, SheetTarget};
use crate::workflows::receipt::{SoftStep, SubmissionReceipt};
use crate::workflows::templates::{EmailTemplates, TemplateError};

/// Relays job applications: operator notification with the resume attached, a
/// confirmation to the applicant, and a row in the careers lead sheet.
pub struct CareersService<E, S> {
    mailer: Arc<E>,
    sheet: Arc<S>,
    routing: MailRouting,
    target: SheetTarget,
    templates: Arc<EmailTemplates>,
}

impl<E, S> CareersService<E, S>
where
    E: EmailSender + 'static,
    S: RowAppender + 'static,
{
    pub fn new(
        mailer: Arc<E>,
        sheet: Arc<S>,
        routing: MailRouting,
        target: SheetTarget,
        templates: Arc<EmailTemplates>,
    ) -> Self {
        Self {
            mailer,
            sheet,
            routing,
            target,
            templates,
        }
    }

    pub async fn submit(
        &self,
        form: ApplicationForm,
    ) -> Result<SubmissionReceipt, ApplicationError> {
        let mut application = JobApplication::try_from(form)?;
        let received_at = Utc::now();

        let attachments: Vec<EmailAttachment> = application
            .resume
            .take()
            .map(EmailAttachment::from)
            .into_iter()
            .collect();
        let html = self.templates.application_notification(
            &application,
            !attachments.is_empty(),
            received_at,
        )?;

        let notification = OutboundEmail {
            from: self.routing.sender.clone(),
            to: self.routing.operator.clone(),
            reply_to: Some(application.email.clone()),
            subject: application.notification_subject(),
            html,
            attachments,
        };

        if let Err(err) = self.mailer.send(notification).await {
            error!(error = %err, job_title = %application.job_title, "application notification failed");
            return Err(ApplicationError::Delivery(err));
        }

        let mut receipt = SubmissionReceipt::new(received_at);
        receipt.best_effort(
            SoftStep::ConfirmationEmail,
            self.send_confirmation(&application).await,
        );
        receipt.best_effort(
            SoftStep::SheetAppend,
            self.sheet.append(&self.target, application.sheet_row()).await,
        );

        info!(
            job_title = %application.job_title,
            fully_recorded = receipt.fully_recorded(),
            "job application relayed"
        );
        Ok(receipt)
    }

    async fn send_confirmation(&self, application: &JobApplication) -> Result<(), ApplicationError> {
        let confirmation = OutboundEmail {
            from: self.routing.sender.clone(),
            to: application.email.clone(),
            reply_to: None,
            subject: application.confirmation_subject(),
            html: self.templates.application_confirmation(application)?,
            attachments: Vec::new(),
        };
        self.mailer.send(confirmation).await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] ApplicationRejection),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
