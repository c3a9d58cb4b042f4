use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::domain::{ContactInquiry, ContactSubmission, InquiryRejection};
use crate::workflows::delivery::{DeliveryError, EmailSender, MailRouting, OutboundEmail};
use crate::workflows::ledger::{RowAppender, SheetTarget};
use crate::workflows::receipt::{SoftStep, SubmissionReceipt};
use crate::workflows::templates::{EmailTemplates, TemplateError};

/// Relays contact inquiries to the operator inbox and the contact lead sheet.
pub struct ContactService<E, S> {
    mailer: Arc<E>,
    sheet: Arc<S>,
    routing: MailRouting,
    target: SheetTarget,
    templates: Arc<EmailTemplates>,
}

impl<E, S> ContactService<E, S>
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

    /// Validate, notify the operator, then log the lead.
    ///
    /// The notification is required: if it fails the sheet is never touched. The append
    /// is best-effort and only shows up in the receipt.
    pub async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ContactError> {
        let inquiry = ContactInquiry::try_from(submission)?;
        let received_at = Utc::now();

        let email = OutboundEmail {
            from: self.routing.sender.clone(),
            to: self.routing.operator.clone(),
            reply_to: None,
            subject: inquiry.subject_line(),
            html: self.templates.contact_notification(&inquiry, received_at)?,
            attachments: Vec::new(),
        };

        if let Err(err) = self.mailer.send(email).await {
            error!(error = %err, interest = inquiry.interest.label(), "contact notification failed");
            return Err(ContactError::Delivery(err));
        }

        let mut receipt = SubmissionReceipt::new(received_at);
        receipt.best_effort(
            SoftStep::SheetAppend,
            self.sheet.append(&self.target, inquiry.sheet_row()).await,
        );

        info!(
            interest = inquiry.interest.label(),
            fully_recorded = receipt.fully_recorded(),
            "contact inquiry relayed"
        );
        Ok(receipt)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Rejected(#[from] InquiryRejection),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
