use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{DeliveryError, EmailAttachment, EmailSender, OutboundEmail};
use crate::config::MailConfig;

/// Delivers notifications through an authenticated SMTP relay (implicit TLS on 465).
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    pub fn from_config(config: &MailConfig) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|err| DeliveryError::Transport(err.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

impl std::fmt::Debug for SmtpEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailSender").finish_non_exhaustive()
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        let message = build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        Ok(())
    }
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse::<Mailbox>()
        .map_err(|err| DeliveryError::InvalidAddress {
            address: address.to_string(),
            reason: err.to_string(),
        })
}

fn attachment_part(attachment: EmailAttachment) -> Result<SinglePart, DeliveryError> {
    let content_type = ContentType::parse(&attachment.content_type)
        .map_err(|err| DeliveryError::Build(format!("{}: {err}", attachment.content_type)))?;
    Ok(Attachment::new(attachment.filename).body(attachment.content, content_type))
}

pub(crate) fn build_message(email: OutboundEmail) -> Result<Message, DeliveryError> {
    let OutboundEmail {
        from,
        to,
        reply_to,
        subject,
        html,
        attachments,
    } = email;

    let mut builder = Message::builder()
        .from(mailbox(&from)?)
        .to(mailbox(&to)?)
        .subject(subject);
    if let Some(reply_to) = reply_to {
        builder = builder.reply_to(mailbox(&reply_to)?);
    }

    let body = SinglePart::html(html);
    let message = if attachments.is_empty() {
        builder.singlepart(body)
    } else {
        let mut parts = MultiPart::mixed().singlepart(body);
        for attachment in attachments {
            parts = parts.singlepart(attachment_part(attachment)?);
        }
        builder.multipart(parts)
    };

    message.map_err(|err| DeliveryError::Build(err.to_string()))
}
