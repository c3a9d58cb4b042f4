use chrono::{DateTime, Utc};
use tera::{Context, Tera};

use super::careers::JobApplication;
use super::contact::ContactInquiry;
use super::ledger::NOT_PROVIDED;

const CONTACT_NOTIFICATION: &str = "contact_notification.html";
const APPLICATION_NOTIFICATION: &str = "application_notification.html";
const APPLICATION_CONFIRMATION: &str = "application_confirmation.html";

// `.html` names keep tera's autoescaping on; multi-line fields are escaped before
// `linebreaksbr` so only the inserted <br> tags survive.
const CONTACT_NOTIFICATION_SRC: &str = r#"<h2>New Contact Inquiry</h2>
<p><strong>Name:</strong> {{ name }}</p>
<p><strong>Phone:</strong> {{ phone }}</p>
<p><strong>Subject:</strong> {{ subject }}</p>
<p><strong>Interest:</strong> {{ interest }}</p>
<p><strong>Message:</strong></p>
<p>{{ message | escape | linebreaksbr | safe }}</p>
<hr>
<p><small>Received {{ received_at }}</small></p>
"#;

const APPLICATION_NOTIFICATION_SRC: &str = r#"<h2>New Job Application: {{ job_title }}</h2>
<p><strong>Name:</strong> {{ name }}</p>
<p><strong>Email:</strong> {{ email }}</p>
<p><strong>Phone:</strong> {{ phone }}</p>
<p><strong>Additional Links:</strong> {{ additional_links | escape | linebreaksbr | safe }}</p>
<p><strong>Cover Letter:</strong></p>
<p>{{ cover_letter | escape | linebreaksbr | safe }}</p>
<p><strong>Resume:</strong> {% if resume_attached %}attached{% else %}not provided{% endif %}</p>
<hr>
<p><small>Received {{ received_at }}</small></p>
"#;

const APPLICATION_CONFIRMATION_SRC: &str = r#"<p>Hi {{ name }},</p>
<p>Thank you for applying for the <strong>{{ job_title }}</strong> position. We have received your application and our team will review it shortly.</p>
<p>If your experience matches what we are looking for, we will reach out to discuss next steps.</p>
<p>Best regards,<br>The Hiring Team</p>
"#;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to load email templates: {0}")]
    Load(#[source] tera::Error),
    #[error("failed to render {template}: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: tera::Error,
    },
}

/// Compiled HTML bodies for every outbound notification.
#[derive(Debug)]
pub struct EmailTemplates {
    tera: Tera,
}

impl EmailTemplates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (CONTACT_NOTIFICATION, CONTACT_NOTIFICATION_SRC),
            (APPLICATION_NOTIFICATION, APPLICATION_NOTIFICATION_SRC),
            (APPLICATION_CONFIRMATION, APPLICATION_CONFIRMATION_SRC),
        ])
        .map_err(TemplateError::Load)?;
        Ok(Self { tera })
    }

    pub fn contact_notification(
        &self,
        inquiry: &ContactInquiry,
        received_at: DateTime<Utc>,
    ) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("name", &inquiry.name);
        context.insert("phone", &inquiry.phone);
        context.insert("subject", &inquiry.subject);
        context.insert("interest", inquiry.interest.label());
        context.insert("message", &inquiry.message);
        context.insert("received_at", &timestamp(received_at));
        self.render(CONTACT_NOTIFICATION, &context)
    }

    pub fn application_notification(
        &self,
        application: &JobApplication,
        resume_attached: bool,
        received_at: DateTime<Utc>,
    ) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("job_title", &application.job_title);
        context.insert("name", &application.name);
        context.insert("email", &application.email);
        context.insert("phone", or_placeholder(&application.phone));
        context.insert(
            "additional_links",
            or_placeholder(&application.additional_links),
        );
        context.insert("cover_letter", or_placeholder(&application.cover_letter));
        context.insert("resume_attached", &resume_attached);
        context.insert("received_at", &timestamp(received_at));
        self.render(APPLICATION_NOTIFICATION, &context)
    }

    pub fn application_confirmation(
        &self,
        application: &JobApplication,
    ) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("name", &application.name);
        context.insert("job_title", &application.job_title);
        self.render(APPLICATION_CONFIRMATION, &context)
    }

    fn render(&self, template: &'static str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template, context)
            .map_err(|source| TemplateError::Render { template, source })
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
