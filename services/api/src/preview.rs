use chrono::Utc;
use clap::{Args, ValueEnum};
use inquiry_relay::error::AppError;
use inquiry_relay::workflows::careers::JobApplication;
use inquiry_relay::workflows::contact::{ContactInquiry, Interest};
use inquiry_relay::workflows::EmailTemplates;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PreviewKind {
    /// Operator notification for a contact inquiry
    Contact,
    /// Operator notification for a job application
    Application,
    /// Thank-you email sent to the applicant
    Confirmation,
}

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// Which email to render
    #[arg(value_enum)]
    kind: PreviewKind,
    /// Job title used by the application samples
    #[arg(long, default_value = "Research Intern")]
    job_title: String,
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let templates = EmailTemplates::new()?;
    let (subject, html) = render(&templates, &args)?;
    println!("Subject: {subject}\n");
    println!("{html}");
    Ok(())
}

fn render(templates: &EmailTemplates, args: &PreviewArgs) -> Result<(String, String), AppError> {
    let application = sample_application(&args.job_title);
    let rendered = match args.kind {
        PreviewKind::Contact => {
            let inquiry = sample_inquiry();
            (
                inquiry.subject_line(),
                templates.contact_notification(&inquiry, Utc::now())?,
            )
        }
        PreviewKind::Application => (
            application.notification_subject(),
            templates.application_notification(&application, true, Utc::now())?,
        ),
        PreviewKind::Confirmation => (
            application.confirmation_subject(),
            templates.application_confirmation(&application)?,
        ),
    };
    Ok(rendered)
}

fn sample_inquiry() -> ContactInquiry {
    ContactInquiry {
        name: "Jane Doe".to_string(),
        phone: "9876543210".to_string(),
        subject: "Quote request".to_string(),
        interest: Interest::WebApplication,
        message: "We need a storefront with subscription checkout.\nCan you send a quote?"
            .to_string(),
    }
}

fn sample_application(job_title: &str) -> JobApplication {
    JobApplication {
        name: "John Smith".to_string(),
        email: "john@example.com".to_string(),
        job_title: job_title.to_string(),
        phone: Some("+1 555 0100".to_string()),
        cover_letter: Some("I have shipped two Rust services to production.".to_string()),
        additional_links: Some("https://github.com/johnsmith".to_string()),
        resume: None,
    }
}
