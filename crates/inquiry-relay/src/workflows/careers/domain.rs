use email_address::EmailAddress;

use crate::workflows::delivery::EmailAttachment;
use crate::workflows::ledger::{or_not_provided, SpreadsheetRow};

/// Fields collected from the careers multipart form before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub cover_letter: Option<String>,
    pub additional_links: Option<String>,
    pub resume: Option<ResumeUpload>,
}

/// Uploaded resume, held in memory until it is attached to the notification.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    fn is_pdf(&self) -> bool {
        let declared = self
            .content_type
            .parse::<mime::Mime>()
            .map(|parsed| parsed.essence_str() == mime::APPLICATION_PDF.essence_str())
            .unwrap_or(false);
        declared || self.filename.to_ascii_lowercase().ends_with(".pdf")
    }
}

impl std::fmt::Debug for ResumeUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl From<ResumeUpload> for EmailAttachment {
    fn from(upload: ResumeUpload) -> Self {
        Self {
            filename: upload.filename,
            content: upload.bytes,
            content_type: upload.content_type,
        }
    }
}

/// Validated application. Name, email and job title are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub additional_links: Option<String>,
    pub resume: Option<ResumeUpload>,
}

impl JobApplication {
    pub fn notification_subject(&self) -> String {
        format!("New Job Application: {} - {}", self.job_title, self.name)
    }

    pub fn confirmation_subject(&self) -> String {
        format!("Application Received: {}", self.job_title)
    }

    /// `[jobTitle, name, email, phone, coverLetter, additionalLinks]`
    pub fn sheet_row(&self) -> SpreadsheetRow {
        SpreadsheetRow(vec![
            self.job_title.clone(),
            self.name.clone(),
            self.email.clone(),
            or_not_provided(self.phone.as_deref()),
            or_not_provided(self.cover_letter.as_deref()),
            or_not_provided(self.additional_links.as_deref()),
        ])
    }
}

impl TryFrom<ApplicationForm> for JobApplication {
    type Error = ApplicationRejection;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        let (name, email, job_title) = match (
            present(form.name),
            present(form.email),
            present(form.job_title),
        ) {
            (Some(name), Some(email), Some(job_title)) => (name, email, job_title),
            _ => return Err(ApplicationRejection::MissingRequired),
        };

        // The address becomes the notification's Reply-To, so lettre must accept it too.
        if !EmailAddress::is_valid(&email) || email.parse::<lettre::Address>().is_err() {
            return Err(ApplicationRejection::InvalidEmail);
        }

        if let Some(resume) = &form.resume {
            if !resume.is_pdf() {
                return Err(ApplicationRejection::ResumeNotPdf);
            }
        }

        Ok(Self {
            name,
            email,
            job_title,
            phone: present(form.phone),
            cover_letter: present(form.cover_letter),
            additional_links: present(form.additional_links),
            resume: form.resume,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Validation failures surfaced to the applicant with a 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationRejection {
    #[error("Name, Email, and Job Title are required.")]
    MissingRequired,
    #[error("A valid email address is required.")]
    InvalidEmail,
    #[error("Resume must be a PDF document.")]
    ResumeNotPdf,
}
