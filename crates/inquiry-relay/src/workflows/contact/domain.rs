use serde::{Deserialize, Serialize};

use crate::workflows::ledger::{or_not_provided, SpreadsheetRow};

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Raw contact form payload as posted by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub interest: String,
    pub message: String,
}

/// Service lines a visitor can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    ClothingSubscription,
    WebApplication,
    MobileApplication,
    CustomSoftware,
    PerformanceMarketing,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::ClothingSubscription,
        Interest::WebApplication,
        Interest::MobileApplication,
        Interest::CustomSoftware,
        Interest::PerformanceMarketing,
        Interest::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::ClothingSubscription => "Clothing Subscription",
            Interest::WebApplication => "Web Application",
            Interest::MobileApplication => "Mobile Application",
            Interest::CustomSoftware => "Custom Software",
            Interest::PerformanceMarketing => "Performance Marketing",
            Interest::Other => "Other",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|interest| interest.label().eq_ignore_ascii_case(raw))
    }
}

/// Validated inquiry; every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub interest: Interest,
    pub message: String,
}

impl ContactInquiry {
    pub fn subject_line(&self) -> String {
        format!(
            "New Contact Inquiry: {} - {}",
            self.subject,
            self.interest.label()
        )
    }

    /// `[name, phone, subject, interest, message]`
    pub fn sheet_row(&self) -> SpreadsheetRow {
        SpreadsheetRow(vec![
            self.name.clone(),
            or_not_provided(Some(&self.phone)),
            self.subject.clone(),
            self.interest.label().to_string(),
            self.message.clone(),
        ])
    }
}

impl TryFrom<ContactSubmission> for ContactInquiry {
    type Error = InquiryRejection;

    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let name = required(submission.name, InquiryRejection::MissingName)?;
        let phone = submission.phone.trim().to_string();
        match phone_digits(&phone) {
            Some(count) if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&count) => {}
            _ => return Err(InquiryRejection::InvalidPhone),
        }
        let subject = required(submission.subject, InquiryRejection::MissingSubject)?;
        let interest = Interest::from_label(&submission.interest)
            .ok_or_else(|| InquiryRejection::UnknownInterest(submission.interest.clone()))?;
        let message = required(submission.message, InquiryRejection::MissingMessage)?;

        Ok(Self {
            name,
            phone,
            subject,
            interest,
            message,
        })
    }
}

fn required(value: String, rejection: InquiryRejection) -> Result<String, InquiryRejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(rejection)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Digit count of a phone number, or `None` if it holds anything besides digits and
/// the usual separators.
fn phone_digits(phone: &str) -> Option<usize> {
    let mut digits = 0;
    for ch in phone.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '+' | '-' | '(' | ')' | '.' => {}
            _ => return None,
        }
    }
    Some(digits)
}

/// Validation failures surfaced to the visitor with a 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryRejection {
    #[error("Name is required.")]
    MissingName,
    #[error("Phone number must contain 10 to 15 digits.")]
    InvalidPhone,
    #[error("Subject is required.")]
    MissingSubject,
    #[error("Please choose a valid area of interest.")]
    UnknownInterest(String),
    #[error("Message is required.")]
    MissingMessage,
}
