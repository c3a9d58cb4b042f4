//! Contact form: operator notification plus a row in the contact lead sheet.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ContactInquiry, ContactSubmission, InquiryRejection, Interest};
pub use router::{contact_router, CONTACT_ACCEPTED, CONTACT_FAILED, CONTACT_PATH};
pub use service::{ContactError, ContactService};
