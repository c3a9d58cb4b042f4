//! Careers form: multipart intake, resume attachment, applicant confirmation and the
//! careers lead sheet.

pub mod domain;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationForm, ApplicationRejection, JobApplication, ResumeUpload};
pub use intake::read_application_form;
pub use router::{careers_router, APPLICATION_ACCEPTED, APPLICATION_FAILED, APPLY_PATH};
pub use service::{ApplicationError, CareersService};
