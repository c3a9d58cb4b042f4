//! Form intake workflows for the marketing site.
//!
//! Each workflow validates a submission, sends the operator notification as a required
//! step, then runs its best-effort steps (confirmation mail, lead-sheet append) and
//! records any failure on the returned [`SubmissionReceipt`].

pub mod careers;
pub mod contact;
pub mod delivery;
pub mod ledger;
pub mod receipt;
pub mod reply;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

pub use receipt::{SoftFailure, SoftStep, SubmissionReceipt};
pub use reply::MessageBody;
pub use templates::{EmailTemplates, TemplateError};
