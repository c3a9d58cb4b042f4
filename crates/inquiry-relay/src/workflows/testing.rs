use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::delivery::{DeliveryError, EmailSender, MailRouting, OutboundEmail};
use super::ledger::{AppendError, RowAppender, SheetTarget, SpreadsheetRow};
use super::templates::EmailTemplates;

pub(crate) const SENDER: &str = "forms@studio.example";
pub(crate) const OPERATOR: &str = "hello@studio.example";

pub(crate) fn routing() -> MailRouting {
    MailRouting {
        sender: SENDER.to_string(),
        operator: OPERATOR.to_string(),
    }
}

pub(crate) fn templates() -> Arc<EmailTemplates> {
    Arc::new(EmailTemplates::new().expect("templates compile"))
}

/// Records every message; optionally fails the n-th send (1-based).
#[derive(Default)]
pub(crate) struct MemoryMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    attempts: AtomicUsize,
    fail_on: Option<usize>,
}

impl MemoryMailer {
    pub(crate) fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Self::default()
        }
    }

    pub(crate) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for MemoryMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on == Some(attempt) {
            return Err(DeliveryError::Transport("relay refused".to_string()));
        }
        self.sent.lock().expect("mailer mutex poisoned").push(email);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemorySheet {
    rows: Mutex<Vec<(SheetTarget, SpreadsheetRow)>>,
}

impl MemorySheet {
    pub(crate) fn rows(&self) -> Vec<(SheetTarget, SpreadsheetRow)> {
        self.rows.lock().expect("sheet mutex poisoned").clone()
    }
}

#[async_trait]
impl RowAppender for MemorySheet {
    async fn append(&self, target: &SheetTarget, row: SpreadsheetRow) -> Result<(), AppendError> {
        self.rows
            .lock()
            .expect("sheet mutex poisoned")
            .push((target.clone(), row));
        Ok(())
    }
}

/// Counts calls but always fails.
#[derive(Default)]
pub(crate) struct FailingSheet {
    calls: AtomicUsize,
}

impl FailingSheet {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RowAppender for FailingSheet {
    async fn append(&self, _target: &SheetTarget, _row: SpreadsheetRow) -> Result<(), AppendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppendError::Backend("quota exceeded".to_string()))
    }
}

pub(crate) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
