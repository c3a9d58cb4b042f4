pub mod sheets;

use async_trait::async_trait;
use serde::Serialize;

pub use sheets::{GoogleSheetsAppender, ServiceAccount};

/// Placeholder written for optional columns the applicant left blank.
pub const NOT_PROVIDED: &str = "N/A";

/// Spreadsheet id plus the A1 range whose columns a row is appended under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetTarget {
    pub spreadsheet_id: String,
    pub range: String,
}

impl SheetTarget {
    pub fn new(spreadsheet_id: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
        }
    }
}

/// Ordered cell values matching the target range's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadsheetRow(pub Vec<String>);

impl SpreadsheetRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Cells as they must be sent under `USER_ENTERED`: any value Sheets would parse as a
    /// formula, number or date is pinned to text with a leading apostrophe, which Sheets
    /// strips on display.
    pub fn literal_cells(&self) -> Vec<String> {
        self.0.iter().map(|cell| literal_cell(cell)).collect()
    }
}

fn literal_cell(cell: &str) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\'' | '\t' | '\r') => format!("'{cell}"),
        Some(first) if first.is_ascii_digit() => format!("'{cell}"),
        _ => cell.to_string(),
    }
}

impl<S: Into<String>> FromIterator<S> for SpreadsheetRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Returns the trimmed value, or `N/A` when absent or blank.
pub fn or_not_provided(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

/// Lead-tracking sink; one call appends exactly one row.
#[async_trait]
pub trait RowAppender: Send + Sync {
    async fn append(&self, target: &SheetTarget, row: SpreadsheetRow) -> Result<(), AppendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    #[error("invalid service account: {0}")]
    Credentials(String),
    #[error("sheets append failed: {0}")]
    Backend(String),
}
