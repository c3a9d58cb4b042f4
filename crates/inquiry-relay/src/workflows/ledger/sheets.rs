use async_trait::async_trait;
use google_sheets4::api::{Scope, ValueRange};
use google_sheets4::hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use google_sheets4::hyper_util::client::legacy::connect::HttpConnector;
use google_sheets4::hyper_util::client::legacy::Client;
use google_sheets4::hyper_util::rt::TokioExecutor;
use google_sheets4::yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};
use google_sheets4::Sheets;
use serde_json::json;

use super::{AppendError, RowAppender, SheetTarget, SpreadsheetRow};

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";
const INSERT_DATA_OPTION: &str = "INSERT_ROWS";

/// Service-account identity used to write to the lead sheets.
#[derive(Clone)]
pub struct ServiceAccount {
    pub client_email: String,
    pub private_key: String,
}

impl ServiceAccount {
    fn key(&self) -> Result<ServiceAccountKey, AppendError> {
        serde_json::from_value(json!({
            "type": "service_account",
            "client_email": self.client_email,
            "private_key": self.private_key,
            "token_uri": TOKEN_URI,
        }))
        .map_err(|err| AppendError::Credentials(err.to_string()))
    }
}

/// Thin wrapper around the generated google-sheets4 hub.
pub struct GoogleSheetsAppender<C>
where
    C: google_sheets4::common::Connector + Send + Sync + 'static,
{
    hub: Sheets<C>,
}

impl<C> GoogleSheetsAppender<C>
where
    C: google_sheets4::common::Connector + Send + Sync + 'static,
{
    pub fn new(hub: Sheets<C>) -> Self {
        Self { hub }
    }

    fn map_error<E: std::fmt::Display>(err: E) -> AppendError {
        AppendError::Backend(err.to_string())
    }
}

impl GoogleSheetsAppender<HttpsConnector<HttpConnector>> {
    /// Build a hub authenticated as the service account. Tokens are fetched lazily.
    pub async fn connect(account: &ServiceAccount) -> Result<Self, AppendError> {
        let key = account.key()?;
        let auth = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|err| AppendError::Credentials(err.to_string()))?;

        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|err| AppendError::Backend(err.to_string()))?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self::new(Sheets::new(client, auth)))
    }
}

impl<C> std::fmt::Debug for GoogleSheetsAppender<C>
where
    C: google_sheets4::common::Connector + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSheetsAppender").finish_non_exhaustive()
    }
}

#[async_trait]
impl<C> RowAppender for GoogleSheetsAppender<C>
where
    C: google_sheets4::common::Connector + Send + Sync + 'static,
{
    async fn append(&self, target: &SheetTarget, row: SpreadsheetRow) -> Result<(), AppendError> {
        let request = ValueRange {
            values: Some(vec![row
                .literal_cells()
                .into_iter()
                .map(serde_json::Value::String)
                .collect()]),
            ..ValueRange::default()
        };

        self.hub
            .spreadsheets()
            .values_append(request, &target.spreadsheet_id, &target.range)
            .value_input_option(VALUE_INPUT_OPTION)
            .insert_data_option(INSERT_DATA_OPTION)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(GoogleSheetsAppender::<C>::map_error)?;
        Ok(())
    }
}
