use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::delivery::DeliveryError;
use crate::workflows::ledger::AppendError;
use crate::workflows::templates::TemplateError;
use std::fmt;

/// Startup and serving failures for the relay process.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Templates(TemplateError),
    Mail(DeliveryError),
    Sheets(AppendError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Templates(err) => write!(f, "template error: {}", err),
            AppError::Mail(err) => write!(f, "mail setup error: {}", err),
            AppError::Sheets(err) => write!(f, "sheets setup error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Templates(err) => Some(err),
            AppError::Mail(err) => Some(err),
            AppError::Sheets(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TemplateError> for AppError {
    fn from(value: TemplateError) -> Self {
        Self::Templates(value)
    }
}

impl From<DeliveryError> for AppError {
    fn from(value: DeliveryError) -> Self {
        Self::Mail(value)
    }
}

impl From<AppendError> for AppError {
    fn from(value: AppendError) -> Self {
        Self::Sheets(value)
    }
}
