use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// JSON body shared by every form endpoint: `{ "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub(crate) fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = MessageBody {
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

/// Status for a body the extractor could not read: 413 stays 413, the rest becomes 400.
pub(crate) fn unreadable_body(status: StatusCode) -> Response {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        message_response(status, "Request body is too large.")
    } else {
        message_response(StatusCode::BAD_REQUEST, "Invalid request body.")
    }
}
