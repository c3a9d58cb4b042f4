use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

use super::domain::ContactSubmission;
use super::service::{ContactError, ContactService};
use crate::workflows::delivery::EmailSender;
use crate::workflows::ledger::RowAppender;
use crate::workflows::reply::{message_response, unreadable_body};

pub const CONTACT_PATH: &str = "/api/contact";
pub const CONTACT_ACCEPTED: &str = "Message sent successfully!";
pub const CONTACT_FAILED: &str = "Failed to send message. Please try again later.";

pub fn contact_router<E, S>(service: Arc<ContactService<E, S>>) -> Router
where
    E: EmailSender + 'static,
    S: RowAppender + 'static,
{
    Router::new()
        .route(CONTACT_PATH, post(submit_handler::<E, S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<E, S>(
    State(service): State<Arc<ContactService<E, S>>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response
where
    E: EmailSender + 'static,
    S: RowAppender + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable contact payload");
            return unreadable_body(rejection.status());
        }
    };

    match service.submit(submission).await {
        Ok(_) => message_response(StatusCode::OK, CONTACT_ACCEPTED),
        Err(ContactError::Rejected(rejection)) => {
            message_response(StatusCode::BAD_REQUEST, rejection.to_string())
        }
        Err(_) => message_response(StatusCode::INTERNAL_SERVER_ERROR, CONTACT_FAILED),
    }
}
