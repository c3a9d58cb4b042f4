use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use tracing::warn;

use super::intake::read_application_form;
use super::service::{ApplicationError, CareersService};
use crate::workflows::delivery::EmailSender;
use crate::workflows::ledger::RowAppender;
use crate::workflows::reply::{message_response, unreadable_body};

pub const APPLY_PATH: &str = "/api/careers/apply";
pub const APPLICATION_ACCEPTED: &str = "Application submitted successfully!";
pub const APPLICATION_FAILED: &str = "Failed to submit application. Please try again later.";

/// Careers routes; `upload_limit` caps the whole multipart body, resume included.
pub fn careers_router<E, S>(service: Arc<CareersService<E, S>>, upload_limit: usize) -> Router
where
    E: EmailSender + 'static,
    S: RowAppender + 'static,
{
    Router::new()
        .route(APPLY_PATH, post(apply_handler::<E, S>))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(service)
}

pub(crate) async fn apply_handler<E, S>(
    State(service): State<Arc<CareersService<E, S>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: EmailSender + 'static,
    S: RowAppender + 'static,
{
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(error = %rejection, "application is not multipart");
            return unreadable_body(rejection.status());
        }
    };

    let form = match read_application_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            warn!(error = %err, "unreadable application payload");
            return unreadable_body(err.status());
        }
    };

    match service.submit(form).await {
        Ok(_) => message_response(StatusCode::OK, APPLICATION_ACCEPTED),
        Err(ApplicationError::Rejected(rejection)) => {
            message_response(StatusCode::BAD_REQUEST, rejection.to_string())
        }
        Err(_) => message_response(StatusCode::INTERNAL_SERVER_ERROR, APPLICATION_FAILED),
    }
}
