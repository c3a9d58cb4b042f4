use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;

use super::domain::{ApplicationForm, ResumeUpload};

/// Drain the careers multipart stream into an [`ApplicationForm`].
///
/// Unknown fields are ignored. A file part with no bytes and no filename is what a
/// browser posts when nothing was chosen, so it counts as no resume.
pub async fn read_application_form(
    mut multipart: Multipart,
) -> Result<ApplicationForm, MultipartError> {
    let mut form = ApplicationForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "resume" => form.resume = read_resume(field).await?,
            "name" => form.name = Some(field.text().await?),
            "email" => form.email = Some(field.text().await?),
            "phone" => form.phone = Some(field.text().await?),
            "jobTitle" => form.job_title = Some(field.text().await?),
            "coverLetter" => form.cover_letter = Some(field.text().await?),
            "additionalLinks" => form.additional_links = Some(field.text().await?),
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok(form)
}

async fn read_resume(field: Field<'_>) -> Result<Option<ResumeUpload>, MultipartError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let declared = field.content_type().map(str::to_string);
    let bytes = field.bytes().await?;

    if bytes.is_empty() && filename.is_empty() {
        return Ok(None);
    }

    let content_type = declared.unwrap_or_else(|| {
        mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .to_string()
    });

    Ok(Some(ResumeUpload {
        filename,
        content_type,
        bytes: bytes.to_vec(),
    }))
}
