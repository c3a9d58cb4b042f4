mod domain;

use super::domain::{ApplicationForm, ResumeUpload};

pub(super) const BOUNDARY: &str = "relay-test-boundary";

/// Scenario B: required fields only, optional fields posted blank.
pub(super) fn scenario_b() -> ApplicationForm {
    ApplicationForm {
        name: Some("John Smith".to_string()),
        email: Some("john@example.com".to_string()),
        phone: Some(String::new()),
        job_title: Some("Research Intern".to_string()),
        cover_letter: Some(String::new()),
        additional_links: Some(String::new()),
        resume: None,
    }
}

pub(super) fn pdf_resume() -> ResumeUpload {
    ResumeUpload {
        filename: "john-smith.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7\n\x00\x01\x02binary\xff\xfe".to_vec(),
    }
}

pub(super) struct FilePart<'a> {
    pub(super) filename: &'a str,
    pub(super) content_type: &'a str,
    pub(super) bytes: &'a [u8],
}

pub(super) fn multipart_body(fields: &[(&str, &str)], resume: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = resume {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.filename, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
