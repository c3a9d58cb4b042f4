use super::{pdf_resume, scenario_b};
use crate::workflows::careers::{ApplicationRejection, JobApplication};
use crate::workflows::delivery::smtp::build_message;
use crate::workflows::delivery::OutboundEmail;
use crate::workflows::ledger::SpreadsheetRow;

#[test]
fn blank_optional_fields_collapse_to_none() {
    let application = JobApplication::try_from(scenario_b()).expect("valid application");
    assert_eq!(application.phone, None);
    assert_eq!(application.cover_letter, None);
    assert_eq!(application.additional_links, None);
    assert_eq!(
        application.sheet_row(),
        SpreadsheetRow(
            ["Research Intern", "John Smith", "john@example.com", "N/A", "N/A", "N/A"]
                .map(String::from)
                .to_vec()
        )
    );
}

#[test]
fn each_required_field_is_enforced() {
    let clear: [fn(&mut crate::workflows::careers::ApplicationForm); 3] = [
        |form| form.name = None,
        |form| form.email = Some("   ".to_string()),
        |form| form.job_title = None,
    ];
    for clear_field in clear {
        let mut form = scenario_b();
        clear_field(&mut form);
        assert_eq!(
            JobApplication::try_from(form),
            Err(ApplicationRejection::MissingRequired)
        );
    }
}

#[test]
fn rejects_malformed_email() {
    let mut form = scenario_b();
    form.email = Some("john-at-example".to_string());
    assert_eq!(
        JobApplication::try_from(form),
        Err(ApplicationRejection::InvalidEmail)
    );
}

#[test]
fn rejects_addresses_that_cannot_be_used_as_reply_to() {
    for address in ["\"john smith\"@example.com", "john@[127.0.0.1]"] {
        let mut form = scenario_b();
        form.email = Some(address.to_string());
        assert_eq!(
            JobApplication::try_from(form),
            Err(ApplicationRejection::InvalidEmail),
            "address {address}"
        );
    }
}

#[test]
fn accepted_address_builds_the_notification() {
    let application = JobApplication::try_from(scenario_b()).expect("valid application");
    let email = OutboundEmail {
        from: "forms@studio.example".to_string(),
        to: "hello@studio.example".to_string(),
        reply_to: Some(application.email.clone()),
        subject: application.notification_subject(),
        html: "<p>hi</p>".to_string(),
        attachments: Vec::new(),
    };
    assert!(build_message(email).is_ok());
}

#[test]
fn resume_must_be_pdf_by_type_or_extension() {
    let mut form = scenario_b();
    let mut resume = pdf_resume();
    resume.content_type = "application/octet-stream".to_string();
    form.resume = Some(resume);
    assert!(JobApplication::try_from(form).is_ok(), ".pdf extension is enough");

    let mut form = scenario_b();
    let mut resume = pdf_resume();
    resume.filename = "resume.docx".to_string();
    resume.content_type =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string();
    form.resume = Some(resume);
    assert_eq!(
        JobApplication::try_from(form),
        Err(ApplicationRejection::ResumeNotPdf)
    );
}

#[test]
fn subjects_name_the_role() {
    let application = JobApplication::try_from(scenario_b()).expect("valid application");
    assert_eq!(
        application.notification_subject(),
        "New Job Application: Research Intern - John Smith"
    );
    assert_eq!(
        application.confirmation_subject(),
        "Application Received: Research Intern"
    );
}
