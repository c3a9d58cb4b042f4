
use super::domain::ContactSubmission;

pub(super) fn scenario_a() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        phone: "9876543210".to_string(),
        subject: "Quote request".to_string(),
        interest: "Web Application".to_string(),
        message: "Need a quote".to_string(),
    }
}
