use crate::domain::LearnerEmail;
use crate::task_queue::EmailTaskQueue;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const OFFER_ASSIGNMENT_EMAIL_SUBJECT: &str = "New edX course assignment";

// `{{` and `}}` are escaped braces, anything else between single braces is a named placeholder.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid placeholder pattern")
});

/// Everything we know about a code assignment when notifying the learner.
#[derive(Debug, Clone)]
pub struct OfferAssignmentEmail {
    pub offer_assignment_id: u64,
    pub learner_email: LearnerEmail,
    pub code: String,
    pub enrollment_url: String,
    pub code_usage_count: u32,
    pub code_expiration_date: String,
}

impl OfferAssignmentEmail {
    fn token(&self, name: &str) -> Option<String> {
        let value = match name {
            "user_email" => self.learner_email.to_string(),
            "code" => self.code.clone(),
            "enrollment_url" => self.enrollment_url.clone(),
            "code_usage_count" => self.code_usage_count.to_string(),
            "code_expiration_date" => self.code_expiration_date.clone(),
            "offer_assignment_id" => self.offer_assignment_id.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Substitute the assignment tokens into `template`.
    ///
    /// Unknown placeholders are kept verbatim, so a typo in a template shows up in the email
    /// instead of preventing it from being sent.
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| match caps.get(1) {
                Some(name) => self
                    .token(name.as_str())
                    .unwrap_or_else(|| caps[0].to_string()),
                None => caps[0][..1].to_string(),
            })
            .into_owned()
    }
}

/// Render the assignment email and hand it over to the task queue.
///
/// Returns `true` if the task queue accepted the email, `false` otherwise. Delivery itself happens
/// asynchronously in the task worker: failures are logged here and never propagated to the caller.
#[tracing::instrument(
    name = "Send offer assignment email",
    skip(task_queue, template, assignment),
    fields(offer_assignment_id = assignment.offer_assignment_id)
)]
pub async fn send_assigned_offer_email(
    task_queue: &dyn EmailTaskQueue,
    template: &str,
    assignment: &OfferAssignmentEmail,
) -> bool {
    let email_body = assignment.render(template);

    match task_queue
        .send_offer_assignment_email(
            &assignment.learner_email,
            assignment.offer_assignment_id,
            OFFER_ASSIGNMENT_EMAIL_SUBJECT,
            &email_body,
        )
        .await
    {
        Ok(()) => true,
        Err(error) => {
            tracing::error!(
                error.cause_chain = ?error,
                error.message = %error,
                subject = OFFER_ASSIGNMENT_EMAIL_SUBJECT,
                code = %assignment.code,
                learner_email = %assignment.learner_email,
                "[Offer Assignment] Email for offer_assignment_id {} raised an exception",
                assignment.offer_assignment_id,
            );
            false
        }
    }
}
