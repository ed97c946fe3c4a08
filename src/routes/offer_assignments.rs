use crate::domain::LearnerEmail;
use crate::offer::{send_assigned_offer_email, OfferAssignmentEmail};
use crate::task_queue::TaskQueueClient;
use crate::utils::e400;
use actix_web::{web, HttpResponse};

#[derive(serde::Deserialize)]
pub struct BodyData {
    template: String,
    offer_assignment_id: u64,
    learner_email: String,
    code: String,
    enrollment_url: String,
    code_usage_count: u32,
    code_expiration_date: String,
}

impl TryFrom<BodyData> for OfferAssignmentEmail {
    type Error = String;

    fn try_from(value: BodyData) -> Result<Self, Self::Error> {
        let learner_email = LearnerEmail::parse(value.learner_email)?;
        Ok(Self {
            offer_assignment_id: value.offer_assignment_id,
            learner_email,
            code: value.code,
            enrollment_url: value.enrollment_url,
            code_usage_count: value.code_usage_count,
            code_expiration_date: value.code_expiration_date,
        })
    }
}

#[derive(serde::Serialize)]
struct EmailStatus {
    sent: bool,
}

/// Queue the email telling a learner a code was assigned to them.
///
/// A refused submission is not an error for the caller: the assignment exists either way, so we
/// answer 200 and report the outcome in the body.
#[tracing::instrument(
    name = "Email an offer assignment",
    skip(body, task_queue),
    fields(
        offer_assignment_id = body.offer_assignment_id,
        learner_email = %body.learner_email,
    )
)]
pub async fn email_offer_assignment(
    body: web::Json<BodyData>,
    task_queue: web::Data<TaskQueueClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut body = body.into_inner();
    // The template is not part of the assignment itself
    let template = std::mem::take(&mut body.template);
    let assignment: OfferAssignmentEmail = body.try_into().map_err(e400)?;
    let sent = send_assigned_offer_email(task_queue.get_ref(), &template, &assignment).await;
    Ok(HttpResponse::Ok().json(EmailStatus { sent }))
}
