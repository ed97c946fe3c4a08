use crate::domain::LearnerEmail;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Name of the worker task that renders and delivers assignment emails.
pub const SEND_OFFER_ASSIGNMENT_EMAIL_TASK: &str = "send_offer_assignment_email";

/// The asynchronous worker that actually delivers assignment emails.
///
/// Submitting only means the task was queued: an `Ok` says nothing about delivery.
#[async_trait::async_trait]
pub trait EmailTaskQueue: Send + Sync {
    async fn send_offer_assignment_email(
        &self,
        learner_email: &LearnerEmail,
        offer_assignment_id: u64,
        subject: &str,
        email_body: &str,
    ) -> Result<(), anyhow::Error>;
}

/// Submits tasks to the broker's HTTP endpoint.
pub struct TaskQueueClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

impl TaskQueueClient {
    /// # Connection pooling
    /// `reqwest::Client` keeps a pool of connections under the hood, so we build it once and reuse
    /// it for every task we submit. Cloning a `Client` is cheap (it is an `Arc` internally), but we
    /// still wrap `TaskQueueClient` in `web::Data` rather than cloning it for every worker.
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }
}

#[async_trait::async_trait]
impl EmailTaskQueue for TaskQueueClient {
    #[tracing::instrument(
        name = "Submit offer assignment email task",
        skip(self, learner_email, subject, email_body)
    )]
    async fn send_offer_assignment_email(
        &self,
        learner_email: &LearnerEmail,
        offer_assignment_id: u64,
        subject: &str,
        email_body: &str,
    ) -> Result<(), anyhow::Error> {
        let url = format!("{}/tasks", self.base_url);
        let request_body = TaskRequest {
            task: SEND_OFFER_ASSIGNMENT_EMAIL_TASK,
            args: SendOfferAssignmentEmailArgs {
                learner_email: learner_email.as_ref(),
                offer_assignment_id,
                subject,
                email_body,
            },
        };

        self.http_client
            .post(&url)
            .header(
                "X-Task-Queue-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct TaskRequest<'a> {
    task: &'a str,
    args: SendOfferAssignmentEmailArgs<'a>,
}

#[derive(serde::Serialize)]
struct SendOfferAssignmentEmailArgs<'a> {
    learner_email: &'a str,
    offer_assignment_id: u64,
    subject: &'a str,
    email_body: &'a str,
}
