use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

const TEMPLATE: &str = "Access Code: {code} for {user_email}, valid {code_usage_count} times until \
{code_expiration_date}. Enroll at {enrollment_url}";

fn assignment_body() -> serde_json::Value {
    serde_json::json!({
        "template": TEMPLATE,
        "offer_assignment_id": 555,
        "learner_email": "johndoe@unknown.com",
        "code": "GIL7RUEOU7VHBH7Q",
        "enrollment_url": "http://tempurl.url/enroll",
        "code_usage_count": 10,
        "code_expiration_date": "2018-12-19"
    })
}

#[tokio::test]
async fn assignment_email_is_submitted_to_the_task_queue() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/tasks"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.task_queue_server)
        .await;

    // Act
    let response = app.post_offer_assignment_email(&assignment_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let status: serde_json::Value = response.json().await.unwrap();
    assert_eq!(status["sent"], true);

    let task_requests = app.task_queue_server.received_requests().await.unwrap();
    let task: serde_json::Value = serde_json::from_slice(&task_requests[0].body).unwrap();
    assert_eq!(task["task"], "send_offer_assignment_email");
    assert_eq!(task["args"]["learner_email"], "johndoe@unknown.com");
    assert_eq!(task["args"]["offer_assignment_id"], 555);
    assert_eq!(task["args"]["subject"], "New edX course assignment");
    assert_eq!(
        task["args"]["email_body"],
        "Access Code: GIL7RUEOU7VHBH7Q for johndoe@unknown.com, valid 10 times until 2018-12-19. \
Enroll at http://tempurl.url/enroll"
    );
}

#[tokio::test]
async fn a_refused_submission_is_reported_as_not_sent() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        // The task is still submitted exactly once, no retries.
        .expect(1)
        .mount(&app.task_queue_server)
        .await;

    // Act
    let response = app.post_offer_assignment_email(&assignment_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let status: serde_json::Value = response.json().await.unwrap();
    assert_eq!(status["sent"], false);
}

#[tokio::test]
async fn an_invalid_learner_email_is_rejected_without_submitting() {
    // Arrange
    let app = spawn_app().await;
    let mut body = assignment_body();
    body["learner_email"] = "definitely-not-an-email".into();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.task_queue_server)
        .await;

    // Act
    let response = app.post_offer_assignment_email(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}
