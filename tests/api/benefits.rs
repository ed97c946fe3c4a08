use crate::helpers::spawn_app;

#[tokio::test]
async fn percentage_benefits_are_formatted_with_a_percent_sign() {
    // Arrange
    let app = spawn_app().await;
    let body = serde_json::json!({ "type": "Percentage", "value": "35.00" });

    // Act
    let response = app.post_format_benefit(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let formatted: serde_json::Value = response.json().await.unwrap();
    assert_eq!(formatted["formatted"], "35%");
}

#[tokio::test]
async fn absolute_benefits_are_formatted_as_currency() {
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({ "type": "Absolute", "value": "90.00" }), "$90.00"),
        (serde_json::json!({ "type": "Absolute", "value": 1234.5 }), "$1,234.50"),
        (
            serde_json::json!({
                "proxy_class": "ecommerce.programs.benefits.AbsoluteDiscountBenefitWithoutRange",
                "value": "20"
            }),
            "$20.00",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_format_benefit(&body).await;

        assert_eq!(200, response.status().as_u16());
        let formatted: serde_json::Value = response.json().await.unwrap();
        assert_eq!(formatted["formatted"], expected, "Unexpected rendering for {body}");
    }
}

#[tokio::test]
async fn format_benefit_returns_a_400_for_invalid_benefits() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({ "type": "Multibuy", "value": "1" }), "unsupported type"),
        (serde_json::json!({ "value": "1" }), "missing type and proxy class"),
        (serde_json::json!({ "type": "Absolute", "value": "-5" }), "negative value"),
        (serde_json::json!({ "type": "Absolute" }), "missing value"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = app.post_format_benefit(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {error_message}."
        );
    }
}
