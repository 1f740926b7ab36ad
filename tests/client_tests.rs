/// Integration tests for the estimate form against a mock calculate service
use cssd_planner::{
    client::{ClientError, EstimateClient, EstimateForm, TRANSPORT_ERROR_MESSAGE},
    renderer::{DisplayModel, Renderer},
};
use httpmock::prelude::*;
use serde_json::json;

fn form_for(server: &MockServer) -> EstimateForm {
    let client = EstimateClient::with_http_client(reqwest::Client::new(), &server.base_url());
    EstimateForm::new(client, Renderer::default())
}

#[tokio::test]
async fn test_submit_renders_estimate() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/calculate")
                .header("content-type", "application/x-www-form-urlencoded");
            then.status(200).json_body(json!({
                "bed_count": 30,
                "bed_range": "20-50",
                "cssd_area": 350,
                "autoclave_model": "Cylindrical: 20x48 Double Door",
                "autoclave_quantity": 1,
                "official_budget": {"min": 2500000, "max": 4000000},
                "equipment": [
                    {"name": "Pass Box", "specification": "SS 304",
                     "quantity": 2, "unit_price": 35000, "total_price": "Not specified"},
                    {"name": "Hot Air Oven", "specification": "250 L",
                     "quantity": 1, "unit_price": 95000, "total_price": 95000}
                ]
            }));
        })
        .await;

    let form = form_for(&server);
    let model = form.submit("30").await;
    mock.assert_async().await;

    let view = model.as_estimate().unwrap();
    assert_eq!(view.summary.cssd_area, "350");
    assert_eq!(view.item_count_label, "2 items");
    assert_eq!(view.rows[0].total_price, "₹70,000 (calculated)");
    assert_eq!(view.total_budget, 165_000.0);
    assert_eq!(view.total_budget_display, "₹1,65,000");
    assert_eq!(view.official_budget_display, "₹25,00,000 to ₹40,00,000");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_submit_shows_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).json_body(json!({
                "error": "Could not determine requirements for the given bed count"
            }));
        })
        .await;

    let model = form_for(&server).submit("5000").await;
    assert_eq!(
        model,
        DisplayModel::error("Could not determine requirements for the given bed count")
    );
}

#[tokio::test]
async fn test_http_failure_shows_generic_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let form = form_for(&server);
    assert_eq!(form.submit("60").await, DisplayModel::error(TRANSPORT_ERROR_MESSAGE));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_undecodable_body_shows_generic_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).body("<html>proxy error</html>");
        })
        .await;

    let form = form_for(&server);
    assert_eq!(form.submit("60").await, DisplayModel::error(TRANSPORT_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).json_body(json!({"equipment": []}));
        })
        .await;

    let form = form_for(&server);
    assert!(form.submit("-4").await.is_error());
    assert!(form.submit("beds").await.is_error());
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_client_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(503);
        })
        .await;

    let client = EstimateClient::with_http_client(reqwest::Client::new(), &server.base_url());
    let err = client.calculate(60).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status } if status.as_u16() == 503));
    assert_eq!(err.user_message(), TRANSPORT_ERROR_MESSAGE);
}
