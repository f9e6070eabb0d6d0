mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, body_text, build_test_router, build_test_router_with_mode, form_post};
use fxconvert_core::amount::ParseMode;
use tower::ServiceExt;

#[tokio::test]
async fn view_renders_the_form() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(Request::builder().uri("/view/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/convert/""#));
    assert!(html.contains(r#"name="currency1""#));
    assert!(html.contains(r#"name="currency2""#));
}

#[tokio::test]
async fn single_conversion_shows_payload() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post("/convert/", "amount=50&currency1=USD&currency2=CAD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<title>Converted</title>"));
    assert!(html.contains("50 USD = converted CAD"));
}

#[tokio::test]
async fn single_conversion_failure_is_reported_as_bad_gateway() {
    let app = build_test_router(&["CAD"]);

    let response = app
        .oneshot(form_post("/convert/", "amount=50&currency1=USD&currency2=CAD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let html = body_text(response).await;
    assert!(html.contains(r#"class="error""#));
    assert!(html.contains("503"));
}

#[tokio::test]
async fn batch_conversion_lists_all_main_currencies_in_order() {
    let app = build_test_router(&["EUR"]);

    let response = app
        .oneshot(form_post(
            "/convert/",
            "amount=100&currency1=USD&currency2=&allCurrencies=all",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let positions: Vec<usize> = ["USD", "CAD", "CNY", "EUR", "GBP", "JPY"]
        .iter()
        .map(|code| html.find(&format!("<th>{}</th>", code)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    for code in ["USD", "CAD", "CNY", "GBP", "JPY"] {
        assert!(html.contains(&format!("100 USD = converted {}", code)));
    }
    assert!(!html.contains("100 USD = converted EUR"));
    assert_eq!(html.matches(r#"<p class="error">"#).count(), 1);
}

#[tokio::test]
async fn batch_mode_ignores_target_currency() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post(
            "/convert/",
            "amount=2&currency1=GBP&currency2=CHF&allCurrencies=all",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(!html.contains("converted CHF"));
    assert!(html.contains("2 GBP = converted JPY"));
}

#[tokio::test]
async fn other_all_currencies_values_select_single_mode() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post(
            "/convert/",
            "amount=2&currency1=GBP&currency2=CHF&allCurrencies=on",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("2 GBP = converted CHF"));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn invalid_amount_rerenders_form_with_error() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post("/convert/", "amount=abc&currency1=USD&currency2=CAD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(response).await;
    assert!(html.contains("Invalid amount"));
    assert!(html.contains(r#"value="abc""#));
    assert!(html.contains(r#"value="USD""#));
}

#[tokio::test]
async fn blank_amount_defaults_to_one() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post("/convert/", "amount=&currency1=USD&currency2=EUR"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("1 USD = converted EUR"));
}

#[tokio::test]
async fn legacy_mode_defaults_plain_numbers_to_one() {
    let app = build_test_router_with_mode(&[], ParseMode::Legacy);

    let response = app
        .oneshot(form_post("/convert/", "amount=100&currency1=USD&currency2=EUR"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("1 USD = converted EUR"));
}

#[tokio::test]
async fn missing_currencies_are_rejected() {
    let app = build_test_router(&[]);

    let response = app
        .clone()
        .oneshot(form_post("/convert/", "amount=5&currency1=&currency2=EUR"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(form_post("/convert/", "amount=5&currency1=USD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("convert to"));
}

#[tokio::test]
async fn form_values_are_not_treated_as_placeholders() {
    let app = build_test_router(&[]);

    let response = app
        .oneshot(form_post(
            "/convert/",
            "amount=5&currency1=%7B%7Btitle%7D%7D&currency2=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(response).await;
    assert!(html.contains(r#"value="{{title}}""#));
    assert!(html.contains("Enter the currency to convert to."));
}

#[tokio::test]
async fn undecodable_form_is_a_json_bad_request() {
    let app = build_test_router(&[]);

    let request = Request::builder()
        .method("POST")
        .uri("/convert/")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("amount=5"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
}
