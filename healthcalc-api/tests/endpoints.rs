use actix_web::{
    http::{header, StatusCode},
    test, App,
};
use serde_json::{json, Value};

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(App::new().configure(healthcalc_api::configure)).await;
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("error field is a string")
}

#[actix_web::test]
async fn bmi_returns_rounded_value() {
    let (status, body) = post("/bmi", json!({"height": 1.75, "weight": 70})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmi": 22.86}));
}

#[actix_web::test]
async fn bmr_returns_rounded_value_for_both_genders() {
    let (status, body) = post(
        "/bmr",
        json!({"height": 175, "weight": 70, "age": 25, "gender": "male"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmr": 1724.05}));

    let (status, body) = post(
        "/bmr",
        json!({"height": 165, "weight": 60, "age": 30, "gender": "female"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmr": 1383.68}));
}

#[actix_web::test]
async fn bmr_gender_is_case_insensitive() {
    let (_, lower) = post(
        "/bmr",
        json!({"height": 175, "weight": 70, "age": 25, "gender": "male"}),
    )
    .await;
    let (status, upper) = post(
        "/bmr",
        json!({"height": 175, "weight": 70, "age": 25, "gender": "MALE"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lower, upper);
}

#[actix_web::test]
async fn bmi_rejects_non_positive_height() {
    let (status, body) = post("/bmi", json!({"height": 0, "weight": 70})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Invalid input: field 'height' must be greater than 0"
    );
}

#[actix_web::test]
async fn bmi_rejects_missing_weight() {
    let (status, body) = post("/bmi", json!({"height": 1.75})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("'weight' is required"));
}

#[actix_web::test]
async fn bmr_rejects_unknown_gender() {
    let (status, body) = post(
        "/bmr",
        json!({"height": 175, "weight": 70, "age": 25, "gender": "other"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Invalid input: gender must be"));
}

#[actix_web::test]
async fn bmr_rejects_fractional_age() {
    let (status, body) = post(
        "/bmr",
        json!({"height": 175, "weight": 70, "age": 25.5, "gender": "male"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("'age' must be an integer"));
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = test::init_service(App::new().configure(healthcalc_api::configure)).await;
    let req = test::TestRequest::post()
        .uri("/bmi")
        .insert_header(header::ContentType::json())
        .set_payload("{\"height\": 1.75,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(error_message(&body).starts_with("Invalid input: "));
}

#[actix_web::test]
async fn body_without_json_content_type_is_bad_request() {
    let app = test::init_service(App::new().configure(healthcalc_api::configure)).await;
    let req = test::TestRequest::post()
        .uri("/bmr")
        .set_payload(r#"{"height": 175, "weight": 70, "age": 25, "gender": "male"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn index_serves_html_page() {
    let app = test::init_service(App::new().configure(healthcalc_api::configure)).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap(),
        "text/html; charset=utf-8"
    );

    let body = test::read_body(resp).await;
    let page = std::str::from_utf8(&body).unwrap();
    assert!(page.contains("/bmi"));
    assert!(page.contains("/bmr"));
}

#[actix_web::test]
async fn calculator_answers_cross_origin_requests() {
    let app = test::init_service(
        App::new()
            .wrap(healthcalc_api::cors())
            .configure(healthcalc_api::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/bmi")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .set_json(json!({"height": 1.8, "weight": 81}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"bmi": 25.0}));
}

#[actix_web::test]
async fn bmi_ties_round_to_even() {
    let (status, body) = post("/bmi", json!({"height": 2.0, "weight": 0.5})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmi": 0.12}));
}

#[actix_web::test]
async fn bmi_overflow_is_bad_request() {
    let (status, body) = post("/bmi", json!({"height": 1e-200, "weight": 70})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Invalid input: result is too large to represent"
    );
}

#[actix_web::test]
async fn bmr_overflow_is_bad_request() {
    let (status, body) = post(
        "/bmr",
        json!({"height": 175, "weight": 1e308, "age": 25, "gender": "male"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Invalid input: result is too large to represent"
    );
}
