use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::adoption::router::adoption_router;

fn build_router() -> axum::Router {
    let (service, _) = build_service();
    adoption_router(Arc::new(service))
}

fn json_request(method: &str, uri: &str, payload: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request")
}

#[tokio::test]
async fn begin_route_returns_tracking_id() {
    let router = build_router();

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/adoptions/luna/applications",
            &step1(),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload.get("application_id").is_some());
    assert_eq!(
        payload.get("status").and_then(Value::as_str),
        Some("draft")
    );
    assert_eq!(payload.get("pet_slug").and_then(Value::as_str), Some("luna"));
}

#[tokio::test]
async fn full_flow_over_http_returns_the_evaluation() {
    let router = build_router();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/adoptions/luna/applications",
            &step1(),
        ))
        .await
        .expect("router dispatch");
    let opened = read_json_body(response).await;
    let id = opened
        .get("application_id")
        .and_then(Value::as_str)
        .expect("tracking id")
        .to_string();

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/adoptions/applications/{id}/living-situation"),
            &strong_step2(),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/adoptions/applications/{id}/commitments"),
            &step3_all(),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let evaluation = read_json_body(response).await;
    assert_eq!(evaluation.get("score").and_then(Value::as_u64), Some(99));
    assert_eq!(
        evaluation.get("status").and_then(Value::as_str),
        Some("interview")
    );
    assert_eq!(
        evaluation
            .get("knockouts")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(0)
    );

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/adoptions/applications/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let view = read_json_body(response).await;
    assert_eq!(
        view.get("status").and_then(Value::as_str),
        Some("interview")
    );
    assert_eq!(view.get("score").and_then(Value::as_u64), Some(99));
}

#[tokio::test]
async fn begin_route_maps_intake_violations_to_422() {
    let router = build_router();
    let mut step1 = step1();
    step1.phone_verified = false;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/adoptions/luna/applications",
            &step1,
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("verificar tu teléfono"));
}

#[tokio::test]
async fn begin_route_returns_404_for_unknown_pets() {
    let router = build_router();

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/adoptions/desconocido/applications",
            &step1(),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_route_returns_404_when_missing() {
    let router = build_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/adoptions/applications/app-000000")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn commitments_before_living_situation_is_a_conflict() {
    let router = build_router();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/adoptions/luna/applications",
            &step1(),
        ))
        .await
        .expect("router dispatch");
    let opened = read_json_body(response).await;
    let id = opened
        .get("application_id")
        .and_then(Value::as_str)
        .expect("tracking id")
        .to_string();

    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/adoptions/applications/{id}/commitments"),
            &step3_all(),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
