use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::models::{ActionResult, Event, Item, Page, PublicEvent, Settings};
use mock_server::{app, app_with_state, AppState, Fault};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn authed(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::AUTHORIZATION, "Bearer abc123")
        .body(body.to_string())
        .unwrap()
}

// --- lists ---

#[tokio::test]
async fn list_events_returns_page_envelope() {
    let resp = app().oneshot(get("/api/events?page=1&pageSize=50")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Event> = body_json(resp).await;
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 50);
    assert_eq!(page.total, page.data.len());
    assert!(!page.data.is_empty());
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let resp = app()
        .oneshot(get("/api/events?page=18446744073709551615&pageSize=200"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Event> = body_json(resp).await;
    assert!(page.data.is_empty());
    assert!(page.total > 0);
}

#[tokio::test]
async fn public_events_hide_drafts() {
    let resp = app().oneshot(get("/api/public/events")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let events: Vec<PublicEvent> = body_json(resp).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].spots_remaining, 18);
}

// --- create ---

#[tokio::test]
async fn create_event_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/events",
            r#"{"title":"Park cleanup","date":"2025-03-01","capacity":20}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let event: Event = body_json(resp).await;
    assert_eq!(event.title, "Park cleanup");
    assert_eq!(event.status, "draft");
    assert!(event.id.starts_with("evt-"));
}

#[tokio::test]
async fn create_event_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/events", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn donation_for_unknown_donor_is_rejected() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/donations",
            r#"{"donorId":"nobody","amount":5,"method":"cash"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- not found ---

#[tokio::test]
async fn get_event_not_found() {
    let resp = app().oneshot(get("/api/events/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_sponsor_cash_donations_not_found() {
    let resp = app().oneshot(get("/api/sponsors/missing/cash-donations")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- auth ---

#[tokio::test]
async fn settings_require_bearer_token() {
    let resp = app().oneshot(get("/api/settings")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app().oneshot(authed("GET", "/api/settings", "")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let settings: Settings = body_json(resp).await;
    assert_eq!(settings.timezone, "UTC");
}

#[tokio::test]
async fn last_authorization_is_recorded() {
    let state = AppState::new();
    app_with_state(state.clone())
        .oneshot(authed("GET", "/api/dashboard", ""))
        .await
        .unwrap();
    assert_eq!(state.last_authorization().await.as_deref(), Some("Bearer abc123"));

    app_with_state(state.clone()).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(state.last_authorization().await, None);
}

// --- faults ---

#[tokio::test]
async fn status_fault_applies_to_every_api_route() {
    let state = AppState::new();
    state.set_fault(Some(Fault::Status(500))).await;

    for uri in ["/api/dashboard", "/api/events", "/api/public/events"] {
        let resp = app_with_state(state.clone()).oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }

    state.set_fault(None).await;
    let resp = app_with_state(state).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn garbage_fault_returns_non_json_200() {
    let state = AppState::new();
    state.set_fault(Some(Fault::Garbage)).await;
    let resp = app_with_state(state).oneshot(get("/api/dashboard")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn fault_switch_endpoint() {
    let state = AppState::new();
    let resp = app_with_state(state.clone())
        .oneshot(json_request("PUT", "/__fault", r#"{"status":503}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app_with_state(state.clone()).oneshot(get("/api/items")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    app_with_state(state.clone())
        .oneshot(json_request("PUT", "/__fault", "null"))
        .await
        .unwrap();
    let resp = app_with_state(state).oneshot(get("/api/items")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// --- full item lifecycle ---

#[tokio::test]
async fn item_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/items",
            r#"{"name":"Cooler","category":"equipment","sku":"CL-1","quantity":3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Item = body_json(resp).await;
    let id = created.id.clone();

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/items/{id}"),
            r#"{"name":"Cooler","category":"equipment","sku":"CL-1","quantity":5,"condition":"good"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.condition, "good");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/items/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: ActionResult = body_json(resp).await;
    assert!(result.success);

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/api/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
