//! In-memory mock of the ImpactHub backend.
//!
//! Serves a subset of the REST surface under `/api` from seeded state.
//! `/api/organization` and `/api/settings` require a bearer token. A fault
//! switch in `AppState` makes every `/api` request fail in a chosen way,
//! which is how the client's fallback paths are exercised end-to-end.

pub mod models;
pub mod store;

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use models::*;
use store::Store;

/// How every `/api` request should misbehave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fault {
    /// Answer with this status and a plain-text body.
    Status(u16),
    /// Sleep this many milliseconds before handling the request.
    DelayMs(u64),
    /// Answer 200 with a body that is not JSON.
    Garbage,
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    fault: Arc<RwLock<Option<Fault>>>,
    last_authorization: Arc<RwLock<Option<String>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::seeded())),
            fault: Arc::new(RwLock::new(None)),
            last_authorization: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_fault(&self, fault: Option<Fault>) {
        *self.fault.write().await = fault;
    }

    /// `Authorization` header of the most recent `/api` request, if it had one.
    pub async fn last_authorization(&self) -> Option<String> {
        self.last_authorization.read().await.clone()
    }
}

pub fn app() -> Router {
    app_with_state(AppState::new())
}

pub fn app_with_state(state: AppState) -> Router {
    let api = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", get(get_event).put(update_event).delete(delete_event))
        .route("/events/{id}/registrations", get(event_registrations))
        .route("/events/{id}/checkin", post(check_in))
        .route("/volunteers", get(list_volunteers).post(create_volunteer))
        .route("/volunteers/{id}", get(get_volunteer))
        .route("/donors", get(list_donors).post(create_donor))
        .route("/donors/{id}", get(get_donor))
        .route("/donations", get(list_donations).post(record_donation))
        .route("/donations/{id}/receipt", post(send_receipt))
        .route("/sponsors", get(list_sponsors))
        .route(
            "/sponsors/{id}/cash-donations",
            get(sponsor_cash_donations).post(add_cash_donation),
        )
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .route("/organization", get(get_organization).put(update_organization))
        .route("/settings", get(get_settings).patch(update_settings))
        .route("/public/events", get(public_events))
        .layer(middleware::from_fn_with_state(state.clone(), inject_fault));

    Router::new()
        .nest("/api", api)
        .route("/__fault", put(set_fault))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, AppState::new()).await
}

pub async fn run_with_state(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

async fn inject_fault(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.last_authorization.write().await = authorization;

    let fault = *state.fault.read().await;
    debug!(method = %request.method(), uri = %request.uri(), ?fault, "api request");
    match fault {
        None => next.run(request).await,
        Some(Fault::Status(code)) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "injected fault").into_response()
        }
        Some(Fault::DelayMs(ms)) => {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            next.run(request).await
        }
        Some(Fault::Garbage) => (StatusCode::OK, "<html>maintenance</html>").into_response(),
    }
}

async fn set_fault(State(state): State<AppState>, Json(fault): Json<Option<Fault>>) -> StatusCode {
    info!(?fault, "fault switched");
    state.set_fault(fault).await;
    StatusCode::NO_CONTENT
}

fn require_bearer(headers: &HeaderMap) -> Result<(), StatusCode> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty());
    token.map(|_| ()).ok_or(StatusCode::UNAUTHORIZED)
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

// ---------------------------------------------------------------------------
// Dashboard and events
// ---------------------------------------------------------------------------

async fn dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    Json(state.store.read().await.dashboard())
}

async fn list_events(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Event>> {
    Json(query.paginate(&state.store.read().await.events))
}

async fn create_event(State(state): State<AppState>, Json(input): Json<EventInput>) -> (StatusCode, Json<Event>) {
    let event = Event {
        id: new_id("evt"),
        title: input.title,
        description: input.description,
        date: input.date,
        location: input.location,
        status: input.status,
        capacity: input.capacity,
        registered: 0,
        volunteers_needed: input.volunteers_needed,
    };
    state.store.write().await.events.push(event.clone());
    (StatusCode::CREATED, Json(event))
}

async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Event>, StatusCode> {
    let store = state.store.read().await;
    store.events.iter().find(|e| e.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<EventInput>,
) -> Result<Json<Event>, StatusCode> {
    let mut store = state.store.write().await;
    let event = store.events.iter_mut().find(|e| e.id == id).ok_or(StatusCode::NOT_FOUND)?;
    event.title = input.title;
    event.description = input.description;
    event.date = input.date;
    event.location = input.location;
    event.status = input.status;
    event.capacity = input.capacity;
    event.volunteers_needed = input.volunteers_needed;
    Ok(Json(event.clone()))
}

async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ActionResult>, StatusCode> {
    let mut store = state.store.write().await;
    let before = store.events.len();
    store.events.retain(|e| e.id != id);
    if store.events.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(ActionResult::ok()))
}

async fn event_registrations(State(state): State<AppState>, Path(id): Path<String>) -> Json<Vec<Registration>> {
    let store = state.store.read().await;
    Json(store.registrations.iter().filter(|r| r.event_id == id).cloned().collect())
}

async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CheckInInput>,
) -> Result<Json<CheckIn>, StatusCode> {
    let store = state.store.read().await;
    if !store.events.iter().any(|e| e.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(CheckIn {
        event_id: id,
        volunteer_id: input.volunteer_id,
        checked_in_at: Some("2025-02-01T09:05:00Z".to_string()),
        success: true,
    }))
}

async fn public_events(State(state): State<AppState>) -> Json<Vec<PublicEvent>> {
    let store = state.store.read().await;
    Json(store.published().map(PublicEvent::from).collect())
}

// ---------------------------------------------------------------------------
// Volunteers, donors, donations
// ---------------------------------------------------------------------------

async fn list_volunteers(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Volunteer>> {
    Json(query.paginate(&state.store.read().await.volunteers))
}

async fn create_volunteer(
    State(state): State<AppState>,
    Json(input): Json<VolunteerInput>,
) -> (StatusCode, Json<Volunteer>) {
    let volunteer = Volunteer {
        id: new_id("vol"),
        name: input.name,
        email: input.email,
        phone: input.phone,
        status: "pending".to_string(),
        skills: input.skills,
        total_hours: 0.0,
        joined_at: "2025-01-01".to_string(),
    };
    state.store.write().await.volunteers.push(volunteer.clone());
    (StatusCode::CREATED, Json(volunteer))
}

async fn get_volunteer(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Volunteer>, StatusCode> {
    let store = state.store.read().await;
    store.volunteers.iter().find(|v| v.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_donors(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Donor>> {
    Json(query.paginate(&state.store.read().await.donors))
}

async fn create_donor(State(state): State<AppState>, Json(input): Json<DonorInput>) -> (StatusCode, Json<Donor>) {
    let donor = Donor {
        id: new_id("don"),
        name: input.name,
        email: input.email,
        donor_type: input.donor_type,
        total_given: 0.0,
        last_donation: None,
    };
    state.store.write().await.donors.push(donor.clone());
    (StatusCode::CREATED, Json(donor))
}

async fn get_donor(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Donor>, StatusCode> {
    let store = state.store.read().await;
    store.donors.iter().find(|d| d.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_donations(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Donation>> {
    Json(query.paginate(&state.store.read().await.donations))
}

async fn record_donation(
    State(state): State<AppState>,
    Json(input): Json<DonationInput>,
) -> Result<(StatusCode, Json<Donation>), StatusCode> {
    let mut store = state.store.write().await;
    let donor = store
        .donors
        .iter_mut()
        .find(|d| d.id == input.donor_id)
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    donor.total_given += input.amount;
    let donation = Donation {
        id: new_id("dnt"),
        donor_id: donor.id.clone(),
        donor_name: donor.name.clone(),
        amount: input.amount,
        campaign_id: input.campaign_id,
        date: "2025-01-15".to_string(),
        method: input.method,
        receipt_sent: false,
    };
    store.donations.push(donation.clone());
    Ok((StatusCode::CREATED, Json(donation)))
}

async fn send_receipt(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ActionResult>, StatusCode> {
    let mut store = state.store.write().await;
    let donation = store.donations.iter_mut().find(|d| d.id == id).ok_or(StatusCode::NOT_FOUND)?;
    donation.receipt_sent = true;
    Ok(Json(ActionResult::ok()))
}

// ---------------------------------------------------------------------------
// Sponsors and items
// ---------------------------------------------------------------------------

async fn list_sponsors(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Sponsor>> {
    Json(query.paginate(&state.store.read().await.sponsors))
}

async fn sponsor_cash_donations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CashDonation>>, StatusCode> {
    let store = state.store.read().await;
    if !store.sponsors.iter().any(|s| s.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(store.cash_donations.iter().filter(|d| d.sponsor_id == id).cloned().collect()))
}

async fn add_cash_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CashDonationInput>,
) -> Result<(StatusCode, Json<CashDonation>), StatusCode> {
    let mut store = state.store.write().await;
    let sponsor = store.sponsors.iter_mut().find(|s| s.id == id).ok_or(StatusCode::NOT_FOUND)?;
    sponsor.total_contributed += input.amount;
    let donation = CashDonation {
        id: new_id("cash"),
        sponsor_id: id,
        amount: input.amount,
        date: input.date,
        note: input.note,
    };
    store.cash_donations.push(donation.clone());
    Ok((StatusCode::CREATED, Json(donation)))
}

async fn list_items(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Page<Item>> {
    Json(query.paginate(&state.store.read().await.items))
}

async fn create_item(State(state): State<AppState>, Json(input): Json<ItemInput>) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: new_id("itm"),
        name: input.name,
        category: input.category,
        sku: input.sku,
        quantity: input.quantity,
        condition: input.condition,
        location: input.location,
    };
    state.store.write().await.items.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Item>, StatusCode> {
    let store = state.store.read().await;
    store.items.iter().find(|i| i.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, StatusCode> {
    let mut store = state.store.write().await;
    let item = store.items.iter_mut().find(|i| i.id == id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    item.category = input.category;
    item.sku = input.sku;
    item.quantity = input.quantity;
    item.condition = input.condition;
    item.location = input.location;
    Ok(Json(item.clone()))
}

async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ActionResult>, StatusCode> {
    let mut store = state.store.write().await;
    let before = store.items.len();
    store.items.retain(|i| i.id != id);
    if store.items.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(ActionResult::ok()))
}

// ---------------------------------------------------------------------------
// Organization and settings (bearer token required)
// ---------------------------------------------------------------------------

async fn get_organization(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Organization>, StatusCode> {
    require_bearer(&headers)?;
    Ok(Json(state.store.read().await.organization.clone()))
}

async fn update_organization(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<Organization>,
) -> Result<Json<Organization>, StatusCode> {
    require_bearer(&headers)?;
    state.store.write().await.organization = input.clone();
    Ok(Json(input))
}

async fn get_settings(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Settings>, StatusCode> {
    require_bearer(&headers)?;
    Ok(Json(state.store.read().await.settings.clone()))
}

async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<Settings>, StatusCode> {
    require_bearer(&headers)?;
    let mut store = state.store.write().await;
    let settings = &mut store.settings;
    if let Some(timezone) = patch.timezone {
        settings.timezone = timezone;
    }
    if let Some(currency) = patch.currency {
        settings.currency = currency;
    }
    if let Some(email) = patch.email_notifications {
        settings.email_notifications = email;
    }
    if let Some(sms) = patch.sms_notifications {
        settings.sms_notifications = sms;
    }
    if let Some(hours) = patch.default_shift_hours {
        settings.default_shift_hours = hours;
    }
    Ok(Json(settings.clone()))
}
