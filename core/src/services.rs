//! Named accessors for every backend resource.
//!
//! # Design
//! Each accessor binds one fixed path and one fixed fallback to the resilient
//! wrapper and does nothing else: no branching on the outcome, no joins
//! across resources. List endpoints always ask for the first page of fifty.
//! Filter arguments are accepted but neither sent nor applied: the caller
//! gets exactly the live body or exactly the fallback, and narrows it with
//! `ListFilter::apply` if it wants to.
//!
//! Accessors return plain data. Callers that need to tell live data from
//! fallback data go through `ImpactHubApi::resilient()` and the `*_tagged`
//! methods.

use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, CONTROLS};
use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::credentials::CredentialProvider;
use crate::fallback::{self, find_or_placeholder, PENDING_ID};
use crate::filters::{DonorFilters, EventFilters, ItemFilters, VolunteerFilters};
use crate::resilient::ResilientClient;
use crate::transport::{Transport, UreqTransport};
use crate::types::*;

/// Query string appended to every list endpoint.
pub const LIST_QUERY: &str = "page=1&pageSize=50";

/// Bytes escaped when an id is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, SEGMENT)
}

/// Typed accessors over the ImpactHub backend.
#[derive(Debug, Clone)]
pub struct ImpactHubApi<T> {
    http: ResilientClient<T>,
}

impl ImpactHubApi<UreqTransport> {
    /// Wire config, credentials and the ureq transport together.
    pub fn from_config(config: &ClientConfig, credentials: impl CredentialProvider + 'static) -> Self {
        let client = ApiClient::new(&config.base_url, credentials);
        let transport = UreqTransport::new(config.origin.as_deref());
        Self::new(ResilientClient::new(client, transport))
    }
}

impl<T: Transport> ImpactHubApi<T> {
    pub fn new(http: ResilientClient<T>) -> Self {
        Self { http }
    }

    pub fn resilient(&self) -> &ResilientClient<T> {
        &self.http
    }

    fn list<R: DeserializeOwned>(&self, resource: &str, fallback: Vec<R>) -> Vec<R> {
        let path = format!("{resource}?{LIST_QUERY}");
        self.http.get(&path, Page::first(fallback)).data
    }

    // -- dashboard ----------------------------------------------------------

    pub fn dashboard(&self) -> DashboardData {
        self.http.get("/dashboard", fallback::dashboard_data())
    }

    // -- events -------------------------------------------------------------

    pub fn list_events(&self, _filters: &EventFilters) -> Vec<Event> {
        self.list("/events", fallback::events())
    }

    pub fn event(&self, id: &str) -> Event {
        self.http
            .get(&format!("/events/{}", segment(id)), find_or_placeholder(fallback::events(), id))
    }

    pub fn create_event(&self, input: &EventInput) -> Event {
        self.http.post("/events", input, Event::from_input(PENDING_ID, input))
    }

    pub fn update_event(&self, id: &str, input: &EventInput) -> Event {
        self.http.put(&format!("/events/{}", segment(id)), input, Event::from_input(id, input))
    }

    pub fn delete_event(&self, id: &str) -> ActionResult {
        self.http.delete(&format!("/events/{}", segment(id)), ActionResult::ok())
    }

    pub fn event_registrations(&self, id: &str) -> Vec<EventRegistration> {
        self.http
            .get(&format!("/events/{}/registrations", segment(id)), fallback::registrations())
    }

    pub fn check_in(&self, event_id: &str, volunteer_id: &str) -> CheckIn {
        let body = serde_json::json!({ "volunteerId": volunteer_id });
        self.http.post(
            &format!("/events/{}/checkin", segment(event_id)),
            &body,
            fallback::check_in(event_id, volunteer_id),
        )
    }

    // -- volunteers ---------------------------------------------------------

    pub fn list_volunteers(&self, _filters: &VolunteerFilters) -> Vec<Volunteer> {
        self.list("/volunteers", fallback::volunteers())
    }

    pub fn volunteer(&self, id: &str) -> Volunteer {
        self.http
            .get(&format!("/volunteers/{}", segment(id)), find_or_placeholder(fallback::volunteers(), id))
    }

    pub fn create_volunteer(&self, input: &VolunteerInput) -> Volunteer {
        self.http
            .post("/volunteers", input, Volunteer::from_input(PENDING_ID, input))
    }

    pub fn update_volunteer(&self, id: &str, input: &VolunteerInput) -> Volunteer {
        self.http
            .put(&format!("/volunteers/{}", segment(id)), input, Volunteer::from_input(id, input))
    }

    pub fn pending_hours(&self) -> Vec<PendingHours> {
        self.http.get("/hours/pending", fallback::pending_hours())
    }

    pub fn approve_hours(&self, id: &str) -> ActionResult {
        self.http
            .post(&format!("/hours/{}/approve", segment(id)), &serde_json::json!({}), ActionResult::ok())
    }

    pub fn reject_hours(&self, id: &str) -> ActionResult {
        self.http
            .post(&format!("/hours/{}/reject", segment(id)), &serde_json::json!({}), ActionResult::ok())
    }

    // -- donors and donations -----------------------------------------------

    pub fn list_donors(&self, _filters: &DonorFilters) -> Vec<Donor> {
        self.list("/donors", fallback::donors())
    }

    pub fn donor(&self, id: &str) -> Donor {
        self.http
            .get(&format!("/donors/{}", segment(id)), find_or_placeholder(fallback::donors(), id))
    }

    pub fn create_donor(&self, input: &DonorInput) -> Donor {
        self.http.post("/donors", input, Donor::from_input(PENDING_ID, input))
    }

    pub fn update_donor(&self, id: &str, input: &DonorInput) -> Donor {
        self.http.put(&format!("/donors/{}", segment(id)), input, Donor::from_input(id, input))
    }

    pub fn list_donations(&self) -> Vec<Donation> {
        self.list("/donations", fallback::donations())
    }

    pub fn record_donation(&self, input: &DonationInput) -> Donation {
        self.http
            .post("/donations", input, Donation::from_input(PENDING_ID, input))
    }

    /// Ask the backend to email a receipt. Reports success when unreachable.
    pub fn send_receipt(&self, donation_id: &str) -> ActionResult {
        self.http.post(
            &format!("/donations/{}/receipt", segment(donation_id)),
            &serde_json::json!({}),
            ActionResult::ok(),
        )
    }

    // -- campaigns ----------------------------------------------------------

    pub fn list_campaigns(&self) -> Vec<Campaign> {
        self.list("/campaigns", fallback::campaigns())
    }

    pub fn campaign(&self, id: &str) -> Campaign {
        self.http
            .get(&format!("/campaigns/{}", segment(id)), find_or_placeholder(fallback::campaigns(), id))
    }

    pub fn create_campaign(&self, input: &CampaignInput) -> Campaign {
        self.http
            .post("/campaigns", input, Campaign::from_input(PENDING_ID, input))
    }

    pub fn update_campaign(&self, id: &str, input: &CampaignInput) -> Campaign {
        self.http
            .put(&format!("/campaigns/{}", segment(id)), input, Campaign::from_input(id, input))
    }

    pub fn set_campaign_status(&self, id: &str, status: CampaignStatus) -> ActionResult {
        self.http
            .patch(&format!("/campaigns/{}", segment(id)), &StatusUpdate { status }, ActionResult::ok())
    }

    // -- sponsors -----------------------------------------------------------

    pub fn list_sponsors(&self) -> Vec<Sponsor> {
        self.list("/sponsors", fallback::sponsors())
    }

    pub fn sponsor(&self, id: &str) -> Sponsor {
        self.http
            .get(&format!("/sponsors/{}", segment(id)), find_or_placeholder(fallback::sponsors(), id))
    }

    pub fn create_sponsor(&self, input: &SponsorInput) -> Sponsor {
        self.http.post("/sponsors", input, Sponsor::from_input(PENDING_ID, input))
    }

    pub fn update_sponsor(&self, id: &str, input: &SponsorInput) -> Sponsor {
        self.http
            .put(&format!("/sponsors/{}", segment(id)), input, Sponsor::from_input(id, input))
    }

    pub fn sponsor_cash_donations(&self, sponsor_id: &str) -> Vec<CashDonation> {
        let fallback = fallback::cash_donations()
            .into_iter()
            .filter(|d| d.sponsor_id == sponsor_id)
            .collect();
        self.http
            .get(&format!("/sponsors/{}/cash-donations", segment(sponsor_id)), fallback)
    }

    pub fn add_sponsor_cash_donation(&self, sponsor_id: &str, input: &CashDonationInput) -> CashDonation {
        self.http.post(
            &format!("/sponsors/{}/cash-donations", segment(sponsor_id)),
            input,
            CashDonation::from_input(PENDING_ID, sponsor_id, input),
        )
    }

    // -- marketplace --------------------------------------------------------

    pub fn list_listings(&self) -> Vec<MarketplaceListing> {
        self.list("/marketplace/listings", fallback::listings())
    }

    pub fn listing(&self, id: &str) -> MarketplaceListing {
        self.http.get(
            &format!("/marketplace/listings/{}", segment(id)),
            find_or_placeholder(fallback::listings(), id),
        )
    }

    pub fn create_listing(&self, input: &ListingInput) -> MarketplaceListing {
        self.http.post(
            "/marketplace/listings",
            input,
            MarketplaceListing::from_input(PENDING_ID, input),
        )
    }

    pub fn list_requests(&self) -> Vec<MarketplaceRequest> {
        self.list("/marketplace/requests", fallback::marketplace_requests())
    }

    pub fn create_request(&self, input: &RequestInput) -> MarketplaceRequest {
        self.http.post(
            "/marketplace/requests",
            input,
            MarketplaceRequest::from_input(PENDING_ID, input),
        )
    }

    pub fn update_request_status(&self, id: &str, status: RequestStatus) -> ActionResult {
        self.http.patch(
            &format!("/marketplace/requests/{}", segment(id)),
            &StatusUpdate { status },
            ActionResult::ok(),
        )
    }

    // -- items --------------------------------------------------------------

    pub fn list_items(&self, _filters: &ItemFilters) -> Vec<Item> {
        self.list("/items", fallback::items())
    }

    pub fn item(&self, id: &str) -> Item {
        self.http
            .get(&format!("/items/{}", segment(id)), find_or_placeholder(fallback::items(), id))
    }

    pub fn create_item(&self, input: &ItemInput) -> Item {
        self.http.post("/items", input, Item::from_input(PENDING_ID, input))
    }

    pub fn update_item(&self, id: &str, input: &ItemInput) -> Item {
        self.http.put(&format!("/items/{}", segment(id)), input, Item::from_input(id, input))
    }

    pub fn delete_item(&self, id: &str) -> ActionResult {
        self.http.delete(&format!("/items/{}", segment(id)), ActionResult::ok())
    }

    // -- organization and settings ------------------------------------------

    pub fn organization(&self) -> Organization {
        self.http.get("/organization", fallback::organization())
    }

    pub fn update_organization(&self, input: &Organization) -> Organization {
        self.http.put("/organization", input, input.clone())
    }

    pub fn settings(&self) -> Settings {
        self.http.get("/settings", fallback::settings())
    }

    pub fn update_settings(&self, input: &Settings) -> Settings {
        self.http.patch("/settings", input, input.clone())
    }

    // -- public pages -------------------------------------------------------

    pub fn public_events(&self) -> Vec<PublicEvent> {
        self.http.get("/public/events", fallback::public_events())
    }

    pub fn public_event(&self, id: &str) -> PublicEvent {
        self.http.get(
            &format!("/public/events/{}", segment(id)),
            find_or_placeholder(fallback::public_events(), id),
        )
    }

    pub fn register_for_event(&self, id: &str, input: &PublicRegistration) -> ActionResult {
        self.http
            .post(&format!("/public/events/{}/register", segment(id)), input, ActionResult::ok())
    }
}
