//! Data-transfer shapes for the ImpactHub backend.
//!
//! # Design
//! These mirror the backend's JSON (camelCase) and carry no invariants of
//! their own. They are defined independently from the mock server's types;
//! the integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared envelopes
// ---------------------------------------------------------------------------

/// Paginated list envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// First page wrapping `data`, sized the way list accessors request it.
    pub fn first(data: Vec<T>) -> Self {
        Self {
            total: data.len() as u64,
            data,
            page: 1,
            page_size: 50,
        }
    }
}

/// Acknowledgement returned by action endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

/// Body of PATCH requests that only change a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Icon shown on a dashboard stat card, by its kebab-case wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardIcon {
    Calendar,
    Users,
    Heart,
    DollarSign,
    TrendingUp,
    Package,
    Store,
    Award,
}

impl DashboardIcon {
    /// Accessible label for the icon.
    pub fn label(self) -> &'static str {
        match self {
            DashboardIcon::Calendar => "Events",
            DashboardIcon::Users => "Volunteers",
            DashboardIcon::Heart => "Donors",
            DashboardIcon::DollarSign => "Funds raised",
            DashboardIcon::TrendingUp => "Growth",
            DashboardIcon::Package => "Inventory",
            DashboardIcon::Store => "Marketplace",
            DashboardIcon::Award => "Sponsors",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: Option<String>,
    pub icon: DashboardIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<ActivityEntry>,
    pub upcoming_events: Vec<Event>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub status: EventStatus,
    pub capacity: u32,
    pub registered: u32,
    pub volunteers_needed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub volunteers_needed: u32,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    pub fn from_input(id: &str, input: &EventInput) -> Self {
        Self {
            id: id.to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            date: input.date.clone(),
            location: input.location.clone(),
            status: input.status,
            capacity: input.capacity,
            registered: 0,
            volunteers_needed: input.volunteers_needed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub registered_at: String,
    pub checked_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub event_id: String,
    pub volunteer_id: String,
    #[serde(default)]
    pub checked_in_at: Option<String>,
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Volunteers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: VolunteerStatus,
    #[serde(default)]
    pub skills: Vec<String>,
    pub total_hours: f64,
    pub joined_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Volunteer {
    pub fn from_input(id: &str, input: &VolunteerInput) -> Self {
        Self {
            id: id.to_string(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            status: VolunteerStatus::Pending,
            skills: input.skills.clone(),
            total_hours: 0.0,
            joined_at: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingHours {
    pub id: String,
    pub volunteer_id: String,
    pub volunteer_name: String,
    pub event_title: String,
    pub hours: f64,
    pub date: String,
}

// ---------------------------------------------------------------------------
// Donors and donations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorType {
    #[default]
    Individual,
    Corporate,
    Foundation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub donor_type: DonorType,
    pub total_given: f64,
    #[serde(default)]
    pub last_donation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub donor_type: DonorType,
}

impl Donor {
    pub fn from_input(id: &str, input: &DonorInput) -> Self {
        Self {
            id: id.to_string(),
            name: input.name.clone(),
            email: input.email.clone(),
            donor_type: input.donor_type,
            total_given: 0.0,
            last_donation: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub amount: f64,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub date: String,
    pub method: String,
    pub receipt_sent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    pub donor_id: String,
    pub amount: f64,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub method: String,
}

impl Donation {
    pub fn from_input(id: &str, input: &DonationInput) -> Self {
        Self {
            id: id.to_string(),
            donor_id: input.donor_id.clone(),
            donor_name: String::new(),
            amount: input.amount,
            campaign_id: input.campaign_id.clone(),
            date: String::new(),
            method: input.method.clone(),
            receipt_sent: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goal: f64,
    pub raised: f64,
    pub status: CampaignStatus,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub name: String,
    pub description: String,
    pub goal: f64,
    pub start_date: String,
    pub end_date: String,
}

impl Campaign {
    pub fn from_input(id: &str, input: &CampaignInput) -> Self {
        Self {
            id: id.to_string(),
            name: input.name.clone(),
            description: input.description.clone(),
            goal: input.goal,
            raised: 0.0,
            status: CampaignStatus::Draft,
            start_date: input.start_date.clone(),
            end_date: input.end_date.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sponsors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    #[default]
    Bronze,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: SponsorTier,
    pub contact_name: String,
    pub contact_email: String,
    pub total_contributed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorInput {
    pub name: String,
    pub tier: SponsorTier,
    pub contact_name: String,
    pub contact_email: String,
}

impl Sponsor {
    pub fn from_input(id: &str, input: &SponsorInput) -> Self {
        Self {
            id: id.to_string(),
            name: input.name.clone(),
            tier: input.tier,
            contact_name: input.contact_name.clone(),
            contact_email: input.contact_email.clone(),
            total_contributed: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDonation {
    pub id: String,
    pub sponsor_id: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDonationInput {
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl CashDonation {
    pub fn from_input(id: &str, sponsor_id: &str, input: &CashDonationInput) -> Self {
        Self {
            id: id.to_string(),
            sponsor_id: sponsor_id.to_string(),
            amount: input.amount,
            date: input.date.clone(),
            note: input.note.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sku: String,
    pub quantity: u32,
    pub condition: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    pub category: String,
    pub sku: String,
    pub quantity: u32,
    pub condition: String,
    pub location: String,
}

impl Item {
    pub fn from_input(id: &str, input: &ItemInput) -> Self {
        Self {
            id: id.to_string(),
            name: input.name.clone(),
            category: input.category.clone(),
            sku: input.sku.clone(),
            quantity: input.quantity,
            condition: input.condition.clone(),
            location: input.location.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Marketplace
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub id: String,
    pub vendor_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub vendor_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

impl MarketplaceListing {
    pub fn from_input(id: &str, input: &ListingInput) -> Self {
        Self {
            id: id.to_string(),
            vendor_name: input.vendor_name.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            price: input.price,
            available: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Fulfilled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceRequest {
    pub id: String,
    pub listing_id: String,
    pub requester: String,
    pub quantity: u32,
    pub status: RequestStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInput {
    pub listing_id: String,
    pub requester: String,
    pub quantity: u32,
}

impl MarketplaceRequest {
    pub fn from_input(id: &str, input: &RequestInput) -> Self {
        Self {
            id: id.to_string(),
            listing_id: input.listing_id.clone(),
            requester: input.requester.clone(),
            quantity: input.quantity,
            status: RequestStatus::Pending,
            created_at: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Organization, settings, public pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub mission: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub tax_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub timezone: String,
    pub currency: String,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub default_shift_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub spots_remaining: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRegistration {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_uses_kebab_case_wire_names() {
        let icon: DashboardIcon = serde_json::from_str(r#""dollar-sign""#).unwrap();
        assert_eq!(icon, DashboardIcon::DollarSign);
        assert_eq!(icon.label(), "Funds raised");
        assert_eq!(serde_json::to_string(&DashboardIcon::TrendingUp).unwrap(), r#""trending-up""#);
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result: Result<DashboardIcon, _> = serde_json::from_str(r#""sparkles""#);
        assert!(result.is_err());
    }

    #[test]
    fn donor_type_travels_as_type() {
        let json = serde_json::to_value(DonorInput {
            name: "Acme".into(),
            email: "giving@acme.test".into(),
            donor_type: DonorType::Corporate,
        })
        .unwrap();
        assert_eq!(json["type"], "corporate");
        assert!(json.get("donorType").is_none());
    }

    #[test]
    fn page_envelope_is_camel_case() {
        let page: Page<Item> = serde_json::from_str(r#"{"data":[],"total":0,"page":1,"pageSize":50}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.page_size, 50);
    }

    #[test]
    fn action_result_omits_empty_message() {
        assert_eq!(serde_json::to_string(&ActionResult::ok()).unwrap(), r#"{"success":true}"#);
        let parsed: ActionResult = serde_json::from_str(r#"{"success":false,"message":"no"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("no"));
    }

    #[test]
    fn event_from_input_starts_unregistered() {
        let input = EventInput {
            title: "Beach cleanup".into(),
            capacity: 40,
            ..Default::default()
        };
        let event = Event::from_input("new", &input);
        assert_eq!(event.id, "new");
        assert_eq!(event.registered, 0);
        assert_eq!(event.status, EventStatus::Draft);
    }
}
