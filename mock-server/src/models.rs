use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    50
}

impl PageQuery {
    pub fn paginate<T: Clone>(&self, records: &[T]) -> Page<T> {
        let page = self.page.max(1);
        let page_size = self.page_size.clamp(1, 200);
        let data = records
            .iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();
        Page {
            data,
            total: records.len(),
            page,
            page_size,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub status: String,
    pub capacity: u32,
    pub registered: u32,
    pub volunteers_needed: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub volunteers_needed: u32,
    #[serde(default = "draft")]
    pub status: String,
}

fn draft() -> String {
    "draft".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub registered_at: String,
    pub checked_in: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInInput {
    pub volunteer_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub event_id: String,
    pub volunteer_id: String,
    pub checked_in_at: Option<String>,
    pub success: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub total_hours: f64,
    pub joined_at: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub donor_type: String,
    pub total_given: f64,
    pub last_donation: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "type", default = "individual")]
    pub donor_type: String,
}

fn individual() -> String {
    "individual".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub amount: f64,
    pub campaign_id: Option<String>,
    pub date: String,
    pub method: String,
    pub receipt_sent: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    pub donor_id: String,
    pub amount: f64,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub method: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub contact_name: String,
    pub contact_email: String,
    pub total_contributed: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDonation {
    pub id: String,
    pub sponsor_id: String,
    pub amount: f64,
    pub date: String,
    pub note: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDonationInput {
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    pub category: String,
    pub sku: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub timezone: String,
    pub currency: String,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub default_shift_hours: f64,
}

/// Partial settings update; absent fields stay unchanged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub default_shift_hours: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub spots_remaining: u32,
}

impl From<&Event> for PublicEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            spots_remaining: event.capacity.saturating_sub(event.registered),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
    pub icon: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<serde_json::Value>,
    pub upcoming_events: Vec<Event>,
}
