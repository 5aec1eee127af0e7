use crate::models::*;

/// In-memory backend state.
#[derive(Debug, Clone)]
pub struct Store {
    pub events: Vec<Event>,
    pub registrations: Vec<Registration>,
    pub volunteers: Vec<Volunteer>,
    pub donors: Vec<Donor>,
    pub donations: Vec<Donation>,
    pub sponsors: Vec<Sponsor>,
    pub cash_donations: Vec<CashDonation>,
    pub items: Vec<Item>,
    pub organization: Organization,
    pub settings: Settings,
}

impl Store {
    /// Small dataset so list endpoints have something to return.
    pub fn seeded() -> Self {
        Self {
            events: vec![
                Event {
                    id: "srv-evt-1".into(),
                    title: "Server Food Drive".into(),
                    description: "Seeded by the mock backend.".into(),
                    date: "2025-02-01T09:00:00Z".into(),
                    location: "Community Center".into(),
                    status: "published".into(),
                    capacity: 30,
                    registered: 12,
                    volunteers_needed: 6,
                },
                Event {
                    id: "srv-evt-2".into(),
                    title: "Server Planning Session".into(),
                    description: "Internal planning, not public.".into(),
                    date: "2025-02-10T17:00:00Z".into(),
                    location: "Office".into(),
                    status: "draft".into(),
                    capacity: 10,
                    registered: 0,
                    volunteers_needed: 0,
                },
            ],
            registrations: vec![Registration {
                id: "srv-reg-1".into(),
                event_id: "srv-evt-1".into(),
                name: "Avery Live".into(),
                email: "avery@example.org".into(),
                registered_at: "2025-01-05T12:00:00Z".into(),
                checked_in: false,
            }],
            volunteers: vec![Volunteer {
                id: "srv-vol-1".into(),
                name: "Avery Live".into(),
                email: "avery@example.org".into(),
                phone: None,
                status: "active".into(),
                skills: vec!["cooking".into()],
                total_hours: 12.0,
                joined_at: "2024-01-01".into(),
            }],
            donors: vec![Donor {
                id: "srv-don-1".into(),
                name: "Live Donor".into(),
                email: "donor@example.org".into(),
                donor_type: "individual".into(),
                total_given: 100.0,
                last_donation: Some("2025-01-02".into()),
            }],
            donations: vec![Donation {
                id: "srv-dnt-1".into(),
                donor_id: "srv-don-1".into(),
                donor_name: "Live Donor".into(),
                amount: 100.0,
                campaign_id: None,
                date: "2025-01-02".into(),
                method: "card".into(),
                receipt_sent: false,
            }],
            sponsors: vec![Sponsor {
                id: "srv-spn-1".into(),
                name: "Live Sponsor".into(),
                tier: "gold".into(),
                contact_name: "Sam".into(),
                contact_email: "sam@example.com".into(),
                total_contributed: 2500.0,
            }],
            cash_donations: vec![CashDonation {
                id: "srv-cash-1".into(),
                sponsor_id: "srv-spn-1".into(),
                amount: 2500.0,
                date: "2025-01-03".into(),
                note: None,
            }],
            items: vec![Item {
                id: "srv-itm-1".into(),
                name: "Server Ladder".into(),
                category: "equipment".into(),
                sku: "LAD-8".into(),
                quantity: 2,
                condition: "good".into(),
                location: "Shed".into(),
            }],
            organization: Organization {
                name: "Live Org".into(),
                mission: "Served by the mock backend.".into(),
                email: "org@example.org".into(),
                phone: "555-0000".into(),
                address: "1 Server Way".into(),
                website: "https://live.example.org".into(),
                tax_id: "11-1111111".into(),
            },
            settings: Settings {
                timezone: "UTC".into(),
                currency: "USD".into(),
                email_notifications: false,
                sms_notifications: false,
                default_shift_hours: 4.0,
            },
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        let raised: f64 = self.donations.iter().map(|d| d.amount).sum();
        Dashboard {
            stats: vec![
                stat("Upcoming Events", self.published().count().to_string(), "calendar"),
                stat("Active Volunteers", self.volunteers.len().to_string(), "users"),
                stat("Donors", self.donors.len().to_string(), "heart"),
                stat("Raised This Year", format!("${raised:.0}"), "dollar-sign"),
                stat("Items Tracked", self.items.len().to_string(), "package"),
                stat("Sponsors", self.sponsors.len().to_string(), "award"),
            ],
            recent_activity: Vec::new(),
            upcoming_events: self.published().cloned().collect(),
        }
    }

    pub fn published(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.status == "published")
    }
}

fn stat(label: &str, value: String, icon: &str) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
        change: None,
        icon: icon.to_string(),
    }
}
