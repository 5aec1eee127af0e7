//! Placeholder datasets returned when the backend cannot be reached.
//!
//! Each function builds a fresh value so callers may mutate what they get.

use crate::types::*;

/// Id given to records created while the backend is unreachable.
pub const PENDING_ID: &str = "pending";

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        stats: vec![
            stat("Upcoming Events", "12", Some("+3 this month"), DashboardIcon::Calendar),
            stat("Active Volunteers", "248", Some("+18 this month"), DashboardIcon::Users),
            stat("Donors", "1,024", Some("+42 this quarter"), DashboardIcon::Heart),
            stat("Raised This Year", "$186,400", Some("+12%"), DashboardIcon::DollarSign),
            stat("Items Tracked", "532", None, DashboardIcon::Package),
            stat("Sponsors", "17", None, DashboardIcon::Award),
        ],
        recent_activity: vec![
            activity("act-1", "donation", "Maria Chen donated $250 to Winter Coat Drive", "2024-11-18T14:32:00Z"),
            activity("act-2", "volunteer", "James Okafor signed up for Community Garden Day", "2024-11-18T11:05:00Z"),
            activity("act-3", "event", "Food Bank Saturday was published", "2024-11-17T16:20:00Z"),
            activity("act-4", "sponsor", "Riverside Credit Union renewed at Gold tier", "2024-11-16T09:45:00Z"),
        ],
        upcoming_events: events().into_iter().filter(|e| e.status == EventStatus::Published).collect(),
    }
}

fn stat(label: &str, value: &str, change: Option<&str>, icon: DashboardIcon) -> StatCard {
    StatCard {
        label: label.to_string(),
        value: value.to_string(),
        change: change.map(str::to_string),
        icon,
    }
}

fn activity(id: &str, kind: &str, description: &str, timestamp: &str) -> ActivityEntry {
    ActivityEntry {
        id: id.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "evt-1".into(),
            title: "Food Bank Saturday".into(),
            description: "Sort and pack donations for weekend distribution.".into(),
            date: "2024-12-07T09:00:00Z".into(),
            location: "Eastside Food Bank".into(),
            status: EventStatus::Published,
            capacity: 60,
            registered: 41,
            volunteers_needed: 20,
        },
        Event {
            id: "evt-2".into(),
            title: "Community Garden Day".into(),
            description: "Winter bed preparation and compost turning.".into(),
            date: "2024-12-14T10:00:00Z".into(),
            location: "Maple Street Garden".into(),
            status: EventStatus::Published,
            capacity: 25,
            registered: 18,
            volunteers_needed: 10,
        },
        Event {
            id: "evt-3".into(),
            title: "Winter Coat Drive Gala".into(),
            description: "Annual fundraising dinner for the coat drive.".into(),
            date: "2025-01-18T18:30:00Z".into(),
            location: "Harbor View Hall".into(),
            status: EventStatus::Draft,
            capacity: 200,
            registered: 0,
            volunteers_needed: 15,
        },
        Event {
            id: "evt-4".into(),
            title: "Riverbank Cleanup".into(),
            description: "Litter pickup along the north trail.".into(),
            date: "2024-10-26T08:00:00Z".into(),
            location: "North Trailhead".into(),
            status: EventStatus::Completed,
            capacity: 50,
            registered: 47,
            volunteers_needed: 0,
        },
    ]
}

pub fn registrations() -> Vec<EventRegistration> {
    vec![
        EventRegistration {
            id: "reg-1".into(),
            event_id: "evt-1".into(),
            name: "James Okafor".into(),
            email: "james.okafor@example.org".into(),
            registered_at: "2024-11-10T12:00:00Z".into(),
            checked_in: false,
        },
        EventRegistration {
            id: "reg-2".into(),
            event_id: "evt-1".into(),
            name: "Priya Natarajan".into(),
            email: "priya.n@example.org".into(),
            registered_at: "2024-11-12T08:30:00Z".into(),
            checked_in: false,
        },
    ]
}

pub fn check_in(event_id: &str, volunteer_id: &str) -> CheckIn {
    CheckIn {
        event_id: event_id.to_string(),
        volunteer_id: volunteer_id.to_string(),
        checked_in_at: None,
        success: true,
    }
}

pub fn volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: "vol-1".into(),
            name: "James Okafor".into(),
            email: "james.okafor@example.org".into(),
            phone: Some("555-0142".into()),
            status: VolunteerStatus::Active,
            skills: vec!["driving".into(), "logistics".into()],
            total_hours: 86.5,
            joined_at: "2023-03-14".into(),
        },
        Volunteer {
            id: "vol-2".into(),
            name: "Priya Natarajan".into(),
            email: "priya.n@example.org".into(),
            phone: None,
            status: VolunteerStatus::Active,
            skills: vec!["first aid".into(), "spanish".into()],
            total_hours: 142.0,
            joined_at: "2022-09-02".into(),
        },
        Volunteer {
            id: "vol-3".into(),
            name: "Tom Becker".into(),
            email: "tbecker@example.org".into(),
            phone: Some("555-0199".into()),
            status: VolunteerStatus::Pending,
            skills: vec!["carpentry".into()],
            total_hours: 0.0,
            joined_at: "2024-11-15".into(),
        },
    ]
}

pub fn pending_hours() -> Vec<PendingHours> {
    vec![
        PendingHours {
            id: "hrs-1".into(),
            volunteer_id: "vol-1".into(),
            volunteer_name: "James Okafor".into(),
            event_title: "Riverbank Cleanup".into(),
            hours: 4.0,
            date: "2024-10-26".into(),
        },
        PendingHours {
            id: "hrs-2".into(),
            volunteer_id: "vol-2".into(),
            volunteer_name: "Priya Natarajan".into(),
            event_title: "Riverbank Cleanup".into(),
            hours: 3.5,
            date: "2024-10-26".into(),
        },
    ]
}

pub fn donors() -> Vec<Donor> {
    vec![
        Donor {
            id: "don-1".into(),
            name: "Maria Chen".into(),
            email: "maria.chen@example.org".into(),
            donor_type: DonorType::Individual,
            total_given: 3250.0,
            last_donation: Some("2024-11-18".into()),
        },
        Donor {
            id: "don-2".into(),
            name: "Hollis Family Foundation".into(),
            email: "grants@hollisff.example.org".into(),
            donor_type: DonorType::Foundation,
            total_given: 50000.0,
            last_donation: Some("2024-06-30".into()),
        },
        Donor {
            id: "don-3".into(),
            name: "Brightline Logistics".into(),
            email: "community@brightline.example.com".into(),
            donor_type: DonorType::Corporate,
            total_given: 12000.0,
            last_donation: None,
        },
    ]
}

pub fn donations() -> Vec<Donation> {
    vec![
        Donation {
            id: "dnt-1".into(),
            donor_id: "don-1".into(),
            donor_name: "Maria Chen".into(),
            amount: 250.0,
            campaign_id: Some("cmp-1".into()),
            date: "2024-11-18".into(),
            method: "card".into(),
            receipt_sent: false,
        },
        Donation {
            id: "dnt-2".into(),
            donor_id: "don-2".into(),
            donor_name: "Hollis Family Foundation".into(),
            amount: 25000.0,
            campaign_id: None,
            date: "2024-06-30".into(),
            method: "check".into(),
            receipt_sent: true,
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "cmp-1".into(),
            name: "Winter Coat Drive".into(),
            description: "Warm coats for 500 children before January.".into(),
            goal: 40000.0,
            raised: 27850.0,
            status: CampaignStatus::Active,
            start_date: "2024-10-01".into(),
            end_date: "2025-01-31".into(),
        },
        Campaign {
            id: "cmp-2".into(),
            name: "Garden Expansion".into(),
            description: "Four new raised beds and a tool shed.".into(),
            goal: 12000.0,
            raised: 12000.0,
            status: CampaignStatus::Completed,
            start_date: "2024-03-01".into(),
            end_date: "2024-08-31".into(),
        },
    ]
}

pub fn sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            id: "spn-1".into(),
            name: "Riverside Credit Union".into(),
            tier: SponsorTier::Gold,
            contact_name: "Dana Ruiz".into(),
            contact_email: "dana.ruiz@riverside.example.com".into(),
            total_contributed: 15000.0,
        },
        Sponsor {
            id: "spn-2".into(),
            name: "Northwind Grocers".into(),
            tier: SponsorTier::Silver,
            contact_name: "Ellis Park".into(),
            contact_email: "epark@northwind.example.com".into(),
            total_contributed: 6500.0,
        },
    ]
}

pub fn cash_donations() -> Vec<CashDonation> {
    vec![
        CashDonation {
            id: "cash-1".into(),
            sponsor_id: "spn-1".into(),
            amount: 10000.0,
            date: "2024-02-01".into(),
            note: Some("Annual sponsorship".into()),
        },
        CashDonation {
            id: "cash-2".into(),
            sponsor_id: "spn-1".into(),
            amount: 5000.0,
            date: "2024-09-15".into(),
            note: None,
        },
        CashDonation {
            id: "cash-3".into(),
            sponsor_id: "spn-2".into(),
            amount: 6500.0,
            date: "2024-05-20".into(),
            note: Some("Garden Expansion match".into()),
        },
    ]
}

pub fn items() -> Vec<Item> {
    vec![
        Item {
            id: "itm-1".into(),
            name: "Folding table".into(),
            category: "furniture".into(),
            sku: "FT-6FT".into(),
            quantity: 24,
            condition: "good".into(),
            location: "Warehouse A".into(),
        },
        Item {
            id: "itm-2".into(),
            name: "Pop-up canopy".into(),
            category: "equipment".into(),
            sku: "CAN-10X10".into(),
            quantity: 6,
            condition: "fair".into(),
            location: "Warehouse A".into(),
        },
        Item {
            id: "itm-3".into(),
            name: "Nitrile gloves (box)".into(),
            category: "supplies".into(),
            sku: "GLV-NIT-L".into(),
            quantity: 140,
            condition: "new".into(),
            location: "Supply closet".into(),
        },
    ]
}

pub fn listings() -> Vec<MarketplaceListing> {
    vec![
        MarketplaceListing {
            id: "lst-1".into(),
            vendor_name: "Greenleaf Catering".into(),
            title: "Boxed lunches for volunteer events".into(),
            description: "Vegetarian and vegan options, minimum 20.".into(),
            category: "catering".into(),
            price: 9.5,
            available: true,
        },
        MarketplaceListing {
            id: "lst-2".into(),
            vendor_name: "PrintWorks Co-op".into(),
            title: "Event banners".into(),
            description: "Vinyl banners, 3x6 ft, two-week turnaround.".into(),
            category: "printing".into(),
            price: 85.0,
            available: true,
        },
    ]
}

pub fn marketplace_requests() -> Vec<MarketplaceRequest> {
    vec![MarketplaceRequest {
        id: "req-1".into(),
        listing_id: "lst-1".into(),
        requester: "Food Bank Saturday team".into(),
        quantity: 40,
        status: RequestStatus::Pending,
        created_at: "2024-11-19T10:00:00Z".into(),
    }]
}

pub fn organization() -> Organization {
    Organization {
        name: "ImpactHub Community Alliance".into(),
        mission: "Connecting neighbors, volunteers and donors to meet local needs.".into(),
        email: "hello@impacthub.example.org".into(),
        phone: "555-0100".into(),
        address: "200 Main Street, Springfield".into(),
        website: "https://impacthub.example.org".into(),
        tax_id: "00-0000000".into(),
    }
}

pub fn settings() -> Settings {
    Settings {
        timezone: "America/Chicago".into(),
        currency: "USD".into(),
        email_notifications: true,
        sms_notifications: false,
        default_shift_hours: 3.0,
    }
}

pub fn public_events() -> Vec<PublicEvent> {
    events()
        .into_iter()
        .filter(|e| e.status == EventStatus::Published)
        .map(|e| PublicEvent {
            spots_remaining: e.capacity.saturating_sub(e.registered),
            id: e.id,
            title: e.title,
            description: e.description,
            date: e.date,
            location: e.location,
        })
        .collect()
}

/// The record with `id` from `records`, or a default record carrying `id`.
pub(crate) fn find_or_placeholder<T: WithId>(records: Vec<T>, id: &str) -> T {
    records
        .into_iter()
        .find(|r| r.id() == id)
        .unwrap_or_else(|| T::placeholder(id))
}

/// Records addressed by a string id.
pub(crate) trait WithId: Sized {
    fn id(&self) -> &str;
    fn placeholder(id: &str) -> Self;
}

macro_rules! with_id {
    ($($ty:ty),* $(,)?) => {
        $(impl WithId for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn placeholder(id: &str) -> Self {
                Self { id: id.to_string(), ..Default::default() }
            }
        })*
    };
}

with_id!(Event, Volunteer, Donor, Campaign, Sponsor, Item, MarketplaceListing, PublicEvent);
