//! Client-side list filters.
//!
//! The backend's list endpoints are always requested with the same fixed
//! pagination query; filters never reach the wire, and the list accessors
//! return the live body or fallback untouched. Callers narrow the result
//! themselves with `ListFilter::apply`.

use crate::types::{Donor, DonorType, Event, EventStatus, Item, Volunteer, VolunteerStatus};

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub trait ListFilter<T> {
    fn matches(&self, record: &T) -> bool;

    fn apply(&self, records: Vec<T>) -> Vec<T> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub search: String,
    pub status: Option<EventStatus>,
}

impl ListFilter<Event> for EventFilters {
    fn matches(&self, event: &Event) -> bool {
        self.status.is_none_or(|s| s == event.status)
            && (contains_ci(&event.title, &self.search) || contains_ci(&event.location, &self.search))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerFilters {
    pub search: String,
    pub status: Option<VolunteerStatus>,
    pub skill: Option<String>,
}

impl ListFilter<Volunteer> for VolunteerFilters {
    fn matches(&self, volunteer: &Volunteer) -> bool {
        let skill_ok = match &self.skill {
            Some(skill) => volunteer.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)),
            None => true,
        };
        skill_ok
            && self.status.is_none_or(|s| s == volunteer.status)
            && (contains_ci(&volunteer.name, &self.search) || contains_ci(&volunteer.email, &self.search))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilters {
    pub search: String,
    pub donor_type: Option<DonorType>,
}

impl ListFilter<Donor> for DonorFilters {
    fn matches(&self, donor: &Donor) -> bool {
        self.donor_type.is_none_or(|t| t == donor.donor_type)
            && (contains_ci(&donor.name, &self.search) || contains_ci(&donor.email, &self.search))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilters {
    pub search: String,
    pub category: Option<String>,
}

impl ListFilter<Item> for ItemFilters {
    fn matches(&self, item: &Item) -> bool {
        let category_ok = match &self.category {
            Some(category) => item.category.eq_ignore_ascii_case(category),
            None => true,
        };
        category_ok && (contains_ci(&item.name, &self.search) || contains_ci(&item.sku, &self.search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn default_filters_keep_everything() {
        assert_eq!(EventFilters::default().apply(fallback::events()).len(), fallback::events().len());
        assert_eq!(ItemFilters::default().apply(fallback::items()).len(), fallback::items().len());
    }

    #[test]
    fn event_search_and_status() {
        let filters = EventFilters {
            search: "GARDEN".into(),
            status: Some(EventStatus::Published),
        };
        let found = filters.apply(fallback::events());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "evt-2");

        let drafts = EventFilters {
            status: Some(EventStatus::Draft),
            ..Default::default()
        };
        assert!(drafts.apply(fallback::events()).iter().all(|e| e.status == EventStatus::Draft));
    }

    #[test]
    fn volunteer_skill_is_case_insensitive() {
        let filters = VolunteerFilters {
            skill: Some("First Aid".into()),
            ..Default::default()
        };
        let found = filters.apply(fallback::volunteers());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Priya Natarajan");
    }

    #[test]
    fn donor_type_filter() {
        let filters = DonorFilters {
            donor_type: Some(DonorType::Corporate),
            ..Default::default()
        };
        let found = filters.apply(fallback::donors());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "don-3");
    }

    #[test]
    fn item_search_matches_sku() {
        let filters = ItemFilters {
            search: "can-10".into(),
            category: None,
        };
        let found = filters.apply(fallback::items());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pop-up canopy");
    }
}
