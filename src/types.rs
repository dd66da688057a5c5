use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat, string-typed record read straight off an event page.
///
/// Every field is present; unpopulated text fields are empty strings. Field
/// order here is the column order of the batch CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub external_event_link: String,
    pub event_id: String,
    pub plur_event_link: String,
    pub event_name: String,
    pub event_description: String,
    pub event_date_and_time: String,
    pub event_duration: String,
    pub venue_name: String,
    pub locality: String,
    pub address: String,
    pub zipcode: String,
    pub lat: String,
    pub lon: String,
    pub ticket_amount: String,
    pub guestlist_info: String,
    pub ticket_link: String,
    pub supported_languages: String,
    pub category: String,
    pub recurrence: String,
    pub attendees_count: String,
    pub join_chat_details: String,
    pub policy_and_conditions: String,
    pub frequently_asked_questions: String,
    pub city: String,
    pub state: String,
    pub geolocation: String,
    pub is_recurring: String,
    pub pattern: String,
    pub event_type: String,
    pub sub_category: String,
    pub venue_id: String,
    pub food_available: String,
    pub smoking_allowed: String,
    pub wheelchair_access: String,
    pub parking_available: String,
    pub support_available: String,
    pub layout: String,
    pub pet_friendly: bool,
    pub alcohol_served: String,
    pub minimum_age: String,
    pub tickets_at_venue: String,
    pub prohibited_item_list: String,
    pub washroom_available: String,
    pub online_menu: String,
    pub happy_hours: String,
    pub dance_floor_available: String,
    pub pool_available: String,
    pub is_activity_available: String,
    pub artists: String,
    pub highlight_images: String,
    pub highlight_videos: String,
    pub gallery_images: String,
    pub gallery_videos: String,
    pub kid_friendly: bool,
    pub seating_arrangement: String,
    pub entry_allowed_for: String,
    pub tags: String,
    #[serde(rename = "Plur_json_format")]
    pub plur_json_format: String,
    pub json_file_path: String,
    /// Fetched page content; dropped before the record is retained.
    #[serde(skip)]
    pub raw_html: Option<String>,
}

impl RawEvent {
    /// Empty record for `url` with a fresh event id.
    pub fn new(url: &str) -> Self {
        Self {
            external_event_link: url.to_string(),
            event_id: Uuid::new_v4().to_string(),
            ..Self::blank()
        }
    }

    fn blank() -> Self {
        Self {
            external_event_link: String::new(),
            event_id: String::new(),
            plur_event_link: String::new(),
            event_name: String::new(),
            event_description: String::new(),
            event_date_and_time: String::new(),
            event_duration: String::new(),
            venue_name: String::new(),
            locality: String::new(),
            address: String::new(),
            zipcode: String::new(),
            lat: String::new(),
            lon: String::new(),
            ticket_amount: String::new(),
            guestlist_info: String::new(),
            ticket_link: String::new(),
            supported_languages: String::new(),
            category: String::new(),
            recurrence: String::new(),
            attendees_count: String::new(),
            join_chat_details: String::new(),
            policy_and_conditions: String::new(),
            frequently_asked_questions: String::new(),
            city: String::new(),
            state: String::new(),
            geolocation: String::new(),
            is_recurring: "No".to_string(),
            pattern: String::new(),
            event_type: String::new(),
            sub_category: String::new(),
            venue_id: String::new(),
            food_available: String::new(),
            smoking_allowed: String::new(),
            wheelchair_access: String::new(),
            parking_available: String::new(),
            support_available: String::new(),
            layout: String::new(),
            pet_friendly: false,
            alcohol_served: String::new(),
            minimum_age: String::new(),
            tickets_at_venue: String::new(),
            prohibited_item_list: String::new(),
            washroom_available: String::new(),
            online_menu: String::new(),
            happy_hours: String::new(),
            dance_floor_available: String::new(),
            pool_available: String::new(),
            is_activity_available: String::new(),
            artists: String::new(),
            highlight_images: String::new(),
            highlight_videos: String::new(),
            gallery_images: String::new(),
            gallery_videos: String::new(),
            kid_friendly: false,
            seating_arrangement: String::new(),
            entry_allowed_for: String::new(),
            tags: String::new(),
            plur_json_format: String::new(),
            json_file_path: String::new(),
            raw_html: None,
        }
    }
}

/// Canonical nested event record ("Plur" format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlurEvent {
    pub event_name: String,
    pub event_description: String,
    pub event_date_and_time: String,
    pub event_duration: i64,
    pub venue: PlurVenue,
    pub highlight_image_links: Vec<String>,
    pub gallery_image_links: Vec<String>,
    pub ticket_amount: i64,
    pub ticket_link: String,
    pub supported_languages: Vec<String>,
    pub category: String,
    pub sub_category: String,
    pub event_type: String,
    pub event_features: EventFeatures,
    pub artists: Vec<String>,
    pub sharable_event_og_image_link: String,
    pub attendees_count: i64,
    pub likes_count: i64,
    pub join_chat_details: JoinChatDetails,
    pub policy_and_conditions: Vec<String>,
    pub frequently_asked_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlurVenue {
    pub venue_name: String,
    pub locality: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub geolocation: Geolocation,
    pub layout: String,
}

/// Coordinates; `None` means the page carried no usable value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFeatures {
    pub food_available: bool,
    pub smoking_allowed: bool,
    pub wheelchair_access: bool,
    pub parking_available: bool,
    pub support_available: bool,
    pub pet_friendly: bool,
    pub alcohol_served: bool,
    pub minimum_age: i64,
    pub tickets_at_venue: bool,
    pub washroom_available: bool,
    pub dance_floor_available: bool,
    pub pool_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinChatDetails {
    pub join_chat_link: String,
    pub provider: String,
    pub is_enabled: bool,
}

/// Per-event snapshot persisted alongside the run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub event_id: String,
    pub external_event_link: String,
    pub raw_html: String,
}

/// Run-level counters and the URLs that failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub failed_links: Vec<String>,
}

impl BatchSummary {
    pub fn record_attempt(&mut self) {
        self.total += 1;
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self, url: &str) {
        self.failed += 1;
        self.failed_links.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raw_event_has_defaults_and_unique_id() {
        let a = RawEvent::new("https://example.com/a");
        let b = RawEvent::new("https://example.com/a");
        assert_eq!(a.external_event_link, "https://example.com/a");
        assert_eq!(a.is_recurring, "No");
        assert!(!a.pet_friendly);
        assert!(a.event_name.is_empty());
        assert!(Uuid::parse_str(&a.event_id).is_ok());
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn raw_event_serializes_with_camel_case_keys() {
        let event = RawEvent::new("https://example.com/e");
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("externalEventLink").is_some());
        assert!(value.get("Plur_json_format").is_some());
        assert!(value.get("jsonFilePath").is_some());
        assert!(value.get("rawHtml").is_none());
    }

    #[test]
    fn summary_counts_failures() {
        let mut summary = BatchSummary::default();
        summary.record_attempt();
        summary.record_success();
        summary.record_attempt();
        summary.record_failure("https://example.com/bad");
        assert_eq!(summary.total, 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failed_links, vec!["https://example.com/bad"]);
    }
}
