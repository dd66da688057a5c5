//! Raw-to-canonical event mapping.

use crate::coerce::{singleton_list, split_list, to_float, to_int, yes_flag};
use crate::constants::{DEFAULT_LANGUAGE, LIST_SEPARATOR};
use crate::types::{
    EventFeatures, Geolocation, JoinChatDetails, PlurEvent, PlurVenue, RawEvent,
};

/// Derive the canonical record. Never fails; unusable values fall back to
/// the coercion defaults.
pub fn to_plur_event(event: &RawEvent) -> PlurEvent {
    PlurEvent {
        event_name: event.event_name.clone(),
        event_description: event.event_description.clone(),
        event_date_and_time: event.event_date_and_time.clone(),
        event_duration: to_int(&event.event_duration),
        venue: PlurVenue {
            venue_name: event.venue_name.clone(),
            locality: event.locality.clone(),
            address: event.address.clone(),
            city: event.city.clone(),
            state: event.state.clone(),
            zipcode: event.zipcode.clone(),
            geolocation: Geolocation {
                lat: to_float(&event.lat),
                lon: to_float(&event.lon),
            },
            layout: event.layout.clone(),
        },
        highlight_image_links: singleton_list(&event.highlight_images),
        gallery_image_links: singleton_list(&event.highlight_images),
        ticket_amount: to_int(&event.ticket_amount),
        ticket_link: event.ticket_link.clone(),
        supported_languages: vec![DEFAULT_LANGUAGE.to_string()],
        category: event.category.clone(),
        sub_category: event.sub_category.clone(),
        event_type: event.event_type.clone(),
        event_features: features(event),
        artists: split_list(&event.artists, LIST_SEPARATOR),
        sharable_event_og_image_link: event.highlight_images.clone(),
        attendees_count: to_int(&event.attendees_count),
        likes_count: 0,
        join_chat_details: JoinChatDetails::default(),
        policy_and_conditions: split_list(&event.policy_and_conditions, "\n"),
        frequently_asked_questions: Vec::new(),
    }
}

fn features(event: &RawEvent) -> EventFeatures {
    EventFeatures {
        food_available: yes_flag(&event.food_available),
        smoking_allowed: yes_flag(&event.smoking_allowed),
        wheelchair_access: yes_flag(&event.wheelchair_access),
        parking_available: yes_flag(&event.parking_available),
        support_available: yes_flag(&event.support_available),
        pet_friendly: event.pet_friendly,
        alcohol_served: yes_flag(&event.alcohol_served),
        minimum_age: to_int(&event.minimum_age),
        tickets_at_venue: yes_flag(&event.tickets_at_venue),
        washroom_available: yes_flag(&event.washroom_available),
        dance_floor_available: yes_flag(&event.dance_floor_available),
        pool_available: yes_flag(&event.pool_available),
    }
}
