use crate::constants::FREE_ENTRY;
use crate::error::Result;
use crate::extract::address::{parse_address, strip_venue_prefix};
use crate::extract::features::{apply_policy_flags, number_terms};
use crate::extract::selectors::{
    element_raw_text, element_text, Field, FIELD_RULES, POLICY_TERMS,
};
use crate::types::RawEvent;
use scraper::Html;
use tracing::debug;

/// Build a [`RawEvent`] for `url` from its page content.
///
/// Missing elements leave their fields empty; the only error is a selector
/// that fails to compile. The page content is kept on the record until the
/// caller drops it.
pub fn extract_event(url: &str, html: &str) -> Result<RawEvent> {
    let doc = Html::parse_document(html);
    let mut event = RawEvent::new(url);

    for rule in FIELD_RULES {
        *field_mut(&mut event, rule.field) = rule.chain.read(&doc, rule.read)?;
    }

    event.venue_name = strip_venue_prefix(&event.venue_name);

    if event.ticket_amount.is_empty() {
        event.ticket_amount = FREE_ENTRY.to_string();
    }

    let address = parse_address(&event.address);
    event.zipcode = address.zipcode;
    event.locality = address.locality;
    event.city = address.city;
    event.state = address.state;

    event.geolocation = format!("{},{}", event.lat, event.lon);

    let terms = POLICY_TERMS.elements(&doc)?;
    let term_lines: Vec<String> = terms.iter().map(element_text).collect();
    let term_texts: Vec<String> = terms.iter().map(element_raw_text).collect();
    event.policy_and_conditions = number_terms(&term_lines);
    apply_policy_flags(&mut event, &term_texts);

    debug!(
        event_id = %event.event_id,
        name = %event.event_name,
        terms = terms.len(),
        "Extracted event fields"
    );

    event.raw_html = Some(html.to_string());
    Ok(event)
}

fn field_mut(event: &mut RawEvent, field: Field) -> &mut String {
    match field {
        Field::EventName => &mut event.event_name,
        Field::VenueName => &mut event.venue_name,
        Field::EventDescription => &mut event.event_description,
        Field::EventDateAndTime => &mut event.event_date_and_time,
        Field::TicketAmount => &mut event.ticket_amount,
        Field::TicketLink => &mut event.ticket_link,
        Field::Category => &mut event.category,
        Field::Artists => &mut event.artists,
        Field::HighlightImages => &mut event.highlight_images,
        Field::Address => &mut event.address,
        Field::Lat => &mut event.lat,
        Field::Lon => &mut event.lon,
    }
}
