//! Selector table for HighApe event pages.
//!
//! Each field lists its candidate selectors in priority order; the mobile
//! layout comes first, the desktop layout second.

use crate::error::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};

/// Fields populated directly from page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EventName,
    VenueName,
    EventDescription,
    EventDateAndTime,
    TicketAmount,
    TicketLink,
    Category,
    Artists,
    HighlightImages,
    Address,
    Lat,
    Lon,
}

/// How a matched element is turned into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    /// Stripped text of the first candidate with non-empty text.
    Text,
    /// Attribute of the first matching element.
    Attr(&'static str),
    /// Texts of every element matched, joined with ", ".
    JoinedText,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub chain: SelectorChain,
    pub read: Read,
}

/// Ordered candidate selectors, evaluated first-match-wins.
#[derive(Debug, Clone, Copy)]
pub struct SelectorChain {
    candidates: &'static [&'static str],
}

impl SelectorChain {
    pub const fn new(candidates: &'static [&'static str]) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &'static [&'static str] {
        self.candidates
    }

    /// Stripped text of the first candidate whose element has any text.
    pub fn text(&self, doc: &Html) -> Result<String> {
        for css in self.candidates {
            let selector = compile(css)?;
            if let Some(el) = doc.select(&selector).next() {
                let text = element_text(&el);
                if !text.is_empty() {
                    return Ok(text);
                }
            }
        }
        Ok(String::new())
    }

    /// Attribute value from the first candidate element carrying it.
    pub fn attr(&self, doc: &Html, name: &str) -> Result<String> {
        for css in self.candidates {
            let selector = compile(css)?;
            if let Some(el) = doc.select(&selector).next() {
                if let Some(value) = el.value().attr(name) {
                    return Ok(value.to_string());
                }
            }
        }
        Ok(String::new())
    }

    /// Every element matched by the first candidate that matches anything.
    pub fn elements<'a>(&self, doc: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        for css in self.candidates {
            let selector = compile(css)?;
            let found: Vec<_> = doc.select(&selector).collect();
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    pub fn read(&self, doc: &Html, read: Read) -> Result<String> {
        match read {
            Read::Text => self.text(doc),
            Read::Attr(name) => self.attr(doc, name),
            Read::JoinedText => Ok(self
                .elements(doc)?
                .iter()
                .map(element_text)
                .collect::<Vec<_>>()
                .join(crate::constants::LIST_SEPARATOR)),
        }
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScraperError::Selector(css.to_string()))
}

/// Element text with each text node trimmed and blanks dropped.
pub fn element_text(el: &ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Untrimmed element text, as used for keyword scanning.
pub fn element_raw_text(el: &ElementRef) -> String {
    el.text().collect()
}

pub const POLICY_TERMS: SelectorChain = SelectorChain::new(&["#tnc ul li"]);

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::EventName,
        chain: SelectorChain::new(&["h1.mob-event-name-heading", "h1.event-name-heading"]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::VenueName,
        chain: SelectorChain::new(&[
            "h2.mob-venue-name-details-event",
            "h2.venue-name-details-event",
        ]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::EventDescription,
        chain: SelectorChain::new(&["#desc .event-content-div"]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::EventDateAndTime,
        chain: SelectorChain::new(&["div.quick_look_divs:nth-child(2) span.details"]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::TicketAmount,
        chain: SelectorChain::new(&["div.quick_look_divs:nth-child(3) span.details"]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::TicketLink,
        chain: SelectorChain::new(&["a#book_thru_me"]),
        read: Read::Attr("href"),
    },
    FieldRule {
        field: Field::Category,
        chain: SelectorChain::new(&["div.quick_look_divs h4.category_text"]),
        read: Read::JoinedText,
    },
    FieldRule {
        field: Field::Artists,
        chain: SelectorChain::new(&["#artist h3"]),
        read: Read::JoinedText,
    },
    FieldRule {
        field: Field::HighlightImages,
        chain: SelectorChain::new(&["#image_carousel_web img.img-background-events"]),
        read: Read::Attr("src"),
    },
    FieldRule {
        field: Field::Address,
        chain: SelectorChain::new(&["#venue .address p"]),
        read: Read::Text,
    },
    FieldRule {
        field: Field::Lat,
        chain: SelectorChain::new(&["#venue_lat"]),
        read: Read::Attr("value"),
    },
    FieldRule {
        field: Field::Lon,
        chain: SelectorChain::new(&["#venue_lng"]),
        read: Read::Attr("value"),
    },
];
