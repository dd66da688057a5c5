pub mod address;
pub mod extractor;
pub mod features;
pub mod selectors;

pub use extractor::extract_event;
