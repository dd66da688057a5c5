pub mod app;
pub mod coerce;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod infra;
pub mod input;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod types;
