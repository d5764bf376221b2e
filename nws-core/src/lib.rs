//! Core library for the `nws-forecast` console.
//!
//! This crate defines:
//! - The NWS HTTP/JSON client and the endpoints we read
//! - Domain models and forecast formatting
//! - The interactive flows (station browsing, manual entry, main loop),
//!   written against the [`Prompt`] and [`JsonSource`] seams
//! - Configuration
//!
//! It is used by `nws-cli`, but the flows run against any `Prompt`/`JsonSource` pair.

pub mod api;
pub mod app;
pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod manual;
pub mod model;
pub mod prompt;

#[cfg(test)]
mod testing;

pub use client::{JsonSource, NwsClient};
pub use config::Config;
pub use error::{NwsError, Result};
pub use model::{Coordinate, ForecastHour, Station, Zone};
pub use prompt::{EXIT_KEYWORD, Prompt};
