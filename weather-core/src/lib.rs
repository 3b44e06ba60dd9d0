//! Core library for the `weather` front end.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The forecast API client and its response classifier
//! - Normalization of raw forecast payloads into display records
//! - The page state the front end renders, and the controller driving it
//!
//! It is used by `weather-cli`, but the page model has no terminal dependency
//! and can back any other front end.

pub mod app;
pub mod config;
pub mod model;
pub mod normalize;
pub mod page;
pub mod provider;

pub use app::{App, Outcome, Submission};
pub use config::{Config, ProviderConfig};
pub use model::{NormalizedWeather, RawWeatherResponse, Temperature};
pub use normalize::normalize;
pub use page::{Element, Page};
pub use provider::{ResponseClass, WeatherError, WeatherProvider, classify};
