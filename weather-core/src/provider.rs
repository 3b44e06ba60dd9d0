use crate::{Config, RawWeatherResponse, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

/// Failures of a single forecast lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API rejected the query (HTTP 400), typically an unknown location.
    #[error("The forecast API rejected the location")]
    BadRequest,

    #[error("Failed to reach the forecast API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode forecast response (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider is not configured: {0}")]
    Config(String),
}

impl WeatherError {
    pub fn is_bad_request(&self) -> bool {
        matches!(self, WeatherError::BadRequest)
    }
}

/// Routing decision taken on the status line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// Show the error indicator; the body is never read.
    BadRequest,
    /// Read and decode the body.
    Proceed,
}

/// Only `400` is singled out; every other status goes on to decoding.
pub fn classify(status: StatusCode) -> ResponseClass {
    if status == StatusCode::BAD_REQUEST { ResponseClass::BadRequest } else { ResponseClass::Proceed }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the forecast for a free-text location, passed through untouched.
    async fn forecast(&self, location: &str) -> Result<RawWeatherResponse, WeatherError>;
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn forecast(&self, location: &str) -> Result<RawWeatherResponse, WeatherError> {
        (**self).forecast(location).await
    }
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let provider =
        WeatherApiProvider::new(api_key.to_owned(), config.base_url().to_owned(), config.timeout())?;
    Ok(Box::new(provider))
}
