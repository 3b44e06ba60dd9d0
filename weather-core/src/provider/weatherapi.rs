use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    model::RawWeatherResponse,
    provider::{ResponseClass, WeatherError, classify},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { api_key, base_url, http })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    #[instrument(skip(self))]
    async fn forecast(&self, location: &str) -> Result<RawWeatherResponse, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::Config("empty API key".to_string()));
        }

        let res = self
            .http
            .get(self.forecast_url())
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        debug!(%status, "forecast response received");

        if classify(status) == ResponseClass::BadRequest {
            return Err(WeatherError::BadRequest);
        }

        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| WeatherError::Decode { status, source })
    }
}
