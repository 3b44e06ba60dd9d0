//! Submission controller: input capture, fetch, classification and page update.

use tracing::{info, warn};

use crate::{
    model::{NormalizedWeather, RawWeatherResponse},
    normalize::normalize,
    page::Page,
    provider::{WeatherError, WeatherProvider},
};

/// A submission in flight, identified by its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub location: String,
}

/// What a finished submission did to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Weather was shown and the form was cleared.
    Displayed(NormalizedWeather),
    /// The API rejected the location; the error indicator is shown.
    Rejected,
    /// The lookup failed for another reason; the error indicator is shown.
    Failed(String),
    /// A newer submission was already applied, so this result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct App<P> {
    provider: P,
    page: Page,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl<P: WeatherProvider> App<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, page: Page::new(), next_seq: 0, applied_seq: None }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Capture the current input and hand out a ticket for it.
    pub fn begin_submit(&mut self) -> Submission {
        let seq = self.next_seq;
        self.next_seq += 1;
        Submission { seq, location: self.page.capture_input() }
    }

    /// Apply the result of a lookup to the page.
    pub fn finish(
        &mut self,
        submission: &Submission,
        result: Result<RawWeatherResponse, WeatherError>,
    ) -> Outcome {
        if self.applied_seq.is_some_and(|applied| applied > submission.seq) {
            info!(seq = submission.seq, "dropping result of superseded submission");
            return Outcome::Stale;
        }
        self.applied_seq = Some(submission.seq);

        match result {
            Ok(raw) => {
                self.page.hide_error();
                let data = normalize(&raw);
                self.page.display(&data);
                self.page.reset_form();
                info!(location = %data.location, region = %data.region, "weather displayed");
                Outcome::Displayed(data)
            }
            Err(WeatherError::BadRequest) => {
                self.page.show_error();
                Outcome::Rejected
            }
            Err(err) => {
                warn!(location = %submission.location, error = %err, "weather lookup failed");
                self.page.show_error();
                Outcome::Failed(err.to_string())
            }
        }
    }

    /// Submit the current input and wait for the result.
    pub async fn submit(&mut self) -> Outcome {
        let submission = self.begin_submit();
        let result = self.provider.forecast(&submission.location).await;
        self.finish(&submission, result)
    }
}
