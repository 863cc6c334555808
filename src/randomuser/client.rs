//! HTTP client for random user API requests.
//!
//! This module provides a thin wrapper around `reqwest` that issues the single
//! GET request the widget needs and checks the response shape.

use super::error::RandomUserError;
use super::models::{PersonModel, ResultsWrapper};
use super::resource::FetchRequest;
use std::time::Duration;

/// Makes requests to the random user endpoint and conforms responses to models.
///
pub struct Client {
    pub(crate) endpoint: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the endpoint with the given request timeout.
    ///
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RandomUserError> {
        Ok(Client {
            endpoint: endpoint.to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Return the raw result records for the request or an error.
    ///
    pub(crate) async fn results(
        &self,
        request: &FetchRequest,
    ) -> Result<Vec<PersonModel>, RandomUserError> {
        let count = request.count.to_string();
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("results", count.as_str()),
                ("nat", request.nationality.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "API request failed with status {}: {}",
                status,
                response_text
            );
            return Err(RandomUserError::ApiError {
                status: status.as_u16(),
            });
        }

        let response_bytes = response.bytes().await?;
        let wrapper = match serde_json::from_slice::<ResultsWrapper>(&response_bytes) {
            Ok(wrapper) => wrapper,
            Err(e) => {
                log::error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                return Err(e.into());
            }
        };

        if wrapper.results.is_empty() {
            log::warn!(
                "API returned no results for nationality '{}'",
                request.nationality
            );
            return Err(RandomUserError::EmptyResults);
        }

        Ok(wrapper.results)
    }
}
