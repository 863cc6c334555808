mod client;
mod error;
mod models;
mod resource;

pub use error::{RandomUserError, NO_USERS_MESSAGE};
pub use resource::*;

use client::Client;
use log::*;
use std::time::Duration;

/// Public endpoint used unless configuration says otherwise.
///
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Responsible for asynchronous interaction with the random user API including
/// transformation of response data into display models.
///
pub struct RandomUser {
    client: Client,
}

impl RandomUser {
    /// Returns a new instance for the endpoint.
    ///
    pub fn new(endpoint: &str, timeout: Duration) -> Result<RandomUser, RandomUserError> {
        debug!("Initializing random user client for endpoint {}...", endpoint);
        Ok(RandomUser {
            client: Client::new(endpoint, timeout)?,
        })
    }

    /// Returns the generated people for the request, in response order.
    ///
    pub async fn people(
        &self,
        request: &FetchRequest,
    ) -> Result<Vec<GeneratedPerson>, RandomUserError> {
        debug!(
            "Requesting {} people with nationality '{}' from {}...",
            request.count, request.nationality, self.client.endpoint
        );

        let data = self.client.results(request).await?;

        debug!(
            "Retrieved {} people with nationality '{}'",
            data.len(),
            request.nationality
        );

        Ok(data.into_iter().map(GeneratedPerson::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn random_user(server: &MockServer) -> RandomUser {
        RandomUser::new(&server.url("/api/"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn people_success() -> Result<(), RandomUserError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/api/")
                    .query_param("results", "1")
                    .query_param("nat", "us");
                then.status(200).json_body(json!({
                    "results": [{
                        "nat": "US",
                        "location": {
                            "street": { "number": "12", "name": "Main St" },
                            "state": "CA",
                            "city": "LA",
                            "postcode": "90001",
                            "timezone": { "offset": "-8:00" }
                        },
                        "phone": "555-1234"
                    }]
                }));
            })
            .await;

        let people = random_user(&server)
            .people(&FetchRequest::new("US", 1))
            .await?;
        mock.assert_async().await;

        assert_eq!(
            people,
            vec![GeneratedPerson {
                nat: "US".to_string(),
                street_number: "12".to_string(),
                street_name: "Main St".to_string(),
                state: "CA".to_string(),
                city: "LA".to_string(),
                postcode: "90001".to_string(),
                utc_offset: "-8:00".to_string(),
                phone: "555-1234".to_string(),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn people_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/");
                then.status(500);
            })
            .await;

        let error = random_user(&server)
            .people(&FetchRequest::new("FR", 2))
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert!(matches!(error, RandomUserError::ApiError { status: 500 }));
        assert!(error.user_message().contains("500"));
    }

    #[tokio::test]
    async fn people_empty_results() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/");
                then.status(200).json_body(json!({ "results": [] }));
            })
            .await;

        let error = random_user(&server)
            .people(&FetchRequest::new("NO", 5))
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert!(matches!(error, RandomUserError::EmptyResults));
        assert_eq!(error.user_message(), NO_USERS_MESSAGE);
    }

    #[tokio::test]
    async fn people_malformed_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let error = random_user(&server)
            .people(&FetchRequest::new("NZ", 1))
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert!(matches!(error, RandomUserError::Malformed(_)));
        assert_eq!(error.user_message(), NO_USERS_MESSAGE);
    }

    #[tokio::test]
    async fn people_unreachable_server() {
        let random_user =
            RandomUser::new("http://127.0.0.1:9/api/", Duration::from_secs(2)).unwrap();
        let error = random_user
            .people(&FetchRequest::new("US", 1))
            .await
            .unwrap_err();
        assert!(matches!(error, RandomUserError::HttpRequest(_)));
        assert!(error.user_message().starts_with("API error: "));
    }
}
