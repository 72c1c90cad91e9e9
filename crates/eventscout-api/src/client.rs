//! HTTP client wrapper for the Ticketmaster Discovery API.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::discovery::{DiscoveryParams, DiscoveryResponse, EventQuery};
use crate::error::{ApiError, Error, Result};
use crate::models::Event;

/// Base URL for the Discovery API v2.
const BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Client for the Ticketmaster Discovery API.
#[derive(Clone)]
pub struct TicketmasterClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl TicketmasterClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a new client with a custom base URL (used against mock servers).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches for events matching the query.
    ///
    /// An empty result page is not an error: the API omits `_embedded`
    /// entirely when nothing matches, which maps to an empty list.
    pub async fn search_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        let params = DiscoveryParams::from(query);
        let response: DiscoveryResponse = self.get("/events.json", &params).await?;
        let events = response.into_events();
        tracing::debug!(count = events.len(), "fetched events from Ticketmaster");
        Ok(events)
    }

    /// Performs a GET request with the API key and the given query parameters.
    pub async fn get<T: DeserializeOwned, Q: Serialize>(&self, endpoint: &str, query: &Q) -> Result<T> {
        let params = serde_urlencoded::to_string(query)?;
        let key = serde_urlencoded::to_string([("apikey", self.api_key.as_str())])?;

        let url = if params.is_empty() {
            format!("{}{}?{}", self.base_url, endpoint, key)
        } else {
            format!("{}{}?{}&{}", self.base_url, endpoint, params, key)
        };

        tracing::debug!(endpoint, params = %params, "GET");

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                Error::Api(ApiError::Network {
                    message: e.to_string(),
                })
            } else {
                Error::Request(e)
            }
        })?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let message = response.text().await.unwrap_or_default();

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: if message.is_empty() {
                    "API key rejected".to_string()
                } else {
                    message
                },
            },
            404 => ApiError::NotFound {
                resource: "events".to_string(),
            },
            429 => ApiError::RateLimit { retry_after },
            400 => ApiError::Validation {
                field: None,
                message: if message.is_empty() {
                    "Bad request".to_string()
                } else {
                    message
                },
            },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

impl fmt::Debug for TicketmasterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketmasterClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_stores_api_key() {
        let client = TicketmasterClient::new("my-secret-key");
        assert_eq!(client.api_key(), "my-secret-key");
    }

    #[test]
    fn test_client_debug_redacts_key() {
        let client = TicketmasterClient::new("my-secret-key");
        let debug_str = format!("{:?}", client);
        assert!(
            !debug_str.contains("my-secret-key"),
            "API key should be redacted in debug output"
        );
    }

    #[test]
    fn test_client_default_base_url() {
        let client = TicketmasterClient::new("key");
        assert_eq!(client.base_url(), BASE_URL);
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let client = TicketmasterClient::with_base_url("key", "https://test.example.com");
        assert_eq!(client.base_url(), "https://test.example.com");
    }
}
