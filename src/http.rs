use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::HttpError;

pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv/helix";

/// HTTP collaborator used by channels to look up live stream data.
#[async_trait]
pub trait StreamLookup: Send + Sync {
    /// Returns the active stream for `channel_name`, or `None` when offline.
    async fn get_stream_info(&self, channel_name: &str) -> Result<Option<Value>, HttpError>;
}

#[derive(Deserialize)]
struct StreamsResponse {
    #[serde(default)]
    data: Vec<Value>,
}

pub struct HelixClient {
    api_base: String,
    app_access_token: Option<String>,
    client: reqwest::Client,
    client_id: String,
}

impl HelixClient {
    pub fn new(client_id: String, app_access_token: Option<String>, api_base: Option<String>) -> Self {
        Self {
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            app_access_token,
            client: reqwest::Client::new(),
            client_id,
        }
    }
}

#[async_trait]
impl StreamLookup for HelixClient {
    async fn get_stream_info(&self, channel_name: &str) -> Result<Option<Value>, HttpError> {
        let login = channel_name.trim_start_matches('#');
        let url = format!("{}/streams", self.api_base.trim_end_matches('/'));

        log::debug!("Fetching stream info for '{}'", login);

        let mut request = self.client.get(url.as_str())
            .query(&[("user_login", login)])
            .header("Client-ID", self.client_id.as_str());

        if let Some(token) = &self.app_access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status { status: status.as_u16(), body });
        }

        let streams: StreamsResponse = response.json().await?;

        Ok(streams.data.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_payload_yields_first_entry() {
        let payload = r#"{"data":[{"user_login":"art","title":"Painting"}],"pagination":{}}"#;
        let streams: StreamsResponse = serde_json::from_str(payload).unwrap();

        let first = streams.data.into_iter().next().unwrap();
        assert_eq!(first["title"], "Painting");
    }

    #[test]
    fn empty_streams_payload_means_offline() {
        let streams: StreamsResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(streams.data.is_empty());

        let streams: StreamsResponse = serde_json::from_str("{}").unwrap();
        assert!(streams.data.is_empty());
    }

    #[test]
    fn api_base_defaults_to_helix() {
        let client = HelixClient::new("id".to_string(), None, None);
        assert_eq!(client.api_base, DEFAULT_API_BASE);
    }
}
