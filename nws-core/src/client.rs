use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::fmt::Debug;
use tracing::debug;

use crate::{
    config::Config,
    error::{NwsError, Result},
};

/// Something that can GET a URL and hand back the JSON body as text.
#[async_trait]
pub trait JsonSource: Send + Sync + Debug {
    /// Root of the API that relative endpoints are built from.
    fn base_url(&self) -> &str;

    async fn get_text(&self, url: &str) -> Result<String>;
}

/// The real thing: one reqwest client reused for the whole run.
#[derive(Debug, Clone)]
pub struct NwsClient {
    base_url: String,
    http: Client,
}

impl NwsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }
}

#[async_trait]
impl JsonSource for NwsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        debug!(%url, %status, "GET");

        if !status.is_success() {
            return Err(NwsError::RequestFailed {
                url: url.to_string(),
                status,
            });
        }

        Ok(res.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_base_url() {
        let cfg = Config {
            base_url: "http://localhost:1234".into(),
            ..Config::default()
        };
        let client = NwsClient::new(&cfg).expect("client must build");

        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn invalid_user_agent_fails_to_build() {
        let cfg = Config {
            user_agent: "bad\nagent".into(),
            ..Config::default()
        };

        assert!(matches!(NwsClient::new(&cfg), Err(NwsError::Transport(_))));
    }

    fn client_for(server: &mockito::ServerGuard) -> NwsClient {
        let cfg = Config {
            base_url: server.url(),
            user_agent: "nws-forecast-tests (t@example.com)".into(),
        };
        NwsClient::new(&cfg).expect("client must build")
    }

    #[tokio::test]
    async fn get_sends_identity_and_accept_headers() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"properties":{"forecastHourly":"https://example.test/hourly"}}"#;
        let mock = server
            .mock("GET", "/points/40.73,-73.99")
            .match_header("user-agent", "nws-forecast-tests (t@example.com)")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/geo+json")
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server);
        let url = format!("{}/points/40.73,-73.99", client.base_url());
        let text = client.get_text(&url).await.expect("request must succeed");

        assert_eq!(text, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_request_failed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/zones/forecast/NYZ178/stations")
            .with_status(503)
            .with_body(r#"{"title":"Service Unavailable"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let url = format!("{}/zones/forecast/NYZ178/stations", client.base_url());
        let err = client.get_text(&url).await.unwrap_err();

        match err {
            NwsError::RequestFailed { url: failed, status } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
        mock.assert_async().await;
    }
}
