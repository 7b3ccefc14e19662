//! Game server HTTP client implementation.

use async_trait::async_trait;
use game_core::{Attributes, GameState, Position};
use runtime::{GameService, Result, ServiceError, SkillUse};
use serde::Serialize;

use crate::wire::{Identifiers, Message, SkillUseBody};

/// Header carrying the access credential.
pub const API_KEY_HEADER: &str = "X-API-key";

/// Connection settings for [`HttpGameService`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the game server, without a trailing slash.
    pub host: String,
    pub api_key: String,
    /// Ask the server to hold `fetch_state` until the next tick.
    pub blocking: bool,
}

/// Game server client using the JSON HTTP API.
///
/// Every call is a single request; failures are mapped onto
/// [`ServiceError`] and never retried here.
#[derive(Clone)]
pub struct HttpGameService {
    /// Base URL of the game server
    base_url: String,

    api_key: String,

    /// HTTP client
    http_client: reqwest::Client,

    blocking: bool,
}

impl HttpGameService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            base_url: config.host.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            http_client: reqwest::Client::new(),
            blocking: config.blocking,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and discard the response payload.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        tracing::debug!("POST {}", path);
        let response = self
            .http_client
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response).await.map(|_| ())
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn fetch_state(&self) -> Result<GameState> {
        let response = self
            .http_client
            .get(self.url("/v1/game"))
            .query(&[("blocking", self.blocking)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|error| ServiceError::Decode(error.to_string()))
    }

    async fn move_to(&self, position: Position) -> Result<()> {
        self.post("/v1/move", &position).await
    }

    async fn use_skill(&self, skill: &SkillUse) -> Result<()> {
        self.post("/v1/skill", &SkillUseBody::from(skill)).await
    }

    async fn buy(&self, item_ids: &[String]) -> Result<()> {
        self.post("/v1/buy", &Identifiers { ids: item_ids }).await
    }

    async fn assign_stat_points(&self, points: &Attributes) -> Result<()> {
        self.post("/v1/assign-skill-points", points).await
    }

    fn broadcast(&self, text: String) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(error) = client.post("/v1/yell", &Message { text }).await {
                tracing::debug!("Broadcast failed: {}", error);
            }
        });
    }
}

fn transport_error(error: reqwest::Error) -> ServiceError {
    ServiceError::Transport(error.to_string())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ServiceError::Rejected {
        status: status.as_u16(),
        message,
    })
}
