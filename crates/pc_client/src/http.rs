//! HTTP decision engine: `POST {base_url}/api/recommend-play`.

use async_trait::async_trait;
use pc_core::{parse_recommendation, RecommendError, RecommendPlayRequest, Recommendation};
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::{ClientConfig, ConfigError};
use crate::engine::DecisionEngine;

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpDecisionEngine {
    http: Client,
    endpoint: Url,
}

impl HttpDecisionEngine {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.recommend_url().clone(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(err: reqwest::Error) -> RecommendError {
    if err.is_timeout() {
        RecommendError::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        RecommendError::Transport(format!("decision engine unreachable: {err}"))
    } else {
        RecommendError::Transport(err.to_string())
    }
}

#[async_trait]
impl DecisionEngine for HttpDecisionEngine {
    async fn recommend(
        &self,
        request: &RecommendPlayRequest,
    ) -> Result<Recommendation, RecommendError> {
        debug!(endpoint = %self.endpoint, "posting recommendation request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_recommendation(&body)
    }
}
