//! Native [`DeskApi`] over reqwest, for driving a `Desk` outside the browser.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::{
    ChatRequest, ChatResponse, DeskApi, DeskConfig, DeskError, Endpoint, ModelDescriptor,
    ModelListResponse, ResearchRequest, ResearchResult, Result,
};

#[derive(Debug, Clone)]
pub struct HttpDeskApi {
    client: reqwest::Client,
    config: DeskConfig,
}

impl HttpDeskApi {
    /// `config.api_base` must be an absolute URL such as `http://localhost:8000`.
    pub fn new(config: DeskConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn decode<T: DeserializeOwned>(endpoint: Endpoint, resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DeskError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(endpoint = endpoint.label(), status = status.as_u16(), body = %body, "Non-success response");
            return Err(DeskError::from_status(endpoint, status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DeskError::Http(e.to_string()))?;
        Self::decode(endpoint, resp).await
    }
}

#[async_trait(?Send)]
impl DeskApi for HttpDeskApi {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let resp = self
            .client
            .get(self.config.models_url())
            .send()
            .await
            .map_err(|e| DeskError::Http(e.to_string()))?;
        let list: ModelListResponse = Self::decode(Endpoint::Models, resp).await?;
        Ok(list.models)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.post(Endpoint::Chat, &self.config.chat_url(), request).await
    }

    async fn research(&self, request: &ResearchRequest) -> Result<ResearchResult> {
        self.post(Endpoint::Research, &self.config.research_url(), request).await
    }
}
