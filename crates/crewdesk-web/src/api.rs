use async_trait::async_trait;
use crewdesk_core::{
    ChatRequest, ChatResponse, DeskApi, DeskConfig, DeskError, Endpoint, ModelDescriptor,
    ModelListResponse, ResearchRequest, ResearchResult, Result,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

fn http_err(e: impl ToString) -> DeskError {
    DeskError::Http(e.to_string())
}

async fn decode<T: DeserializeOwned>(endpoint: Endpoint, resp: Response) -> Result<T> {
    let status = resp.status();
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(endpoint = endpoint.label(), status, "Failed to read response body: {}", e);
            return Err(http_err(e));
        }
    };

    if !resp.ok() {
        warn!(endpoint = endpoint.label(), status, body = %body, "Non-success response");
        return Err(DeskError::from_status(endpoint, status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Browser [`DeskApi`] over `fetch`.
#[derive(Debug, Clone)]
pub struct GlooDeskApi {
    config: DeskConfig,
}

impl GlooDeskApi {
    pub fn new(config: DeskConfig) -> Self {
        Self { config }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let resp = Request::post(url)
            .json(body)
            .map_err(http_err)?
            .send()
            .await
            .map_err(http_err)?;
        decode(endpoint, resp).await
    }
}

#[async_trait(?Send)]
impl DeskApi for GlooDeskApi {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let resp = Request::get(&self.config.models_url())
            .send()
            .await
            .map_err(http_err)?;
        let list: ModelListResponse = decode(Endpoint::Models, resp).await?;
        Ok(list.models)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.post(Endpoint::Chat, &self.config.chat_url(), request).await
    }

    async fn research(&self, request: &ResearchRequest) -> Result<ResearchResult> {
        self.post(Endpoint::Research, &self.config.research_url(), request).await
    }
}
