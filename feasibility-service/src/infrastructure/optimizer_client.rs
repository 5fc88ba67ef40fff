use async_trait::async_trait;
use feasibility_engine::wire::{
    FeasibilityPrecheckRequest, FeasibilityPrecheckResponse, GenerateRequest, GenerateResponse,
};
use shared::DomainResult;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Client-side seam onto the external optimizer service, split as a
/// trait so handlers can be tested against a mock rather than a live
/// service.
///
/// The optimizer itself is out of scope here — this crate only proxies
/// `/generate` and `/check-feasibility`.
#[async_trait]
pub trait OptimizerClient: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateRequest,
        cancellation: CancellationToken,
    ) -> DomainResult<GenerateResponse>;

    async fn check_feasibility(
        &self,
        request: &FeasibilityPrecheckRequest,
        cancellation: CancellationToken,
    ) -> DomainResult<FeasibilityPrecheckResponse>;
}

pub struct ReqwestOptimizerClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestOptimizerClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client configuration is static and always valid");
        Self { base_url, client }
    }

    async fn post_json<Req: serde::Serialize + Sync, Res: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
        cancellation: CancellationToken,
    ) -> DomainResult<Res> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.post(&url).json(body).send();

        let response = tokio::select! {
            result = request => result.map_err(|e| shared::DomainError::ExternalServiceError(e.to_string()))?,
            _ = cancellation.cancelled() => {
                return Err(shared::DomainError::ExternalServiceError(
                    "optimizer call cancelled".to_string(),
                ));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(shared::DomainError::ExternalServiceError(format!(
                "optimizer returned {status}: {error_text}"
            )));
        }

        response
            .json::<Res>()
            .await
            .map_err(|e| shared::DomainError::ExternalServiceError(e.to_string()))
    }
}

#[async_trait]
impl OptimizerClient for ReqwestOptimizerClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
        cancellation: CancellationToken,
    ) -> DomainResult<GenerateResponse> {
        self.post_json("/generate", request, cancellation).await
    }

    async fn check_feasibility(
        &self,
        request: &FeasibilityPrecheckRequest,
        cancellation: CancellationToken,
    ) -> DomainResult<FeasibilityPrecheckResponse> {
        self.post_json("/check-feasibility", request, cancellation)
            .await
    }
}
