use super::error::{FailureReason, ServiceError};
use super::options::{normalize_analysis_id, ClientOptions};
use super::service::{AnalysisService, ANALYZE_PATH, HEALTH_PATH, RESULTS_PATH, UPLOAD_PATH};
use crate::models::prelude::{AnalysisResult, AnalyzeRequest, AnalyzeResponse};
use crate::upload::SelectedFile;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// [`AnalysisService`] over HTTP with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    options: ClientOptions,
}

impl HttpAnalysisService {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    async fn send_upload(&self, file: &SelectedFile) -> Result<(), FailureReason> {
        let length = file.bytes.len() as u64;
        let part = Part::stream_with_length(file.bytes.clone(), length)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type())?;
        let form = Form::new().part("file", part);

        let res = self
            .client
            .post(self.options.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        debug!(server = "upload", "API Response was {:?}", res);

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FailureReason::Status(status.as_u16()))
        }
    }
}

impl Default for HttpAnalysisService {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

/// Reject non-2xx responses and decode the body as JSON.
async fn decode<T: DeserializeOwned>(
    res: Result<Response, reqwest::Error>,
) -> Result<T, FailureReason> {
    let res = res?;
    let status = res.status();
    if !status.is_success() {
        return Err(FailureReason::Status(status.as_u16()));
    }

    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| FailureReason::Decode(e.to_string()))
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    #[instrument(skip_all, fields(file = %file.name))]
    async fn submit(&self, file: &SelectedFile) -> Result<(), ServiceError> {
        self.send_upload(file).await.map_err(|reason| {
            debug!(%reason, "Upload failed");
            ServiceError::Upload { reason }
        })
    }

    #[instrument(skip_all)]
    async fn list_results(&self) -> Result<Vec<AnalysisResult>, ServiceError> {
        let res = self
            .client
            .get(self.options.endpoint(RESULTS_PATH))
            .send()
            .await;

        let results: Vec<AnalysisResult> = decode(res).await.map_err(|reason| {
            debug!(%reason, "Listing results failed");
            ServiceError::Fetch { reason }
        })?;
        debug!("Fetched {} results", results.len());
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_result_by_id(&self, id: &str) -> Result<AnalysisResult, ServiceError> {
        let id = normalize_analysis_id(id)?;
        let path = format!("{}/{}", RESULTS_PATH, urlencoding::encode(id));

        let res = self.client.get(self.options.endpoint(&path)).send().await;

        decode(res).await.map_err(|reason| {
            debug!(%reason, "Lookup failed");
            ServiceError::NotFoundOrInvalidId { reason }
        })
    }

    #[instrument(skip_all)]
    async fn analyze_transcript(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalyzeResponse, ServiceError> {
        let res = self
            .client
            .post(self.options.endpoint(ANALYZE_PATH))
            .json(request)
            .send()
            .await;

        decode(res).await.map_err(|reason| {
            debug!(%reason, "Analyze request failed");
            ServiceError::Analyze { reason }
        })
    }

    async fn health(&self) -> bool {
        match self
            .client
            .get(self.options.endpoint(HEALTH_PATH))
            .send()
            .await
        {
            Ok(res) => res.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }
}
