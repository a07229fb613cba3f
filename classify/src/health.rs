use crate::client::AnalysisService;
use crate::shared::prelude::FoundConfig;
use anyhow::Result;
use tracing::{error, info, instrument};

/// Check that the backend answers `GET /health`.
#[instrument("classify health", skip_all)]
pub async fn health_root(found_config: &FoundConfig) -> Result<i32> {
    let service = found_config.service();
    if service.health().await {
        info!(target: "always", "Backend at {} is healthy", found_config.base_url);
        Ok(0)
    } else {
        error!(target: "always", "Backend at {} is not reachable", found_config.base_url);
        Ok(1)
    }
}
