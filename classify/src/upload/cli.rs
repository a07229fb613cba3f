use super::file::SelectedFile;
use super::flow::{UploadFlow, UPLOADING_MESSAGE};
use crate::shared::prelude::{spinner_style, FoundConfig};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, error, info, info_span, instrument, Instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Transcript or media file to upload
    file: PathBuf,
}

#[instrument("classify upload", skip_all)]
pub async fn upload_root(found_config: &FoundConfig, args: &UploadArgs) -> Result<i32> {
    let path = found_config.working_dir.join(&args.file);
    let file = match SelectedFile::read(&path).await {
        Ok(file) => file,
        Err(e) => {
            error!(target: "always", "{}", e);
            return Ok(1);
        }
    };

    let mut flow = UploadFlow::new(found_config.service());
    flow.pick(file);

    let span = info_span!("upload", "indicatif.pb_show" = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(UPLOADING_MESSAGE);
    let outcome = flow.submit().instrument(span).await;

    let status = flow.status().unwrap_or_default();
    match outcome {
        Ok(()) => {
            info!(target: "always", "{}", status);
            Ok(0)
        }
        Err(e) => {
            debug!("Upload of {} failed: {:?}", args.file.display(), e);
            error!(target: "always", "{}", status);
            Ok(1)
        }
    }
}
