use super::view::{AnalyzeView, ANALYZING_MESSAGE};
use crate::models::prelude::AnalyzeRequest;
use crate::report_stdout;
use crate::shared::prelude::{spinner_style, FoundConfig};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info_span, instrument, Instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Transcript text to analyze
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    text: Option<String>,

    /// Read the transcript text from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Transcript id to attach to the analysis
    #[arg(long)]
    transcript_id: Option<String>,

    /// Creator id to attach to the analysis
    #[arg(long)]
    creator_id: Option<String>,

    /// Print the response as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[instrument("classify analyze", skip_all)]
pub async fn analyze_root(found_config: &FoundConfig, args: &AnalyzeArgs) -> Result<i32> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            let path = found_config.working_dir.join(path);
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) => {
                    error!(target: "always", "Unable to read {}: {}", path.display(), e);
                    return Ok(1);
                }
            }
        }
        (None, None) => String::new(),
    };

    let request = AnalyzeRequest {
        transcript_text: text,
        transcript_id: args.transcript_id.clone(),
        creator_id: args.creator_id.clone(),
    };

    let mut view = AnalyzeView::new(found_config.service());
    let span = info_span!("analyze", "indicatif.pb_show" = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(ANALYZING_MESSAGE);
    view.analyze(request).instrument(span).await;

    if args.json {
        if let Some(response) = view.state().loaded() {
            let text = serde_json::to_string_pretty(response)?;
            report_stdout!("{}", text);
            return Ok(0);
        }
    }

    view.render().print().await;
    Ok(if view.state().error().is_some() { 1 } else { 0 })
}
