use super::view::{ResultsListView, RESULTS_LOADING_MESSAGE};
use crate::report_stdout;
use crate::shared::prelude::{spinner_style, FoundConfig};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use tracing::{info_span, instrument, Instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Args)]
pub struct ResultsArgs {
    /// Print the records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[instrument("classify results", skip_all)]
pub async fn results_root(found_config: &FoundConfig, args: &ResultsArgs) -> Result<i32> {
    let mut view = ResultsListView::new(found_config.service());

    let span = info_span!("fetch results", "indicatif.pb_show" = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(RESULTS_LOADING_MESSAGE);
    view.activate().instrument(span).await;

    if args.json {
        if let Some(results) = view.state().loaded() {
            let text = serde_json::to_string_pretty(results)?;
            report_stdout!("{}", text);
            return Ok(0);
        }
    }

    view.render().print().await;
    Ok(if view.state().error().is_some() { 1 } else { 0 })
}
