use super::view::{ResultLookupView, FETCHING_LABEL};
use crate::report_stdout;
use crate::shared::prelude::{spinner_style, FoundConfig};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use tracing::{info_span, instrument, Instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Args)]
pub struct ResultArgs {
    /// Analysis ID to look up. Surrounding whitespace is ignored.
    #[arg(default_value = "")]
    analysis_id: String,

    /// Print the record as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[instrument("classify result", skip_all)]
pub async fn result_root(found_config: &FoundConfig, args: &ResultArgs) -> Result<i32> {
    let mut view = ResultLookupView::new(found_config.service());
    view.set_input(&args.analysis_id);

    let span = info_span!("lookup", "indicatif.pb_show" = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(FETCHING_LABEL);
    view.lookup().instrument(span).await;

    if args.json {
        if let Some(record) = view.state().loaded() {
            let text = serde_json::to_string_pretty(record)?;
            report_stdout!("{}", text);
            return Ok(0);
        }
    }

    view.render().print().await;
    Ok(if view.state().error().is_some() { 1 } else { 0 })
}
