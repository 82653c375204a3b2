use serde_json::json;

use fluxglobe_core::{FilterConfig, InstantRange, UtcDateTime};
use fluxglobe_pipeline::{load_flows, load_signals, RecordIssue, SignalPipeline};

use crate::cli::SignalsArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub async fn run(args: &SignalsArgs) -> Result<CommandResult, CliError> {
    let filter = build_filter(args)?;

    let (signals, mut issues) = load_signals(&args.signals).await?;
    let flows = match &args.flows {
        Some(path) => {
            let (flows, flow_issues) = load_flows(path).await?;
            issues.extend(flow_issues);
            flows
        }
        None => Vec::new(),
    };

    let pipeline = SignalPipeline::new();
    pipeline.load(signals, flows).await;
    pipeline.apply_filter(filter).await;
    pipeline.recompute_now().await;

    let view = pipeline.current_view().await;
    let data = json!({
        "signal_count": view.signals.len(),
        "flow_count": view.flows.len(),
        "signals": view.signals,
        "flows": view.flows,
    });

    Ok(CommandResult::ok(data).with_warnings(issue_warnings(&issues)))
}

fn build_filter(args: &SignalsArgs) -> Result<FilterConfig, CliError> {
    let mut filter = FilterConfig::default();

    if !args.classes.is_empty() {
        filter = filter.with_asset_classes(args.classes.iter().copied());
    }
    if let Some(risk_min) = args.risk_min {
        filter = filter.with_risk_min(risk_min);
    }
    if args.no_flows {
        filter = filter.with_show_flows(false);
    }

    if let Some(at) = &args.at {
        let instant = UtcDateTime::parse(at)?;
        filter = filter.with_date_window(InstantRange::point(instant));
    } else if args.window_start.is_some() || args.window_end.is_some() {
        let lower = match &args.window_start {
            Some(start) => UtcDateTime::parse(start)?,
            None => UtcDateTime::DISTANT_PAST,
        };
        let upper = match &args.window_end {
            Some(end) => UtcDateTime::parse(end)?,
            None => UtcDateTime::DISTANT_FUTURE,
        };
        filter = filter.with_date_window(InstantRange::new(lower, upper)?);
    }

    Ok(filter)
}

pub fn issue_warnings(issues: &[RecordIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| format!("record {} dropped: {}", issue.index, issue.reason))
        .collect()
}
