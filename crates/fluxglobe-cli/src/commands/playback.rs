use serde_json::json;

use fluxglobe_core::{InstantRange, UtcDateTime};
use fluxglobe_pipeline::{load_dataset, SignalPipeline, TimelineController};

use crate::cli::PlaybackArgs;
use crate::commands::CommandResult;
use crate::commands::signals::issue_warnings;
use crate::error::CliError;

pub async fn run(args: &PlaybackArgs) -> Result<CommandResult, CliError> {
    let dataset = load_dataset(&args.signals, &args.flows).await?;
    let warnings = issue_warnings(&dataset.issues);

    let Some(bounds) = dataset_bounds(&dataset.signals, &dataset.flows) else {
        let data = json!({ "frames": [], "frame_count": 0 });
        return Ok(CommandResult::ok(data)
            .with_warnings(warnings)
            .with_warnings(vec![String::from("dataset has no timestamps to play")]));
    };

    let pipeline = SignalPipeline::new();
    pipeline.load(dataset.signals, dataset.flows).await;

    let mut timeline = TimelineController::new();
    timeline.set_bounds(bounds);
    timeline.reset_to_start();
    timeline.play();

    let max_ticks = args.ticks.unwrap_or(u32::MAX);
    let mut frames = Vec::new();

    // Frame zero is the state at the lower bound.
    frames.push(frame_at(&pipeline, timeline.current_instant()).await);

    for _ in 0..max_ticks {
        timeline.tick();
        if !timeline.is_playing() {
            break;
        }
        frames.push(frame_at(&pipeline, timeline.current_instant()).await);
    }

    let data = json!({
        "bounds": bounds,
        "frame_count": frames.len(),
        "frames": frames,
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

async fn frame_at(pipeline: &SignalPipeline, instant: UtcDateTime) -> serde_json::Value {
    pipeline.set_instant_now(instant).await;
    let view = pipeline.current_view().await;

    json!({
        "instant": instant,
        "signal_count": view.signals.len(),
        "flow_count": view.flows.len(),
    })
}

fn dataset_bounds(
    signals: &[fluxglobe_core::AssetSignal],
    flows: &[fluxglobe_core::AssetFlow],
) -> Option<InstantRange> {
    let timestamps = signals
        .iter()
        .map(|signal| signal.ts)
        .chain(flows.iter().map(|flow| flow.ts));

    let (mut lower, mut upper) = (None, None);
    for ts in timestamps {
        lower = Some(lower.map_or(ts, |current: UtcDateTime| current.min(ts)));
        upper = Some(upper.map_or(ts, |current: UtcDateTime| current.max(ts)));
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => InstantRange::new(lower, upper).ok(),
        _ => None,
    }
}
