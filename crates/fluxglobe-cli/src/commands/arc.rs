use serde_json::json;

use fluxglobe_core::{arc, Coordinate};

use crate::cli::ArcArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(args: &ArcArgs) -> Result<CommandResult, CliError> {
    let start = Coordinate::new(args.from_lat, args.from_lon)?;
    let end = Coordinate::new(args.to_lat, args.to_lon)?;

    let points = arc::build_arc(start, end, args.segments, args.height_scale);

    let mut data = json!({
        "start": start,
        "end": end,
        "segment_count": points.len() - 1,
        "distance_km": arc::haversine_m(start, end) / 1000.0,
        "points": points,
    });

    if let Some(magnitude) = args.magnitude {
        data["line_width"] = json!(arc::line_width(magnitude));
        data["line_opacity"] = json!(arc::line_opacity(magnitude));
    }

    Ok(CommandResult::ok(data))
}
