use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use fluxglobe_core::UtcDateTime;

use crate::error::CliError;

/// Response envelope for all machine-readable CLI output.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub meta: EnvelopeMeta,
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub generated_at: UtcDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Envelope {
    pub fn new(data: Value, warnings: Vec<String>) -> Self {
        Self {
            meta: EnvelopeMeta {
                request_id: Uuid::new_v4().to_string(),
                generated_at: UtcDateTime::now(),
                warnings,
            },
            data,
        }
    }
}

pub fn render(envelope: &Envelope, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    println!("{payload}");

    Ok(())
}
