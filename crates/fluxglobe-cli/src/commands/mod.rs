mod arc;
mod playback;
mod signals;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Envelope;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let result = match &cli.command {
        Command::Arc(args) => arc::run(args)?,
        Command::Signals(args) => signals::run(args).await?,
        Command::Playback(args) => playback::run(args).await?,
    };

    Ok(Envelope::new(result.data, result.warnings))
}
