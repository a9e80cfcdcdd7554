//! CLI argument definitions
//!
//! Options, positional tokens and configuration merging logic.
//!
//! Options are only recognized before the command. Everything from the
//! command on is kept verbatim, so tags and note words may start with `-`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::AppError;

use super::commands::Invocation;

#[derive(Debug, Parser)]
#[command(name = "track")]
#[command(
    about = "Track time spent per tag",
    long_about = "Track time spent per tag.\n\nRun without arguments to show every tag.",
    override_usage = "track [OPTIONS] [start|stop|note|show] [TAG] [NOTE]...",
    version
)]
pub(crate) struct Cli {
    /// Command (start, stop, note or show), tag, and note words
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub(crate) tokens: Vec<String>,

    /// Use this track file instead of ~/.track.toml
    #[arg(short, long, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.file.is_none() {
            self.file = config.file.clone();
        }
        self
    }

    pub(crate) fn invocation(&self) -> Result<Invocation, AppError> {
        Invocation::from_tokens(&self.tokens)
    }
}
