use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(r#"Invalid command (expected one of "start", "stop", "show", "note")"#)]
    InvalidCommand,

    #[error("Missing tag")]
    MissingTag,

    #[error("Missing note")]
    MissingNote,

    #[error("{}", usage_summary(.0))]
    Usage(#[from] clap::Error),

    #[error("Could not determine the home directory of the current user")]
    HomeDirUnavailable,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to encode track data: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// First line of a clap error without its "error: " prefix
fn usage_summary(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
