use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, Command, Invocation};
use crate::consts::{ALL_TAGS, STORE_FILE_NAME};
use crate::error::AppError;
use crate::store::{self, Entry, Store};
use crate::utils::timestamp;

/// Why a command left the store unchanged. Reported to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Refusal {
    #[error("Already started at {at}")]
    AlreadyStarted { at: String },

    #[error("Already stopped at {at}")]
    AlreadyStopped { at: String },

    #[error("Unknown tag \"{tag}\"")]
    UnknownTag { tag: String },

    #[error("Not currently tracking anything")]
    NotTracking,
}

pub(crate) fn start(store: &mut Store, tag: &str, now: &str) -> Result<(), Refusal> {
    if let Some(last) = store.last(tag)
        && last.is_open()
    {
        return Err(Refusal::AlreadyStarted {
            at: last.start.clone(),
        });
    }
    store.push(tag, Entry::started_at(now));
    Ok(())
}

pub(crate) fn stop(store: &mut Store, tag: &str, now: &str) -> Result<(), Refusal> {
    let Some(last) = store.last_mut(tag) else {
        return Err(Refusal::UnknownTag {
            tag: tag.to_string(),
        });
    };
    if last.is_stopped() {
        return Err(Refusal::AlreadyStopped {
            at: last.stop.clone(),
        });
    }
    last.stop = now.to_string();
    Ok(())
}

/// Notes can only be added to the running entry, never to a stopped one.
pub(crate) fn note(store: &mut Store, tag: &str, text: &str) -> Result<(), Refusal> {
    let Some(last) = store.last_mut(tag) else {
        return Err(Refusal::UnknownTag {
            tag: tag.to_string(),
        });
    };
    if last.is_stopped() {
        return Err(Refusal::NotTracking);
    }
    last.notes.push(text.to_string());
    Ok(())
}

/// Render the report for `tag`, or for every tag when `tag` is "all".
pub(crate) fn show(store: &Store, tag: &str) -> String {
    let mut out = String::new();
    if tag == ALL_TAGS {
        if store.is_empty() {
            debug!("no tags recorded yet");
        }
        for name in store.tags() {
            render_tag(&mut out, store, name);
        }
    } else {
        render_tag(&mut out, store, tag);
    }
    out
}

fn render_tag(out: &mut String, store: &Store, tag: &str) {
    out.push_str(tag);
    out.push('\n');
    for entry in store.entries(tag) {
        out.push_str(&format!("\t{} - {}\n", entry.start, entry.stop));
        for note in &entry.notes {
            out.push_str(&format!("\t\t{note}\n"));
        }
    }
}

/// Apply one invocation to the store and return what should be printed.
pub(crate) fn execute(store: &mut Store, invocation: &Invocation, now: &str) -> String {
    let tag = invocation.tag.as_str();
    let result = match invocation.command {
        Command::Show => return show(store, tag),
        Command::Start => start(store, tag, now),
        Command::Stop => stop(store, tag, now),
        Command::Note => note(store, tag, invocation.note.as_deref().unwrap_or_default()),
    };
    match result {
        Ok(()) => String::new(),
        Err(refusal) => {
            debug!(?refusal, "store left unchanged");
            format!("{refusal}\n")
        }
    }
}

/// Track file location: explicit path (with `~/` expanded) or ~/.track.toml
pub(crate) fn resolve_store_path(file: Option<&Path>) -> Result<PathBuf, AppError> {
    match file {
        Some(path) => match path.strip_prefix("~") {
            Ok(rest) => Ok(home_dir()?.join(rest)),
            Err(_) => Ok(path.to_path_buf()),
        },
        None => Ok(home_dir()?.join(STORE_FILE_NAME)),
    }
}

fn home_dir() -> Result<PathBuf, AppError> {
    dirs::home_dir().ok_or(AppError::HomeDirUnavailable)
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let invocation = cli.invocation()?;
    let path = resolve_store_path(cli.file.as_deref())?;
    debug!(path = %path.display(), "using track file");

    let mut store = store::load(&path)?;
    debug!(command = %invocation.command, tag = %invocation.tag, "dispatching");

    let output = execute(&mut store, &invocation, &timestamp::now());
    print!("{output}");

    if invocation.command.persists() {
        store::save(&path, &store)?;
    }
    Ok(())
}
