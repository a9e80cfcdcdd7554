mod app;
mod cli;
mod config;
mod consts;
mod error;
mod logging;
mod store;
mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, warn};

use cli::Cli;
use config::Config;
use error::AppError;

fn exit_with(e: &AppError) -> ! {
    println!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    let loaded = Config::load();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli.with_config(&loaded.config),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => exit_with(&e.into()),
    };

    logging::init(cli.debug);
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        exit_with(&e);
    }
}
