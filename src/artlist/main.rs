use artlist::api::{ArtlistApi, CmdMessage, MessageLevel};
use artlist::config::ArtlistConfig;
use artlist::error::{ArtlistError, Result};
use artlist::store::fs::FileStore;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::Level;

mod args;
use args::{Action, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let action = cli.action()?;
    let mut api = init_api(cli.dir)?;

    let result = match action {
        Action::Add { id, name } => api.add_artist(id.as_deref(), name.as_deref())?,
        Action::Remove { id_or_name } => api.remove_artist(id_or_name.as_deref())?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn init_api(dir: Option<PathBuf>) -> Result<ArtlistApi<FileStore>> {
    let data_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| ArtlistError::storage(".", e))?,
    };
    let config = ArtlistConfig::load(&data_dir)?;
    let store = FileStore::from_config(&data_dir, &config);
    tracing::debug!(
        list = %store.list_path().display(),
        report = %store.report_path().display(),
        "using data files"
    );
    Ok(ArtlistApi::new(store))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
