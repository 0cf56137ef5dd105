use artlist::commands::{add, remove};
use artlist::error::{ArtlistError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artlist")]
#[command(version)]
#[command(about = "Keep a list of artists and a grouped report ready to copy", long_about = None)]
pub struct Cli {
    /// Directory holding artists.json, output.txt and config.json
    #[arg(short, long, env = "ARTLIST_DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Action to run: add or remove
    pub action: Option<String>,

    /// add: <id> <name...>; remove: <id-or-name...>
    ///
    /// Everything after the action is data, including words that look like
    /// options: `add c Coldplay -v` names the artist `Coldplay -v`. Put
    /// `--dir` and `--verbose` before the action.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A validated action with its positional arguments.
///
/// Missing arguments are kept as `None` so the command layer reports them
/// with the same errors whether called from here or through the API.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Add {
        id: Option<String>,
        name: Option<String>,
    },
    Remove {
        id_or_name: Option<String>,
    },
}

/// Words past the first are joined with single spaces.
fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

impl Cli {
    pub fn action(&self) -> Result<Action> {
        match self.action.as_deref() {
            Some(add::ACTION) => Ok(Action::Add {
                id: self.args.first().cloned(),
                name: self.args.get(1..).and_then(join_words),
            }),
            Some(remove::ACTION) => Ok(Action::Remove {
                id_or_name: join_words(&self.args),
            }),
            other => Err(ArtlistError::UnknownAction(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}
