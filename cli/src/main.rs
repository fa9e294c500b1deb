mod tui;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todobot_core::{FileTaskStore, Session, TextUi};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todobot")]
#[command(about = "A chat-style task manager", long_about = None)]
struct Cli {
    /// Save file to read and write (overrides --data-dir)
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "data_dir")]
    data_file: Option<PathBuf>,

    /// Directory holding todobot.txt (default: ~/.todobot)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Write diagnostics here instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read commands from stdin, one per line (default)
    Chat,
    /// Answer a single command and exit (usage: ask deadline report /by 2019-12-02)
    Ask {
        #[arg(trailing_var_arg = true, required = true)]
        words: Vec<String>,
        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the chat window
    Tui,
}

impl Cli {
    fn store(&self) -> FileTaskStore {
        match &self.data_file {
            Some(path) => FileTaskStore::with_file(path),
            None => FileTaskStore::new(self.data_dir.clone()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.log_file.as_ref())?;

    let store = cli.store();
    tracing::debug!(path = %store.file_path().display(), "using save file");

    match cli.command {
        None | Some(Commands::Chat) => {
            let mut session = Session::new(store);
            let mut ui = TextUi::stdout();
            session
                .run(io::stdin().lock(), &mut ui)
                .context("Failed to read from stdin")?;
        }
        Some(Commands::Ask { words, json }) => {
            let mut session = Session::new(store);
            let response = session.respond(&words.join(" "));
            if json {
                println!("{}", serde_json::to_string(&response)?);
            } else {
                println!("{}", response.output);
            }
        }
        Some(Commands::Tui) => {
            tui::run(store)?;
        }
    }
    Ok(())
}

fn install_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    // RUST_LOG wins; otherwise only warnings.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
    }
    Ok(())
}
