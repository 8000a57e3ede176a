//! praxis CLI: offline AI chat shell

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use praxis_engine::{mock_history, relative_label, render, ChatSummary, Config, Segment};
use std::fs::OpenOptions;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Offline AI chat shell with a Markdown-rendering TUI
#[derive(Parser)]
#[command(name = "praxis")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Config file (default: .praxis/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render Markdown into segments
    Render {
        /// Markdown file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the chat history
    Chats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(None),
        Some(Commands::Tui { config }) => cmd_tui(config),
        Some(Commands::Render { file, json }) => cmd_render(file.as_deref(), json),
        Some(Commands::Chats { json }) => cmd_chats(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Where tracing output goes.
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

fn init_tracing(target: LogTarget<'_>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        // the TUI owns the terminal
        LogTarget::Discard => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
    }
    Ok(())
}

fn cmd_tui(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(praxis_engine::DEFAULT_CONFIG_PATH));
    let loaded = Config::load_or_default(&path);
    let config = loaded.as_ref().map_or_else(|_| Config::default(), Clone::clone);

    match &config.log_file {
        Some(log_file) => init_tracing(LogTarget::File(log_file))?,
        None => init_tracing(LogTarget::Discard)?,
    }

    // Never overwrite a config file we could not read
    let save_path = match loaded {
        Ok(_) => Some(path),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            None
        }
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(praxis_tui::run_tui(config, save_path))
}

fn cmd_render(file: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(LogTarget::Stderr)?;

    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    println!("{}", format_segments(&render(&input), json)?);
    Ok(())
}

fn cmd_chats(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(LogTarget::Stderr)?;

    let now = Local::now();
    println!("{}", format_chats(&mock_history(now), now, json)?);
    Ok(())
}

fn format_segments(segments: &[Segment], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(segments);
    }
    Ok(segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_chats(
    history: &[ChatSummary],
    now: DateTime<Local>,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(history);
    }

    let mut out = String::from("Recent Chats\n");
    for chat in history {
        out.push_str(&format!(
            "\n  [{}] {}\n      {}\n      {}\n",
            chat.id,
            chat.title,
            chat.last_message,
            relative_label(chat.timestamp, now)
        ));
    }
    Ok(out.trim_end().to_string())
}
