mod atomic_write;
mod config;
mod people_file;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chat_compose::ComposeBoxMode;
use chat_compose::ComposeBoxState;
use chat_compose::CompositionTarget;
use chat_compose::InMemoryTextBuffer;
use chat_compose::PeopleDirectory;
use chat_compose::ReplaceMode;
use chat_compose::Selection;
use chat_compose::SyntaxPattern;
use chat_compose::TextBuffer;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::ConfigStore;

#[derive(Parser, Debug)]
#[command(version, about = "Compose-box helpers for chat message entry")]
struct Cli {
    /// Path to the config file (defaults to `~/.chat-compose/config.toml`).
    #[arg(long, global = true, env = "CHAT_COMPOSE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Insert formatting syntax at the caret, padding it with whitespace as needed.
    Insert {
        /// Current compose-box content.
        #[arg(long, default_value = "")]
        text: String,
        /// Caret byte offset (defaults to the end of the text).
        #[arg(long)]
        caret: Option<usize>,
        /// Syntax to insert.
        syntax: String,
    },
    /// Wrap the selected range with a prefix and suffix.
    Wrap {
        #[arg(long, default_value = "")]
        text: String,
        /// Selection start byte offset.
        #[arg(long)]
        start: usize,
        /// Selection end byte offset.
        #[arg(long)]
        end: usize,
        prefix: String,
        suffix: String,
    },
    /// Replace syntax in the text; the replacement is always inserted literally.
    Replace {
        #[arg(long, default_value = "")]
        text: String,
        /// Treat OLD as a regular expression.
        #[arg(long)]
        regex: bool,
        /// Replace every match instead of only the first.
        #[arg(long)]
        all: bool,
        old: String,
        new: String,
    },
    /// Print the placeholder text for a composition target.
    Placeholder {
        #[arg(long)]
        stream: Option<String>,
        #[arg(long, requires = "stream")]
        topic: Option<String>,
        /// Comma-separated direct-message recipient emails.
        #[arg(long, conflicts_with = "stream")]
        to: Option<String>,
        /// People JSON file used to resolve recipients (overrides `people_file` in config).
        #[arg(long)]
        people: Option<PathBuf>,
    },
    /// Switch the compose box between normal and fullscreen mode.
    Fullscreen {
        #[arg(value_enum)]
        action: FullscreenAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
enum FullscreenAction {
    Enter,
    Exit,
    Status,
}

#[derive(Debug, Serialize)]
struct BufferOutput<'a> {
    text: &'a str,
    caret: usize,
}

fn init_tracing() {
    let default_level = "error";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = match cli.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::new_default()?,
    };

    run(cli.command, &store, &mut std::io::stdout().lock())
}

fn run(command: CliCommand, store: &ConfigStore, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        CliCommand::Insert {
            text,
            caret,
            syntax,
        } => {
            let state = load_compose_box_state(store);
            let mut buffer = InMemoryTextBuffer::new(text);
            if let Some(caret) = caret {
                buffer = buffer.with_caret(caret);
            }
            let caret = chat_compose::insert_syntax_and_focus(&mut buffer, &syntax, &state)
                .context("insert syntax")?;
            print_buffer(out, &buffer, caret)?;
        }
        CliCommand::Wrap {
            text,
            start,
            end,
            prefix,
            suffix,
        } => {
            let mut buffer =
                InMemoryTextBuffer::new(text).with_selection(Selection::new(start, end));
            let caret = chat_compose::wrap_selection_with_markdown(&mut buffer, &prefix, &suffix)
                .context("wrap selection")?;
            print_buffer(out, &buffer, caret)?;
        }
        CliCommand::Replace {
            text,
            regex,
            all,
            old,
            new,
        } => {
            let pattern = if regex {
                SyntaxPattern::regex(&old).with_context(|| format!("invalid pattern `{old}`"))?
            } else {
                SyntaxPattern::literal(old)
            };
            let mode = if all {
                ReplaceMode::All
            } else {
                ReplaceMode::First
            };
            writeln!(out, "{}", chat_compose::replace_syntax(&text, &pattern, &new, mode))?;
        }
        CliCommand::Placeholder {
            stream,
            topic,
            to,
            people,
        } => {
            let target = match (stream, to) {
                (Some(stream), _) => CompositionTarget::Stream {
                    stream: Some(stream),
                    topic,
                },
                (None, Some(to)) => CompositionTarget::private_from_emails(&to),
                (None, None) => CompositionTarget::Unset,
            };
            let people = match people {
                Some(path) => Some(path),
                None => store.people_file()?,
            };
            let directory = match people {
                Some(path) => people_file::load_people(&path)?,
                None => PeopleDirectory::new(),
            };
            let text = chat_compose::compute_placeholder_text(&target, &directory, &directory)
                .context("compute placeholder text")?;
            writeln!(out, "{text}")?;
        }
        CliCommand::Fullscreen { action } => {
            let mut state = load_compose_box_state(store);
            let mut buffer = InMemoryTextBuffer::default();
            match action {
                FullscreenAction::Enter => state.enter_fullscreen(&mut buffer),
                FullscreenAction::Exit => state.exit_fullscreen(&mut buffer),
                FullscreenAction::Status => {}
            }
            if action != FullscreenAction::Status {
                store
                    .set_start_fullscreen(state.is_full_size())
                    .with_context(|| format!("update {}", store.path().display()))?;
            }
            writeln!(out, "{}", state.mode())?;
        }
    }

    Ok(())
}

/// Initial compose-box mode from config. A broken config leaves the box in normal mode.
fn load_compose_box_state(store: &ConfigStore) -> ComposeBoxState {
    let fullscreen = store.start_fullscreen().unwrap_or_else(|err| {
        eprintln!("warning: failed to read {}: {err:#}", store.path().display());
        false
    });
    ComposeBoxState::new(if fullscreen {
        ComposeBoxMode::Fullscreen
    } else {
        ComposeBoxMode::Normal
    })
}

fn print_buffer(
    out: &mut impl Write,
    buffer: &InMemoryTextBuffer,
    caret: usize,
) -> anyhow::Result<()> {
    let output = BufferOutput {
        text: buffer.text(),
        caret,
    };
    writeln!(out, "{}", serde_json::to_string(&output)?)?;
    Ok(())
}
