//! Command-line surface for bkm.
//!
//! Parsing lives here together with `handle_command`, which runs one parsed
//! command against an `App` and returns the lines to print. Keeping printing
//! and process exit in `main.rs` lets the dispatcher be tested directly.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::app::App;
use crate::prompt::{split_tags, BookmarkInput, BookmarkPrompt};
use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::config::{FUZZY_ARGS_KEY, FUZZY_COMMAND_KEY, UNIQUE_TITLES_KEY};
use crate::types::errors::{BookmarkError, ConfigError};
use crate::types::timestamp;
use crate::usecases::{
    AddBookmark, EditBookmark, GetConfig, GetFuzzyFinderConfig, ListBookmarks, ListConfig,
    RemoveBookmark, SearchBookmarks, SetConfig, SetFuzzyFinderConfig, TagBookmark, TitlePolicy,
    UnsetConfig,
};

#[derive(Parser, Debug)]
#[command(name = "bkm", version, about = "Bookmark CLI tool with fuzzy finder")]
pub struct Cli {
    /// Directory holding bookmarks.json and config.json.
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new bookmark (prompts when --url is omitted).
    Add {
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Change an existing bookmark. Omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        /// Comma-separated tags, replacing the current ones.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Remove a bookmark.
    Remove { id: String },
    /// Search titles, URLs and tags (case-insensitive).
    Search { query: String },
    /// List bookmarks, optionally only those with a tag.
    List {
        #[arg(long)]
        tag: Option<String>,
    },
    /// Add or remove a single tag.
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Manage configuration settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TagAction {
    Add { id: String, tag: String },
    Remove { id: String, tag: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Configure fuzzy finder settings; with no flags, show them.
    Fuzzy {
        /// Fuzzy finder command (e.g. fzf, peco).
        #[arg(long)]
        command: Option<String>,
        /// Fuzzy finder arguments.
        #[arg(long, allow_hyphen_values = true)]
        args: Option<String>,
    },
    Get { key: String },
    Set { key: String, value: String },
    Unset { key: String },
    List,
}

/// Failure of one CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Prompt(String),
}

impl CommandError {
    /// One line per failure, as printed to stderr.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CommandError::Bookmark(err) => err.messages(),
            CommandError::Config(err) => err.messages(),
            CommandError::Prompt(msg) => vec![msg.clone()],
        }
    }
}

/// Runs one command and returns the lines to print on success.
pub fn handle_command(
    app: &App,
    command: Commands,
    prompt: &dyn BookmarkPrompt,
) -> Result<Vec<String>, CommandError> {
    match command {
        Commands::Add { url, title, tags } => {
            let input = match url {
                Some(url) => BookmarkInput {
                    title: title.unwrap_or_else(|| url.clone()),
                    tags: tags.as_deref().map(split_tags).unwrap_or_default(),
                    url,
                },
                None => match prompt.prompt().map_err(CommandError::Prompt)? {
                    Some(input) => input,
                    None => return Ok(vec!["Cancelled".to_string()]),
                },
            };

            let unique_titles = GetConfig::new(&app.config).execute(UNIQUE_TITLES_KEY)?;
            let bookmark = AddBookmark::new(&app.bookmarks)
                .with_title_policy(TitlePolicy::from_setting(unique_titles.as_deref()))
                .execute(&input.url, &input.title, &input.tags)?;

            Ok(vec![
                "Bookmark added successfully!".to_string(),
                format!("ID: {}", bookmark.id()),
            ])
        }
        Commands::Edit { id, url, title, tags } => {
            let current = current_bookmark(app, &id)?;
            let url = url.unwrap_or_else(|| current.url().value().to_string());
            let title = title.unwrap_or_else(|| current.title().value().to_string());
            let tags = match tags {
                Some(raw) => split_tags(&raw),
                None => current.tags().iter().map(|t| t.value().to_string()).collect(),
            };

            let bookmark = EditBookmark::new(&app.bookmarks).execute(&id, &url, &title, &tags)?;
            Ok(vec![
                "Bookmark updated successfully!".to_string(),
                format_bookmark(&bookmark),
            ])
        }
        Commands::Remove { id } => {
            let removed = RemoveBookmark::new(&app.bookmarks).execute(&id)?;
            Ok(vec![format!("Removed bookmark: {}", removed.title())])
        }
        Commands::Search { query } => {
            let found = SearchBookmarks::new(&app.bookmarks).execute(&query)?;
            Ok(bookmark_lines(&found, "No bookmarks matched"))
        }
        Commands::List { tag } => {
            let found = ListBookmarks::new(&app.bookmarks).execute(tag.as_deref())?;
            Ok(bookmark_lines(&found, "No bookmarks"))
        }
        Commands::Tag { action } => {
            let tagger = TagBookmark::new(&app.bookmarks);
            let bookmark = match action {
                TagAction::Add { id, tag } => tagger.add(&id, &tag)?,
                TagAction::Remove { id, tag } => tagger.remove(&id, &tag)?,
            };
            Ok(vec![format_bookmark(&bookmark)])
        }
        Commands::Config { action } => handle_config(app, action),
    }
}

fn handle_config(app: &App, action: ConfigAction) -> Result<Vec<String>, CommandError> {
    match action {
        ConfigAction::Fuzzy { command: None, args: None } => {
            let get = GetConfig::new(&app.config);
            let command = get.execute(FUZZY_COMMAND_KEY)?;
            let args = get.execute(FUZZY_ARGS_KEY)?;

            let mut lines = vec![
                "Current fuzzy finder configuration:".to_string(),
                format!("  Command: {}", shown_or_not_set(command.as_deref())),
                format!("  Args: {}", shown_or_not_set(args.as_deref())),
            ];
            match GetFuzzyFinderConfig::new(&app.config).execute() {
                Ok(config) => lines.push(format!("  Command line: {}", config.command_line())),
                Err(err) => lines.push(format!("  Command line: invalid ({})", err.messages().join("; "))),
            }
            Ok(lines)
        }
        ConfigAction::Fuzzy { command, args } => {
            SetFuzzyFinderConfig::new(&app.config).update(command.as_deref(), args.as_deref())?;
            let mut lines = Vec::new();
            if let Some(command) = command {
                lines.push(format!("Fuzzy finder command set to: {}", command));
            }
            if let Some(args) = args {
                lines.push(format!("Fuzzy finder args set to: {}", args));
            }
            Ok(lines)
        }
        ConfigAction::Get { key } => {
            let value = GetConfig::new(&app.config).execute(&key)?;
            Ok(vec![format!("{}: {}", key, shown_or_not_set(value.as_deref()))])
        }
        ConfigAction::Set { key, value } => {
            SetConfig::new(&app.config).execute(&key, &value)?;
            Ok(vec![format!("{} set to: {}", key, value.trim())])
        }
        ConfigAction::Unset { key } => {
            UnsetConfig::new(&app.config).execute(&key)?;
            Ok(vec![format!("{} unset", key)])
        }
        ConfigAction::List => {
            let entries = ListConfig::new(&app.config).execute()?;
            if entries.is_empty() {
                return Ok(vec!["No configuration set".to_string()]);
            }
            Ok(entries
                .iter()
                .map(|e| format!("{} = {} (updated {})", e.key, e.value, timestamp::format(&e.updated_at)))
                .collect())
        }
    }
}

fn current_bookmark(app: &App, id: &str) -> Result<Bookmark, BookmarkError> {
    let id = BookmarkId::create(id)?;
    app.bookmarks
        .find_by_id(&id)?
        .ok_or_else(|| BookmarkError::NotFound(id.value().to_string()))
}

fn shown_or_not_set(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "not set",
    }
}

fn bookmark_lines(bookmarks: &[Bookmark], empty: &str) -> Vec<String> {
    if bookmarks.is_empty() {
        return vec![empty.to_string()];
    }
    bookmarks.iter().map(format_bookmark).collect()
}

/// `<id>  <title>  <url>  [tag, tag]`
pub fn format_bookmark(bookmark: &Bookmark) -> String {
    let tags: Vec<&str> = bookmark.tags().iter().map(|t| t.value()).collect();
    format!(
        "{}  {}  {}  [{}]",
        bookmark.id(),
        bookmark.title(),
        bookmark.url(),
        tags.join(", ")
    )
}
