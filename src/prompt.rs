//! Interactive collection of bookmark fields for `bkm add` without `--url`.

use dialoguer::{Confirm, Input};

/// Raw bookmark fields as typed by the user, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkInput {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
}

/// Source of bookmark fields when they are not given as flags.
pub trait BookmarkPrompt {
    /// Returns `Ok(None)` when the user declines to save.
    fn prompt(&self) -> Result<Option<BookmarkInput>, String>;
}

/// Terminal prompt built on `dialoguer`.
pub struct TerminalPrompt;

impl BookmarkPrompt for TerminalPrompt {
    fn prompt(&self) -> Result<Option<BookmarkInput>, String> {
        eprintln!("Add New Bookmark");
        eprintln!("================");

        let url: String = Input::new()
            .with_prompt("Enter bookmark URL")
            .validate_with(|value: &String| -> Result<(), &str> {
                if value.trim().is_empty() {
                    Err("URL is required")
                } else if url::Url::parse(value.trim()).is_err() {
                    Err("Please enter a valid URL")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| format!("Input failed: {}", e))?;

        let title: String = Input::new()
            .with_prompt("Enter bookmark title")
            .default(url.clone())
            .interact_text()
            .map_err(|e| format!("Input failed: {}", e))?;

        let tags_input: String = Input::new()
            .with_prompt("Enter tags (comma-separated, optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Input failed: {}", e))?;
        let tags = split_tags(&tags_input);

        eprintln!();
        eprintln!("Bookmark Summary:");
        eprintln!("URL: {}", url);
        eprintln!("Title: {}", title);
        eprintln!(
            "Tags: {}",
            if tags.is_empty() { "None".to_string() } else { tags.join(", ") }
        );

        let confirmed = Confirm::new()
            .with_prompt("Add this bookmark?")
            .default(true)
            .interact()
            .map_err(|e| format!("Input failed: {}", e))?;

        Ok(confirmed.then_some(BookmarkInput { url, title, tags }))
    }
}

/// Splits a comma-separated tag list, trimming entries and dropping blanks.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
