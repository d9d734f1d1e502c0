use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Config;
use crate::{tui, utils};

/// commentview - show a read-only comment in a terminal modal
#[derive(Parser, Debug)]
#[command(
    name = "commentview",
    version,
    about = "Show a read-only comment in a terminal modal",
    long_about = r#"commentview displays a block of text verbatim inside a modal dialog.
Dismiss it with the ✕ icon, the Close button, Esc or Enter.

Examples:
  commentview "Patient reports mild discomfort."
  commentview --file note.txt --title "Triage note"
  echo "piped text" | commentview
  commentview --print --width 60 --height 12 "Line one"
"#
)]
pub struct Cli {
    /// Comment text to display (`-` reads standard input)
    pub comment: Option<String>,

    /// Read the comment from a file
    #[arg(short = 'f', long = "file", conflicts_with = "comment")]
    pub file: Option<PathBuf>,

    /// Title shown in the modal header
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Theme preset (dark, light, high-contrast)
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Icon set (glyph, ascii)
    #[arg(long = "icons")]
    pub icons: Option<String>,

    /// Draw one frame, print it as plain text and exit
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Width of the printed frame
    #[arg(long = "width", default_value_t = 80, requires = "print")]
    pub width: u16,

    /// Height of the printed frame
    #[arg(long = "height", default_value_t = 24, requires = "print")]
    pub height: u16,

    /// Write log output to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

/// Where the comment text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSource {
    File(PathBuf),
    Inline(String),
    Stdin,
    Empty,
}

impl CommentSource {
    /// Read the comment text
    pub async fn read(self) -> Result<String> {
        match self {
            Self::File(path) => utils::fs::read_text_file(path).await,
            Self::Inline(text) => Ok(text),
            Self::Stdin => utils::fs::read_stdin().await,
            Self::Empty => Ok(String::new()),
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let mut config = Config::init().await?;
        config.apply_overrides(self.title.clone(), self.theme.clone(), self.icons.clone());
        config.validate()?;
        debug!(?config, "Configuration initialized");

        let source = self.comment_source(std::io::stdin().is_terminal());
        debug!(?source, "Reading comment");
        let comment = source.read().await?;

        if self.print {
            let frame = tui::render_to_string(&config, comment, self.width, self.height)?;
            print!("{}", frame);
            return Ok(());
        }

        tui::run(&config, comment).await?;
        info!("Viewer closed");
        Ok(())
    }

    /// Resolve the comment source from the arguments
    pub fn comment_source(&self, stdin_is_terminal: bool) -> CommentSource {
        if let Some(path) = &self.file {
            return CommentSource::File(path.clone());
        }

        match self.comment.as_deref() {
            Some("-") => CommentSource::Stdin,
            Some(text) => CommentSource::Inline(text.to_string()),
            None if !stdin_is_terminal => CommentSource::Stdin,
            None => CommentSource::Empty,
        }
    }
}
