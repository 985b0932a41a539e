//! Command-line arguments.
//!
//! Parsed with clap and converted into the library configuration. Speeds are
//! whole milliseconds.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use typewriter_app::{DEFAULT_CURSOR_STYLE, ViewProps};
use typewriter_core::TypewriterConfig;

/// Typewriter terminal animation
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "typewriter-tui")]
#[command(about = "Types, pauses and deletes words in the terminal")]
#[command(version)]
pub struct Args {
    /// Words to cycle through, in order
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Restart from the first word after the last one
    #[arg(short, long = "loop")]
    pub looping: bool,

    /// Milliseconds between typed characters
    #[arg(long, default_value_t = 100)]
    pub type_speed: u64,

    /// Milliseconds between deleted characters
    #[arg(long, default_value_t = 50)]
    pub delete_speed: u64,

    /// Milliseconds to wait after a word is fully typed
    #[arg(long, default_value_t = 1500)]
    pub delay_speed: u64,

    /// Show a blinking cursor after the text
    #[arg(short, long)]
    pub cursor: bool,

    /// Cursor glyph
    #[arg(long, default_value = DEFAULT_CURSOR_STYLE)]
    pub cursor_style: String,

    /// Quit once the last word is typed (ignored with --loop)
    #[arg(long)]
    pub exit_on_done: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Animation configuration. Not validated.
    pub fn config(&self) -> TypewriterConfig {
        TypewriterConfig::new(self.words.iter().cloned())
            .with_loop(self.looping)
            .with_type_speed(Duration::from_millis(self.type_speed))
            .with_delete_speed(Duration::from_millis(self.delete_speed))
            .with_delay_speed(Duration::from_millis(self.delay_speed))
    }

    /// Presentation props.
    pub fn view_props(&self) -> ViewProps {
        ViewProps { cursor: self.cursor, cursor_style: self.cursor_style.clone() }
    }
}
