//! Terminal UI for the typewriter
//!
//! A thin shell over [`typewriter_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`typewriter_app::Runtime`]
//!
//! This crate only handles terminal input, rendering and command-line
//! arguments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod terminal;
pub mod ui;

pub use cli::Args;
pub use terminal::{TerminalDriver, TerminalError};
pub use typewriter_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
