//! Application layer for the typewriter
//!
//! Pure state machines and a generic runtime, so the same orchestration runs
//! against a real terminal and in deterministic simulation.
//!
//! # Components
//!
//! - [`TypewriterView`]: view adapter turning engine text into a [`Fragment`]
//! - [`App`]: application state machine (ticks, keys, resize)
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic event loop using a Driver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
mod view;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::{Runtime, RuntimeError};
pub use view::{
    CURSOR_CLASS, CursorGlyph, DEFAULT_CURSOR_STYLE, Fragment, TypewriterView, ViewProps,
};
