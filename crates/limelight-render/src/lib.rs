//! # Limelight Render - Scoped Terminal Formatting
//!
//! `limelight-render` turns values into decorated terminal output. It owns the
//! print pipeline used by the rest of Limelight.
//!
//! ## Core Concepts
//!
//! - [`Terminal`]: the context object. Owns the color registry, the
//!   environment stack, the output target and the input source.
//! - [`EnvManager`] / [`Environment`]: stackable prefix/suffix decorations,
//!   composed in [`EnvMode::Single`] or [`EnvMode::Multiple`] mode.
//! - [`Builder`]: multi-page buffer that formats now and writes later.
//! - [`AnimatedString`] / [`ProgressBar`]: precomputed cyclic frame sets.
//! - [`IoString`], [`select_menu`], [`confirm`]: small input helpers.
//!
//! ## Pipeline
//!
//! ```text
//! values ─► join ─► environments ─► $tag substitution ─► prefix/suffix/end ─► output
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use limelight_render::{PrintOptions, Terminal};
//! use limelight_tags::Color;
//!
//! let (mut term, out) = Terminal::buffered();
//! let notice = term.new_env(Some(Color::new("[!] ")), None);
//! term.enable(notice);
//!
//! term.print(["$yeldisk almost full$res"], &PrintOptions::default().color(true)).unwrap();
//! assert_eq!(out.contents(), "[!] \x1b[33mdisk almost full\x1b[0m\n");
//! ```
//!
//! ## Testing
//!
//! [`Terminal::buffered`] captures output in an [`OutputBuffer`]; pair it with
//! [`limelight_input::MockInput`] through [`Terminal::builder`] to script input.

mod builder;
pub mod cursor;
mod env;
mod error;
pub mod frames;
mod iostring;
mod options;
mod output;
mod prompt;
pub mod simple;
mod terminal;

pub use builder::Builder;
pub use env::{EnvId, EnvManager, EnvMode, EnvState, Environment};
pub use error::RenderError;
pub use frames::{AnimatedString, BarTemplate, ProgressBar};
pub use iostring::IoString;
pub use options::{InputOptions, PrintOptions};
pub use output::{ClearScreen, ColorChoice, OutputBuffer, OutputTarget, CLEAR_SEQUENCE};
pub use prompt::{confirm, select_menu, DEFAULT_NO, DEFAULT_YES};
pub use terminal::{EnvScope, LogLevel, Terminal, TerminalBuilder};

// Re-export the color layer so dependents need a single import.
pub use limelight_tags::{Color, ColorRegistry, TagError, TagTransform};
