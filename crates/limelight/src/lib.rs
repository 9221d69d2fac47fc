//! # Limelight - Colorized Terminal Output and Console Pages
//!
//! Limelight is a small toolkit for interactive terminal programs. It provides:
//!
//! - `$tag` color substitution backed by a [`ColorRegistry`]
//! - Scoped prefix/suffix decoration through stacked environments
//! - A multi-page output [`Builder`]
//! - Precomputed animation and progress-bar frames
//! - Page-based console applications with tag navigation ([`pages`])
//!
//! The pieces live in separate crates and are re-exported here:
//! `limelight-tags` (colors), `limelight-input` (reading from the user) and
//! `limelight-render` (the print pipeline).
//!
//! ## Quick Start
//!
//! ```rust
//! use limelight::{PrintOptions, Terminal};
//!
//! let (mut term, out) = Terminal::buffered();
//! term.print(["$greok$res", "3 files"], &PrintOptions::default().color(true)).unwrap();
//! assert_eq!(out.contents(), "\x1b[32mok\x1b[0m 3 files\n");
//! ```
//!
//! ## Environments
//!
//! ```rust
//! use limelight::{Color, EnvMode, PrintOptions, Terminal};
//!
//! let (mut term, _) = Terminal::buffered();
//! term.set_env_mode(EnvMode::Multiple);
//! let quote = term.new_env(Some(Color::new("> ")), None);
//! let shout = term.new_env(Some(Color::new("!")), Some(Color::new("!")));
//!
//! let mut outer = term.scope(quote);
//! let mut inner = outer.scope(shout);
//! assert_eq!(inner.format(["hey"], &PrintOptions::format()), "> !hey!");
//! ```
//!
//! ## Progress Bars
//!
//! ```rust
//! use limelight::{BarTemplate, Terminal};
//!
//! let (mut term, _) = Terminal::buffered();
//! let bar = BarTemplate::default();
//! assert_eq!(term.progress_bar(&bar, 3, 10, "", false), "---|-------|30%");
//! ```
//!
//! ## Configuration
//!
//! [`config::AppConfig`] reads clear mode, environment mode, color choice and
//! palette overrides from YAML, by default from the file named in
//! `LIMELIGHT_CONFIG`.

pub mod config;
pub mod pages;

pub use limelight_input::{ConsoleInput, InputError, InputSource, MockInput};
pub use limelight_render::{
    confirm, cursor, frames, select_menu, simple, AnimatedString, BarTemplate, Builder,
    ClearScreen, ColorChoice, EnvId, EnvManager, EnvMode, EnvScope, EnvState, Environment,
    InputOptions, IoString, LogLevel, OutputBuffer, OutputTarget, PrintOptions, ProgressBar,
    RenderError, Terminal, TerminalBuilder, CLEAR_SEQUENCE, DEFAULT_NO, DEFAULT_YES,
};
pub use limelight_tags::{substitute, Color, ColorRegistry, TagError, TagTransform, DEFAULT_PALETTE};

pub use config::{AppConfig, ConfigError};
pub use pages::{Application, MenuAction, MenuPage, Page, PageContext, PageRegistry, SubPage, ViewPage};
