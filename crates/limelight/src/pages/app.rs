//! The render loop.

use std::convert::Infallible;

use limelight_render::{ClearScreen, RenderError, Terminal};

use super::manager::PageManager;
use super::page::Request;
use super::registry::PageRegistry;
use crate::config::{AppConfig, ConfigError};

/// Redirect rounds applied after a render before init hooks are ignored.
const MAX_REDIRECTS: usize = 16;

/// A page-based console application.
///
/// Each pass of [`run`](Application::run) clears the screen, renders the
/// current page once, then applies whatever navigation the page requested.
///
/// ```
/// use limelight::pages::{Application, PageRegistry, ViewPage};
/// use limelight::{PrintOptions, Terminal};
///
/// let (term, out) = Terminal::buffered();
/// let mut app = Application::new(term);
/// app.set_clear(None);
/// app.load(&PageRegistry::new().page("home", || {
///     ViewPage::new("home", |_, ctx| {
///         ctx.print(["bye"], &PrintOptions::default())?;
///         ctx.quit();
///         Ok(())
///     })
/// }));
/// app.init("home").unwrap();
/// app.run().unwrap();
/// assert_eq!(out.contents(), "bye\n");
/// ```
#[derive(Debug)]
pub struct Application {
    terminal: Terminal,
    manager: PageManager,
    running: bool,
    clear: Option<ClearScreen>,
}

impl Application {
    pub fn new(terminal: Terminal) -> Self {
        Self {
            terminal,
            manager: PageManager::new(),
            running: false,
            clear: Some(ClearScreen::System),
        }
    }

    /// Builds an application from a loaded [`AppConfig`].
    pub fn from_config(mut terminal: Terminal, config: &AppConfig) -> Result<Self, ConfigError> {
        config.apply(&mut terminal)?;
        let mut app = Self::new(terminal);
        app.set_clear(config.clear_screen());
        Ok(app)
    }

    /// Loads the top-level pages. Navigation is a no-op until this is called.
    pub fn load(&mut self, registry: &PageRegistry) {
        registry.load(&mut self.manager);
    }

    /// Switches to `tag`. Returns `false` if the tag is not reachable.
    pub fn init(&mut self, tag: &str) -> Result<bool, RenderError> {
        self.manager.init(tag, &mut self.terminal)
    }

    /// Tag of the current page.
    pub fn current(&self) -> Option<&str> {
        self.manager.current()
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    pub fn manager(&self) -> &PageManager {
        &self.manager
    }

    /// How the screen is cleared before each pass; `None` disables clearing.
    pub fn set_clear(&mut self, clear: Option<ClearScreen>) {
        self.clear = clear;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the loop after the current pass.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Renders until a page quits. Returns immediately if no page is current.
    pub fn run(&mut self) -> Result<(), RenderError> {
        if self.current().is_none() {
            tracing::warn!("application started without a current page");
            return Ok(());
        }
        self.running = true;
        while self.running {
            self.render_once()?;
        }
        Ok(())
    }

    /// One pass of the loop: clear, render, apply requests.
    pub fn render_once(&mut self) -> Result<(), RenderError> {
        if let Some(mode) = self.clear {
            self.terminal.clear(mode)?;
        }
        self.manager.render_current(&mut self.terminal)?;
        self.apply_requests()
    }

    fn apply_requests(&mut self) -> Result<(), RenderError> {
        // Requests made by init hooks are applied in the same pass.
        for _ in 0..=MAX_REDIRECTS {
            let requests = self.manager.take_requests();
            if requests.is_empty() {
                return Ok(());
            }
            for request in requests {
                match request {
                    Request::Navigate(tag) => {
                        if !self.init(&tag)? {
                            tracing::warn!(tag = %tag, "navigation to unknown page ignored");
                        }
                    }
                    Request::Quit => self.quit(),
                }
            }
        }
        let dropped = self.manager.take_requests();
        if !dropped.is_empty() {
            tracing::warn!(
                current = ?self.current(),
                dropped = dropped.len(),
                "init hooks kept redirecting, rendering the current page"
            );
        }
        Ok(())
    }

    /// Runs the loop, then exits the process.
    pub fn start(mut self) -> Result<Infallible, RenderError> {
        self.run()?;
        drop(self);
        std::process::exit(0)
    }
}
