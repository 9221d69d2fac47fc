//! The [`Page`] trait and the context pages render with.

use std::ops::{Deref, DerefMut};

use limelight_render::{RenderError, Terminal};

/// Separator between a parent tag and a child suffix.
pub const TAG_SEPARATOR: char = '.';

/// Builds a child tag: `parent.suffix`.
pub fn child_tag(parent: &str, suffix: &str) -> String {
    format!("{}{}{}", parent, TAG_SEPARATOR, suffix)
}

/// Something a page asked the application to do after the current call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Switch to the page with this tag.
    Navigate(String),
    /// Stop the render loop.
    Quit,
}

/// A navigable unit of a console application.
///
/// Pages never hold references to the application or to each other. They
/// read and write through the [`PageContext`] they are handed, and ask for
/// navigation through it; the application applies those requests once the
/// call returns.
pub trait Page {
    /// Unique key of this page within its manager.
    fn tag(&self) -> &str;

    /// Instantiates the child pages. The manager calls this exactly once,
    /// when the page is first constructed.
    fn children(&mut self) -> Vec<Box<dyn Page>> {
        Vec::new()
    }

    /// Called every time the page becomes the current page.
    fn init(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        let _ = ctx;
        Ok(())
    }

    /// Called once per pass of the render loop while the page is current.
    fn render(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError>;
}

/// What a page sees while it runs: the terminal, its place in the tree and
/// a queue of navigation requests.
///
/// Derefs to [`Terminal`], so pages print straight through it.
pub struct PageContext<'a> {
    terminal: &'a mut Terminal,
    requests: &'a mut Vec<Request>,
    tag: &'a str,
    parent: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        terminal: &'a mut Terminal,
        requests: &'a mut Vec<Request>,
        tag: &'a str,
        parent: Option<&'a str>,
    ) -> Self {
        Self {
            terminal,
            requests,
            tag,
            parent,
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal {
        &mut *self.terminal
    }

    /// Tag of the page being run.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Tag of the page's parent, if it has one.
    pub fn parent(&self) -> Option<&str> {
        self.parent
    }

    /// Asks to switch to `tag` once this call returns. Unknown tags are ignored then.
    pub fn navigate(&mut self, tag: impl Into<String>) {
        self.requests.push(Request::Navigate(tag.into()));
    }

    /// Navigates to the parent page. Returns `false` for a root page.
    pub fn back(&mut self) -> bool {
        match self.parent {
            Some(parent) => {
                self.requests.push(Request::Navigate(parent.to_string()));
                true
            }
            None => false,
        }
    }

    /// Asks the render loop to stop.
    pub fn quit(&mut self) {
        self.requests.push(Request::Quit);
    }
}

impl Deref for PageContext<'_> {
    type Target = Terminal;

    fn deref(&self) -> &Terminal {
        &*self.terminal
    }
}

impl DerefMut for PageContext<'_> {
    fn deref_mut(&mut self) -> &mut Terminal {
        &mut *self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_tags_nest() {
        assert_eq!(child_tag("root", "settings"), "root.settings");
        assert_eq!(child_tag("root.settings", "color"), "root.settings.color");
    }

    #[test]
    fn context_queues_requests() {
        let (mut term, _) = Terminal::buffered();
        let mut requests = Vec::new();
        {
            let mut ctx = PageContext::new(&mut term, &mut requests, "root.a", Some("root"));
            assert_eq!(ctx.tag(), "root.a");
            assert!(ctx.back());
            ctx.navigate("root.b");
            ctx.quit();
        }
        assert_eq!(
            requests,
            vec![
                Request::Navigate("root".into()),
                Request::Navigate("root.b".into()),
                Request::Quit,
            ]
        );
    }

    #[test]
    fn back_from_root_does_nothing() {
        let (mut term, _) = Terminal::buffered();
        let mut requests = Vec::new();
        let mut ctx = PageContext::new(&mut term, &mut requests, "root", None);
        assert!(!ctx.back());
        drop(ctx);
        assert!(requests.is_empty());
    }
}
