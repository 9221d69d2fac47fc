//! The page instance cache and navigation.

use std::collections::HashMap;

use limelight_render::{RenderError, Terminal};

use super::page::{Page, PageContext, Request};
use super::registry::PageFactory;

struct Slot {
    page: Box<dyn Page>,
    parent: Option<String>,
    children: Vec<String>,
}

/// Owns every instantiated page, keyed by tag.
///
/// Pages are built lazily: the first navigation to a top-level tag
/// constructs the page, loads its children once and registers the whole
/// subtree. Later navigations reuse the cached instances.
#[derive(Default)]
pub struct PageManager {
    factories: Option<HashMap<String, PageFactory>>,
    pages: HashMap<String, Slot>,
    current: Option<String>,
    requests: Vec<Request>,
}

impl std::fmt::Debug for PageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("PageManager")
            .field("manifested", &self.is_manifested())
            .field("pages", &tags)
            .field("current", &self.current)
            .finish()
    }
}

impl PageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the known top-level factories.
    pub fn manifest(&mut self, factories: HashMap<String, PageFactory>) {
        tracing::debug!(pages = factories.len(), "page registry manifested");
        self.factories = Some(factories);
    }

    pub fn is_manifested(&self) -> bool {
        self.factories.is_some()
    }

    /// Tag of the current page.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// True once a page with this tag has been instantiated.
    pub fn contains(&self, tag: &str) -> bool {
        self.pages.contains_key(tag)
    }

    pub fn get(&self, tag: &str) -> Option<&dyn Page> {
        self.pages.get(tag).map(|slot| slot.page.as_ref())
    }

    pub fn parent_of(&self, tag: &str) -> Option<&str> {
        self.pages.get(tag).and_then(|slot| slot.parent.as_deref())
    }

    pub fn children_of(&self, tag: &str) -> &[String] {
        self.pages
            .get(tag)
            .map(|slot| slot.children.as_slice())
            .unwrap_or_default()
    }

    /// Number of instantiated pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Makes `tag` the current page and calls its `init`.
    ///
    /// Returns `Ok(false)` without doing anything if no registry was loaded
    /// or the tag is neither cached nor a top-level page.
    pub fn init(&mut self, tag: &str, terminal: &mut Terminal) -> Result<bool, RenderError> {
        let Some(factories) = self.factories.as_ref() else {
            tracing::debug!(tag, "navigation before any registry was loaded");
            return Ok(false);
        };

        if !self.pages.contains_key(tag) {
            let Some(factory) = factories.get(tag).cloned() else {
                tracing::debug!(tag, "navigation to unknown page");
                return Ok(false);
            };
            let page = factory();
            if page.tag() != tag {
                tracing::warn!(
                    tag,
                    built = page.tag(),
                    "factory built a page with a different tag, ignoring it"
                );
                return Ok(false);
            }
            tracing::debug!(tag, "page constructed");
            self.register(page, None);
        }

        let Some(slot) = self.pages.get_mut(tag) else {
            return Ok(false);
        };
        self.current = Some(tag.to_string());
        tracing::debug!(tag, "page activated");

        let mut ctx = PageContext::new(terminal, &mut self.requests, tag, slot.parent.as_deref());
        slot.page.init(&mut ctx)?;
        Ok(true)
    }

    /// Inserts `page` and its descendants. The first page registered under a tag wins.
    fn register(&mut self, mut page: Box<dyn Page>, parent: Option<String>) {
        let tag = page.tag().to_string();
        let children = page.children();
        let child_tags: Vec<String> = children.iter().map(|c| c.tag().to_string()).collect();

        if self.pages.contains_key(&tag) {
            tracing::warn!(tag = %tag, "duplicate page tag, keeping the first registration");
        } else {
            self.pages.insert(
                tag.clone(),
                Slot {
                    page,
                    parent,
                    children: child_tags,
                },
            );
        }

        for child in children {
            self.register(child, Some(tag.clone()));
        }
    }

    /// Renders the current page once. Does nothing without a current page.
    pub fn render_current(&mut self, terminal: &mut Terminal) -> Result<(), RenderError> {
        let Some(tag) = self.current.as_deref() else {
            return Ok(());
        };
        let Some(slot) = self.pages.get_mut(tag) else {
            return Ok(());
        };
        let mut ctx = PageContext::new(terminal, &mut self.requests, tag, slot.parent.as_deref());
        slot.page.render(&mut ctx)
    }

    /// Drains the requests pages have queued so far.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }
}
