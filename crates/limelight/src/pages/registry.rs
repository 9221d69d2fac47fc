//! Top-level page factories.

use std::collections::HashMap;
use std::rc::Rc;

use super::manager::PageManager;
use super::page::Page;

/// Constructs a fresh top-level page.
pub type PageFactory = Rc<dyn Fn() -> Box<dyn Page>>;

/// The set of top-level pages an application can start from.
///
/// Nothing can be navigated to until a registry has been built and loaded
/// into a [`PageManager`].
#[derive(Clone, Default)]
pub struct PageRegistry {
    pages: Vec<(String, PageFactory)>,
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifests a registry from `(tag, factory)` entries.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, PageFactory)>,
    {
        Self {
            pages: entries.into_iter().collect(),
        }
    }

    /// Adds a top-level page.
    pub fn page<F, P>(mut self, tag: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> P + 'static,
        P: Page + 'static,
    {
        let factory: PageFactory = Rc::new(move || Box::new(factory()) as Box<dyn Page>);
        self.pages.push((tag.into(), factory));
        self
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Hands the factories to `manager`. A later tag replaces an earlier one.
    pub fn load(&self, manager: &mut PageManager) {
        let factories: HashMap<String, PageFactory> = self
            .pages
            .iter()
            .map(|(tag, factory)| (tag.clone(), Rc::clone(factory)))
            .collect();
        manager.manifest(factories);
    }
}
