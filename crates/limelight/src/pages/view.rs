//! Closure-driven pages: [`ViewPage`] for roots, [`SubPage`] for children.

use limelight_render::{Builder, RenderError};

use super::page::{child_tag, Page, PageContext};

/// Render or init hook of a closure-driven page.
///
/// Receives the page's private [`Builder`] and the context.
pub type PageFn = Box<dyn FnMut(&mut Builder, &mut PageContext<'_>) -> Result<(), RenderError>>;

/// Deferred construction of a child page, given the parent's tag.
pub type ChildFn = Box<dyn FnOnce(&str) -> Box<dyn Page>>;

/// A root page rendered by a closure.
///
/// ```
/// use limelight::pages::{Page, ViewPage};
/// use limelight::PrintOptions;
///
/// let page = ViewPage::new("home", |builder, ctx| {
///     builder.clear();
///     builder.print(ctx.terminal(), ["$brihome$res"], &PrintOptions::default().color(true));
///     builder.render(ctx.terminal(), &PrintOptions::default().end(""))?;
///     ctx.quit();
///     Ok(())
/// });
/// assert_eq!(page.tag(), "home");
/// ```
pub struct ViewPage {
    tag: String,
    builder: Builder,
    render: PageFn,
    on_init: Option<PageFn>,
    child_fns: Vec<ChildFn>,
}

impl ViewPage {
    pub fn new<F>(tag: impl Into<String>, render: F) -> Self
    where
        F: FnMut(&mut Builder, &mut PageContext<'_>) -> Result<(), RenderError> + 'static,
    {
        Self {
            tag: tag.into(),
            builder: Builder::new(),
            render: Box::new(render),
            on_init: None,
            child_fns: Vec::new(),
        }
    }

    /// Runs `hook` every time the page becomes current.
    pub fn on_init<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Builder, &mut PageContext<'_>) -> Result<(), RenderError> + 'static,
    {
        self.on_init = Some(Box::new(hook));
        self
    }

    /// Adds a child, built from this page's tag when the page is first loaded.
    pub fn child<F, P>(mut self, make: F) -> Self
    where
        F: FnOnce(&str) -> P + 'static,
        P: Page + 'static,
    {
        self.child_fns
            .push(Box::new(move |parent: &str| Box::new(make(parent)) as Box<dyn Page>));
        self
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }
}

impl Page for ViewPage {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn children(&mut self) -> Vec<Box<dyn Page>> {
        let fns = std::mem::take(&mut self.child_fns);
        fns.into_iter().map(|make| make(&self.tag)).collect()
    }

    fn init(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        match self.on_init.as_mut() {
            Some(hook) => hook(&mut self.builder, ctx),
            None => Ok(()),
        }
    }

    fn render(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        (self.render)(&mut self.builder, ctx)
    }
}

/// A child page; its tag is the parent's tag plus `.suffix`.
pub struct SubPage {
    parent: String,
    view: ViewPage,
}

impl SubPage {
    pub fn new<F>(parent: &str, suffix: &str, render: F) -> Self
    where
        F: FnMut(&mut Builder, &mut PageContext<'_>) -> Result<(), RenderError> + 'static,
    {
        Self {
            parent: parent.to_string(),
            view: ViewPage::new(child_tag(parent, suffix), render),
        }
    }

    pub fn on_init<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Builder, &mut PageContext<'_>) -> Result<(), RenderError> + 'static,
    {
        self.view = self.view.on_init(hook);
        self
    }

    pub fn child<F, P>(mut self, make: F) -> Self
    where
        F: FnOnce(&str) -> P + 'static,
        P: Page + 'static,
    {
        self.view = self.view.child(make);
        self
    }

    /// Tag of the page this one was created under.
    pub fn parent(&self) -> &str {
        &self.parent
    }
}

impl Page for SubPage {
    fn tag(&self) -> &str {
        self.view.tag()
    }

    fn children(&mut self) -> Vec<Box<dyn Page>> {
        self.view.children()
    }

    fn init(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        self.view.init(ctx)
    }

    fn render(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        self.view.render(ctx)
    }
}
