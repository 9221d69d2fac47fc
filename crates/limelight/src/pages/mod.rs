//! Page-based console applications.
//!
//! An [`Application`] owns a [`Terminal`](limelight_render::Terminal) and a
//! [`PageManager`]. Pages are addressed by dotted tags (`root`,
//! `root.settings`, ...) and built lazily from a [`PageRegistry`] the first
//! time their top-level page is navigated to.
//!
//! Pages never reach back into the application. During `init` and `render`
//! they get a [`PageContext`], print through it and queue navigation with
//! [`PageContext::navigate`], [`PageContext::back`] or [`PageContext::quit`].

mod app;
mod manager;
mod menu;
mod page;
mod registry;
mod view;

pub use app::Application;
pub use manager::PageManager;
pub use menu::{MenuAction, MenuOption, MenuPage};
pub use page::{child_tag, Page, PageContext, Request, TAG_SEPARATOR};
pub use registry::{PageFactory, PageRegistry};
pub use view::{ChildFn, PageFn, SubPage, ViewPage};
