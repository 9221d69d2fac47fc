//! Numbered-option menu pages.

use limelight_render::{select_menu, Builder, PrintOptions, RenderError};

use super::page::{child_tag, Page, PageContext};
use super::view::ChildFn;

/// What choosing a menu option does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Go to the page with this tag.
    Navigate(String),
    /// Go to the parent page.
    Back,
    /// Stop the application.
    Quit,
    /// Stay on the menu.
    Stay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

/// A page that shows a title and a 1-indexed option list, then acts on the
/// chosen number.
///
/// The title is rebuilt into the page's builder every time the menu becomes
/// current. Options render as `$blu{n}$res: {label}{extra}`.
pub struct MenuPage {
    tag: String,
    parent: Option<String>,
    title: String,
    subtitle: String,
    prompt: String,
    options: Vec<MenuOption>,
    extras: Vec<String>,
    builder: Builder,
    child_fns: Vec<ChildFn>,
}

impl MenuPage {
    /// A root menu.
    pub fn new(tag: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            parent: None,
            title: title.into(),
            subtitle: "Menu".to_string(),
            prompt: "Select: ".to_string(),
            options: Vec::new(),
            extras: Vec::new(),
            builder: Builder::new(),
            child_fns: Vec::new(),
        }
    }

    /// A menu nested under `parent`.
    pub fn nested(parent: &str, suffix: &str, title: impl Into<String>) -> Self {
        let mut menu = Self::new(child_tag(parent, suffix), title);
        menu.parent = Some(parent.to_string());
        menu
    }

    /// Heading printed right above the options.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn option(mut self, label: impl Into<String>, action: MenuAction) -> Self {
        self.options.push(MenuOption {
            label: label.into(),
            action,
        });
        self
    }

    /// Text appended to each option's label, by position.
    pub fn extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }

    pub fn child<F, P>(mut self, make: F) -> Self
    where
        F: FnOnce(&str) -> P + 'static,
        P: Page + 'static,
    {
        self.child_fns
            .push(Box::new(move |parent: &str| Box::new(make(parent)) as Box<dyn Page>));
        self
    }

    /// Tag of the parent menu, if nested.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// The option lines as shown, before tag substitution.
    pub fn option_lines(&self, extras: &[String]) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let extra = extras.get(i).map_or("", String::as_str);
                format!("$blu{}$res: {}{}", i + 1, option.label, extra)
            })
            .collect()
    }

    /// Shows the options and reads the raw answer.
    pub fn generate_options(
        &self,
        ctx: &mut PageContext<'_>,
        extras: &[String],
    ) -> Result<String, RenderError> {
        let lines = self.option_lines(extras);
        select_menu(ctx.terminal(), &lines, &self.subtitle, &self.prompt, true)
    }

    /// Maps a typed answer to an option, if it names one.
    pub fn selection(&self, answer: &str) -> Option<&MenuOption> {
        let n: usize = answer.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| self.options.get(i))
    }

    fn build_ui(&mut self, ctx: &mut PageContext<'_>) {
        self.builder.clear();
        self.builder
            .print(ctx.terminal(), [&self.title], &PrintOptions::default().color(true));
    }
}

impl Page for MenuPage {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn children(&mut self) -> Vec<Box<dyn Page>> {
        let fns = std::mem::take(&mut self.child_fns);
        fns.into_iter().map(|make| make(&self.tag)).collect()
    }

    fn init(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        self.build_ui(ctx);
        Ok(())
    }

    fn render(&mut self, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
        self.builder
            .render(ctx.terminal(), &PrintOptions::default().end(""))?;
        let answer = self.generate_options(ctx, &self.extras)?;

        let Some(option) = self.selection(&answer) else {
            tracing::debug!(menu = %self.tag, answer = %answer, "no option selected");
            return Ok(());
        };
        match &option.action {
            MenuAction::Navigate(tag) => ctx.navigate(tag.clone()),
            MenuAction::Back => {
                if !ctx.back() {
                    tracing::debug!(menu = %self.tag, "back requested on a root menu");
                }
            }
            MenuAction::Quit => ctx.quit(),
            MenuAction::Stay => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::page::Request;
    use limelight_input::MockInput;
    use limelight_render::{OutputBuffer, OutputTarget, Terminal};

    fn scripted(lines: &[&str]) -> (Terminal, OutputBuffer) {
        let out = OutputBuffer::new();
        let term = Terminal::builder()
            .output(OutputTarget::Buffer(out.clone()))
            .input(MockInput::lines(lines.iter().copied()))
            .build();
        (term, out)
    }

    fn menu() -> MenuPage {
        MenuPage::new("main", "$briMain$res")
            .option("Settings", MenuAction::Navigate("main.settings".into()))
            .option("Quit", MenuAction::Quit)
    }

    #[test]
    fn option_lines_are_one_indexed() {
        let lines = menu().option_lines(&[" (new)".to_string()]);
        assert_eq!(lines, vec!["$blu1$res: Settings (new)", "$blu2$res: Quit"]);
    }

    #[test]
    fn selection_parses_numbers() {
        let menu = menu();
        assert_eq!(menu.selection(" 2 ").unwrap().action, MenuAction::Quit);
        assert!(menu.selection("0").is_none());
        assert!(menu.selection("3").is_none());
        assert!(menu.selection("quit").is_none());
    }

    #[test]
    fn init_rebuilds_title() {
        let (mut term, _) = scripted(&[]);
        let mut requests = Vec::new();
        let mut page = menu();
        for _ in 0..2 {
            let mut ctx = PageContext::new(&mut term, &mut requests, "main", None);
            page.init(&mut ctx).unwrap();
        }
        assert_eq!(page.builder().value(), "\x1b[1mMain\x1b[0m\n");
    }

    #[test]
    fn render_shows_menu_and_queues_action() {
        let (mut term, out) = scripted(&["1"]);
        let mut requests = Vec::new();
        let mut page = menu();
        {
            let mut ctx = PageContext::new(&mut term, &mut requests, "main", None);
            page.init(&mut ctx).unwrap();
            page.render(&mut ctx).unwrap();
        }
        assert_eq!(
            out.contents(),
            "\x1b[1mMain\x1b[0m\nMenu\n\x1b[34m1\x1b[0m: Settings\n\x1b[34m2\x1b[0m: Quit\nSelect: "
        );
        assert_eq!(
            requests,
            vec![Request::Navigate("main.settings".into())]
        );
    }

    #[test]
    fn back_goes_to_parent() {
        let (mut term, _) = scripted(&["1"]);
        let mut requests = Vec::new();
        let mut page =
            MenuPage::nested("main", "settings", "Settings").option("Back", MenuAction::Back);
        assert_eq!(page.tag(), "main.settings");
        let parent = page.parent().map(str::to_string);
        {
            let mut ctx =
                PageContext::new(&mut term, &mut requests, "main.settings", parent.as_deref());
            page.render(&mut ctx).unwrap();
        }
        assert_eq!(
            requests,
            vec![Request::Navigate("main".into())]
        );
    }

    #[test]
    fn unknown_answer_does_nothing() {
        let (mut term, _) = scripted(&["nope"]);
        let mut requests = Vec::new();
        let mut page = menu();
        let mut ctx = PageContext::new(&mut term, &mut requests, "main", None);
        page.render(&mut ctx).unwrap();
        drop(ctx);
        assert!(requests.is_empty());
    }
}
