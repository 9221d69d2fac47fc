use std::thread;
use std::time::Duration;

use limelight::pages::PageContext;
use limelight::{
    AnimatedString, Application, Builder, LogLevel, MenuAction, MenuPage, PageRegistry,
    PrintOptions, ProgressBar, RenderError, SubPage, Terminal,
};

pub fn notice(term: &mut Terminal, level: LogLevel, message: &[String]) -> Result<(), RenderError> {
    term.log(level, message, true)
}

pub fn progress(
    term: &mut Terminal,
    steps: u64,
    delay: Duration,
    width: usize,
) -> Result<(), RenderError> {
    let mut bar = ProgressBar::new("$gre[has]$dim[need]$res [prog]%", "#", width);
    let mut spinner = AnimatedString::new(["-", "\\", "|", "/"]);

    for has in 0..=steps {
        bar.set_progress(has, steps);
        let line = format!("{} {}", spinner, bar);
        term.print([line], &PrintOptions::default().end("\r").flush(true).color(true))?;
        spinner.next();
        if has < steps {
            thread::sleep(delay);
        }
    }
    term.space()
}

pub fn palette(term: &mut Terminal) -> Result<(), RenderError> {
    term.init();
    let colors = term.colors();
    let mut tags: Vec<(String, String)> = colors
        .tags()
        .filter_map(|tag| {
            let sequence = colors.get(tag)?.ansi().escape_debug().to_string();
            Some((tag.to_string(), sequence))
        })
        .collect();
    tags.sort();
    for (tag, sequence) in tags {
        let sample = term.format([format!("{}sample$res", tag)], &PrintOptions::format());
        term.print([sample, tag, sequence], &PrintOptions::default().sep("  "))?;
    }
    Ok(())
}

fn counter(builder: &mut Builder, ctx: &mut PageContext<'_>) -> Result<(), RenderError> {
    builder.push_str("*");
    let stars = builder.value().to_string();
    ctx.print(
        ["$yelvisits:$res", stars.as_str()],
        &PrintOptions::default().prefix("  ").color(true),
    )?;
    let answer = limelight::confirm(
        ctx.terminal(),
        "Back to the menu? [y/n] ",
        limelight::DEFAULT_YES,
        limelight::DEFAULT_NO,
        true,
    )?;
    if answer == Some(true) {
        ctx.back();
    }
    Ok(())
}

/// The page tree behind `limelight-demo menu`.
pub fn menu_registry() -> PageRegistry {
    PageRegistry::new().page("main", || {
        MenuPage::new("main", "$bri$cyaLimelight$res")
            .subtitle("Pick a page")
            .option("Counter", MenuAction::Navigate("main.counter".into()))
            .option("Settings", MenuAction::Navigate("main.settings".into()))
            .option("Quit", MenuAction::Quit)
            .child(|p| SubPage::new(p, "counter", counter))
            .child(|p| {
                MenuPage::nested(p, "settings", "$briSettings$res")
                    .option("Stay here", MenuAction::Stay)
                    .option("Back", MenuAction::Back)
            })
    })
}

pub fn menu(app: &mut Application) -> Result<(), RenderError> {
    app.load(&menu_registry());
    app.init("main")?;
    app.run()
}
