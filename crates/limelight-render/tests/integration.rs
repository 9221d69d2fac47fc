use limelight_input::MockInput;
use limelight_render::{
    AnimatedString, BarTemplate, Builder, ClearScreen, Color, ColorChoice, EnvMode,
    InputOptions, OutputBuffer, OutputTarget, PrintOptions, ProgressBar, Terminal,
};
use limelight_tags::DEFAULT_PALETTE;
use proptest::prelude::*;

#[test]
fn test_progress_bar_scenario() {
    let (mut term, _) = Terminal::buffered();
    let bar = BarTemplate::new("[has]|[need]|[prog]%", "-", 10);
    assert_eq!(term.progress_bar(&bar, 3, 10, "", false), "---|-------|30%");
}

#[test]
fn test_environment_scenario() {
    let (mut term, _) = Terminal::buffered();
    let green = term.new_env(Some(Color::new("\x1b[32m")), Some(Color::new("\x1b[0m")));
    term.enable(green);
    assert_eq!(
        term.format(["hi"], &PrintOptions::format()),
        "\x1b[32mhi\x1b[0m"
    );
}

#[test]
fn test_builder_scenario() {
    let mut builder = Builder::new();
    builder.set_index(2);
    builder.set_value("x");
    builder.set_index(0);
    assert_eq!(builder.value(), "");
    builder.set_index(2);
    assert_eq!(builder.value(), "x");
}

#[test]
fn test_spinner_scenario() {
    let mut spinner = AnimatedString::new(["-", "\\", "|", "/"]);
    for _ in 0..4 {
        spinner.next();
    }
    assert_eq!(spinner.index(), 0);
}

#[test]
fn test_multiple_mode_nesting() {
    let (mut term, _) = Terminal::buffered();
    term.set_env_mode(EnvMode::Multiple);
    let a = term.new_env(Some(Color::new("A<")), Some(Color::new(">A")));
    let b = term.new_env(Some(Color::new("B<")), Some(Color::new(">B")));

    let mut outer = term.scope(a);
    let mut inner = outer.scope(b);
    assert_eq!(
        inner.format(["x"], &PrintOptions::format()),
        "A<B<x>B>A"
    );
    drop(inner);
    assert_eq!(outer.format(["x"], &PrintOptions::format()), "A<x>A");
}

#[test]
fn test_single_mode_topmost_only() {
    let (mut term, _) = Terminal::buffered();
    let ids: Vec<_> = (0..5)
        .map(|i| term.new_env(Some(Color::new(format!("{}[", i))), Some(Color::new("]"))))
        .collect();
    for id in &ids {
        term.enable(*id);
    }
    assert_eq!(term.format(["x"], &PrintOptions::format()), "4[x]");
}

#[test]
fn test_every_tag_substituted_once_through_terminal() {
    let (mut term, _) = Terminal::buffered();
    for (tag, sequence) in DEFAULT_PALETTE {
        let out = term.format([format!("a{}b", tag)], &PrintOptions::format());
        assert_eq!(out, format!("a{}b", sequence));
    }
}

#[test]
fn test_auto_color_on_buffer_strips_tags() {
    let out = OutputBuffer::new();
    let mut term = Terminal::builder()
        .output(OutputTarget::Buffer(out.clone()))
        .color_choice(ColorChoice::Auto)
        .build();
    term.print(["$redalert$res"], &PrintOptions::default().color(true))
        .unwrap();
    assert_eq!(out.contents(), "alert\n");
}

#[test]
fn test_progress_bar_printed_frames() {
    let (mut term, out) = Terminal::buffered();
    let mut bar = ProgressBar::new("[[has][need]]", "#", 3);
    bar.set_progress(2, 3);
    bar.print(&mut term, &PrintOptions::default().end("\r"))
        .unwrap();
    bar.print_frame(&mut term, 3, &PrintOptions::default())
        .unwrap();
    bar.print_frame(&mut term, 9, &PrintOptions::default())
        .unwrap();
    assert_eq!(out.contents(), "[###]\r[###]\n");
}

#[test]
fn test_animated_frame_edited_from_input() {
    let mut term = Terminal::builder()
        .output(OutputTarget::buffer())
        .input(MockInput::lines(["edited"]))
        .build();
    let mut frames = AnimatedString::new(["one", "two"]);
    frames.next();
    frames
        .input(&mut term, ["new text:"], &InputOptions::default())
        .unwrap();
    assert_eq!(frames.frames(), &["one".to_string(), "edited".to_string()]);
}

#[test]
fn test_builder_render_clears_screen_first() {
    let (mut term, out) = Terminal::buffered();
    let mut builder = Builder::new();
    builder.print(&mut term, ["frame"], &PrintOptions::default());
    builder
        .render(
            &mut term,
            &PrintOptions::default()
                .end("")
                .clear_screen(ClearScreen::Ansi { flush: false }),
        )
        .unwrap();
    assert_eq!(out.contents(), "\x1b[2J\x1b[Hframe\n");
}

fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?-]{0,40}"
}

proptest! {
    #[test]
    fn plain_text_formats_same_with_and_without_color(text in plain_text()) {
        let (mut term, _) = Terminal::buffered();
        let colored = term.format([&text], &PrintOptions::format().color(true));
        let plain = term.format([&text], &PrintOptions::format().color(false));
        prop_assert_eq!(colored, plain);
    }

    #[test]
    fn one_tag_one_substitution(idx in 0usize..11, left in plain_text(), right in plain_text()) {
        let (tag, sequence) = DEFAULT_PALETTE[idx];
        let (mut term, _) = Terminal::buffered();
        let out = term.format([format!("{}{}{}", left, tag, right)], &PrintOptions::format());
        prop_assert_eq!(out, format!("{}{}{}", left, sequence, right));
    }
}
