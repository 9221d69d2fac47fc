//! Single-pass `$xxx` tag substitution.

use crate::registry::ColorRegistry;

/// Leading character of every inline tag.
pub const TAG_SIGIL: char = '$';

/// Number of lowercase letters following the sigil.
pub const TAG_NAME_LEN: usize = 3;

const TAG_LEN: usize = 1 + TAG_NAME_LEN;

/// How to transform registered tags in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Replace registered tags with their escape sequence.
    Apply,

    /// Delete registered tags, leaving plain text.
    Remove,

    /// Leave every tag as written.
    Keep,
}

/// Checks whether `s` is exactly one tag: `$` plus three ASCII lowercase letters.
///
/// ```rust
/// use limelight_tags::is_valid_tag;
///
/// assert!(is_valid_tag("$red"));
/// assert!(!is_valid_tag("$Red"));
/// assert!(!is_valid_tag("$reds"));
/// ```
pub fn is_valid_tag(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == TAG_LEN
        && bytes[0] == TAG_SIGIL as u8
        && bytes[1..].iter().all(u8::is_ascii_lowercase)
}

/// Replaces every registered tag in `text` according to `transform`.
///
/// Unregistered tags are always copied through literally. The scan never
/// revisits emitted output, so a sequence that happens to contain `$xxx`
/// is not expanded again.
pub fn substitute(text: &str, registry: &ColorRegistry, transform: TagTransform) -> String {
    if transform == TagTransform::Keep {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    for token in Tokenizer::new(text) {
        match token {
            Token::Text(text) => output.push_str(text),
            Token::Tag(tag) => match (registry.get(tag), transform) {
                (Some(color), TagTransform::Apply) => output.push_str(color.ansi()),
                (Some(_), TagTransform::Remove) => {}
                _ => output.push_str(tag),
            },
        }
    }
    output
}

/// Lists tag-shaped patterns in `text` that the registry does not know.
///
/// Useful for catching typos such as `$gren` during development; rendering
/// itself never fails on them.
pub fn unknown_tags<'a>(text: &'a str, registry: &ColorRegistry) -> Vec<&'a str> {
    Tokenizer::new(text)
        .filter_map(|token| match token {
            Token::Tag(tag) if registry.get(tag).is_none() => Some(tag),
            _ => None,
        })
        .collect()
}

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// Plain text, possibly containing stray `$` characters.
    Text(&'a str),
    /// A well-formed tag: `$abc`.
    Tag(&'a str),
}

/// Splits text into plain runs and tag-shaped tokens.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next well-formed tag in `remaining`.
    fn next_tag(remaining: &str) -> Option<usize> {
        let mut search = 0;
        while let Some(offset) = remaining[search..].find(TAG_SIGIL) {
            let start = search + offset;
            if remaining
                .get(start..start + TAG_LEN)
                .is_some_and(is_valid_tag)
            {
                return Some(start);
            }
            search = start + TAG_SIGIL.len_utf8();
        }
        None
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];
        match Self::next_tag(remaining) {
            Some(0) => {
                self.pos += TAG_LEN;
                Some(Token::Tag(&remaining[..TAG_LEN]))
            }
            Some(start) => {
                self.pos += start;
                Some(Token::Text(&remaining[..start]))
            }
            None => {
                self.pos = self.input.len();
                Some(Token::Text(remaining))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn registry() -> ColorRegistry {
        let mut registry = ColorRegistry::new();
        registry.init();
        registry
    }

    mod apply_mode {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(
                substitute("hello world", &registry(), TagTransform::Apply),
                "hello world"
            );
        }

        #[test]
        fn single_tag_replaced() {
            assert_eq!(
                substitute("$redhot", &registry(), TagTransform::Apply),
                "\x1b[31mhot"
            );
        }

        #[test]
        fn adjacent_tags_replaced() {
            assert_eq!(
                substitute("$bri$gre!$res", &registry(), TagTransform::Apply),
                "\x1b[1m\x1b[32m!\x1b[0m"
            );
        }

        #[test]
        fn unknown_tag_passthrough() {
            assert_eq!(
                substitute("a $xyz b", &registry(), TagTransform::Apply),
                "a $xyz b"
            );
        }

        #[test]
        fn custom_tag_replaced() {
            let mut registry = registry();
            registry
                .add(Color::tagged("<acc>", "$acc"), None)
                .unwrap();
            assert_eq!(
                substitute("$accx", &registry, TagTransform::Apply),
                "<acc>x"
            );
        }

        #[test]
        fn output_is_not_rescanned() {
            let mut registry = registry();
            registry.add(Color::new("$red"), Some("$lit")).unwrap();
            assert_eq!(substitute("$lit", &registry, TagTransform::Apply), "$red");
        }

        #[test]
        fn empty_registry_passthrough() {
            let registry = ColorRegistry::new();
            assert_eq!(
                substitute("$red", &registry, TagTransform::Apply),
                "$red"
            );
        }
    }

    mod remove_mode {
        use super::*;

        #[test]
        fn known_tags_stripped() {
            assert_eq!(
                substitute("$redhot$res", &registry(), TagTransform::Remove),
                "hot"
            );
        }

        #[test]
        fn unknown_tags_kept() {
            assert_eq!(
                substitute("$redhot$qqq", &registry(), TagTransform::Remove),
                "hot$qqq"
            );
        }
    }

    mod keep_mode {
        use super::*;

        #[test]
        fn tags_preserved() {
            assert_eq!(
                substitute("$redhot$res", &registry(), TagTransform::Keep),
                "$redhot$res"
            );
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_input() {
            assert_eq!(substitute("", &registry(), TagTransform::Apply), "");
        }

        #[test]
        fn lone_sigil() {
            assert_eq!(substitute("$", &registry(), TagTransform::Apply), "$");
            assert_eq!(
                substitute("cost: $5", &registry(), TagTransform::Apply),
                "cost: $5"
            );
        }

        #[test]
        fn truncated_tag_at_end() {
            assert_eq!(substitute("x$re", &registry(), TagTransform::Apply), "x$re");
        }

        #[test]
        fn double_sigil() {
            assert_eq!(
                substitute("$$red", &registry(), TagTransform::Apply),
                "$\x1b[31m"
            );
        }

        #[test]
        fn uppercase_not_a_tag() {
            assert_eq!(substitute("$RED", &registry(), TagTransform::Apply), "$RED");
        }

        #[test]
        fn tag_followed_by_letters() {
            assert_eq!(
                substitute("$redder", &registry(), TagTransform::Apply),
                "\x1b[31mder"
            );
        }

        #[test]
        fn multibyte_neighbours() {
            assert_eq!(
                substitute("é$redü$é", &registry(), TagTransform::Apply),
                "é\x1b[31mü$é"
            );
        }

        #[test]
        fn multiline_content() {
            assert_eq!(
                substitute("$blua\nb$res", &registry(), TagTransform::Remove),
                "a\nb"
            );
        }
    }

    mod tokenizer {
        use super::*;

        #[test]
        fn tokenize_plain_text() {
            let tokens: Vec<_> = Tokenizer::new("hello").collect();
            assert_eq!(tokens, vec![Token::Text("hello")]);
        }

        #[test]
        fn tokenize_mixed() {
            let tokens: Vec<_> = Tokenizer::new("a$redb$x").collect();
            assert_eq!(
                tokens,
                vec![Token::Text("a"), Token::Tag("$red"), Token::Text("b$x")]
            );
        }

        #[test]
        fn tokenize_leading_tag() {
            let tokens: Vec<_> = Tokenizer::new("$abc").collect();
            assert_eq!(tokens, vec![Token::Tag("$abc")]);
        }
    }

    #[test]
    fn unknown_tags_listed() {
        let registry = registry();
        // "$gren" lexes as the known "$gre" followed by "n"
        assert_eq!(unknown_tags("$red $gren $zzz", &registry), vec!["$zzz"]);
        assert_eq!(unknown_tags("$abc and $red", &registry), vec!["$abc"]);
        assert!(unknown_tags("no tags", &registry).is_empty());
    }
}
