use std::sync::OnceLock;

use regex::Regex;

use crate::normalizer::{replace_in_place, TextNormalizer};

/// `@user` mentions and `http(s)://` links, erased in one pass.
const MENTION_OR_URL: &str = r"@[A-Za-z0-9]+|https?://[^ ]+";

/// Links written without a scheme.
const BARE_WWW: &str = r"www\.[^ ]+";

fn mention_or_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MENTION_OR_URL).expect("mention/url pattern compiles"))
}

fn bare_www() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BARE_WWW).expect("www pattern compiles"))
}

/// Deletes every match of a pattern.
#[derive(Clone, Debug)]
pub struct PatternEraser {
    regex: Regex,
}

impl PatternEraser {
    pub fn mentions_and_urls() -> Self {
        Self {
            regex: mention_or_url().clone(),
        }
    }

    pub fn bare_www() -> Self {
        Self {
            regex: bare_www().clone(),
        }
    }
}

impl TextNormalizer for PatternEraser {
    fn normalize(&mut self, text: &mut String) {
        replace_in_place(&self.regex, text, "");
    }
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{PatternEraser, TextNormalizer};

    fn erase(mut eraser: PatternEraser, input: &str) -> String {
        let mut text = String::from(input);
        eraser.normalize(&mut text);
        text
    }

    #[test]
    fn test_erase_mentions_and_urls() {
        let eraser = PatternEraser::mentions_and_urls();
        assert_eq!(
            erase(eraser, "@john check http://x.co now"),
            " check  now"
        );
    }

    #[test]
    fn test_erase_https_and_several_mentions() {
        let eraser = PatternEraser::mentions_and_urls();
        assert_eq!(
            erase(eraser, "@a1 @B2 see https://t.co/abc?x=1 ok"),
            "  see  ok"
        );
    }

    #[test]
    fn test_erase_bare_www() {
        let eraser = PatternEraser::bare_www();
        assert_eq!(erase(eraser, "visit www.example.com today"), "visit  today");
    }

    #[test]
    fn test_erase_www_needs_dot() {
        let eraser = PatternEraser::bare_www();
        assert_eq!(erase(eraser, "awwwsome day"), "awwwsome day");
    }
}
