use std::sync::OnceLock;

use regex::Regex;

use crate::tokenizer::{TextTokenizer, Token, Tokens};

/// Runs of word characters, or runs of anything that is neither a word
/// character nor whitespace.
const WORD_PUNCT: &str = r"\w+|[^\w\s]+";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(WORD_PUNCT).expect("word/punctuation pattern compiles"))
}

/// Splits text into alphanumeric words and punctuation runs.
#[derive(Clone, Debug, Default)]
pub struct WordPunct;

impl WordPunct {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for WordPunct {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        pattern()
            .find_iter(text.as_ref())
            .map(|found| Token::from(found.as_str()))
            .collect()
    }
}
