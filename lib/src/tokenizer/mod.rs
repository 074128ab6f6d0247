mod word_punct;

pub use word_punct::WordPunct;

pub use crate::token::{Token, Tokens};

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}
