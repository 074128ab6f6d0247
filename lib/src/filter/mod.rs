use std::fmt::Debug;

use crate::token::Tokens;

pub trait TextFilter: Debug + Send + Sync {
    fn filter(&self, tokens: &mut Tokens);
}

/// Keeps tokens with at least `min` characters.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Default for MinLength {
    fn default() -> Self {
        Self::new(2)
    }
}

impl TextFilter for MinLength {
    fn filter(&self, tokens: &mut Tokens) {
        tokens.retain(|token| token.char_count() >= self.min)
    }
}
