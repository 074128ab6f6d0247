use std::sync::OnceLock;

use hashbrown::HashMap;
use regex::{Captures, Regex};

use crate::normalizer::{replace_in_place, TextNormalizer};

/// Contracted negations and their expansions.
pub const NEGATIONS: [(&str, &str); 17] = [
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "can not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&str, &str>> = OnceLock::new();
    TABLE.get_or_init(|| NEGATIONS.iter().copied().collect())
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = NEGATIONS
            .iter()
            .map(|(contracted, _)| regex::escape(contracted))
            .collect::<Vec<_>>()
            .join("|");

        Regex::new(&format!(r"\b({alternation})\b")).expect("negation pattern compiles")
    })
}

/// Expands whole-word contracted negations, matched case-sensitively.
#[derive(Clone, Debug, Default)]
pub struct Negations;

impl Negations {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Negations {
    fn normalize(&mut self, text: &mut String) {
        replace_in_place(pattern(), text, |captures: &Captures| {
            let contracted = &captures[0];
            table().get(contracted).copied().unwrap_or(contracted).to_string()
        });
    }
}
