use tracing::debug;

use crate::{
    filter::{MinLength, TextFilter},
    normalizer::{
        LettersOnly, Lowercase, Markup, Negations, NormalizerPipeline, PatternEraser, Signature,
        TextNormalizer,
    },
    record::{CleanRecord, RawRecord},
    tokenizer::{TextTokenizer, WordPunct},
};

/// Turns raw tweet text into lowercase letter-only words of two or more
/// characters, separated by single spaces.
///
/// Stages, in order:
/// 1. markup to readable text
/// 2. `@mentions` and `http(s)://` links erased
/// 3. signature marker stripped, replacement characters turned into `?`
/// 4. `www.` links erased
/// 5. everything but letters and apostrophes blanked
/// 6. lowercased
/// 7. contracted negations expanded
/// 8. everything but letters blanked
/// 9. tokenized, single-character tokens dropped, joined with one space
///
/// Never fails: every input, including the empty string, yields a string.
#[derive(Clone, Debug)]
pub struct TweetCleaner {
    pipeline: NormalizerPipeline,
    tokenizer: WordPunct,
    filter: MinLength,
}

impl TweetCleaner {
    pub fn new() -> Self {
        let mut pipeline = NormalizerPipeline::new();
        pipeline
            .insert(Box::new(Markup::new()))
            .insert(Box::new(PatternEraser::mentions_and_urls()))
            .insert(Box::new(Signature::new()))
            .insert(Box::new(PatternEraser::bare_www()))
            .insert(Box::new(LettersOnly::with_apostrophes()))
            .insert(Box::new(Lowercase::new()))
            .insert(Box::new(Negations::new()))
            .insert(Box::new(LettersOnly::strict()));

        debug!(stages = pipeline.len(), "tweet cleaner ready");

        Self {
            pipeline,
            tokenizer: WordPunct::new(),
            filter: MinLength::default(),
        }
    }

    pub fn clean(&mut self, text: &str) -> String {
        let mut buffer = String::from(text);
        self.normalize(&mut buffer);
        buffer
    }

    /// Cleans the text, carrying the label through unchanged.
    pub fn clean_record(&mut self, record: &RawRecord) -> CleanRecord {
        CleanRecord::new(self.clean(&record.text), record.label)
    }
}

impl Default for TweetCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer for TweetCleaner {
    fn normalize(&mut self, text: &mut String) {
        self.pipeline.run(text);

        let mut tokens = self.tokenizer.tokenize(text.as_str());
        self.filter.filter(&mut tokens);

        *text = tokens.join(" ");
    }
}

/// One-off cleaning. Hold a [`TweetCleaner`] when cleaning many texts.
pub fn clean_tweet(text: &str) -> String {
    TweetCleaner::new().clean(text)
}
