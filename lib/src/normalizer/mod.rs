pub mod case;
pub mod encoding;
pub mod letters;
pub mod markup;
pub mod negation;
pub mod pattern;

pub use {
    case::Lowercase, encoding::Signature, letters::LettersOnly, markup::Markup,
    negation::Negations, pattern::PatternEraser,
};

use std::borrow::Cow;

use regex::{Regex, Replacer};

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

/// A single rewrite step over a whole text.
pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, text: &mut String);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs every stage in insertion order.
    pub fn run(&mut self, text: &mut String) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(text);
        })
    }
}

/// Replaces every match of `regex` in `text`, reallocating only when
/// something matched.
pub(crate) fn replace_in_place<R: Replacer>(regex: &Regex, text: &mut String, replacer: R) {
    let replaced = match regex.replace_all(text.as_str(), replacer) {
        Cow::Owned(replaced) => Some(replaced),
        Cow::Borrowed(_) => None,
    };

    if let Some(replaced) = replaced {
        *text = replaced;
    }
}
