use crate::normalizer::TextNormalizer;

/// Replaces every character that is not an ASCII letter with a space.
///
/// `keep` lists extra characters that survive the pass.
#[derive(Clone, Copy, Debug)]
pub struct LettersOnly {
    keep: &'static [char],
}

impl LettersOnly {
    pub fn strict() -> Self {
        Self { keep: &[] }
    }

    /// Letters and apostrophes, so contractions stay recognisable.
    pub fn with_apostrophes() -> Self {
        Self { keep: &['\''] }
    }

    #[inline]
    fn keeps(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || self.keep.contains(&ch)
    }
}

impl TextNormalizer for LettersOnly {
    fn normalize(&mut self, text: &mut String) {
        if text.chars().all(|ch| self.keeps(ch)) {
            return;
        }

        *text = text
            .chars()
            .map(|ch| if self.keeps(ch) { ch } else { ' ' })
            .collect();
    }
}
