use crate::normalizer::TextNormalizer;

#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&mut self, text: &mut String) {
        text.make_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{Lowercase, TextNormalizer};

    #[test]
    fn test_normalizer_lowercase() {
        let mut text = String::from("The TokeniZED String");
        Lowercase::new().normalize(&mut text);
        assert_eq!(text, "the tokenized string");
    }

    #[test]
    fn test_normalizer_all_lowercase() {
        let mut text = String::from("already lower");
        Lowercase::new().normalize(&mut text);
        assert_eq!(text, "already lower");
    }
}
