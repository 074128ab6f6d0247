use std::borrow::Cow;

use crate::normalizer::TextNormalizer;

const SIGNATURE: char = '\u{feff}';

/// Strips a leading UTF-8 signature and turns replacement characters left
/// by lossy decoding into `?`.
///
/// Text carrying neither artifact comes back borrowed and unchanged.
pub fn decode_signature(text: &str) -> Cow<'_, str> {
    let body = text.strip_prefix(SIGNATURE).unwrap_or(text);

    if body.contains(char::REPLACEMENT_CHARACTER) {
        Cow::Owned(body.replace(char::REPLACEMENT_CHARACTER, "?"))
    } else {
        Cow::Borrowed(body)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Signature;

impl Signature {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Signature {
    fn normalize(&mut self, text: &mut String) {
        let decoded = match decode_signature(text.as_str()) {
            Cow::Borrowed(body) if body.len() == text.len() => None,
            decoded => Some(decoded.into_owned()),
        };

        if let Some(decoded) = decoded {
            *text = decoded;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::normalizer::{encoding::decode_signature, Signature, TextNormalizer};

    #[test]
    fn test_decode_signature_not_applicable() {
        assert!(matches!(decode_signature("plain text"), Cow::Borrowed("plain text")));
        assert!(matches!(decode_signature(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_decode_signature_strips_marker() {
        assert_eq!(decode_signature("\u{feff}hello"), "hello");
    }

    #[test]
    fn test_decode_signature_replacement_character() {
        assert_eq!(decode_signature("caf\u{fffd} time"), "caf? time");
        assert_eq!(decode_signature("\u{feff}\u{fffd}\u{fffd}"), "??");
    }

    #[test]
    fn test_signature_normalizer() {
        let mut text = String::from("\u{feff}bad \u{fffd} byte");
        Signature::new().normalize(&mut text);
        assert_eq!(text, "bad ? byte");

        let mut untouched = String::from("fine");
        Signature::new().normalize(&mut untouched);
        assert_eq!(untouched, "fine");
    }
}
