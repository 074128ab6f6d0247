use html2text::render::text_renderer::TrivialDecorator;

use crate::normalizer::TextNormalizer;

/// Narrowest wrap width handed to the renderer.
const MIN_WIDTH: usize = 80;

/// Extracts the readable text of HTML-like markup: tags are dropped and
/// entities such as `&amp;` decoded.
#[derive(Clone, Debug, Default)]
pub struct Markup;

impl Markup {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Markup {
    fn normalize(&mut self, text: &mut String) {
        if text.is_empty() {
            return;
        }

        // Rendered width never exceeds the byte length, so no line is wrapped.
        let width = text.len().max(MIN_WIDTH);
        *text =
            html2text::from_read_with_decorator(text.as_bytes(), width, TrivialDecorator::new());
    }
}
