use std::ops::Range;

use crate::config::Rgba;

/// Text handed to the painter for one paint pass.
///
/// Justification only applies to [`TextContent::Plain`]. Styled content is
/// a defined fallback, not an error: the render plan skips all custom
/// spacing and emits every line through the default left-aligned path, the
/// same way a stock widget would draw it.
#[derive(Clone, Debug, PartialEq)]
pub enum TextContent {
    /// An unstyled string. Eligible for justification.
    Plain(String),
    /// A string carrying resolved style spans. Rendered unjustified.
    Styled(StyledText),
}

impl TextContent {
    /// The underlying character data, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            TextContent::Plain(text) => text,
            TextContent::Styled(styled) => &styled.text,
        }
    }

    /// Whether this content may go through the justification path.
    pub fn is_plain(&self) -> bool {
        matches!(self, TextContent::Plain(_))
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        TextContent::Plain(text)
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        TextContent::Plain(text.to_string())
    }
}

/// A string with resolved style attributes attached to byte ranges.
///
/// Span *parsing* belongs to the host; by the time content reaches this
/// crate the attributes are already resolved. The spans themselves are
/// opaque to the render plan, which only needs to know that styled content
/// bypasses justification.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub spans: Vec<StyleSpan>,
}

/// A resolved style attribute covering a byte range of the text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub color: Rgba,
}
