//! Stylesheet rendering. Pure, no filesystem access.

use crate::descriptor::FontDescriptor;

/// URL prefix under which the stylesheet expects the converted fonts.
pub const FONT_URL_PREFIX: &str = "./fonts/";

/// Rendered `@font-face` blocks, each followed by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetFragment {
    content: String,
    blocks: usize,
}

impl StylesheetFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: &FontDescriptor) {
        self.content.push_str(&render_block(descriptor));
        self.content.push('\n');
        self.blocks += 1;
    }

    pub fn block_count(&self) -> usize {
        self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Render a single declaration. The field order and `swap` are part of
/// the output contract.
pub fn render_block(descriptor: &FontDescriptor) -> String {
    format!(
        "@font-face {{\n  font-family: '{}';\n  src: url('{}{}') format('woff2');\n  font-weight: {};\n  font-style: {};\n  font-display: swap;\n}}\n",
        descriptor.family,
        FONT_URL_PREFIX,
        descriptor.source_file_name,
        descriptor.weight,
        descriptor.style,
    )
}

/// Render all descriptors in order.
pub fn render_fragment(descriptors: &[FontDescriptor]) -> StylesheetFragment {
    let mut fragment = StylesheetFragment::new();
    for descriptor in descriptors {
        fragment.push(descriptor);
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::describe_listing;

    #[test]
    fn test_render_block_exact_shape() {
        let d = FontDescriptor::from_file_name("Roboto-BoldItalic.woff2").unwrap();
        let expected = "\
@font-face {
  font-family: 'Roboto';
  src: url('./fonts/Roboto-BoldItalic.woff2') format('woff2');
  font-weight: 700;
  font-style: italic;
  font-display: swap;
}
";
        assert_eq!(render_block(&d), expected);
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let descriptors = describe_listing(["A-Thin.woff2", "B.woff2"]);
        let fragment = render_fragment(&descriptors);
        assert_eq!(fragment.block_count(), 2);
        assert!(fragment.as_str().contains("}\n\n@font-face {"));
        assert!(fragment.as_str().ends_with("}\n\n"));
        assert!(fragment.as_str().find("'A'").unwrap() < fragment.as_str().find("'B'").unwrap());
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = render_fragment(&[]);
        assert!(fragment.is_empty());
        assert_eq!(fragment.into_string(), "");
    }
}
