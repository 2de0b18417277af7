//! Assembly of the complete stylesheet.

use minijinja::Environment;
use serde::Serialize;

use crate::error::Result;

/// Static comment placed at the top of every generated stylesheet.
pub const HEADER: &str = "\
// This file is generated by imagesheet from the paired ~light.svg / ~dark.svg
// source images. Do not edit it by hand; regenerate it instead.

";

const TEMPLATE_NAME: &str = "images.scss";

// Light declarations are the defaults; the dark block overrides them.
const TEMPLATE_SOURCE: &str = "{{ header }}{{ light }}\n{{ dark }}";

/// The rendered pieces of a stylesheet, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct Document<'a> {
    pub header: &'a str,
    pub light: &'a str,
    pub dark: &'a str,
}

impl<'a> Document<'a> {
    /// Creates a document with the standard [`HEADER`].
    pub fn new(light: &'a str, dark: &'a str) -> Self {
        Self {
            header: HEADER,
            light,
            dark,
        }
    }
}

/// Renders [`Document`]s through the stylesheet template.
///
/// # Example
///
/// ```rust
/// use imagesheet::render::{Document, StylesheetRenderer, HEADER};
///
/// let renderer = StylesheetRenderer::new().unwrap();
/// let text = renderer
///     .render(&Document::new(":root {\n}\n", "@media (x) {\n    :root {\n    }\n}\n"))
///     .unwrap();
/// assert!(text.starts_with(HEADER));
/// ```
pub struct StylesheetRenderer {
    env: Environment<'static>,
}

impl StylesheetRenderer {
    /// Creates a renderer with the stylesheet template compiled.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { env })
    }

    /// Renders the header, the light block, a blank line and the dark block.
    pub fn render(&self, document: &Document<'_>) -> Result<String> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_and_separator() {
        let renderer = StylesheetRenderer::new().unwrap();
        let output = renderer
            .render(&Document {
                header: "H\n",
                light: "L\n",
                dark: "D\n",
            })
            .unwrap();
        assert_eq!(output, "H\nL\n\nD\n");
    }

    #[test]
    fn test_document_does_not_escape_css() {
        let renderer = StylesheetRenderer::new().unwrap();
        let light = "    --image-a: url('data:image/svg+xml;base64,a+b/c=');\n";
        let output = renderer.render(&Document::new(light, "")).unwrap();

        assert!(output.contains(light));
        assert!(output.starts_with(HEADER));
    }

    #[test]
    fn test_header_ends_with_blank_line() {
        assert!(HEADER.ends_with("\n\n"));
        assert!(HEADER.lines().filter(|l| !l.is_empty()).all(|l| l.starts_with("// ")));
    }
}
