//! Rendering of `:root` custom property blocks.

use crate::catalog::{ImageFile, ImageSource};
use crate::error::Result;

use super::encode::svg_data_uri;

const INDENT: &str = "    ";

/// Renders one `:root` block declaring a custom property per image.
///
/// Images are emitted in ascending byte order of their filenames regardless
/// of the order given. With a `media_query` the block is wrapped in
/// `@media (<query>) { ... }` and declarations are indented one level deeper.
///
/// Each image is read from `source` in turn; the first read failure aborts
/// rendering.
///
/// The result always ends with a newline.
pub fn render_block<S>(images: &[ImageFile], media_query: Option<&str>, source: &S) -> Result<String>
where
    S: ImageSource + ?Sized,
{
    let mut sorted: Vec<&ImageFile> = images.iter().collect();
    sorted.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut lines = Vec::with_capacity(sorted.len() + 4);
    let indentation = match media_query {
        Some(query) => {
            lines.push(format!("@media ({}) {{", query));
            lines.push(format!("{}:root {{", INDENT));
            INDENT.repeat(2)
        }
        None => {
            lines.push(":root {".to_string());
            INDENT.to_string()
        }
    };

    for image in sorted {
        let bytes = source.read(image.file_name())?;
        lines.push(format!(
            "{}{}: url('{}');",
            indentation,
            image.property_name(),
            svg_data_uri(&bytes)
        ));
    }

    if media_query.is_some() {
        lines.push(format!("{}}}", INDENT));
    }
    lines.push("}".to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    Ok(block)
}
