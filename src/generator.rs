//! The generation pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{Catalog, DirectorySource, ImageSource, Variant};
use crate::error::Result;
use crate::output::write_atomic;
use crate::paths::{expand_tilde, stylesheet_file};
use crate::render::{render_block, Document, StylesheetRenderer};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Path the stylesheet was written to.
    pub output: PathBuf,
    /// Number of light/dark image pairs declared.
    pub pairs: usize,
    /// Size of the written stylesheet in bytes.
    pub bytes: usize,
}

/// Builds `images.scss` from a directory of paired SVG images.
///
/// # Example
///
/// ```rust,no_run
/// use imagesheet::StylesheetGenerator;
///
/// let summary = StylesheetGenerator::new("~/icons", "~/src/server").generate()?;
/// println!("wrote {} pairs to {}", summary.pairs, summary.output.display());
/// # Ok::<(), imagesheet::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StylesheetGenerator {
    input: PathBuf,
    output: PathBuf,
}

impl StylesheetGenerator {
    /// Creates a generator reading from `input` and writing into the
    /// repository rooted at `output_root`. Both paths may start with `~`.
    pub fn new(input: impl AsRef<Path>, output_root: impl AsRef<Path>) -> Self {
        Self {
            input: expand_tilde(input),
            output: stylesheet_file(output_root),
        }
    }

    /// The directory images are read from.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The stylesheet file that [`generate`](Self::generate) writes.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Renders the stylesheet and writes it.
    ///
    /// Nothing is written unless every image was read and the light and dark
    /// counts agree.
    pub fn generate(&self) -> Result<Summary> {
        let source = DirectorySource::new(&self.input);
        let (text, pairs) = render_stylesheet(&source)?;
        write_atomic(&self.output, &text)?;

        Ok(Summary {
            output: self.output.clone(),
            pairs,
            bytes: text.len(),
        })
    }
}

/// Renders the full stylesheet text for the images in `source`.
///
/// Returns the text along with the number of image pairs it declares.
pub fn render_stylesheet<S>(source: &S) -> Result<(String, usize)>
where
    S: ImageSource + ?Sized,
{
    let catalog = Catalog::scan(source)?;
    catalog.validate()?;
    debug!(pairs = catalog.pair_count(), "rendering stylesheet");

    let light = render_block(
        catalog.images(Variant::Light),
        Variant::Light.media_query(),
        source,
    )?;
    let dark = render_block(
        catalog.images(Variant::Dark),
        Variant::Dark.media_query(),
        source,
    )?;

    let text = StylesheetRenderer::new()?.render(&Document::new(&light, &dark))?;
    Ok((text, catalog.pair_count()))
}
