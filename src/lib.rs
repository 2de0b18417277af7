//! # imagesheet
//!
//! Generates an SCSS stylesheet exposing SVG images as CSS custom properties
//! that follow the user's light/dark color scheme.
//!
//! The input is a flat directory of paired files, `name~light.svg` and
//! `name~dark.svg`. Every image becomes a `--image-name` property holding a
//! base64 `data:` URI: light images in a plain `:root` block, dark images in a
//! `:root` block guarded by `@media (prefers-color-scheme: dark)`.
//!
//! ```text
//! :root {
//!     --image-logo: url('data:image/svg+xml;base64,...');
//! }
//!
//! @media (prefers-color-scheme: dark) {
//!     :root {
//!         --image-logo: url('data:image/svg+xml;base64,...');
//!     }
//! }
//! ```
//!
//! Stylesheets then reference an image with `var(--image-logo)`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imagesheet::StylesheetGenerator;
//!
//! // Writes ~/src/server/FrontEnd/styles/images.scss
//! let summary = StylesheetGenerator::new("~/icons", "~/src/server").generate()?;
//! assert!(summary.bytes > 0);
//! # Ok::<(), imagesheet::Error>(())
//! ```
//!
//! ## Output
//!
//! Output is deterministic: declarations are ordered by source filename, so
//! the same directory contents always yield a byte-identical file. The file
//! is replaced atomically and is left untouched when a run fails.
//!
//! Pairing is checked by count only. A directory holding `a~light.svg` and
//! `b~dark.svg` is accepted and logs a warning for each unmatched name.

pub mod catalog;
pub mod cli;
mod error;
mod generator;
pub mod output;
pub mod paths;
pub mod render;

pub use catalog::{Catalog, DirectorySource, ImageFile, ImageSource, Variant};
pub use error::{Error, IoAction, Result};
pub use generator::{render_stylesheet, StylesheetGenerator, Summary};
pub use render::svg_data_uri;
