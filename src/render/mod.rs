//! Stylesheet rendering.
//!
//! - [`render_block`]: one `:root` block of `--image-*` custom properties
//! - [`svg_data_uri`]: base64 `data:` URI for an SVG payload
//! - [`StylesheetRenderer`]: joins the header and both blocks into the final text

mod block;
mod document;
mod encode;

pub use block::render_block;
pub use document::{Document, StylesheetRenderer, HEADER};
pub use encode::svg_data_uri;
