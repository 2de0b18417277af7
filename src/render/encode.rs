//! Data URI encoding for SVG payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Encodes raw SVG bytes as a base64 `data:` URI.
///
/// The standard alphabet with padding is used, so the payload never
/// contains a quote and can sit inside `url('...')` unescaped.
///
/// # Example
///
/// ```rust
/// use imagesheet::svg_data_uri;
///
/// assert_eq!(svg_data_uri(b"<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
/// ```
pub fn svg_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(SVG_DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(SVG_DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}
