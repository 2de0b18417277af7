//! Image files discovered in the input directory.

use super::variant::Variant;

/// A source SVG whose filename carries a light or dark suffix.
///
/// # Example
///
/// ```rust
/// use imagesheet::{ImageFile, Variant};
///
/// let image = ImageFile::classify("logo~dark.svg").unwrap();
/// assert_eq!(image.variant(), Variant::Dark);
/// assert_eq!(image.base_name(), "logo");
/// assert_eq!(image.property_name(), "--image-logo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    variant: Variant,
}

impl ImageFile {
    /// Classifies a directory entry name.
    ///
    /// Returns `None` for names ending in neither `~light.svg` nor `~dark.svg`.
    pub fn classify(file_name: impl Into<String>) -> Option<Self> {
        let file_name = file_name.into();
        let variant = Variant::of(&file_name)?;
        Some(Self { file_name, variant })
    }

    /// The filename as listed in the input directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The identifier shared by both variants of an image.
    pub fn base_name(&self) -> &str {
        // `classify` guarantees the suffix is present. Only the trailing
        // suffix is removed, so `a~dark.svg~light.svg` keeps `a~dark.svg`
        // rather than dropping every `~light.svg`/`~dark.svg` occurrence.
        self.file_name
            .strip_suffix(self.variant.suffix())
            .unwrap_or(&self.file_name)
    }

    /// The CSS custom property this image is exposed as.
    pub fn property_name(&self) -> String {
        format!("--image-{}", self.base_name())
    }
}
