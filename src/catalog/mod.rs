//! Discovery and pairing of light/dark source images.
//!
//! This module provides:
//!
//! - [`Variant`]: the light or dark color scheme encoded in a filename suffix
//! - [`ImageFile`]: a classified filename with its base name
//! - [`ImageSource`]: the list/read capability the generator works against
//! - [`Catalog`]: a directory listing partitioned into light and dark images
//!
//! Building a catalog is split in two phases, like the rest of the crate:
//! names are collected from a source first, then partitioned by
//! [`Catalog::from_names`], which needs no filesystem access.

mod image;
mod source;
mod variant;

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

pub use image::ImageFile;
pub use source::{DirectorySource, ImageSource};
pub use variant::Variant;

#[cfg(test)]
pub(crate) use source::memory::MemorySource;

/// Image files partitioned by variant.
///
/// Each list is kept in ascending byte order of the filename, which is the
/// order declarations are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    light: Vec<ImageFile>,
    dark: Vec<ImageFile>,
}

impl Catalog {
    /// Lists `source` and partitions the result.
    pub fn scan<S: ImageSource + ?Sized>(source: &S) -> Result<Self> {
        let names = source.list()?;
        Ok(Self::from_names(names))
    }

    /// Partitions entry names into light and dark images.
    ///
    /// Names carrying neither suffix are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for name in names {
            let name = name.into();
            match ImageFile::classify(name.as_str()) {
                Some(image) => {
                    debug!(file = image.file_name(), variant = %image.variant(), "found image");
                    match image.variant() {
                        Variant::Light => catalog.light.push(image),
                        Variant::Dark => catalog.dark.push(image),
                    }
                }
                None => trace!(file = %name, "ignoring unrelated entry"),
            }
        }
        catalog.light.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        catalog.dark.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        catalog
    }

    /// The images of one variant, sorted by filename.
    pub fn images(&self, variant: Variant) -> &[ImageFile] {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }

    /// Number of light/dark pairs, valid once [`validate`](Self::validate) passes.
    pub fn pair_count(&self) -> usize {
        self.light.len()
    }

    /// Checks that every light image can have a dark counterpart.
    ///
    /// Only the counts are compared. Catalogs with equal counts but
    /// differing base names pass; each unmatched name is logged as a warning.
    pub fn validate(&self) -> Result<()> {
        if self.light.len() != self.dark.len() {
            return Err(Error::PairingMismatch {
                light: self.light.len(),
                dark: self.dark.len(),
            });
        }

        for (variant, name) in self.unmatched() {
            warn!(image = name, variant = %variant, "image has no counterpart in the other variant");
        }
        Ok(())
    }

    /// Base names present in one variant but not the other.
    pub fn unmatched(&self) -> Vec<(Variant, &str)> {
        let light: BTreeSet<&str> = self.light.iter().map(ImageFile::base_name).collect();
        let dark: BTreeSet<&str> = self.dark.iter().map(ImageFile::base_name).collect();

        light
            .difference(&dark)
            .map(|name| (Variant::Light, *name))
            .chain(dark.difference(&light).map(|name| (Variant::Dark, *name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(images: &[ImageFile]) -> Vec<&str> {
        images.iter().map(ImageFile::file_name).collect()
    }

    #[test]
    fn test_partition_by_suffix() {
        let catalog = Catalog::from_names(["a~light.svg", "a~dark.svg", "readme.txt"]);

        assert_eq!(names(catalog.images(Variant::Light)), vec!["a~light.svg"]);
        assert_eq!(names(catalog.images(Variant::Dark)), vec!["a~dark.svg"]);
    }

    #[test]
    fn test_partition_sorts_by_byte_order() {
        let catalog = Catalog::from_names([
            "b~light.svg",
            "B~light.svg",
            "a~light.svg",
            "a-b~light.svg",
        ]);

        assert_eq!(
            names(catalog.images(Variant::Light)),
            vec!["B~light.svg", "a-b~light.svg", "a~light.svg", "b~light.svg"]
        );
    }

    #[test]
    fn test_unrelated_files_do_not_affect_counts() {
        let catalog = Catalog::from_names([
            "readme.txt",
            "x~light.svg",
            "x~dark.svg",
            "notes~light.png",
        ]);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.pair_count(), 1);
    }

    #[test]
    fn test_count_mismatch_fails() {
        let catalog = Catalog::from_names(["a~light.svg", "b~light.svg", "a~dark.svg"]);

        match catalog.validate() {
            Err(Error::PairingMismatch { light, dark }) => {
                assert_eq!(light, 2);
                assert_eq!(dark, 1);
            }
            other => panic!("expected pairing mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_names_with_equal_counts_pass() {
        let catalog = Catalog::from_names(["a~light.svg", "b~dark.svg"]);

        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.unmatched(),
            vec![(Variant::Light, "a"), (Variant::Dark, "b")]
        );
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_names(Vec::<String>::new());
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.pair_count(), 0);
    }

    #[test]
    fn test_scan_reads_from_source() {
        let source = MemorySource::new()
            .file("z~light.svg", b"1")
            .file("z~dark.svg", b"2");

        let catalog = Catalog::scan(&source).unwrap();
        assert_eq!(catalog.pair_count(), 1);
        assert!(catalog.unmatched().is_empty());
    }
}
