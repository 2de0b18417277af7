//! Light and dark image variants.

/// The color scheme an image file is drawn for.
///
/// The variant is encoded in the filename suffix: `icon~light.svg` and
/// `icon~dark.svg` are the two variants of the `icon` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    /// Both variants, in the order their blocks appear in the stylesheet.
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Dark];

    /// The filename suffix marking this variant, including the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Light => "~light.svg",
            Variant::Dark => "~dark.svg",
        }
    }

    /// The media query condition guarding this variant's declarations.
    ///
    /// Light images are the unconditional defaults, so only the dark
    /// variant carries a query.
    pub fn media_query(self) -> Option<&'static str> {
        match self {
            Variant::Light => None,
            Variant::Dark => Some("prefers-color-scheme: dark"),
        }
    }

    /// Returns the variant whose suffix terminates `file_name`, if any.
    pub fn of(file_name: &str) -> Option<Variant> {
        Self::ALL
            .into_iter()
            .find(|variant| file_name.ends_with(variant.suffix()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Light => write!(f, "light"),
            Variant::Dark => write!(f, "dark"),
        }
    }
}
