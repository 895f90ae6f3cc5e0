//! Asset category definitions.

/// Category of a source asset, determines which rule handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Plain stylesheet (.css)
    Stylesheet,
    /// Preprocessed stylesheet (.scss)
    Sass,
    /// Raster image (.png, .jpg, .gif)
    Image,
    /// Web font (.ttf, .woff, .woff2, .eot)
    Font,
    /// Script (.js)
    Script,
    /// Vector icon (.svg), merged into a sprite
    Icon,
}

impl AssetCategory {
    /// All categories, in rule-table order.
    pub const ALL: [Self; 6] = [
        Self::Stylesheet,
        Self::Sass,
        Self::Image,
        Self::Font,
        Self::Script,
        Self::Icon,
    ];

    /// File extensions for this category.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Stylesheet => &["css"],
            Self::Sass => &["scss"],
            Self::Image => &["png", "jpg", "gif"],
            Self::Font => &["ttf", "woff", "woff2", "eot"],
            Self::Script => &["js"],
            Self::Icon => &["svg"],
        }
    }

    /// Display name for this category.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Sass => "sass",
            Self::Image => "image",
            Self::Font => "font",
            Self::Script => "script",
            Self::Icon => "icon",
        }
    }
}
