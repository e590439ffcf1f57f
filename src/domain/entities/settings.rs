//! Site-wide gallery settings kept in the option store.

use serde::{Deserialize, Serialize};

/// Option key for the renderer theme.
pub const THEME_OPTION: &str = "advanced_galleria_theme";
/// Option key for the thumbnail size identifier.
pub const THUMB_SIZE_OPTION: &str = "advanced_galleria_thumb";
/// Option key for the large size identifier.
pub const LARGE_SIZE_OPTION: &str = "advanced_galleria_large";

pub const DEFAULT_THEME: &str = "advanced-classic-light";
pub const DEFAULT_THUMB_SIZE: &str = "thumbnail";
pub const DEFAULT_LARGE_SIZE: &str = "large";

/// Version of the bundled renderer library.
pub const GALLERIA_VERSION: &str = "1.3.1";

/// Size identifier used for syndication output.
pub const FEED_SIZE: &str = "medium";

/// Themes the renderer ships with.
pub const AVAILABLE_THEMES: &[(&str, &str)] = &[
    (
        "advanced-classic-light",
        "Classic Light (with fullscreen button)",
    ),
    ("advanced-classic", "Classic Dark (with fullscreen button)"),
    ("classic", "Classic Dark (no fullscreen)"),
];

/// Settings read once per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySettings {
    pub theme: String,
    pub thumb_size: String,
    pub large_size: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            thumb_size: DEFAULT_THUMB_SIZE.to_string(),
            large_size: DEFAULT_LARGE_SIZE.to_string(),
        }
    }
}

impl GallerySettings {
    /// Renderer and theme URLs under `asset_base`.
    pub fn theme_assets(&self, asset_base: &str) -> ThemeAssets {
        let base = asset_base.trim_end_matches('/');
        ThemeAssets {
            library: format!("{base}/galleria-{GALLERIA_VERSION}.min.js"),
            script: format!(
                "{base}/themes/{theme}/galleria.{theme}.min.js",
                theme = self.theme
            ),
            stylesheet: format!(
                "{base}/themes/{theme}/galleria.{theme}.min.css",
                theme = self.theme
            ),
        }
    }

    /// True when the theme is one the renderer ships with.
    pub fn is_known_theme(&self) -> bool {
        AVAILABLE_THEMES.iter().any(|(key, _)| *key == self.theme)
    }
}

/// Theme asset locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAssets {
    pub library: String,
    pub script: String,
    pub stylesheet: String,
}
