//! Catalog endpoint and image CDN configuration.
//!
//! # Design
//! - Defaults point at the public Data Dragon CDN and need no host setup.
//! - The host page may pin a patch version or locale; blank overrides are ignored.

/// Public Data Dragon CDN root.
pub const DEFAULT_CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";
/// Patch version used when the host page does not pin one.
pub const DEFAULT_VERSION: &str = "13.24.1";
/// Catalog locale used when the host page does not pin one.
pub const DEFAULT_LOCALE: &str = "en_US";
/// Suffix appended to the portrait stem (first skin, loading-screen art).
pub const PORTRAIT_SUFFIX: &str = "_0.jpg";

/// Where the catalog and champion art are fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// CDN root without a trailing slash.
    pub cdn_base: String,
    /// Data Dragon patch version (`13.24.1`).
    pub version: String,
    /// Catalog locale (`en_US`).
    pub locale: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Apply host-page overrides, keeping defaults for missing or blank values.
    #[must_use]
    pub fn with_overrides(mut self, version: Option<&str>, locale: Option<&str>) -> Self {
        if let Some(version) = non_blank(version) {
            self.version = version.to_string();
        }
        if let Some(locale) = non_blank(locale) {
            self.locale = locale.to_string();
        }
        self
    }

    /// Full URL of the champion catalog document.
    #[must_use]
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/{}/data/{}/champion.json",
            self.base(),
            self.version,
            self.locale
        )
    }

    /// Prefix for square grid thumbnails.
    #[must_use]
    pub fn thumbnail_base(&self) -> String {
        format!("{}/{}/img/champion/", self.base(), self.version)
    }

    /// Prefix for detail portraits. Portrait art is not versioned.
    #[must_use]
    pub fn portrait_base(&self) -> String {
        format!("{}/img/champion/loading/", self.base())
    }

    /// Grid thumbnail URL for an image file name.
    #[must_use]
    pub fn thumbnail_url(&self, image_file_name: &str) -> String {
        format!("{}{image_file_name}", self.thumbnail_base())
    }

    /// Detail portrait URL: extension stripped, [`PORTRAIT_SUFFIX`] appended.
    ///
    /// Returns an empty string when the file name has no extension, which the view
    /// renders as a broken image rather than failing.
    #[must_use]
    pub fn portrait_url(&self, image_file_name: &str) -> String {
        image_file_name
            .rsplit_once('.')
            .map(|(stem, _)| format!("{}{stem}{PORTRAIT_SUFFIX}", self.portrait_base()))
            .unwrap_or_default()
    }

    fn base(&self) -> &str {
        self.cdn_base.trim_end_matches('/')
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
