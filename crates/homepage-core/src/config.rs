//! Site content configuration.
//!
//! The page's content (who the site belongs to, which photos and family
//! members it shows, which track plays) is read from a JSON file. Without a
//! file the built-in sample site is used.
//!
//! ```json
//! {
//!   "owner": "Ana",
//!   "tabs": ["All", "Family", "Travel"],
//!   "gallery": [{ "title": "Alps", "image": "alps.jpg", "category": "travel" }],
//!   "audio": "assets/theme.mp3"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HomepageResult};
use crate::gallery::CategoryTab;

/// One gallery photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItemConfig {
    pub title: String,
    pub image: String,
    /// Must equal some tab label in lowercase
    pub category: String,
}

/// One family card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMemberConfig {
    pub name: String,
    pub relation: String,
    /// Cards without an image get no hover effect
    #[serde(default)]
    pub image: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Complete site content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub tabs: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItemConfig>,
    #[serde(default)]
    pub family: Vec<FamilyMemberConfig>,
    /// Background track URL
    #[serde(default)]
    pub audio: Option<String>,
    /// Render the live clock widget
    #[serde(default = "default_true")]
    pub clock: bool,
    /// Render the contact form
    #[serde(default = "default_true")]
    pub contact_form: bool,
}

impl SiteConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            photos = config.gallery.len(),
            "Loaded site config"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise the built-in sample site
    pub fn load_or_default(path: Option<&Path>) -> HomepageResult<Self> {
        match path {
            Some(path) => Ok(Self::load(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate JSON text
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tab strip exists and a tab selects every photo
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }

        let tabs: Vec<CategoryTab> = self.tabs.iter().map(CategoryTab::new).collect();
        for item in &self.gallery {
            if !tabs.iter().any(|tab| tab.category() == item.category) {
                return Err(ConfigError::UnknownCategory {
                    title: item.title.clone(),
                    category: item.category.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let photo = |title: &str, image: &str, category: &str| GalleryItemConfig {
            title: title.to_string(),
            image: image.to_string(),
            category: category.to_string(),
        };
        let member = |name: &str, relation: &str, image: &str| FamilyMemberConfig {
            name: name.to_string(),
            relation: relation.to_string(),
            image: Some(image.to_string()),
        };

        Self {
            owner: "The Rivera Family".to_string(),
            tagline: "Moments, places and the people we love".to_string(),
            profile_image: Some("assets/profile.jpg".to_string()),
            tabs: vec![
                "All".to_string(),
                "Family".to_string(),
                "Travel".to_string(),
                "Nature".to_string(),
            ],
            gallery: vec![
                photo("Sunday Picnic", "assets/gallery/picnic.jpg", "family"),
                photo("Mountain Pass", "assets/gallery/pass.jpg", "travel"),
                photo("Grandma's Birthday", "assets/gallery/birthday.jpg", "family"),
                photo("Autumn Forest", "assets/gallery/forest.jpg", "nature"),
                photo("Harbour at Dusk", "assets/gallery/harbour.jpg", "travel"),
                photo("Wildflowers", "assets/gallery/flowers.jpg", "nature"),
            ],
            family: vec![
                member("Elena", "Mother", "assets/family/elena.jpg"),
                member("Marco", "Father", "assets/family/marco.jpg"),
                member("Lucia", "Sister", "assets/family/lucia.jpg"),
            ],
            audio: Some("assets/audio/theme.mp3".to_string()),
            clock: true,
            contact_form: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HomepageError;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "owner": "Ana", "tabs": ["All"] }"#).unwrap();
        assert_eq!(config.owner, "Ana");
        assert!(config.gallery.is_empty());
        assert!(config.clock);
        assert!(config.contact_form);
        assert_eq!(config.audio, None);
    }

    #[test]
    fn rejects_empty_tabs() {
        let err = SiteConfig::from_json(r#"{ "owner": "Ana", "tabs": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoTabs));
    }

    #[test]
    fn rejects_unselectable_category() {
        let raw = r#"{
            "owner": "Ana",
            "tabs": ["All", "Family"],
            "gallery": [{ "title": "Alps", "image": "alps.jpg", "category": "travel" }]
        }"#;
        let err = SiteConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory { ref category, .. } if category == "travel"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ owner: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        let json = serde_json::to_string(&SiteConfig::default()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, SiteConfig::default());
    }

    #[test]
    fn load_or_default_without_path_is_sample_site() {
        let config = SiteConfig::load_or_default(None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_or_default_wraps_config_errors() {
        let err = SiteConfig::load_or_default(Some(Path::new("/nonexistent/site.json"))).unwrap_err();
        assert!(matches!(err, HomepageError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SiteConfig::load("/nonexistent/site.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
