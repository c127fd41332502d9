use std::{fs, path::Path};

use crate::shared::error::ConfigError;

/// Markup and transport constants of the widget.
///
/// Every field has a default matching the stock site theme, so templates only
/// override what they restyle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Manifest location relative to the site root.
    pub manifest_file: String,
    /// Marker class of a menu container.
    pub menu_class: String,
    /// Class of the navigation list inside a container.
    pub list_class: String,
    pub item_class: String,
    pub active_class: String,
    pub label_class: String,
    pub label_wrapper_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            manifest_file: "laika/versionInfo.json".to_string(),
            menu_class: "version-menu".to_string(),
            list_class: "nav-list".to_string(),
            item_class: "level1".to_string(),
            active_class: "active".to_string(),
            label_class: "version-label".to_string(),
            label_wrapper_class: "left-column".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Reads a widget config file. A missing file means defaults.
pub fn load_widget_config(path: &Path) -> Result<WidgetConfig, ConfigError> {
    if !path.exists() {
        return Ok(WidgetConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    WidgetConfig::from_json(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
