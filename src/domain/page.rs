use serde::Deserialize;

/// Page-specific values the site template bakes into the widget call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Path from the current page back to the site root, e.g. `"../../"`.
    pub relative_root: String,
    /// Logical path of the current document, without version prefix.
    pub current_path: String,
    /// `pathSegment` of the version the page belongs to.
    pub current_version: String,
    #[serde(default)]
    pub absolute_root: Option<String>,
}

impl PageContext {
    pub fn new(
        relative_root: impl Into<String>,
        current_path: impl Into<String>,
        current_version: impl Into<String>,
        absolute_root: Option<String>,
    ) -> Self {
        Self {
            relative_root: relative_root.into(),
            current_path: current_path.into(),
            current_version: current_version.into(),
            absolute_root,
        }
    }
}
