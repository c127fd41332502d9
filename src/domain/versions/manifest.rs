use serde::Deserialize;

/// Root payload of `versionInfo.json`.
///
/// The order of `versions` is the order of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    pub versions: Vec<VersionEntry>,
    pub link_targets: Vec<LinkTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub path_segment: String,
    pub display_value: String,
    #[serde(default)]
    pub label: Option<String>,
    pub fallback_link: String,
    #[serde(default)]
    pub canonical: bool,
}

/// A logical document path and every version that also publishes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkTarget {
    pub path: String,
    pub versions: Vec<String>,
}

impl VersionManifest {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// First target whose path equals `current_path`. Producers guarantee at
    /// most one.
    pub fn link_target(&self, current_path: &str) -> Option<&LinkTarget> {
        self.link_targets
            .iter()
            .find(|target| target.path == current_path)
    }
}

impl LinkTarget {
    pub fn includes(&self, path_segment: &str) -> bool {
        self.versions.iter().any(|segment| segment == path_segment)
    }
}

#[cfg(test)]
mod tests {
    use super::VersionManifest;
    use serde_json::json;

    #[test]
    fn parses_camel_case_fields_and_defaults_optional_ones() {
        let raw = json!({
            "versions": [
                {"pathSegment": "0.19/", "displayValue": "0.19.x", "label": "Dev", "fallbackLink": "/index.html", "canonical": true},
                {"pathSegment": "0.18/", "displayValue": "0.18.x", "fallbackLink": "/table-of-content.html"}
            ],
            "linkTargets": [
                {"path": "/guide.html", "versions": ["0.19/", "0.18/"]}
            ]
        })
        .to_string();

        let manifest = VersionManifest::from_json(&raw).unwrap();

        assert_eq!(manifest.versions.len(), 2);
        assert_eq!(manifest.versions[0].label.as_deref(), Some("Dev"));
        assert!(manifest.versions[0].canonical);
        assert_eq!(manifest.versions[1].label, None);
        assert!(!manifest.versions[1].canonical);
        assert_eq!(
            manifest.versions[1].fallback_link,
            "/table-of-content.html"
        );
    }

    #[test]
    fn null_label_is_treated_as_absent() {
        let raw = json!({
            "versions": [
                {"pathSegment": "v1/", "displayValue": "1.x", "label": null, "fallbackLink": "/index.html"}
            ],
            "linkTargets": []
        })
        .to_string();

        let manifest = VersionManifest::from_json(&raw).unwrap();

        assert_eq!(manifest.versions[0].label, None);
    }

    #[test]
    fn missing_link_targets_is_rejected() {
        let raw = json!({"versions": []}).to_string();

        assert!(VersionManifest::from_json(&raw).is_err());
    }

    #[test]
    fn link_target_lookup_takes_first_exact_match() {
        let raw = json!({
            "versions": [],
            "linkTargets": [
                {"path": "/a.html", "versions": ["v1/"]},
                {"path": "/b.html", "versions": ["v2/"]},
                {"path": "/b.html", "versions": ["v3/"]}
            ]
        })
        .to_string();
        let manifest = VersionManifest::from_json(&raw).unwrap();

        let target = manifest.link_target("/b.html").unwrap();

        assert!(target.includes("v2/"));
        assert!(!target.includes("v3/"));
        assert!(manifest.link_target("/b").is_none());
    }
}
