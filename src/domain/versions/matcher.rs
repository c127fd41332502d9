use super::{
    manifest::{VersionEntry, VersionManifest},
    url::join_url,
};

/// Where one version's menu entry points for the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLink<'a> {
    pub entry: &'a VersionEntry,
    pub href: String,
    pub has_equivalent: bool,
}

/// One [`VersionLink`] per manifest entry, in manifest order, plus the path
/// they were resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerVersionResolution<'a> {
    pub current_path: String,
    pub links: Vec<VersionLink<'a>>,
}

/// Computes the per-version hrefs for `current_path`.
///
/// A version links to the same logical path when the manifest lists it for
/// that path, and to its own fallback link otherwise. An unknown path, or an
/// empty manifest, resolves every entry to its fallback.
pub fn resolve<'a>(
    manifest: &'a VersionManifest,
    relative_root: &str,
    current_path: &str,
) -> PerVersionResolution<'a> {
    let target = manifest.link_target(current_path);

    let links = manifest
        .versions
        .iter()
        .map(|entry| {
            let has_equivalent = target.is_some_and(|target| target.includes(&entry.path_segment));
            let path = if has_equivalent {
                current_path
            } else {
                entry.fallback_link.as_str()
            };

            VersionLink {
                entry,
                href: join_url(&[relative_root, &entry.path_segment, path]),
                has_equivalent,
            }
        })
        .collect();

    PerVersionResolution {
        current_path: current_path.to_string(),
        links,
    }
}
