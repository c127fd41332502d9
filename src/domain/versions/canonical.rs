use super::{matcher::PerVersionResolution, url::join_url};

/// Picks the URL that represents the current document across all versions.
///
/// The first entry flagged `canonical` that also has an equivalent document
/// wins. `None` means no canonical link may be asserted for this page, which
/// includes the case where the canonical version lacks the document.
///
/// Nothing stops a manifest from flagging several entries; only the first
/// qualifying one in manifest order is considered.
pub fn select_canonical(
    resolution: &PerVersionResolution<'_>,
    relative_root: &str,
    absolute_root: Option<&str>,
) -> Option<String> {
    let link = resolution
        .links
        .iter()
        .find(|link| link.entry.canonical && link.has_equivalent)?;

    let versioned_path = join_url(&[&link.entry.path_segment, &resolution.current_path]);
    let root = absolute_root.unwrap_or(relative_root);

    Some(join_url(&[root, &versioned_path]))
}
