use crate::infrastructure::dom::RenderTarget;

/// Adds `<link rel="canonical" href=...>` to the head unless one is already
/// declared. A canonical set by the page itself always wins.
///
/// Returns whether a link was added.
pub fn inject_canonical_link<D: RenderTarget>(doc: &mut D, href: &str) -> bool {
    if doc.find_link("canonical").is_some() {
        log::debug!("page already declares a canonical link, keeping it");
        return false;
    }

    let link = doc.create_element("link");
    doc.set_attribute(link, "rel", "canonical");
    doc.set_attribute(link, "href", href);
    let head = doc.head();
    doc.append_child(head, link);

    true
}
