use crate::{
    domain::versions::matcher::{PerVersionResolution, VersionLink},
    infrastructure::{dom::RenderTarget, filesystem::config::WidgetConfig},
};

/// Builds one `<li>` per resolved version, in manifest order.
///
/// Resolution is already done: this only turns links into nodes, so the same
/// items can be copied into further containers without recomputing anything.
pub fn build_menu_items<D: RenderTarget>(
    doc: &mut D,
    resolution: &PerVersionResolution<'_>,
    current_version: &str,
    config: &WidgetConfig,
) -> Vec<D::Node> {
    resolution
        .links
        .iter()
        .map(|link| build_menu_item(doc, link, current_version, config))
        .collect()
}

fn build_menu_item<D: RenderTarget>(
    doc: &mut D,
    link: &VersionLink<'_>,
    current_version: &str,
    config: &WidgetConfig,
) -> D::Node {
    let anchor = doc.create_element("a");

    if let Some(label) = &link.entry.label {
        let tag = doc.create_element("span");
        let text = doc.create_text(label);
        doc.append_child(tag, text);
        doc.add_class(tag, &label.to_lowercase());
        doc.add_class(tag, &config.label_class);

        let wrapper = doc.create_element("span");
        doc.add_class(wrapper, &config.label_wrapper_class);
        doc.append_child(wrapper, tag);
        doc.append_child(anchor, wrapper);
    }

    let display = doc.create_text(&link.entry.display_value);
    doc.append_child(anchor, display);
    doc.set_attribute(anchor, "href", &link.href);

    let item = doc.create_element("li");
    doc.add_class(item, &config.item_class);
    if link.entry.path_segment == current_version {
        doc.add_class(item, &config.active_class);
    }
    doc.append_child(item, anchor);

    item
}

/// Places the menu into every container that has a navigation list and
/// returns how many were populated.
///
/// The first container takes the built nodes themselves; every later one gets
/// deep copies, since a node can only live in one place. Items go in front of
/// whatever the list already holds.
pub fn render_menu<D: RenderTarget>(
    doc: &mut D,
    resolution: &PerVersionResolution<'_>,
    current_version: &str,
    containers: &[D::Node],
    config: &WidgetConfig,
) -> usize {
    if containers.is_empty() {
        return 0;
    }

    let items = build_menu_items(doc, resolution, current_version, config);
    let mut populated = 0;

    for (index, container) in containers.iter().enumerate() {
        let Some(list) = doc.find_descendant(*container, &config.list_class) else {
            log::warn!(
                "version menu container #{index} has no .{} element, skipping",
                config.list_class
            );
            continue;
        };

        if index == 0 {
            doc.prepend_children(list, &items);
        } else {
            let copies: Vec<_> = items.iter().map(|item| doc.deep_clone(*item)).collect();
            doc.prepend_children(list, &copies);
        }
        populated += 1;
    }

    populated
}

#[cfg(test)]
mod tests {
    use super::{build_menu_items, render_menu};
    use crate::{
        domain::versions::{manifest::VersionManifest, matcher::resolve},
        infrastructure::{
            dom::{memory::Document, RenderTarget},
            filesystem::config::WidgetConfig,
        },
    };
    use serde_json::json;

    fn manifest() -> VersionManifest {
        serde_json::from_value(json!({
            "versions": [
                {"pathSegment": "0.19/", "displayValue": "0.19.x", "label": "Dev", "fallbackLink": "/index.html"},
                {"pathSegment": "0.18/", "displayValue": "0.18.x", "fallbackLink": "/index.html", "canonical": true}
            ],
            "linkTargets": [
                {"path": "/guide.html", "versions": ["0.18/"]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn item_markup_has_label_tag_and_active_flag() {
        let manifest = manifest();
        let resolution = resolve(&manifest, "../", "/guide.html");
        let mut doc = Document::new();

        let items = build_menu_items(&mut doc, &resolution, "0.18/", &WidgetConfig::default());

        assert_eq!(
            doc.to_html(items[0]),
            "<li class=\"level1\"><a href=\"../0.19/index.html\"><span class=\"left-column\">\
             <span class=\"dev version-label\">Dev</span></span>0.19.x</a></li>"
        );
        assert_eq!(
            doc.to_html(items[1]),
            "<li class=\"level1 active\"><a href=\"../0.18/guide.html\">0.18.x</a></li>"
        );
    }

    #[test]
    fn existing_list_entries_stay_below_the_menu() {
        let manifest = manifest();
        let resolution = resolve(&manifest, "/", "/guide.html");
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.element_in(body, "div", &["version-menu"]);
        let list = doc.element_in(container, "ul", &["nav-list"]);
        let archive = doc.element_in(list, "li", &["archive"]);

        let populated = render_menu(
            &mut doc,
            &resolution,
            "0.19/",
            &[container],
            &WidgetConfig::default(),
        );

        assert_eq!(populated, 1);
        let children = doc.children(list).to_vec();
        assert_eq!(children.len(), 3);
        assert_eq!(doc.text_content(children[0]), "Dev0.19.x");
        assert_eq!(doc.text_content(children[1]), "0.18.x");
        assert_eq!(children[2], archive);
    }

    #[test]
    fn no_containers_builds_nothing() {
        let manifest = manifest();
        let resolution = resolve(&manifest, "/", "/guide.html");
        let mut doc = Document::new();
        let before = doc.to_html(doc.root());

        let populated = render_menu(&mut doc, &resolution, "0.19/", &[], &WidgetConfig::default());

        assert_eq!(populated, 0);
        assert_eq!(doc.to_html(doc.root()), before);
    }

    #[test]
    fn container_without_list_is_skipped_and_later_ones_get_copies() {
        let manifest = manifest();
        let resolution = resolve(&manifest, "/", "/guide.html");
        let mut doc = Document::new();
        let body = doc.body();
        let broken = doc.element_in(body, "div", &["version-menu"]);
        let container = doc.element_in(body, "div", &["version-menu"]);
        let list = doc.element_in(container, "ul", &["nav-list"]);

        let populated = render_menu(
            &mut doc,
            &resolution,
            "0.19/",
            &[broken, container],
            &WidgetConfig::default(),
        );

        assert_eq!(populated, 1);
        assert!(doc.children(broken).is_empty());
        assert_eq!(doc.children(list).len(), 2);
        assert!(doc.has_class(doc.children(list)[0], "active"));
        assert!(doc.find_descendant(list, "version-label").is_some());
    }
}
