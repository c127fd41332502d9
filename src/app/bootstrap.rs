use crate::{
    domain::{
        page::PageContext,
        versions::{canonical::select_canonical, matcher::resolve, url::join_url},
    },
    infrastructure::{
        dom::RenderTarget, filesystem::config::WidgetConfig, http::manifest_client::ManifestClient,
    },
    shared::error::FetchError,
};

use super::{canonical_link::inject_canonical_link, menu_renderer::render_menu};

/// What a page-load pass of the widget ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No menu container on the page; nothing was fetched.
    NoContainers,
    /// The manifest could not be obtained; the page was not touched.
    FetchFailed(FetchError),
    Rendered {
        containers: usize,
        canonical: Option<String>,
        canonical_injected: bool,
    },
}

/// Runs the widget once for a ready document.
///
/// Fetches the manifest a single time, then resolves, renders and injects the
/// canonical link synchronously. Failures are logged and leave the document
/// as the page markup defined it.
pub async fn init_versions<D, C>(
    doc: &mut D,
    client: &C,
    page: &PageContext,
    config: &WidgetConfig,
) -> BootstrapOutcome
where
    D: RenderTarget,
    C: ManifestClient,
{
    let containers = doc.containers(&config.menu_class);
    if containers.is_empty() {
        log::debug!("no .{} container on page, skipping version menu", config.menu_class);
        return BootstrapOutcome::NoContainers;
    }

    let url = join_url(&[&page.relative_root, &config.manifest_file]);
    let manifest = match client.fetch(&url).await {
        Ok(manifest) => manifest,
        Err(err) => {
            log::error!("{err}");
            return BootstrapOutcome::FetchFailed(err);
        }
    };

    let resolution = resolve(&manifest, &page.relative_root, &page.current_path);
    let canonical = select_canonical(
        &resolution,
        &page.relative_root,
        page.absolute_root.as_deref(),
    );

    let populated = render_menu(
        doc,
        &resolution,
        &page.current_version,
        &containers,
        config,
    );

    let canonical_injected = match &canonical {
        Some(href) => inject_canonical_link(doc, href),
        None => {
            log::debug!(
                "no canonical version has {}, not declaring a canonical link",
                page.current_path
            );
            false
        }
    };

    BootstrapOutcome::Rendered {
        containers: populated,
        canonical,
        canonical_injected,
    }
}
