//! Version switcher for generated documentation sites.
//!
//! Given the site's version manifest and the page being viewed, the widget
//! links every published version to the equivalent page (or that version's
//! fallback), renders the menu into each `.version-menu` container and, when
//! the canonical version has the page, declares a canonical link.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::bootstrap::{init_versions, BootstrapOutcome};
pub use domain::{
    page::PageContext,
    versions::{
        canonical::select_canonical,
        manifest::{LinkTarget, VersionEntry, VersionManifest},
        matcher::{resolve, PerVersionResolution, VersionLink},
    },
};
pub use infrastructure::{
    dom::{memory::Document, RenderTarget},
    filesystem::config::{load_widget_config, WidgetConfig},
    http::manifest_client::{HttpManifestClient, ManifestClient},
};
pub use reqwest::Url;
pub use shared::error::{ConfigError, FetchError};
