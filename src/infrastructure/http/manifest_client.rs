use std::future::Future;

use reqwest::{header, Client, StatusCode, Url};

use crate::{
    domain::versions::manifest::VersionManifest,
    shared::{error::FetchError, result::AppResult},
};

/// One-shot retrieval of the version manifest.
///
/// Implementations perform exactly one request per call and never retry.
pub trait ManifestClient {
    fn fetch(&self, url: &str) -> impl Future<Output = AppResult<VersionManifest>> + Send;
}

/// HTTP client bound to the location of the page being rendered.
///
/// Manifest URLs are built from the page's relative root, so they are
/// resolved against `base` the way a browser resolves them against the
/// document URL.
#[derive(Debug, Clone)]
pub struct HttpManifestClient {
    client: Client,
    base: Url,
}

impl HttpManifestClient {
    pub fn new(base: Url) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("version-switcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| FetchError::Network(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for `url`; absolute inputs are returned unchanged.
    pub fn resolve_url(&self, url: &str) -> AppResult<Url> {
        self.base.join(url).map_err(|err| {
            FetchError::Network(format!("cannot resolve {url} against {}: {err}", self.base))
        })
    }
}

impl ManifestClient for HttpManifestClient {
    async fn fetch(&self, url: &str) -> AppResult<VersionManifest> {
        let url = self.resolve_url(url)?;
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| FetchError::Network(format!("request failed for {url}: {err}")))?;

        // Anything but a plain 200 (including 204) leaves nothing to render.
        let status = response.status();
        if status != StatusCode::OK {
            // reqwest does not expose the server's reason phrase.
            return Err(FetchError::Status {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<VersionManifest>()
            .await
            .map_err(|err| FetchError::Decode(format!("{url}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpManifestClient, ManifestClient};
    use crate::shared::error::FetchError;
    use reqwest::Url;

    fn client(base: &str) -> HttpManifestClient {
        HttpManifestClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn relative_manifest_paths_resolve_against_the_page() {
        let client = client("https://docs.example.com/v2/api/core.html");

        assert_eq!(
            client.resolve_url("../laika/versionInfo.json").unwrap().as_str(),
            "https://docs.example.com/v2/laika/versionInfo.json"
        );
        assert_eq!(
            client.resolve_url("/laika/versionInfo.json").unwrap().as_str(),
            "https://docs.example.com/laika/versionInfo.json"
        );
        assert_eq!(
            client.resolve_url("laika/versionInfo.json").unwrap().as_str(),
            "https://docs.example.com/v2/api/laika/versionInfo.json"
        );
    }

    #[test]
    fn absolute_manifest_url_is_kept() {
        let client = client("https://docs.example.com/v2/index.html");

        assert_eq!(
            client.resolve_url("http://127.0.0.1:8080/laika/versionInfo.json").unwrap().as_str(),
            "http://127.0.0.1:8080/laika/versionInfo.json"
        );
    }

    #[tokio::test]
    async fn unresolvable_url_fails_before_any_request() {
        let client = client("data:text/plain,page");

        let err = client.fetch("laika/versionInfo.json").await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }
}
