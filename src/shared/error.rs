use std::path::PathBuf;

/// Why the version manifest could not be obtained.
///
/// Every variant is reduced to one log line by the bootstrap; none of them
/// reaches the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("[{code}]: {text}")]
    Status { code: u16, text: String },
    #[error("[0]: {0}")]
    Network(String),
    #[error("invalid version manifest: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read widget config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse widget config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
