/// Data source access
///
/// This module handles:
/// - Locating the project document (local file or http(s) URL)
/// - Resolving image references against the document's location
/// - Fetching the document and image bytes
/// - Generating thumbnails from image bytes

pub mod assets;
pub mod fetch;
pub mod thumbnail;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use reqwest::{StatusCode, Url};

use crate::error::AssetError;

/// Default document name, looked up in the working directory
pub const DEFAULT_SOURCE: &str = "projects.json";

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Where the project document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(PathBuf),
    Remote(Url),
}

/// Where one image lives, after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Local(PathBuf),
    Remote(Url),
}

impl DataSource {
    /// Interpret a CLI/config value: http(s) URLs are remote, anything else
    /// is a path
    pub fn parse(value: &str) -> Self {
        match remote_url(value) {
            Some(url) => DataSource::Remote(url),
            None => DataSource::Local(PathBuf::from(value)),
        }
    }

    /// Resolve an image reference the way a browser resolves a relative
    /// URL against the page it appears on
    pub fn resolve(&self, reference: &str) -> Result<ImageLocation, AssetError> {
        if let Some(url) = remote_url(reference) {
            return Ok(ImageLocation::Remote(url));
        }

        match self {
            DataSource::Remote(base) => base
                .join(reference)
                .map(ImageLocation::Remote)
                .map_err(|_| AssetError::InvalidReference {
                    reference: reference.to_string(),
                }),
            DataSource::Local(document) => {
                let path = Path::new(reference);
                if path.is_absolute() {
                    return Ok(ImageLocation::Local(path.to_path_buf()));
                }
                let dir = document.parent().unwrap_or_else(|| Path::new(""));
                Ok(ImageLocation::Local(dir.join(path)))
            }
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Local(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Local(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

fn remote_url(value: &str) -> Option<Url> {
    let url = Url::parse(value).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Outcome of a failed HTTP GET, mapped by callers into their own errors
#[derive(Debug)]
pub(crate) enum HttpFailure {
    Request(reqwest::Error),
    Status(StatusCode),
}

/// Client shared by every request so connections are pooled across the
/// document and all its images. Built on first use; a failed build is
/// retried by the next request.
fn client() -> Result<&'static reqwest::Client, reqwest::Error> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(CLIENT.get_or_init(|| client))
}

/// GET a URL and return the body, treating non-2xx answers as failures
pub(crate) async fn http_get(url: &Url) -> Result<Vec<u8>, HttpFailure> {
    let client = client().map_err(HttpFailure::Request)?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(HttpFailure::Request)?;

    if !response.status().is_success() {
        return Err(HttpFailure::Status(response.status()));
    }

    let body = response.bytes().await.map_err(HttpFailure::Request)?;
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_share_one_client() {
        let first = client().unwrap();
        let second = client().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_parse_distinguishes_urls_from_paths() {
        assert!(matches!(
            DataSource::parse("https://example.com/projects.json"),
            DataSource::Remote(_)
        ));
        assert_eq!(
            DataSource::parse("site/projects.json"),
            DataSource::Local(PathBuf::from("site/projects.json"))
        );
        // Only http(s) counts as remote
        assert!(matches!(
            DataSource::parse("ftp://example.com/projects.json"),
            DataSource::Local(_)
        ));
    }

    #[test]
    fn test_local_references_resolve_next_to_document() {
        let source = DataSource::parse("site/projects.json");
        assert_eq!(
            source.resolve("img/a.png").unwrap(),
            ImageLocation::Local(PathBuf::from("site/img/a.png"))
        );

        let bare = DataSource::default();
        assert_eq!(
            bare.resolve("a.png").unwrap(),
            ImageLocation::Local(PathBuf::from("a.png"))
        );
    }

    #[test]
    fn test_remote_references_join_base_url() {
        let source = DataSource::parse("https://example.com/portfolio/projects.json");
        assert_eq!(
            source.resolve("img/a.png").unwrap(),
            ImageLocation::Remote(Url::parse("https://example.com/portfolio/img/a.png").unwrap())
        );
        assert_eq!(
            source.resolve("/b.png").unwrap(),
            ImageLocation::Remote(Url::parse("https://example.com/b.png").unwrap())
        );
    }

    #[test]
    fn test_absolute_urls_are_kept() {
        let source = DataSource::default();
        assert_eq!(
            source.resolve("https://cdn.example.com/c.png").unwrap(),
            ImageLocation::Remote(Url::parse("https://cdn.example.com/c.png").unwrap())
        );
    }
}
