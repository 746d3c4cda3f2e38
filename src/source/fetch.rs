/// Project document loading
use super::{http_get, DataSource, HttpFailure};
use crate::error::LoadFailure;
use crate::state::project::{parse_projects, Project};

/// Fetch and parse the project document.
///
/// Any failure (unreadable file, network error, non-success status,
/// malformed JSON) is reported as a single `LoadFailure`; nothing partial
/// is ever returned.
pub async fn fetch_projects(source: DataSource) -> Result<Vec<Project>, LoadFailure> {
    tracing::debug!(source = %source, "Fetching project document");

    let bytes = match &source {
        DataSource::Local(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|err| LoadFailure::Io {
                    path: path.clone(),
                    source: err,
                })?
        }
        DataSource::Remote(url) => http_get(url).await.map_err(|failure| match failure {
            HttpFailure::Request(source) => LoadFailure::Request {
                url: url.to_string(),
                source,
            },
            HttpFailure::Status(status) => LoadFailure::Status {
                url: url.to_string(),
                status,
            },
        })?,
    };

    let projects = parse_projects(&bytes)?;
    tracing::debug!(source = %source, count = projects.len(), "Project document parsed");
    Ok(projects)
}
