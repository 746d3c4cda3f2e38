/// Image assets: loading bytes for a reference and caching the results
///
/// Each reference is requested at most once per data source. The cache only
/// records bookkeeping; the actual loading runs as an async task and
/// reports back through `complete`.
use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::image::Handle;

use super::thumbnail::generate_thumbnail_async;
use super::{http_get, DataSource, HttpFailure, ImageLocation};
use crate::error::AssetError;

/// Full-size and thumbnail handles for one reference
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub full: Handle,
    pub thumbnail: Handle,
}

/// Read the bytes behind a location and prepare both handles
pub async fn load_image(location: ImageLocation, thumbnail_size: u32) -> Result<LoadedImage, AssetError> {
    let bytes = match &location {
        ImageLocation::Local(path) => {
            tokio::fs::read(path).await.map_err(|err| AssetError::Io {
                path: path.clone(),
                source: err,
            })?
        }
        ImageLocation::Remote(url) => http_get(url).await.map_err(|failure| match failure {
            HttpFailure::Request(err) => AssetError::Request {
                url: url.to_string(),
                source: err,
            },
            HttpFailure::Status(status) => AssetError::Status {
                url: url.to_string(),
                status,
            },
        })?,
    };

    let thumbnail = generate_thumbnail_async(bytes.clone(), thumbnail_size).await?;

    Ok(LoadedImage {
        full: Handle::from_bytes(bytes),
        thumbnail: Handle::from_rgba(thumbnail.width, thumbnail.height, thumbnail.pixels),
    })
}

/// Lifecycle of one reference
#[derive(Debug, Clone)]
pub enum Slot {
    Pending,
    Ready(LoadedImage),
    Failed,
}

/// A load the caller has to start
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub generation: u64,
    pub reference: String,
    pub location: ImageLocation,
}

/// Per-source cache of image slots
#[derive(Debug, Default)]
pub struct AssetCache {
    base: DataSource,
    generation: u64,
    slots: HashMap<String, Slot>,
}

impl AssetCache {
    pub fn new(base: DataSource) -> Self {
        Self {
            base,
            generation: 0,
            slots: HashMap::new(),
        }
    }

    /// Forget everything and resolve future references against a new source.
    ///
    /// Loads still in flight for the old source are ignored when they land.
    pub fn reset(&mut self, base: DataSource) {
        self.base = base;
        self.generation += 1;
        self.slots.clear();
    }

    /// Mark unseen references as pending and return the loads to start.
    ///
    /// References that cannot be resolved are marked failed right away.
    pub fn request<'a>(&mut self, references: impl IntoIterator<Item = &'a str>) -> Vec<AssetRequest> {
        let mut requests = Vec::new();

        for reference in references {
            if self.slots.contains_key(reference) {
                continue;
            }

            match self.base.resolve(reference) {
                Ok(location) => {
                    self.slots.insert(reference.to_string(), Slot::Pending);
                    requests.push(AssetRequest {
                        generation: self.generation,
                        reference: reference.to_string(),
                        location,
                    });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping image");
                    self.slots.insert(reference.to_string(), Slot::Failed);
                }
            }
        }

        requests
    }

    /// Record the outcome of a load started by `request`
    pub fn complete(
        &mut self,
        generation: u64,
        reference: String,
        outcome: Result<LoadedImage, Arc<AssetError>>,
    ) {
        if generation != self.generation {
            tracing::debug!(reference = %reference, "Dropping image from a previous source");
            return;
        }

        let slot = match outcome {
            Ok(loaded) => Slot::Ready(loaded),
            Err(err) => {
                tracing::warn!(reference = %reference, error = %err, "Failed to load image");
                Slot::Failed
            }
        };
        self.slots.insert(reference, slot);
    }

    pub fn slot(&self, reference: &str) -> Option<&Slot> {
        self.slots.get(reference)
    }

    pub fn thumbnail(&self, reference: &str) -> Option<&Handle> {
        match self.slot(reference) {
            Some(Slot::Ready(loaded)) => Some(&loaded.thumbnail),
            _ => None,
        }
    }

    pub fn full(&self, reference: &str) -> Option<&Handle> {
        match self.slot(reference) {
            Some(Slot::Ready(loaded)) => Some(&loaded.full),
            _ => None,
        }
    }

    pub fn is_failed(&self, reference: &str) -> bool {
        matches!(self.slot(reference), Some(Slot::Failed))
    }

    /// Text standing in for an image that is not ready
    pub fn placeholder(&self, reference: &str, label: &str) -> String {
        if self.is_failed(reference) {
            format!("{label} (unavailable)")
        } else {
            label.to_string()
        }
    }
}
