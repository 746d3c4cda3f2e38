/// Project records as they appear in the project document
use serde::Deserialize;
use std::sync::Arc;

/// An ordered, shared list of image references.
///
/// Cloning is cheap; the gallery grid and the viewer hold the same list.
pub type ImageSequence = Arc<[String]>;

/// One portfolio entry
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Project {
    /// Card heading
    #[serde(default)]
    pub title: String,
    /// Card body text
    #[serde(default)]
    pub description: String,
    /// Single image reference, used when `images` is absent
    #[serde(default)]
    pub image: Option<String>,
    /// Screenshot references, in display order
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl Project {
    /// Resolve the displayable image sequence.
    ///
    /// `images` wins whenever it is present, even if empty. Otherwise
    /// `image` becomes a one-element sequence.
    pub fn displayable_images(&self) -> ImageSequence {
        match (&self.images, &self.image) {
            (Some(images), _) => images.iter().cloned().collect(),
            (None, Some(image)) => Arc::from(vec![image.clone()]),
            (None, None) => Arc::from(Vec::new()),
        }
    }

    /// Number of displayable images
    pub fn image_count(&self) -> usize {
        match (&self.images, &self.image) {
            (Some(images), _) => images.len(),
            (None, Some(_)) => 1,
            (None, None) => 0,
        }
    }

    /// Whether the card opens a gallery at all
    pub fn has_gallery(&self) -> bool {
        self.image_count() > 0
    }

    /// Card thumbnail: first of `images`, else `image`, else nothing
    pub fn thumbnail(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .or(self.image.as_ref())
            .map(String::as_str)
    }

    /// Label for the card thumbnail
    pub fn thumbnail_label(&self) -> String {
        format!("{} thumbnail", self.title)
    }

    /// Label for the screenshot at `index` (shown 1-based)
    pub fn screenshot_label(title: &str, index: usize) -> String {
        format!("{} screenshot {}", title, index + 1)
    }
}

/// Parse a project document: a JSON array of project records
pub fn parse_projects(json: &[u8]) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_slice(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image: Option<&str>, images: Option<&[&str]>) -> Project {
        Project {
            title: "X".into(),
            description: "d".into(),
            image: image.map(String::from),
            images: images.map(|list| list.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_single_image_behaves_like_one_element_list() {
        let single = project(Some("a.png"), None);
        let listed = project(None, Some(&["a.png"]));

        assert_eq!(single.displayable_images(), listed.displayable_images());
        assert_eq!(single.image_count(), 1);
        assert!(single.has_gallery());
        assert_eq!(single.thumbnail(), listed.thumbnail());
    }

    #[test]
    fn test_no_images_has_no_gallery() {
        let bare = project(None, None);
        assert!(bare.displayable_images().is_empty());
        assert!(!bare.has_gallery());
        assert_eq!(bare.thumbnail(), None);
    }

    #[test]
    fn test_empty_images_list_hides_single_image() {
        let p = project(Some("cover.png"), Some(&[]));
        assert!(p.displayable_images().is_empty());
        assert!(!p.has_gallery());
        // The card still shows the single image as its thumbnail
        assert_eq!(p.thumbnail(), Some("cover.png"));
    }

    #[test]
    fn test_thumbnail_prefers_first_screenshot() {
        let p = project(Some("cover.png"), Some(&["a.png", "b.png"]));
        assert_eq!(p.thumbnail(), Some("a.png"));
        assert_eq!(&*p.displayable_images(), &["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn test_parse_handles_missing_fields() {
        let json = br#"[
            {"title": "X", "description": "d", "images": ["a.png", "b.png"]},
            {"title": "Y", "description": "e", "image": "c.png"},
            {"title": "Z"}
        ]"#;
        let projects = parse_projects(json).unwrap();

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].image_count(), 2);
        assert_eq!(projects[1].image_count(), 1);
        assert_eq!(projects[2].description, "");
        assert!(!projects[2].has_gallery());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_projects(br#"{"title": "X"}"#).is_err());
    }

    #[test]
    fn test_labels() {
        let p = project(None, Some(&["a.png"]));
        assert_eq!(p.thumbnail_label(), "X thumbnail");
        assert_eq!(Project::screenshot_label(&p.title, 1), "X screenshot 2");
    }
}
