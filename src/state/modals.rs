/// The two overlay layers: the screenshot grid and the single-image viewer.
///
/// Each user event has its own dispatch method on `Modals`. A method updates
/// the layers and returns an `Effect` telling the page what it now has to
/// show or load. Nothing here touches the window, so the whole state
/// machine is testable on its own.
use super::project::{ImageSequence, Project};
use super::viewer::{Direction, ViewerState};

/// What the page must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// The grid was rebuilt for this sequence
    ShowGrid(ImageSequence),
    /// The viewer now displays this reference
    ShowImage(String),
    /// One or more layers were hidden
    Dismissed,
}

/// Grid content for one project
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub title: String,
    pub sequence: ImageSequence,
}

impl Grid {
    /// Label for the thumbnail at `index`
    pub fn label(&self, index: usize) -> String {
        Project::screenshot_label(&self.title, index)
    }
}

/// Collage of one project's screenshots.
///
/// The grid content survives a close, like a hidden overlay keeps its
/// children; the next `open` replaces it.
#[derive(Debug, Default)]
pub struct GalleryView {
    visible: bool,
    grid: Option<Grid>,
}

impl GalleryView {
    /// Open the grid for a project. A project without images is ignored.
    pub fn open(&mut self, project: &Project) -> Effect {
        let sequence = project.displayable_images();
        if sequence.is_empty() {
            tracing::debug!(title = %project.title, "Project has no images, gallery stays closed");
            return Effect::None;
        }

        self.grid = Some(Grid {
            title: project.title.clone(),
            sequence: sequence.clone(),
        });
        self.visible = true;
        Effect::ShowGrid(sequence)
    }

    pub fn close(&mut self) -> Effect {
        if !self.visible {
            return Effect::None;
        }
        self.visible = false;
        Effect::Dismissed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Grid content while visible
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref().filter(|_| self.visible)
    }
}

/// Lightbox for one image at a time
#[derive(Debug, Default)]
pub struct ImageViewer {
    state: Option<ViewerState>,
    title: String,
}

impl ImageViewer {
    /// Show `sequence` starting at `start`
    pub fn open(&mut self, title: &str, sequence: ImageSequence, start: usize) -> Effect {
        let state = ViewerState::new(sequence, start);
        let effect = match state.current() {
            Some(reference) => Effect::ShowImage(reference.to_string()),
            None => Effect::None,
        };
        self.title = title.to_string();
        self.state = Some(state);
        effect
    }

    pub fn close(&mut self) -> Effect {
        match self.state.take() {
            Some(_) => Effect::Dismissed,
            None => Effect::None,
        }
    }

    /// Step through the sequence; ignored while hidden
    pub fn advance(&mut self, direction: Direction) -> Effect {
        let Some(state) = self.state.as_mut() else {
            return Effect::None;
        };
        state.advance(direction);
        match state.current() {
            Some(reference) => Effect::ShowImage(reference.to_string()),
            None => Effect::None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    /// Current navigation state while visible
    pub fn state(&self) -> Option<&ViewerState> {
        self.state.as_ref()
    }

    /// Caption for the image being shown
    pub fn caption(&self) -> Option<String> {
        self.state
            .as_ref()
            .map(|state| Project::screenshot_label(&self.title, state.index()))
    }
}

/// Both layers together, with one dispatch method per event kind
#[derive(Debug, Default)]
pub struct Modals {
    gallery: GalleryView,
    viewer: ImageViewer,
}

impl Modals {
    pub fn new() -> Self {
        Self::default()
    }

    /// A card was clicked
    pub fn open_gallery(&mut self, project: &Project) -> Effect {
        self.gallery.open(project)
    }

    /// The grid's close control or background was clicked
    pub fn close_gallery(&mut self) -> Effect {
        self.gallery.close()
    }

    /// A grid thumbnail was clicked
    pub fn open_from_grid(&mut self, index: usize) -> Effect {
        let Some(grid) = self.gallery.grid() else {
            return Effect::None;
        };
        if index >= grid.sequence.len() {
            return Effect::None;
        }
        let (title, sequence) = (grid.title.clone(), grid.sequence.clone());
        self.open_viewer(&title, sequence, index)
    }

    /// Open the viewer on an arbitrary sequence, with or without the grid
    pub fn open_viewer(&mut self, title: &str, sequence: ImageSequence, start: usize) -> Effect {
        self.viewer.open(title, sequence, start)
    }

    /// The viewer's close control or background was clicked
    pub fn close_viewer(&mut self) -> Effect {
        self.viewer.close()
    }

    /// Previous/next control or arrow key
    pub fn navigate(&mut self, direction: Direction) -> Effect {
        self.viewer.advance(direction)
    }

    /// Escape hides both layers at once, whichever are open
    pub fn escape(&mut self) -> Effect {
        let gallery = self.gallery.close();
        let viewer = self.viewer.close();
        if gallery == Effect::Dismissed || viewer == Effect::Dismissed {
            Effect::Dismissed
        } else {
            Effect::None
        }
    }

    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    pub fn viewer(&self) -> &ImageViewer {
        &self.viewer
    }
}
