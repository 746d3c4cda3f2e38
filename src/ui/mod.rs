/// Views
///
/// - Project cards (cards.rs)
/// - Screenshot grid overlay (gallery.rs)
/// - Single-image overlay (viewer.rs)
/// - Dimmed overlay with click-outside dismissal (modal.rs)

pub mod cards;
pub mod gallery;
pub mod modal;
pub mod viewer;

use iced::widget::image::Handle;
use iced::widget::{container, text, Image};
use iced::{ContentFit, Element, Length};

use crate::Message;

/// An image if its handle is ready, otherwise its label in a box of the
/// same size
pub fn picture<'a>(
    handle: Option<&Handle>,
    label: String,
    width: impl Into<Length>,
    height: impl Into<Length>,
    fit: ContentFit,
) -> Element<'a, Message> {
    let (width, height) = (width.into(), height.into());

    match handle {
        Some(handle) => Image::<Handle>::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        None => container(text(label).size(12))
            .center_x(width)
            .center_y(height)
            .into(),
    }
}
