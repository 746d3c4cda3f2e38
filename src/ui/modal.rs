use iced::advanced;
use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element, Theme};

/// Gap kept between the overlay content and the window edge, so the
/// backdrop stays clickable however large the content asks to be
const BACKDROP_MARGIN: u16 = 40;

/// Layer `content` above `base` on a dimmed backdrop.
///
/// A press on the backdrop emits `on_blur`. Presses on the content are
/// captured by it and never reach the backdrop.
pub fn overlay<'a, Message, Renderer>(
    base: impl Into<Element<'a, Message, Theme, Renderer>>,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_blur: Message,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: advanced::Renderer + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(content))
                    .padding(BACKDROP_MARGIN)
                    .style(|_theme| container::Style {
                        background: Some(
                            Color {
                                a: 0.85,
                                ..Color::BLACK
                            }
                            .into(),
                        ),
                        ..container::Style::default()
                    })
            )
            .on_press(on_blur)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{gallery, viewer};
    use crate::Message;
    use iced::advanced::widget::Tree;
    use iced::advanced::{clipboard, layout, Layout, Shell};
    use iced::widget::Space;
    use iced::{mouse, Event, Length, Point, Rectangle, Size};

    const WINDOW: Size = Size {
        width: 1280.0,
        height: 800.0,
    };

    /// Lay `element` out in the window and deliver a left press at `at`
    fn press(mut element: Element<'_, Message, Theme, ()>, at: Point) -> Vec<Message> {
        let mut tree = Tree::new(element.as_widget());
        let node = element
            .as_widget()
            .layout(&mut tree, &(), &layout::Limits::new(Size::ZERO, WINDOW));

        let mut messages = Vec::new();
        let _ = element.as_widget_mut().on_event(
            &mut tree,
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Layout::new(&node),
            mouse::Cursor::Available(at),
            &(),
            &mut clipboard::Null,
            &mut Shell::new(&mut messages),
            &Rectangle::with_size(WINDOW),
        );
        messages
    }

    fn fill() -> Space {
        Space::new(Length::Fill, Length::Fill)
    }

    fn viewer_overlay() -> Element<'static, Message, Theme, ()> {
        overlay(fill(), viewer::frame(fill()), Message::CloseViewer)
    }

    fn gallery_overlay() -> Element<'static, Message, Theme, ()> {
        overlay(fill(), gallery::frame(fill()), Message::CloseGallery)
    }

    #[test]
    fn test_backdrop_press_closes_viewer() {
        let messages = press(viewer_overlay(), Point::new(3.0, 3.0));
        assert!(matches!(messages.as_slice(), [Message::CloseViewer]));
    }

    #[test]
    fn test_backdrop_press_closes_gallery() {
        let messages = press(gallery_overlay(), Point::new(3.0, 3.0));
        assert!(matches!(messages.as_slice(), [Message::CloseGallery]));
    }

    #[test]
    fn test_content_press_does_not_dismiss() {
        let centre = Point::new(WINDOW.width / 2.0, WINDOW.height / 2.0);

        assert!(press(viewer_overlay(), centre).is_empty());
        assert!(press(gallery_overlay(), centre).is_empty());
    }

    #[test]
    fn test_margin_keeps_backdrop_reachable_around_unbounded_content() {
        let unbounded = overlay(fill(), fill(), Message::CloseViewer);
        let messages = press(unbounded, Point::new(10.0, 400.0));
        assert!(matches!(messages.as_slice(), [Message::CloseViewer]));
    }
}
