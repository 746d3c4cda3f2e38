/// Single-image overlay with previous/next controls
use iced::advanced;
use iced::widget::{button, column, container, horizontal_space, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length, Theme};

use crate::source::assets::AssetCache;
use crate::state::viewer::{Direction, ViewerState};
use crate::Message;

pub fn view<'a>(state: &'a ViewerState, caption: String, assets: &'a AssetCache) -> Element<'a, Message> {
    let reference = state.current().unwrap_or_default();
    let picture = super::picture(
        assets.full(reference),
        assets.placeholder(reference, &caption),
        Length::Fill,
        Length::Fill,
        ContentFit::Contain,
    );

    let mut body = Row::new().spacing(12).align_y(Alignment::Center).height(Length::Fill);

    // Previous/next only make sense with something to move to
    if state.shows_navigation() {
        body = body
            .push(nav_button("‹", Direction::Previous))
            .push(picture)
            .push(nav_button("›", Direction::Next));
    } else {
        body = body.push(picture);
    }

    let close = row![horizontal_space(), button("×").on_press(Message::CloseViewer)];

    frame(
        column![close, body, text(caption).size(14)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
}

/// Bounded box for the viewer content; the backdrop around it stays
/// reachable
pub fn frame<'a, Message, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: advanced::Renderer + 'a,
{
    container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(1100.0)
        .max_height(720.0)
        .into()
}

fn nav_button<'a>(label: &'a str, direction: Direction) -> Element<'a, Message> {
    button(text(label).size(32))
        .padding([8, 16])
        .on_press(Message::Navigate(direction))
        .into()
}
