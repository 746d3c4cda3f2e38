/// Screenshot grid overlay
use iced::advanced;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Pixels, Theme};
use iced_aw::Wrap;

use crate::source::assets::AssetCache;
use crate::state::modals::Grid;
use crate::Message;

const TILE_SIZE: f32 = 200.0;

pub fn view<'a>(grid: &'a Grid, assets: &'a AssetCache) -> Element<'a, Message> {
    let tiles = grid
        .sequence
        .iter()
        .enumerate()
        .map(|(index, reference)| {
            button(super::picture(
                assets.thumbnail(reference),
                assets.placeholder(reference, &grid.label(index)),
                Length::Fixed(TILE_SIZE),
                Length::Fixed(TILE_SIZE),
                ContentFit::Cover,
            ))
            .padding(0)
            .style(button::text)
            .on_press(Message::OpenImage(index))
            .into()
        })
        .collect();

    let header = row![
        text(&grid.title).size(24),
        horizontal_space(),
        button("×").on_press(Message::CloseGallery),
    ]
    .align_y(Alignment::Center);

    frame(
        column![
            header,
            scrollable(
                Wrap::with_elements(tiles)
                    .spacing(Pixels(8.0))
                    .line_spacing(Pixels(8.0))
            ),
        ]
        .spacing(16),
    )
}

pub fn frame<'a, Message, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: advanced::Renderer + 'a,
{
    container(content)
        .padding(24)
        .max_width(960.0)
        .max_height(720.0)
        .style(container::rounded_box)
        .into()
}
