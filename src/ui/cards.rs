/// Project cards, one per project, in source order
use iced::widget::{button, container, mouse_area, scrollable, text, Column};
use iced::{mouse, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::source::assets::AssetCache;
use crate::state::project::Project;
use crate::Message;

const CARD_WIDTH: f32 = 300.0;
const THUMBNAIL_HEIGHT: f32 = 180.0;

/// What one card shows, independent of widgets
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel<'a> {
    pub index: usize,
    pub thumbnail: Option<&'a str>,
    pub thumbnail_label: String,
    pub title: &'a str,
    pub description: &'a str,
    /// Card is clickable and carries the "View Screenshots" control
    pub opens_gallery: bool,
}

impl<'a> CardModel<'a> {
    pub fn new(index: usize, project: &'a Project) -> Self {
        Self {
            index,
            thumbnail: project.thumbnail(),
            thumbnail_label: project.thumbnail_label(),
            title: &project.title,
            description: &project.description,
            opens_gallery: project.has_gallery(),
        }
    }
}

/// Card models for the whole list
pub fn models(projects: &[Project]) -> Vec<CardModel<'_>> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| CardModel::new(index, project))
        .collect()
}

pub fn view<'a>(projects: &'a [Project], assets: &'a AssetCache) -> Element<'a, Message> {
    let cards = models(projects)
        .into_iter()
        .map(|model| card(model, assets))
        .collect();

    scrollable(
        container(
            Wrap::with_elements(cards)
                .spacing(Pixels(16.0))
                .line_spacing(Pixels(16.0)),
        )
        .padding(24)
        .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn card<'a>(model: CardModel<'a>, assets: &'a AssetCache) -> Element<'a, Message> {
    let mut content = Column::new().spacing(8).width(Length::Fixed(CARD_WIDTH));

    if let Some(reference) = model.thumbnail {
        content = content.push(super::picture(
            assets.thumbnail(reference),
            assets.placeholder(reference, &model.thumbnail_label),
            Length::Fill,
            Length::Fixed(THUMBNAIL_HEIGHT),
            ContentFit::Cover,
        ));
    }

    content = content
        .push(text(model.title).size(20))
        .push(text(model.description).size(14));

    if model.opens_gallery {
        content = content.push(button("View Screenshots").on_press(Message::OpenGallery(model.index)));
    }

    let framed = container(content).padding(12).style(container::rounded_box);

    if model.opens_gallery {
        mouse_area(framed)
            .on_press(Message::OpenGallery(model.index))
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        framed.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_model_per_project_in_order() {
        let projects = vec![
            Project {
                title: "X".into(),
                description: "d".into(),
                images: Some(vec!["a.png".into(), "b.png".into()]),
                ..Project::default()
            },
            Project {
                title: "Plain".into(),
                description: "no pictures".into(),
                ..Project::default()
            },
        ];

        let models = models(&projects);
        assert_eq!(models.len(), 2);

        assert_eq!(models[0].index, 0);
        assert_eq!(models[0].thumbnail, Some("a.png"));
        assert_eq!(models[0].thumbnail_label, "X thumbnail");
        assert!(models[0].opens_gallery);

        assert_eq!(models[1].title, "Plain");
        assert_eq!(models[1].thumbnail, None);
        assert!(!models[1].opens_gallery);
    }

    #[test]
    fn test_empty_images_card_is_inert_but_keeps_thumbnail() {
        let projects = vec![Project {
            title: "Cover only".into(),
            image: Some("cover.png".into()),
            images: Some(Vec::new()),
            ..Project::default()
        }];

        let model = &models(&projects)[0];
        assert_eq!(model.thumbnail, Some("cover.png"));
        assert!(!model.opens_gallery);
    }
}
