use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

mod config;
mod error;
mod logging;
mod source;
mod state;
mod ui;

use config::{Config, ThemeChoice};
use error::{AssetError, LoadFailure, LOAD_FAILURE_MESSAGE};
use source::assets::{load_image, AssetCache, AssetRequest, LoadedImage};
use source::fetch::fetch_projects;
use source::DataSource;
use state::modals::{Effect, Modals};
use state::project::Project;
use state::store::ProjectStore;
use state::viewer::Direction;

/// Folio - a portfolio gallery.
///
/// Shows one card per project from a JSON document, a screenshot grid per
/// project and a lightbox to step through the screenshots.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Project document: a JSON file or an http(s) URL (default: projects.json)
    source: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color scheme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    debug: bool,
}

/// Startup values after merging CLI and config
#[derive(Debug, Clone)]
struct Settings {
    source: DataSource,
    theme: ThemeChoice,
    thumbnail_size: u32,
}

/// What the card area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Loading,
    Ready,
    Failed,
}

impl Page {
    /// Text shown in place of the cards, if any
    fn notice(self) -> Option<&'static str> {
        match self {
            Page::Loading => Some("Loading projects…"),
            Page::Ready => None,
            Page::Failed => Some(LOAD_FAILURE_MESSAGE),
        }
    }
}

/// Main application state
struct Folio {
    /// Where projects (and relative image references) come from
    source: DataSource,
    /// The loaded project list
    store: ProjectStore,
    page: Page,
    /// Grid and viewer overlays
    modals: Modals,
    /// Image handles by reference
    assets: AssetCache,
    theme: ThemeChoice,
    thumbnail_size: u32,
    /// Bumped on every load so late results from an older load are dropped
    generation: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Project document fetch finished
    ProjectsLoaded(u64, Result<Vec<Project>, Arc<LoadFailure>>),
    /// One image finished loading
    ImageLoaded {
        generation: u64,
        reference: String,
        outcome: Result<LoadedImage, Arc<AssetError>>,
    },
    /// User clicked "Open…"
    OpenSource,
    /// File dialog closed
    SourcePicked(Option<PathBuf>),
    /// A project card was clicked
    OpenGallery(usize),
    CloseGallery,
    /// A grid thumbnail was clicked
    OpenImage(usize),
    CloseViewer,
    Navigate(Direction),
    Escape,
}

impl Folio {
    /// Create the application and start loading the project document
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut folio = Folio {
            assets: AssetCache::new(settings.source.clone()),
            source: settings.source,
            store: ProjectStore::new(),
            page: Page::Loading,
            modals: Modals::new(),
            theme: settings.theme,
            thumbnail_size: settings.thumbnail_size,
            generation: 0,
        };
        let task = folio.load();
        (folio, task)
    }

    /// Start a fresh all-or-nothing load of the current source
    fn load(&mut self) -> Task<Message> {
        self.generation += 1;
        self.page = Page::Loading;
        self.store.clear();
        self.modals.escape();
        self.assets.reset(self.source.clone());

        tracing::info!(source = %self.source, "Loading projects");

        let generation = self.generation;
        Task::perform(fetch_projects(self.source.clone()), move |result| {
            Message::ProjectsLoaded(generation, result.map_err(Arc::new))
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProjectsLoaded(generation, outcome) => {
                if generation != self.generation {
                    tracing::debug!(generation, "Ignoring result of a superseded load");
                    return Task::none();
                }

                match self.store.apply(outcome) {
                    Ok(projects) => {
                        self.page = Page::Ready;
                        let requests = self
                            .assets
                            .request(projects.iter().filter_map(Project::thumbnail));
                        load_assets(requests, self.thumbnail_size)
                    }
                    Err(failure) => {
                        tracing::error!(source = %self.source, error = %failure, "Error fetching projects");
                        self.page = Page::Failed;
                        Task::none()
                    }
                }
            }
            Message::ImageLoaded {
                generation,
                reference,
                outcome,
            } => {
                self.assets.complete(generation, reference, outcome);
                Task::none()
            }
            Message::OpenSource => Task::perform(pick_source(), Message::SourcePicked),
            Message::SourcePicked(Some(path)) => {
                self.source = DataSource::Local(path);
                self.load()
            }
            Message::SourcePicked(None) => Task::none(),
            Message::OpenGallery(index) => {
                let Some(project) = self.store.get(index) else {
                    return Task::none();
                };
                let effect = self.modals.open_gallery(project);
                self.apply(effect)
            }
            Message::CloseGallery => {
                let effect = self.modals.close_gallery();
                self.apply(effect)
            }
            Message::OpenImage(index) => {
                let effect = self.modals.open_from_grid(index);
                self.apply(effect)
            }
            Message::CloseViewer => {
                let effect = self.modals.close_viewer();
                self.apply(effect)
            }
            Message::Navigate(direction) => {
                let effect = self.modals.navigate(direction);
                self.apply(effect)
            }
            Message::Escape => {
                let effect = self.modals.escape();
                self.apply(effect)
            }
        }
    }

    /// Turn an overlay effect into image loads
    fn apply(&mut self, effect: Effect) -> Task<Message> {
        let requests = match effect {
            Effect::ShowGrid(sequence) => self.assets.request(sequence.iter().map(String::as_str)),
            Effect::ShowImage(reference) => self.assets.request([reference.as_str()]),
            Effect::Dismissed | Effect::None => return Task::none(),
        };
        load_assets(requests, self.thumbnail_size)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Portfolio").size(32),
            horizontal_space(),
            text(self.source.to_string()).size(14),
            button("Open…").on_press(Message::OpenSource),
        ]
        .spacing(16)
        .padding(24)
        .align_y(Alignment::Center);

        let body: Element<Message> = match self.page.notice() {
            Some(notice) => container(text(notice).size(16)).padding(24).into(),
            None => ui::cards::view(self.store.projects(), &self.assets),
        };

        let mut page: Element<Message> = column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let gallery = self.modals.gallery();
        if gallery.is_visible() {
            if let Some(grid) = gallery.grid() {
                page = ui::modal::overlay(
                    page,
                    ui::gallery::view(grid, &self.assets),
                    Message::CloseGallery,
                );
            }
        }

        let viewer = self.modals.viewer();
        if viewer.is_visible() {
            if let Some(state) = viewer.state() {
                let caption = viewer.caption().unwrap_or_default();
                page = ui::modal::overlay(
                    page,
                    ui::viewer::view(state, caption, &self.assets),
                    Message::CloseViewer,
                );
            }
        }

        page
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(key_message)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.theme()
    }
}

/// Global key bindings
fn key_message(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::Escape) => Some(Message::Escape),
        Key::Named(key::Named::ArrowRight) => Some(Message::Navigate(Direction::Next)),
        Key::Named(key::Named::ArrowLeft) => Some(Message::Navigate(Direction::Previous)),
        _ => None,
    }
}

/// One task per image, all reporting back as `ImageLoaded`
fn load_assets(requests: Vec<AssetRequest>, thumbnail_size: u32) -> Task<Message> {
    Task::batch(requests.into_iter().map(|request| {
        let AssetRequest {
            generation,
            reference,
            location,
        } = request;
        Task::perform(load_image(location, thumbnail_size), move |outcome| {
            Message::ImageLoaded {
                generation,
                reference: reference.clone(),
                outcome: outcome.map_err(Arc::new),
            }
        })
    }))
}

/// Ask for a local project document
async fn pick_source() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open Project Document")
        .add_filter("JSON", &["json"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::default_path);
    let (config, config_error) = Config::load_or_default(config_path.as_deref());

    logging::init(cli.debug, config.log_level.as_deref());
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Ignoring config file, using defaults");
    }

    let source = cli
        .source
        .or(config.source)
        .map(|value| DataSource::parse(&value))
        .unwrap_or_default();

    let settings = Settings {
        source,
        theme: cli.theme.unwrap_or(config.theme),
        thumbnail_size: config.thumbnail_size,
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %settings.source,
        "Folio starting"
    );

    iced::application("Folio", Folio::update, Folio::view)
        .theme(Folio::theme)
        .subscription(Folio::subscription)
        .centered()
        .run_with(move || Folio::new(settings))
}
