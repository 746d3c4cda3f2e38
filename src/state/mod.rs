/// State management module
///
/// This module holds everything the gallery remembers, none of it tied to
/// the window:
/// - Project records and image sequence resolution (project.rs)
/// - The loaded project list (store.rs)
/// - Viewer position and cyclic navigation (viewer.rs)
/// - The grid and viewer overlay state machine (modals.rs)

pub mod modals;
pub mod project;
pub mod store;
pub mod viewer;
