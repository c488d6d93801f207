//! The three surfaces behind the tab bar.

mod jukebox;
mod library;
mod settings;

pub use jukebox::JukeboxView;
pub use library::LibraryView;
pub use settings::SettingsView;
