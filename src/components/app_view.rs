//! Defines the tabs of the jukebox shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabType {
    #[default]
    Jukebox,
    Library,
    Settings,
}

impl TabType {
    pub const ALL: [TabType; 3] = [TabType::Jukebox, TabType::Library, TabType::Settings];

    pub fn label(self) -> &'static str {
        match self {
            TabType::Jukebox => "Jukebox",
            TabType::Library => "Library",
            TabType::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TabType::Jukebox => "music",
            TabType::Library => "library",
            TabType::Settings => "settings",
        }
    }
}

/// Tab to switch to after the library or queue changed size.
///
/// An empty library sends the user to the library; an idle jukebox with a default
/// playlist sends them to the jukebox. Otherwise the current tab stays.
pub fn startup_tab(playlist_count: usize, queue_len: usize, has_default: bool) -> Option<TabType> {
    if playlist_count == 0 {
        Some(TabType::Library)
    } else if queue_len == 0 && has_default {
        Some(TabType::Jukebox)
    } else {
        None
    }
}
