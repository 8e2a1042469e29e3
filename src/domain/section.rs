//! Dashboard sections and navigation.

use super::feed::Feed;

/// One of the six mutually-exclusive dashboard views. Exactly one section
/// is active at any time; holding the active one as a plain enum value
/// makes the invariant structural rather than enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Cpu,
    Gpu,
    RamDisk,
    Lxc,
    LiveStats,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Cpu,
        Section::Gpu,
        Section::RamDisk,
        Section::Lxc,
        Section::LiveStats,
    ];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Cpu => "CPU",
            Section::Gpu => "GPU",
            Section::RamDisk => "RAM/Disk",
            Section::Lxc => "LXC",
            Section::LiveStats => "Live Stats",
        }
    }

    /// Keyboard shortcut for this section.
    pub fn hotkey(&self) -> char {
        match self {
            Section::Overview => 'o',
            Section::Cpu => 'c',
            Section::Gpu => 'g',
            Section::RamDisk => 'm',
            Section::Lxc => 'l',
            Section::LiveStats => 's',
        }
    }

    /// Get the section for a pressed key.
    pub fn from_hotkey(key: char) -> Option<Section> {
        let key = key.to_ascii_lowercase();
        Section::ALL.iter().copied().find(|s| s.hotkey() == key)
    }

    /// The feed a visit to this section re-fetches, if any. Live-Stats is
    /// the only section whose selection has a side effect beyond
    /// visibility.
    pub fn refresh_on_visit(&self) -> Option<Feed> {
        match self {
            Section::LiveStats => Some(Feed::LiveStats),
            _ => None,
        }
    }

    /// Position in `ALL`, for the tab bar highlight.
    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}
