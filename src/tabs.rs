use std::fmt;

/// The five result views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Summary,
    Links,
    Text,
    Images,
    Tables,
}

impl TabId {
    /// All tabs in display order
    pub const ALL: [TabId; 5] = [
        TabId::Summary,
        TabId::Links,
        TabId::Text,
        TabId::Images,
        TabId::Tables,
    ];

    /// Name used by the tab button's `data-tab` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Summary => "summary",
            TabId::Links => "links",
            TabId::Text => "text",
            TabId::Images => "images",
            TabId::Tables => "tables",
        }
    }

    /// Element id of the panel this tab reveals
    pub fn panel_id(&self) -> String {
        format!("{}Tab", self.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Summary => "Summary",
            TabId::Links => "Links",
            TabId::Text => "Text Content",
            TabId::Images => "Images",
            TabId::Tables => "Tables",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which single result view is visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSwitcher {
    active: TabId,
}

impl TabSwitcher {
    pub fn new(active: TabId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Activate `tab`, deactivating every other tab
    pub fn select(&mut self, tab: TabId) {
        if self.active != tab {
            ::log::debug!("Tab switch {} -> {}", self.active, tab);
        }
        self.active = tab;
    }

    /// Every tab paired with its active flag, in display order
    pub fn tabs(&self) -> impl Iterator<Item = (TabId, bool)> + '_ {
        TabId::ALL.into_iter().map(|tab| (tab, self.is_active(tab)))
    }
}
