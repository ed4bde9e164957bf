use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Logs,
    Cache,
    MergeMap,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Logs, Tab::Cache, Tab::MergeMap];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Logs => "Logs",
            Tab::Cache => "Email Cache",
            Tab::MergeMap => "Merge Map",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL
            .iter()
            .position(|tab| tab == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Identifies one load request. Only the newest token of a tab is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken {
    pub tab: Tab,
    pub generation: u64,
}

/// Tracks the active tab and which tabs have already loaded.
///
/// A tab's load is requested only on its first activation; reselecting a
/// loaded tab just moves the highlight. [`TabController::reload`] is the
/// explicit way to fetch again.
#[derive(Debug, Clone)]
pub struct TabController {
    active: Tab,
    loaded: HashSet<Tab>,
    generations: HashMap<Tab, u64>,
}

impl TabController {
    pub fn new() -> Self {
        Self {
            active: Tab::Dashboard,
            loaded: HashSet::new(),
            generations: HashMap::new(),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_loaded(&self, tab: Tab) -> bool {
        self.loaded.contains(&tab)
    }

    /// Activates the dashboard as at startup.
    pub fn start(&mut self) -> Option<LoadToken> {
        self.select(Tab::Dashboard)
    }

    /// Makes `tab` active. Returns a token when the tab still needs its load.
    pub fn select(&mut self, tab: Tab) -> Option<LoadToken> {
        self.active = tab;
        if self.loaded.insert(tab) {
            Some(self.next_token(tab))
        } else {
            None
        }
    }

    /// Issues a fresh token for the active tab, superseding any load in flight.
    pub fn reload(&mut self) -> LoadToken {
        let tab = self.active;
        self.loaded.insert(tab);
        self.next_token(tab)
    }

    /// True when `token` is the newest one issued for its tab.
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.generations.get(&token.tab) == Some(&token.generation)
    }

    fn next_token(&mut self, tab: Tab) -> LoadToken {
        let generation = self.generations.entry(tab).or_insert(0);
        *generation += 1;
        LoadToken {
            tab,
            generation: *generation,
        }
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}
