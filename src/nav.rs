//! Navigation shell.
//!
//! The shell never stores the active tab. Whoever hosts it owns that value,
//! asks [`Navigation::render`] what to draw and gets told about clicks
//! through the callback handed to [`Navigation::select`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Discussion,
    Chatbot,
    Resources,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Discussion, Tab::Chatbot, Tab::Resources, Tab::Help];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Discussion => "discussion",
            Tab::Chatbot => "chatbot",
            Tab::Resources => "resources",
            Tab::Help => "help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Discussion => "Discussion",
            Tab::Chatbot => "ZenBot",
            Tab::Resources => "Resources",
            Tab::Help => "Get Help",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Discussion => "💬",
            Tab::Chatbot => "🤖",
            Tab::Resources => "📚",
            Tab::Help => "🆘",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// One rendered entry of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    pub tab: Tab,
    pub label: &'static str,
    pub is_active: bool,
}

/// Message produced when a tab is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    TabSelected(Tab),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Navigation;

impl Navigation {
    pub fn render(&self, active: Tab) -> Vec<TabItem> {
        Tab::ALL
            .into_iter()
            .map(|tab| TabItem {
                tab,
                label: tab.label(),
                is_active: tab == active,
            })
            .collect()
    }

    pub fn select(&self, tab: Tab, mut on_select: impl FnMut(NavEvent)) {
        on_select(NavEvent::TabSelected(tab));
    }
}
