//! Expense category
//!
//! Categories form a closed set. Unknown names fail at parse time instead of
//! silently becoming `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Category {
    /// Groceries, restaurants, coffee (default for new expenses)
    #[default]
    Food,
    /// Fuel, tickets, rides
    Transport,
    /// Movies, games, events
    Entertainment,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    /// Category used when a stored record carries none
    pub fn fallback() -> Self {
        Category::Other
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Next category in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Food => Self::Transport,
            Self::Transport => Self::Entertainment,
            Self::Entertainment => Self::Other,
            Self::Other => Self::Food,
        }
    }

    /// Previous category in display order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Food => Self::Other,
            Self::Transport => Self::Food,
            Self::Entertainment => Self::Transport,
            Self::Other => Self::Entertainment,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}' (expected one of: Food, Transport, Entertainment, Other)",
                    s
                )
            })
    }
}
