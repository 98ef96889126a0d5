//! View criteria for the expense list
//!
//! Ephemeral filter and sort selections. They are never persisted and reset
//! to defaults at the start of every session.

use std::fmt;
use std::str::FromStr;

use super::category::Category;

/// Category filter applied to the expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every expense
    #[default]
    All,
    /// Show only expenses in one category
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Cycle All -> Food -> Transport -> Entertainment -> Other -> All
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[0]),
            Self::Only(Category::Other) => Self::All,
            Self::Only(c) => Self::Only(c.next()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}

/// Sort order of the expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most recent date first
    #[default]
    NewestFirst,
    /// Oldest date first
    OldestFirst,
    /// Largest amount first
    HighestAmount,
    /// Smallest amount first
    LowestAmount,
}

impl SortMode {
    /// All sort modes in menu order
    pub const ALL: [SortMode; 4] = [
        SortMode::NewestFirst,
        SortMode::OldestFirst,
        SortMode::HighestAmount,
        SortMode::LowestAmount,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest First",
            Self::OldestFirst => "Oldest First",
            Self::HighestAmount => "Highest Amount",
            Self::LowestAmount => "Lowest Amount",
        }
    }

    /// Next sort mode, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::NewestFirst => Self::OldestFirst,
            Self::OldestFirst => Self::HighestAmount,
            Self::HighestAmount => Self::LowestAmount,
            Self::LowestAmount => Self::NewestFirst,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "newest-first" => Ok(Self::NewestFirst),
            "oldest" | "oldest-first" => Ok(Self::OldestFirst),
            "highest" | "highest-amount" => Ok(Self::HighestAmount),
            "lowest" | "lowest-amount" => Ok(Self::LowestAmount),
            other => Err(format!(
                "Unknown sort mode '{}' (expected newest, oldest, highest or lowest)",
                other
            )),
        }
    }
}

/// Combined filter and sort selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewCriteria {
    pub filter: CategoryFilter,
    pub sort: SortMode,
}

impl ViewCriteria {
    /// Create criteria from a filter and sort mode
    pub fn new(filter: CategoryFilter, sort: SortMode) -> Self {
        Self { filter, sort }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = ViewCriteria::default();
        assert_eq!(criteria.filter, CategoryFilter::All);
        assert_eq!(criteria.sort, SortMode::NewestFirst);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Other));
        assert!(CategoryFilter::Only(Category::Food).matches(Category::Food));
        assert!(!CategoryFilter::Only(Category::Food).matches(Category::Transport));
    }

    #[test]
    fn test_filter_cycle_visits_every_category() {
        let mut filter = CategoryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen.last(), Some(&CategoryFilter::All));
        for category in Category::ALL {
            assert!(seen.contains(&CategoryFilter::Only(category)));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Food".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Food)
        );
        assert!("drinks".parse::<CategoryFilter>().is_err());

        assert_eq!("highest".parse::<SortMode>().unwrap(), SortMode::HighestAmount);
        assert_eq!("Oldest-First".parse::<SortMode>().unwrap(), SortMode::OldestFirst);
        assert!("random".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_cycle() {
        let mut mode = SortMode::NewestFirst;
        for expected in SortMode::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), SortMode::NewestFirst);
    }
}
