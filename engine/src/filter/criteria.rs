use super::GroupPredicate;
use crate::{Error, Result};
use model::{AvatarColor, Group};
use std::fmt;
use std::str::FromStr;

/// Avatar color dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFilter {
    #[default]
    Any,
    Only(AvatarColor),
}

/// Privacy dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrivacyFilter {
    #[default]
    Any,
    /// Groups with `closed == false`
    Open,
    /// Groups with `closed == true`
    Closed,
}

/// Friend membership dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryFilter {
    #[default]
    Any,
    WithFriends,
    /// Friends empty or absent
    WithoutFriends,
}

impl GroupPredicate for ColorFilter {
    fn matches(&self, group: &Group) -> bool {
        match self {
            ColorFilter::Any => true,
            ColorFilter::Only(color) => group.avatar_color == *color,
        }
    }

    fn is_any(&self) -> bool {
        *self == ColorFilter::Any
    }
}

impl GroupPredicate for PrivacyFilter {
    fn matches(&self, group: &Group) -> bool {
        match self {
            PrivacyFilter::Any => true,
            PrivacyFilter::Open => !group.closed,
            PrivacyFilter::Closed => group.closed,
        }
    }

    fn is_any(&self) -> bool {
        *self == PrivacyFilter::Any
    }
}

impl GroupPredicate for EntryFilter {
    fn matches(&self, group: &Group) -> bool {
        match self {
            EntryFilter::Any => true,
            EntryFilter::WithFriends => group.has_friends(),
            EntryFilter::WithoutFriends => !group.has_friends(),
        }
    }

    fn is_any(&self) -> bool {
        *self == EntryFilter::Any
    }
}

impl ColorFilter {
    /// Every selectable value, "any" first
    pub fn choices() -> Vec<ColorFilter> {
        std::iter::once(ColorFilter::Any)
            .chain(AvatarColor::ALL.into_iter().map(ColorFilter::Only))
            .collect()
    }
}

impl PrivacyFilter {
    pub const CHOICES: [PrivacyFilter; 3] =
        [PrivacyFilter::Any, PrivacyFilter::Open, PrivacyFilter::Closed];
}

impl EntryFilter {
    pub const CHOICES: [EntryFilter; 3] = [
        EntryFilter::Any,
        EntryFilter::WithFriends,
        EntryFilter::WithoutFriends,
    ];
}

// An empty value is what a cleared select box produces, so it is accepted
// everywhere as "no filter", alongside the explicit any/all keyword.

impl FromStr for ColorFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "any" => Ok(ColorFilter::Any),
            other => other
                .parse::<AvatarColor>()
                .map(ColorFilter::Only)
                .map_err(|_| Error::InvalidCriteria {
                    dimension: "color",
                    value: s.to_string(),
                }),
        }
    }
}

impl FromStr for PrivacyFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "all" => Ok(PrivacyFilter::Any),
            "open" => Ok(PrivacyFilter::Open),
            "closed" => Ok(PrivacyFilter::Closed),
            _ => Err(Error::InvalidCriteria {
                dimension: "privacy",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for EntryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "all" => Ok(EntryFilter::Any),
            "withFriends" | "with-friends" => Ok(EntryFilter::WithFriends),
            "withoutFriends" | "without-friends" => Ok(EntryFilter::WithoutFriends),
            _ => Err(Error::InvalidCriteria {
                dimension: "entry",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilter::Any => f.write_str("any"),
            ColorFilter::Only(color) => write!(f, "{}", color),
        }
    }
}

impl fmt::Display for PrivacyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrivacyFilter::Any => "all",
            PrivacyFilter::Open => "open",
            PrivacyFilter::Closed => "closed",
        })
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryFilter::Any => "all",
            EntryFilter::WithFriends => "withFriends",
            EntryFilter::WithoutFriends => "withoutFriends",
        })
    }
}

/// The three filter dimensions a user can set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterCriteria {
    pub color: ColorFilter,
    pub privacy: PrivacyFilter,
    pub entry: EntryFilter,
}

impl FilterCriteria {
    pub fn new(color: ColorFilter, privacy: PrivacyFilter, entry: EntryFilter) -> Self {
        Self {
            color,
            privacy,
            entry,
        }
    }

    pub fn with_color(mut self, color: ColorFilter) -> Self {
        self.color = color;
        self
    }

    pub fn with_privacy(mut self, privacy: PrivacyFilter) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn with_entry(mut self, entry: EntryFilter) -> Self {
        self.entry = entry;
        self
    }

    /// Parse all three dimensions from their string form
    pub fn parse(color: &str, privacy: &str, entry: &str) -> Result<Self> {
        Ok(Self::new(color.parse()?, privacy.parse()?, entry.parse()?))
    }

    /// Clear every dimension
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no dimension is active
    pub fn is_empty(&self) -> bool {
        self.color.is_any() && self.privacy.is_any() && self.entry.is_any()
    }

    /// Whether a group satisfies every active dimension
    pub fn matches(&self, group: &Group) -> bool {
        self.color.matches(group) && self.privacy.matches(group) && self.entry.matches(group)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color={} privacy={} entry={}",
            self.color, self.privacy, self.entry
        )
    }
}
