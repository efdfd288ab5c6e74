use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Avatar colors a group can carry
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    Blue,
    Orange,
    Red,
    Yellow,
    White,
    Purple,
    Green,
}

impl AvatarColor {
    pub const ALL: [AvatarColor; 7] = [
        AvatarColor::Blue,
        AvatarColor::Orange,
        AvatarColor::Red,
        AvatarColor::Yellow,
        AvatarColor::White,
        AvatarColor::Purple,
        AvatarColor::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarColor::Blue => "blue",
            AvatarColor::Orange => "orange",
            AvatarColor::Red => "red",
            AvatarColor::Yellow => "yellow",
            AvatarColor::White => "white",
            AvatarColor::Purple => "purple",
            AvatarColor::Green => "green",
        }
    }
}

impl fmt::Display for AvatarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown avatar color: {}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for AvatarColor {
    type Err = ParseColorError;

    // Case-sensitive, same as the wire format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvatarColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
