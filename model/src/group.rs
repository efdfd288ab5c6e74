use super::{AvatarColor, Friend};
use serde::{Deserialize, Serialize};

/// A social-network group as published by the remote source
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub avatar_color: AvatarColor,
    pub closed: bool,
    pub members_count: u64,
    /// Absent in the payload for groups the user has no friends in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Friend>>,
}

impl Group {
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Absent and empty friend lists are the same thing here.
    pub fn has_friends(&self) -> bool {
        self.friends.as_ref().is_some_and(|f| !f.is_empty())
    }

    pub fn friend_count(&self) -> usize {
        self.friends.as_ref().map_or(0, Vec::len)
    }

    pub fn friends(&self) -> &[Friend] {
        self.friends.as_deref().unwrap_or(&[])
    }
}
