//! Session state
//!
//! A session owns the full group list for its lifetime together with the
//! current criteria. Every criteria change recomputes the visible list
//! before returning, so readers never observe a stale view.

use crate::fetch::Fetcher;
use crate::filter::{filter_indices, ColorFilter, EntryFilter, FilterCriteria, PrivacyFilter};
use crate::Result;
use model::Group;
use tracing::{debug, info};

/// Full list, criteria and derived visible list
#[derive(Debug, Default)]
pub struct Session {
    groups: Vec<Group>,
    criteria: FilterCriteria,
    /// Indices into `groups`, ascending
    visible: Vec<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already holding a full list
    pub fn with_groups(groups: Vec<Group>) -> Self {
        let mut session = Self::new();
        session.load(groups);
        session
    }

    /// Replace the full list and recompute the visible list against the
    /// current criteria
    pub fn load(&mut self, groups: Vec<Group>) {
        info!("Loaded {} groups", groups.len());
        self.groups = groups;
        self.recompute();
    }

    /// Fetch a fresh full list. On failure the session is left untouched.
    pub async fn fetch(&mut self, fetcher: &dyn Fetcher) -> Result<usize> {
        let groups = fetcher.fetch().await?;
        let count = groups.len();
        self.load(groups);
        Ok(count)
    }

    pub fn set_color(&mut self, color: ColorFilter) {
        self.criteria.color = color;
        self.recompute();
    }

    pub fn set_privacy(&mut self, privacy: PrivacyFilter) {
        self.criteria.privacy = privacy;
        self.recompute();
    }

    pub fn set_entry(&mut self, entry: EntryFilter) {
        self.criteria.entry = entry;
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    /// Clear all criteria; the visible list becomes the full list
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.recompute();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full list, in source order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The visible list, in source order
    pub fn visible(&self) -> Vec<&Group> {
        self.visible.iter().map(|&i| &self.groups[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_loaded(&self) -> bool {
        !self.groups.is_empty()
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.groups, &self.criteria);
        debug!(
            "{}: {} of {} groups visible",
            self.criteria,
            self.visible.len(),
            self.groups.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use model::{AvatarColor, Friend};

    struct StaticFetcher(Vec<Group>);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self) -> Result<Vec<Group>> {
            if self.0.is_empty() {
                return Err(Error::EmptyResult {
                    location: self.location(),
                });
            }
            Ok(self.0.clone())
        }

        fn location(&self) -> String {
            "static".to_string()
        }
    }

    fn groups() -> Vec<Group> {
        vec![
            Group {
                id: 1,
                name: "Runners".to_string(),
                avatar_color: AvatarColor::Orange,
                closed: false,
                members_count: 5,
                friends: None,
            },
            Group {
                id: 2,
                name: "Readers".to_string(),
                avatar_color: AvatarColor::Yellow,
                closed: true,
                members_count: 8,
                friends: Some(vec![Friend::new("Pavel", "Orlov")]),
            },
        ]
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_loaded());
        assert!(session.visible().is_empty());
        assert!(session.criteria().is_empty());
    }

    #[test]
    fn test_criteria_set_before_load_apply_after() {
        let mut session = Session::new();
        session.set_privacy(PrivacyFilter::Closed);
        assert_eq!(session.visible_len(), 0);
        session.load(groups());
        assert_eq!(session.visible_len(), 1);
        assert_eq!(session.visible()[0].id, 2);
    }

    #[test]
    fn test_fetch_loads_groups() {
        let mut session = Session::new();
        let count = tokio_test::block_on(session.fetch(&StaticFetcher(groups()))).unwrap();
        assert_eq!(count, 2);
        assert_eq!(session.visible_len(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_state() {
        let mut session = Session::with_groups(groups());
        session.set_color(ColorFilter::Only(AvatarColor::Orange));
        let result = tokio_test::block_on(session.fetch(&StaticFetcher(vec![])));
        assert!(matches!(result, Err(Error::EmptyResult { .. })));
        assert_eq!(session.groups().len(), 2);
        assert_eq!(session.visible_len(), 1);
    }
}
