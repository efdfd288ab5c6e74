//! Group filtering
//!
//! The visible list is derived from the full list and three independent
//! criteria. Every active criterion must hold for a group to be kept, and
//! the output keeps the order of the input.

mod criteria;

pub use criteria::{ColorFilter, EntryFilter, FilterCriteria, PrivacyFilter};

use model::Group;

/// A single filter dimension
pub trait GroupPredicate {
    /// Whether the group passes this dimension
    fn matches(&self, group: &Group) -> bool;

    /// Whether this dimension lets every group through
    fn is_any(&self) -> bool;
}

/// Borrow the groups that satisfy every active criterion
pub fn filter_groups<'a>(groups: &'a [Group], criteria: &FilterCriteria) -> Vec<&'a Group> {
    groups.iter().filter(|g| criteria.matches(g)).collect()
}

/// Positions in `groups` of the groups that satisfy every active criterion
pub fn filter_indices(groups: &[Group], criteria: &FilterCriteria) -> Vec<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(_, g)| criteria.matches(g))
        .map(|(i, _)| i)
        .collect()
}

/// Keep only the groups that pass a single dimension
pub fn retain_matching<'a, P: GroupPredicate + ?Sized>(
    groups: Vec<&'a Group>,
    predicate: &P,
) -> Vec<&'a Group> {
    if predicate.is_any() {
        return groups;
    }
    groups.into_iter().filter(|g| predicate.matches(g)).collect()
}
