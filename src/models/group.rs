//! Resource group model.
//!
//! A resource group is the pool of candidate resources a task may draw
//! from: any member can perform the task, and the leveling pass picks
//! exactly one. Membership is by resource name; the group itself holds no
//! resource state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A deduplicated set of candidate resource names.
///
/// Groups are cheap to clone and are typically shared across every task
/// that draws from the same pool. Members are kept in name order, which
/// fixes the tie-breaking order between resources whose selection keys
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    members: BTreeSet<String>,
}

impl ResourceGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member, keeping the group deduplicated.
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.members.insert(name.into());
        self
    }

    /// Adds a member in place. Re-adding an existing name is a no-op.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.members.insert(name.into());
    }

    /// Whether `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Iterates members in name order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    ///
    /// An empty group attached to a task makes that task unassignable;
    /// the leveling pass reports it as an error rather than skipping.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder() {
        let g = ResourceGroup::new()
            .with_member("alice")
            .with_member("bob");

        assert_eq!(g.len(), 2);
        assert!(g.contains("alice"));
        assert!(g.contains("bob"));
        assert!(!g.contains("carol"));
    }

    #[test]
    fn test_duplicate_members_collapse() {
        let mut g = ResourceGroup::new().with_member("alice");
        g.insert("alice");
        g.insert("alice");

        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_members_iterate_in_name_order() {
        let g: ResourceGroup = ["zoe", "alice", "mike"].into_iter().collect();

        let members: Vec<&str> = g.iter().collect();
        assert_eq!(members, ["alice", "mike", "zoe"]);
    }

    #[test]
    fn test_empty_group() {
        let g = ResourceGroup::new();
        assert!(g.is_empty());
        assert_eq!(g.iter().count(), 0);
    }

    #[test]
    fn test_from_iterator_dedups() {
        let g: ResourceGroup = vec!["m1", "m2", "m1"].into_iter().collect();
        assert_eq!(g.len(), 2);
    }
}
