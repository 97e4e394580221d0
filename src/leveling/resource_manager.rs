//! Resource registry.
//!
//! Owns every [`Resource`] by name and hands out references for weighting,
//! selection, and assignment. Kept separate from task ownership so one
//! registry can serve several task sets and so a task set and the registry
//! can be borrowed mutably at the same time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::Resource;

/// Name-keyed registry of resources.
///
/// Registration is last-write-wins: adding a resource under a name that is
/// already taken replaces the earlier entry, counters and all. Iteration
/// is always in name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceManager {
    resources: BTreeMap<String, Resource>,
}

impl ResourceManager {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a fresh idle resource under `name`.
    pub fn create(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.resources.insert(name.clone(), Resource::new(name));
    }

    /// Registers an externally built resource, replacing any entry with the
    /// same name.
    pub fn add(&mut self, resource: Resource) {
        self.resources.insert(resource.name().to_string(), resource);
    }

    /// Looks up a resource by name.
    pub fn lookup(&self, name: &str) -> Result<&Resource> {
        self.resources
            .get(name)
            .ok_or_else(|| Error::UnknownResource(name.to_string()))
    }

    /// Mutable lookup, for manual assignment flows.
    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut Resource> {
        self.resources
            .get_mut(name)
            .ok_or_else(|| Error::UnknownResource(name.to_string()))
    }

    /// Whether a resource named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Iterates resources in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Registered names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_create_and_lookup() {
        let mut rm = ResourceManager::new();
        rm.create("alice");

        assert!(rm.contains("alice"));
        assert_eq!(rm.len(), 1);
        let alice = rm.lookup("alice").unwrap();
        assert_eq!(alice.name(), "alice");
        assert_eq!(alice.next_available(), 0);
    }

    #[test]
    fn test_lookup_unknown_name_fails() {
        let rm = ResourceManager::new();

        let err = rm.lookup("ghost").unwrap_err();
        assert_eq!(err, Error::UnknownResource("ghost".to_string()));
    }

    #[test]
    fn test_readding_a_name_replaces_the_entry() {
        let mut rm = ResourceManager::new();
        rm.create("mill");

        // Accumulate some state on the first entry.
        let mut t = Task::new("cut").with_duration(6);
        rm.lookup_mut("mill").unwrap().assign(&mut t);
        assert_eq!(rm.lookup("mill").unwrap().next_available(), 6);

        // Re-registering the same name starts over.
        rm.add(Resource::new("mill"));
        assert_eq!(rm.len(), 1);
        assert_eq!(rm.lookup("mill").unwrap().next_available(), 0);
        assert!(rm.lookup("mill").unwrap().assigned_tasks().is_empty());
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut rm = ResourceManager::new();
        rm.create("zoe");
        rm.create("alice");
        rm.create("mike");

        let names: Vec<&str> = rm.names().collect();
        assert_eq!(names, ["alice", "mike", "zoe"]);

        let via_iter: Vec<&str> = rm.iter().map(Resource::name).collect();
        assert_eq!(via_iter, names);
    }

    #[test]
    fn test_empty_registry() {
        let rm = ResourceManager::new();
        assert!(rm.is_empty());
        assert!(!rm.contains("anyone"));
    }
}
