//! Error types for graph construction and leveling.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a prerequisite graph or
/// running a leveling pass.
///
/// Errors surface at the point of detection and leave previously committed
/// state intact: a rejected edge mutates nothing, and a failed pass keeps
/// the offsets and assignments committed before the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Adding the edge would make the prerequisite graph cyclic.
    #[error("adding '{prereq}' as a prerequisite of '{task}' creates a cycle")]
    Cycle {
        /// Task the edge was being added to.
        task: String,
        /// The rejected prerequisite.
        prereq: String,
    },

    /// A task asked for a resource but its candidate group has no members.
    #[error("task '{task}' has an empty resource group")]
    EmptyResourceGroup {
        /// The task that could not be assigned.
        task: String,
    },

    /// A name-based lookup found no registered resource.
    #[error("unknown resource '{0}'")]
    UnknownResource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_names_both_tasks() {
        let err = Error::Cycle {
            task: "deploy".to_string(),
            prereq: "release".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("deploy"));
        assert!(msg.contains("release"));
        assert!(msg.contains("cycle"));
    }

    #[test]
    fn test_empty_group_display() {
        let err = Error::EmptyResourceGroup {
            task: "design".to_string(),
        };
        assert_eq!(err.to_string(), "task 'design' has an empty resource group");
    }

    #[test]
    fn test_unknown_resource_display() {
        let err = Error::UnknownResource("mill-3".to_string());
        assert_eq!(err.to_string(), "unknown resource 'mill-3'");
    }
}
