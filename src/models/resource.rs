//! Resource model.
//!
//! A resource is a unit of capacity that performs tasks: a person, a
//! machine, a meeting room. Each resource carries the two weighting
//! counters the greedy selection heuristic reads, the tick at which it
//! next becomes free, and the ordered list of tasks committed to it.
//!
//! # Reference
//! Demeulemeester & Herroelen (2002), "Project Scheduling: A Research
//! Handbook", Ch. 8 (priority-rule based scheduling)

use serde::{Deserialize, Serialize};

use super::Task;

/// A named unit of capacity.
///
/// Scheduling state changes in exactly two places: a weighting pass resets
/// and recounts the candidacy counters, and [`Resource::assign`] commits an
/// assignment. Every other method is read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique name, also the registry key.
    name: String,
    /// How many tasks list this resource as a candidate (set by weighting).
    available_count: u32,
    /// How many tasks have been committed to this resource.
    assigned_count: u32,
    /// Earliest tick at which this resource is free again.
    next_available: u64,
    /// Names of committed tasks, in assignment order.
    assigned_tasks: Vec<String>,
}

impl Resource {
    /// Creates an idle resource with zeroed counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available_count: 0,
            assigned_count: 0,
            next_available: 0,
            assigned_tasks: Vec::new(),
        }
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tasks that listed this resource as a candidate in the most
    /// recent weighting pass.
    pub fn available_count(&self) -> u32 {
        self.available_count
    }

    /// Number of tasks committed to this resource.
    pub fn assigned_count(&self) -> u32 {
        self.assigned_count
    }

    /// Earliest tick at which this resource is free. Never decreases while
    /// assignments accumulate.
    pub fn next_available(&self) -> u64 {
        self.next_available
    }

    /// Names of the tasks committed to this resource, in assignment order.
    pub fn assigned_tasks(&self) -> &[String] {
        &self.assigned_tasks
    }

    /// Load score used as the second selection key:
    /// `available_count + 2 * assigned_count`.
    ///
    /// Committed work counts double, so a resource that has actually been
    /// picked sorts after one that is merely eligible for many tasks. This
    /// spreads assignments across a pool instead of piling them on the
    /// first member.
    pub fn score(&self) -> u32 {
        self.available_count + 2 * self.assigned_count
    }

    /// Greedy selection key: soonest-free first, then lowest load score.
    ///
    /// Not exposed as an `Ord` impl; two distinct resources often compare
    /// equal here, and equal keys fall back to name order at the call site.
    pub(crate) fn selection_key(&self) -> (u64, u32) {
        (self.next_available, self.score())
    }

    /// Zeroes both weighting counters ahead of a recount.
    pub(crate) fn reset_weights(&mut self) {
        self.available_count = 0;
        self.assigned_count = 0;
    }

    /// Records one task that lists this resource as a candidate.
    pub(crate) fn note_candidate(&mut self) {
        self.available_count += 1;
    }

    /// Commits `task` to this resource.
    ///
    /// This is the single point where cross-entity state changes: the
    /// resource adds itself to the task's auto-assignment list, the task's
    /// start offset is pushed out to this resource's free tick if needed,
    /// and the free tick advances past the task's end. A task with no
    /// offset yet is treated as startable at tick 0.
    pub fn assign(&mut self, task: &mut Task) {
        task.push_auto_assignment(&self.name);
        self.assigned_count += 1;
        let start = task.start().unwrap_or(0).max(self.next_available);
        task.set_start(start);
        self.next_available = start + task.duration();
        self.assigned_tasks.push(task.name().to_string());
    }
}
