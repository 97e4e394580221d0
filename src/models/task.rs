//! Task model.
//!
//! A task is a named unit of work with a duration, an optional pool of
//! candidate resources, and prerequisite edges to other tasks managed by
//! the same [`TaskManager`](crate::leveling::TaskManager). Leveling turns
//! each task's prerequisites and resource contention into a concrete start
//! offset and, when a pool is set, a single committed resource.
//!
//! # Time Representation
//! All times are unitless ticks relative to a project start (t=0). The
//! consumer defines what one tick means (an hour, a day, a sprint).
//!
//! # Reference
//! Kelley (1961), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

use super::ResourceGroup;

/// Handle to a task inside a [`TaskManager`](crate::leveling::TaskManager).
///
/// Handles are issued by `TaskManager::add` in insertion order and are only
/// meaningful with the manager that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    /// Position of the task in its manager's insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lifecycle tag for a task.
///
/// Purely informational: the leveling pass neither reads nor writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    /// Not started.
    #[default]
    New,
    /// Actively being worked.
    Underway,
    /// Blocked, waiting on something outside the plan.
    Paused,
    /// Finished.
    Completed,
}

/// A unit of work to be leveled.
///
/// Plain data (name, duration, worker count, candidate pool, milestone
/// flag) is set through the builder methods. Scheduling outputs (the start
/// offset and the auto-assignment list) are written only by the leveling
/// pass; prerequisite edges are added only through
/// `TaskManager::add_prereq`, which is what keeps the graph acyclic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task name, used in renderings and resource assignment lists.
    name: String,
    /// Work length in ticks (default: 4).
    duration: u64,
    /// Headcount the task calls for (default: 1). Recorded but not yet
    /// consumed by leveling, which assigns exactly one resource.
    workers: u32,
    /// Candidate resource pool. `None` means the task needs no resource.
    group: Option<ResourceGroup>,
    /// Direct prerequisites, in the order the edges were added.
    prereqs: Vec<TaskId>,
    /// Lifecycle tag.
    state: TaskState,
    /// Free-form note attached at the most recent state change.
    state_note: Option<String>,
    /// Start offset in ticks. `None` until leveling resolves the task.
    start: Option<u64>,
    /// Resources pinned by hand; leveling skips tasks that have any.
    hard_assigned: Vec<String>,
    /// Resources committed by leveling, in commit order.
    auto_assigned: Vec<String>,
    /// Milestone marker, used by renderings.
    milestone: bool,
}

impl Task {
    /// Creates a task with the given name, a duration of 4 ticks, one
    /// worker, and no prerequisites, pool, or assignments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 4,
            workers: 1,
            group: None,
            prereqs: Vec::new(),
            state: TaskState::New,
            state_note: None,
            start: None,
            hard_assigned: Vec::new(),
            auto_assigned: Vec::new(),
            milestone: false,
        }
    }

    /// Sets the duration in ticks.
    pub fn with_duration(mut self, ticks: u64) -> Self {
        self.duration = ticks;
        self
    }

    /// Sets the number of workers the task calls for.
    pub fn with_workers(mut self, workers: u32) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the candidate resource pool.
    pub fn with_group(mut self, group: ResourceGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Marks the task as a milestone.
    pub fn milestone(mut self) -> Self {
        self.milestone = true;
        self
    }

    /// Task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in ticks.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Number of workers the task calls for.
    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Candidate resource pool, if any.
    pub fn group(&self) -> Option<&ResourceGroup> {
        self.group.as_ref()
    }

    /// Direct prerequisites, in edge-insertion order.
    pub fn prereqs(&self) -> &[TaskId] {
        &self.prereqs
    }

    /// Current lifecycle tag.
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Note attached at the most recent state change, if any.
    pub fn state_note(&self) -> Option<&str> {
        self.state_note.as_deref()
    }

    /// Start offset in ticks, once leveling has resolved the task.
    pub fn start(&self) -> Option<u64> {
        self.start
    }

    /// Finish tick: `start + duration`, once resolved.
    pub fn finish(&self) -> Option<u64> {
        self.start.map(|s| s + self.duration)
    }

    /// Whether this task is a milestone.
    pub fn is_milestone(&self) -> bool {
        self.milestone
    }

    /// Whether leveling has fixed a start offset.
    pub fn is_resolved(&self) -> bool {
        self.start.is_some()
    }

    /// Whether any resource, pinned or auto-assigned, is attached.
    pub fn is_assigned(&self) -> bool {
        !self.hard_assigned.is_empty() || !self.auto_assigned.is_empty()
    }

    /// Resources pinned by hand, in pin order.
    pub fn hard_assigned(&self) -> &[String] {
        &self.hard_assigned
    }

    /// Resources committed by leveling, in commit order.
    pub fn auto_assigned(&self) -> &[String] {
        &self.auto_assigned
    }

    /// Every attached resource name: pinned ones first, then
    /// auto-assignments in commit order.
    pub fn assigned_resources(&self) -> impl Iterator<Item = &str> {
        self.hard_assigned
            .iter()
            .chain(self.auto_assigned.iter())
            .map(String::as_str)
    }

    /// Pins a resource by hand. A task with a pinned resource is skipped by
    /// the leveling sweep, though its prerequisites still resolve.
    ///
    /// The name is not checked against any registry; pinning is the
    /// operator's override.
    pub fn pin_resource(&mut self, name: impl Into<String>) {
        self.hard_assigned.push(name.into());
    }

    /// Changes the lifecycle tag, clearing any previous note.
    pub fn set_state(&mut self, state: TaskState) {
        self.state = state;
        self.state_note = None;
    }

    /// Changes the lifecycle tag and records why.
    pub fn set_state_with_note(&mut self, state: TaskState, note: impl Into<String>) {
        self.state = state;
        self.state_note = Some(note.into());
    }

    pub(crate) fn push_prereq(&mut self, prereq: TaskId) {
        self.prereqs.push(prereq);
    }

    pub(crate) fn set_start(&mut self, tick: u64) {
        self.start = Some(tick);
    }

    pub(crate) fn push_auto_assignment(&mut self, name: &str) {
        self.auto_assigned.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let t = Task::new("design");

        assert_eq!(t.name(), "design");
        assert_eq!(t.duration(), 4);
        assert_eq!(t.workers(), 1);
        assert_eq!(t.state(), TaskState::New);
        assert!(t.group().is_none());
        assert!(t.prereqs().is_empty());
        assert!(t.start().is_none());
        assert!(t.finish().is_none());
        assert!(!t.is_milestone());
        assert!(!t.is_resolved());
        assert!(!t.is_assigned());
    }

    #[test]
    fn test_task_builder() {
        let pool = ResourceGroup::new().with_member("alice").with_member("bob");
        let t = Task::new("build")
            .with_duration(10)
            .with_workers(3)
            .with_group(pool)
            .milestone();

        assert_eq!(t.duration(), 10);
        assert_eq!(t.workers(), 3);
        assert!(t.is_milestone());
        assert_eq!(t.group().map(ResourceGroup::len), Some(2));
    }

    #[test]
    fn test_finish_is_start_plus_duration() {
        let mut t = Task::new("write").with_duration(3);
        t.set_start(5);

        assert!(t.is_resolved());
        assert_eq!(t.finish(), Some(8));
    }

    #[test]
    fn test_pinned_resource_marks_assigned() {
        let mut t = Task::new("review");
        t.pin_resource("carol");

        assert!(t.is_assigned());
        assert_eq!(t.assigned_resources().collect::<Vec<_>>(), ["carol"]);
    }

    #[test]
    fn test_assigned_resources_lists_pinned_before_auto() {
        let mut t = Task::new("review");
        t.push_auto_assignment("bob");
        t.pin_resource("carol");

        assert_eq!(t.hard_assigned(), ["carol"]);
        assert_eq!(t.auto_assigned(), ["bob"]);
        let names: Vec<&str> = t.assigned_resources().collect();
        assert_eq!(names, ["carol", "bob"]);
    }

    #[test]
    fn test_state_note_lifecycle() {
        let mut t = Task::new("deploy");
        assert_eq!(t.state(), TaskState::New);
        assert!(t.state_note().is_none());

        t.set_state_with_note(TaskState::Paused, "waiting on vendor");
        assert_eq!(t.state(), TaskState::Paused);
        assert_eq!(t.state_note(), Some("waiting on vendor"));

        // A plain state change drops the stale note.
        t.set_state(TaskState::Underway);
        assert_eq!(t.state(), TaskState::Underway);
        assert!(t.state_note().is_none());
    }
}
