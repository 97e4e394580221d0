//! Task ownership and the leveling pass.
//!
//! # Algorithm
//!
//! 1. `weight` resets and recounts the candidacy counter of every resource
//!    reachable from this manager's tasks.
//! 2. `level` sweeps tasks in insertion order, skipping any that already
//!    carry an assignment, and calls `satisfy` on the rest.
//! 3. `satisfy` recurses into prerequisites first, fixes the task's start
//!    offset at the latest prerequisite finish, then commits the
//!    soonest-free, least-loaded member of the task's pool.
//!
//! The pass is one-shot greedy: a committed assignment is never revisited,
//! and there is no fixed-point iteration. Given the same insertion order,
//! edges, and registry, the outcome is identical on every run.
//!
//! # Complexity
//! O(e) graph walking per satisfied task plus O(c log c) per candidate
//! sort, where e = prerequisite edges and c = pool size.
//!
//! # Reference
//! Demeulemeester & Herroelen (2002), "Project Scheduling: A Research
//! Handbook", Ch. 8: priority-rule based heuristics

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::models::{Task, TaskId};

use super::ResourceManager;

/// Owns tasks, their prerequisite graph, and the leveling pass over them.
///
/// Tasks are held in insertion order and addressed by the [`TaskId`] that
/// [`TaskManager::add`] returns. Resources live in a separate
/// [`ResourceManager`] so that one registry can serve several plans.
///
/// # Example
///
/// ```
/// use leveler::leveling::{ResourceManager, TaskManager};
/// use leveler::models::{ResourceGroup, Task};
///
/// let mut resources = ResourceManager::new();
/// resources.create("alice");
/// resources.create("bob");
///
/// let pool = ResourceGroup::new().with_member("alice").with_member("bob");
/// let mut plan = TaskManager::new();
/// let design = plan.add(Task::new("design").with_duration(2).with_group(pool.clone()));
/// let build = plan.add(Task::new("build").with_duration(4).with_group(pool));
/// plan.add_prereq(build, design)?;
///
/// plan.weight(&mut resources)?;
/// plan.level(&mut resources)?;
///
/// assert_eq!(plan.get(design).and_then(|t| t.start()), Some(0));
/// assert_eq!(plan.get(build).and_then(|t| t.start()), Some(2));
/// # Ok::<(), leveler::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `task` and returns its handle.
    pub fn add(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.tasks.len());
        self.tasks.push(task);
        id
    }

    /// The task behind `id`, or `None` for a handle this manager never
    /// issued.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.0)
    }

    /// Mutable access, for operator edits such as pinning a resource or
    /// changing a lifecycle state.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id.0)
    }

    /// Handle of the first task named `name`, in insertion order.
    pub fn find(&self, name: &str) -> Option<TaskId> {
        self.tasks.iter().position(|t| t.name() == name).map(TaskId)
    }

    /// Iterates tasks with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.tasks.iter().enumerate().map(|(i, t)| (TaskId(i), t))
    }

    /// Number of managed tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the manager holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends `prereq` to `task`'s prerequisite list.
    ///
    /// The edge is rejected with [`Error::Cycle`] if `task` and `prereq`
    /// are the same, or if `task` is already reachable from `prereq`
    /// through existing edges. A rejected edge mutates nothing. Edges
    /// append in call order, and duplicates are allowed.
    pub fn add_prereq(&mut self, task: TaskId, prereq: TaskId) -> Result<()> {
        if task == prereq || self.transitive_prereqs(prereq).contains(&task) {
            return Err(Error::Cycle {
                task: self.tasks[task.0].name().to_string(),
                prereq: self.tasks[prereq.0].name().to_string(),
            });
        }
        self.tasks[task.0].push_prereq(prereq);
        Ok(())
    }

    /// Every task reachable from `id` through prerequisite edges, not
    /// including `id` itself.
    ///
    /// Each call walks with its own fresh visited set, so shared
    /// prerequisites in diamond-shaped graphs are visited once per call
    /// and concurrent traversals over the same graph cannot interfere.
    pub fn transitive_prereqs(&self, id: TaskId) -> BTreeSet<TaskId> {
        let mut seen = BTreeSet::new();
        self.collect_prereqs(id, &mut seen);
        seen
    }

    fn collect_prereqs(&self, id: TaskId, seen: &mut BTreeSet<TaskId>) {
        for &prereq in self.tasks[id.0].prereqs() {
            if seen.insert(prereq) {
                self.collect_prereqs(prereq, seen);
            }
        }
    }

    /// Recomputes candidacy counters for every resource reachable from
    /// this manager's resource groups.
    ///
    /// Both counters of each reachable resource are zeroed first, then
    /// `available_count` is bumped once per (task, member) pair. Resources
    /// no task here references, including another plan's resources in a
    /// shared registry, are left untouched. Any unregistered group member
    /// fails the pass with [`Error::UnknownResource`] before a single
    /// count is taken.
    ///
    /// Run this before [`TaskManager::level`]; re-running it discards the
    /// assignment counts accumulated since.
    pub fn weight(&self, resources: &mut ResourceManager) -> Result<()> {
        let mut reachable = BTreeSet::new();
        for task in &self.tasks {
            if let Some(group) = task.group() {
                for name in group.iter() {
                    reachable.insert(name.to_string());
                }
            }
        }

        // Validates every name before any counting happens.
        for name in &reachable {
            resources.lookup_mut(name)?.reset_weights();
        }

        for task in &self.tasks {
            if let Some(group) = task.group() {
                for name in group.iter() {
                    resources.lookup_mut(name)?.note_candidate();
                }
            }
        }
        Ok(())
    }

    /// Levels every managed task in one sweep.
    ///
    /// Tasks are visited in insertion order; any task that already carries
    /// a pinned or auto-assigned resource is skipped, the rest are
    /// satisfied. The first failure aborts the sweep, and everything
    /// committed before it stays committed.
    pub fn level(&mut self, resources: &mut ResourceManager) -> Result<()> {
        for index in 0..self.tasks.len() {
            if self.tasks[index].is_assigned() {
                continue;
            }
            self.satisfy(TaskId(index), resources)?;
        }
        Ok(())
    }

    /// Resolves one task and, transitively, its prerequisites.
    ///
    /// # Algorithm
    /// 1. Satisfy every prerequisite, depth-first.
    /// 2. Return early if this task already has a start offset.
    /// 3. Fix the start offset at the latest prerequisite finish (0 when
    ///    there are none).
    /// 4. If a pool is set and nothing is assigned yet, pick the
    ///    soonest-free member, lowest load score breaking ties, names
    ///    breaking what remains, and commit it.
    ///
    /// Already-resolved tasks return unchanged, which makes repeated calls
    /// within a pass and across passes harmless.
    pub fn satisfy(&mut self, id: TaskId, resources: &mut ResourceManager) -> Result<()> {
        let prereqs = self.tasks[id.0].prereqs().to_vec();
        for &prereq in &prereqs {
            self.satisfy(prereq, resources)?;
        }
        if self.tasks[id.0].is_resolved() {
            return Ok(());
        }

        let earliest = prereqs
            .iter()
            .filter_map(|p| self.tasks[p.0].finish())
            .max()
            .unwrap_or(0);
        self.tasks[id.0].set_start(earliest);

        let task = &self.tasks[id.0];
        let members: Vec<String> = match task.group() {
            Some(group) => group.iter().map(str::to_string).collect(),
            None => return Ok(()),
        };
        if task.is_assigned() {
            // Pinned by hand; the offset above still counts for dependents.
            return Ok(());
        }
        self.assign_from(id, &members, resources)
    }

    /// Picks the best candidate out of `members` and commits it to the
    /// task behind `id`.
    fn assign_from(
        &mut self,
        id: TaskId,
        members: &[String],
        resources: &mut ResourceManager,
    ) -> Result<()> {
        let mut candidates = Vec::with_capacity(members.len());
        for name in members {
            let key = resources.lookup(name)?.selection_key();
            candidates.push((key, name.as_str()));
        }
        // Stable sort over name-ordered members: equal keys keep name order.
        candidates.sort_by_key(|&(key, _)| key);

        let (_, chosen) = *candidates.first().ok_or_else(|| Error::EmptyResourceGroup {
            task: self.tasks[id.0].name().to_string(),
        })?;
        resources.lookup_mut(chosen)?.assign(&mut self.tasks[id.0]);
        Ok(())
    }
}
