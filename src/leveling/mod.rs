//! Managers and the leveling pass.
//!
//! Provides [`TaskManager`], which owns the tasks and their prerequisite
//! graph, and [`ResourceManager`], which owns the resources by name. The
//! two are separate so that one registry can serve several plans and so
//! that a pass can mutate a task and a resource at the same time.
//!
//! # Algorithm
//!
//! Leveling is a two-step protocol. `TaskManager::weight` recounts, for
//! every resource reachable from the plan's pools, how many tasks consider
//! it a candidate. `TaskManager::level` then sweeps the tasks in insertion
//! order and satisfies each one: prerequisites first, then the start
//! offset, then a greedy pick of the soonest-free, least-loaded pool
//! member. The pick is committed immediately and never revisited.
//!
//! The result is feasible rather than optimal: every prerequisite is
//! honored and no resource runs two tasks at once, but makespan is not
//! minimized.
//!
//! # References
//!
//! - Kelley (1961), "Critical-Path Planning and Scheduling"
//! - Demeulemeester & Herroelen (2002), "Project Scheduling: A Research
//!   Handbook", Ch. 8

mod resource_manager;
mod task_manager;

pub use resource_manager::ResourceManager;
pub use task_manager::TaskManager;
