//! Deterministic task leveling.
//!
//! Takes a set of tasks with durations, prerequisite edges, and candidate
//! resource pools, and produces a feasible plan: every task gets a start
//! offset no earlier than its prerequisites' finishes, and every task that
//! wants a resource gets exactly one, picked greedily to spread load. The
//! same input always levels to the same plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskId`, `TaskState`, `Resource`,
//!   `ResourceGroup`
//! - **`leveling`**: `TaskManager` and `ResourceManager`, the weighting and
//!   leveling pass
//! - **`render`**: text charts and Graphviz views of a leveled plan
//! - **`error`**: the crate's error type
//!
//! # Quick Start
//!
//! ```
//! use leveler::leveling::{ResourceManager, TaskManager};
//! use leveler::models::{ResourceGroup, Task};
//!
//! let mut resources = ResourceManager::new();
//! resources.create("alice");
//! resources.create("bob");
//!
//! let pool = ResourceGroup::new().with_member("alice").with_member("bob");
//! let mut plan = TaskManager::new();
//! let design = plan.add(Task::new("design").with_duration(2).with_group(pool.clone()));
//! let build = plan.add(Task::new("build").with_duration(4).with_group(pool));
//! plan.add_prereq(build, design)?;
//!
//! plan.weight(&mut resources)?;
//! plan.level(&mut resources)?;
//!
//! assert_eq!(plan.get(design).and_then(|t| t.start()), Some(0));
//! assert_eq!(plan.get(build).and_then(|t| t.start()), Some(2));
//! # Ok::<(), leveler::error::Error>(())
//! ```
//!
//! # References
//!
//! - Kelley (1961), "Critical-Path Planning and Scheduling"
//! - Demeulemeester & Herroelen (2002), "Project Scheduling: A Research Handbook"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod error;
pub mod leveling;
pub mod models;
pub mod render;
