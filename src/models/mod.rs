//! Leveling domain models.
//!
//! Core data types for describing a plan: units of work, the capacity that
//! performs them, and the candidate pools that tie the two together. The
//! types are domain-agnostic within planning, equally at home in software
//! delivery, construction, or staffing problems.
//!
//! # Domain Mappings
//!
//! | leveler | Software | Construction | Staffing |
//! |---------------|----------------|---------------|----------------|
//! | Task | Ticket/Story | Work Package | Shift Duty |
//! | Resource | Engineer | Crew/Machine | Employee |
//! | ResourceGroup | Team | Trade Pool | Qualified Pool |

mod group;
mod resource;
mod task;

pub use group::ResourceGroup;
pub use resource::Resource;
pub use task::{Task, TaskId, TaskState};
