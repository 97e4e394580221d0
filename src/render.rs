//! Plain-text and Graphviz views of a plan.
//!
//! Everything here reads the outputs of a leveling pass (start offsets,
//! assignment lists, weighting counters) and renders them for humans.
//! Nothing in this module feeds back into leveling.
//!
//! # Reference
//! Gansner & North (2000), "An open graph visualization system and its
//! applications to software engineering" (the dot language)

use crate::leveling::{ResourceManager, TaskManager};
use crate::models::Resource;

/// Width of the task-name column in the text charts.
const NAME_COLUMN: usize = 20;

/// Renders the prerequisite graph in Graphviz dot form.
///
/// Milestone tasks are styled as filled yellow diamonds. Edges point from
/// prerequisite to dependent, one line per edge, in task insertion order.
pub fn dot(tasks: &TaskManager) -> String {
    let mut out = String::from("digraph Dependencies {\n");
    for (_, task) in tasks.iter() {
        if task.is_milestone() {
            out.push_str(&format!(
                "  {} [shape=diamond, fillcolor=yellow, style=\"rounded,filled\"];\n",
                task.name()
            ));
        }
    }
    for (_, task) in tasks.iter() {
        for &prereq in task.prereqs() {
            if let Some(p) = tasks.get(prereq) {
                out.push_str(&format!("  {} -> {};\n", p.name(), task.name()));
            }
        }
    }
    out.push_str("}\n");
    out
}

/// Renders the leveled plan as one bar line per task.
///
/// Each line is the task name padded to a fixed column, `start` spaces of
/// lead-in, one dash per tick of duration, and then the attached resource
/// names (or the candidate pool, for tasks that have not been assigned).
/// Unresolved tasks draw their bar at tick 0.
pub fn chart(tasks: &TaskManager) -> String {
    let mut out = String::new();
    for (_, task) in tasks.iter() {
        out.push_str(&bar_line(
            task.name(),
            NAME_COLUMN,
            task.start().unwrap_or(0),
            task.duration(),
        ));
        let attached: Vec<&str> = task.assigned_resources().collect();
        let label = if attached.is_empty() {
            match task.group() {
                Some(group) => group.iter().collect::<Vec<_>>().join(", "),
                None => String::new(),
            }
        } else {
            attached.join(", ")
        };
        if !label.is_empty() {
            out.push(' ');
            out.push_str(&label);
        }
        out.push('\n');
    }
    out
}

/// Renders one resource's timeline: a header line, then the bar of every
/// task committed to it, in commit order.
///
/// Tasks the given manager does not know (for instance, commitments from
/// another plan sharing the registry) are skipped.
pub fn resource_chart(tasks: &TaskManager, resource: &Resource) -> String {
    let mut out = format!("{}:\n", resource.name());
    for name in resource.assigned_tasks() {
        let task = match tasks.find(name).and_then(|id| tasks.get(id)) {
            Some(task) => task,
            None => continue,
        };
        out.push_str("  ");
        out.push_str(&bar_line(
            task.name(),
            NAME_COLUMN - 2,
            task.start().unwrap_or(0),
            task.duration(),
        ));
        out.push('\n');
    }
    out
}

/// Renders one line per registered resource: its weighting counters, the
/// combined load score, and the tick at which it next becomes free.
pub fn resource_summary(resources: &ResourceManager) -> String {
    let mut out = String::new();
    for resource in resources.iter() {
        out.push_str(&format!(
            "{}: available {}, assigned {}, score {}, free at {}\n",
            resource.name(),
            resource.available_count(),
            resource.assigned_count(),
            resource.score(),
            resource.next_available()
        ));
    }
    out
}

/// Name column, `start` spaces, `duration` dashes. No trailing newline.
fn bar_line(name: &str, column: usize, start: u64, duration: u64) -> String {
    format!(
        "{:<column$}{}{}",
        name,
        " ".repeat(start as usize),
        "-".repeat(duration as usize)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leveling::{ResourceManager, TaskManager};
    use crate::models::{ResourceGroup, Task};

    fn make_chain() -> (TaskManager, ResourceManager) {
        let mut rm = ResourceManager::new();
        rm.create("r");
        let mut tm = TaskManager::new();
        let pool = ResourceGroup::new().with_member("r");
        let a = tm.add(Task::new("a").with_duration(1).with_group(pool.clone()));
        let b = tm.add(Task::new("b").with_duration(1).with_group(pool.clone()));
        let c = tm.add(Task::new("c").with_duration(1).with_group(pool));
        tm.add_prereq(b, a).unwrap();
        tm.add_prereq(c, b).unwrap();
        tm.weight(&mut rm).unwrap();
        tm.level(&mut rm).unwrap();
        (tm, rm)
    }

    #[test]
    fn test_dot_draws_edges_prereq_first() {
        let mut tm = TaskManager::new();
        let a = tm.add(Task::new("design"));
        let b = tm.add(Task::new("build"));
        tm.add_prereq(b, a).unwrap();

        let out = dot(&tm);
        assert_eq!(out, "digraph Dependencies {\n  design -> build;\n}\n");
    }

    #[test]
    fn test_dot_styles_milestones_as_diamonds() {
        let mut tm = TaskManager::new();
        let a = tm.add(Task::new("work"));
        let b = tm.add(Task::new("ship").milestone());
        tm.add_prereq(b, a).unwrap();

        let out = dot(&tm);
        assert_eq!(
            out,
            "digraph Dependencies {\n\
             \x20 ship [shape=diamond, fillcolor=yellow, style=\"rounded,filled\"];\n\
             \x20 work -> ship;\n\
             }\n"
        );
    }

    #[test]
    fn test_chart_offsets_bars_by_start() {
        let (tm, _) = make_chain();

        let out = chart(&tm);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);

        // Each bar starts one tick later than the previous one.
        assert_eq!(lines[0].find('-'), Some(20));
        assert_eq!(lines[1].find('-'), Some(21));
        assert_eq!(lines[2].find('-'), Some(22));
        assert!(lines[0].starts_with("a "));
        assert!(lines[0].ends_with("- r"));
        assert!(lines[2].ends_with("- r"));
    }

    #[test]
    fn test_chart_falls_back_to_pool_for_unassigned_tasks() {
        let mut tm = TaskManager::new();
        let pool = ResourceGroup::new().with_member("x").with_member("y");
        tm.add(Task::new("open").with_duration(2).with_group(pool));
        tm.add(Task::new("loose").with_duration(2));

        let out = chart(&tm);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with("-- x, y"));
        // No pool and no assignment renders the bare bar.
        assert!(lines[1].ends_with("--"));
    }

    #[test]
    fn test_resource_chart_lists_commits_in_order() {
        let (tm, rm) = make_chain();
        let r = rm.lookup("r").unwrap();

        let out = resource_chart(&tm, r);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "r:");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("  a"));
        assert!(lines[2].starts_with("  b"));
        assert!(lines[3].starts_with("  c"));
        // Indentation keeps the bars aligned with the task chart.
        assert_eq!(lines[1].find('-'), Some(20));
        assert_eq!(lines[2].find('-'), Some(21));
    }

    #[test]
    fn test_resource_chart_skips_foreign_commitments() {
        let (_, mut rm) = make_chain();
        let mut foreign = Task::new("elsewhere").with_duration(2);
        rm.lookup_mut("r").unwrap().assign(&mut foreign);

        let other_plan = TaskManager::new();
        let out = resource_chart(&other_plan, rm.lookup("r").unwrap());
        assert_eq!(out, "r:\n");
    }

    #[test]
    fn test_resource_summary_shows_counters_and_score() {
        let (_, rm) = make_chain();

        let out = resource_summary(&rm);
        assert_eq!(out, "r: available 3, assigned 3, score 9, free at 3\n");
    }
}
