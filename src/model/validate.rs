//! Roadmap validation.
//!
//! All findings are recoverable: the chart degrades visually (skips a
//! bar, lets a span run off-grid) and the user sees a count in the
//! status bar, but nothing here ever aborts rendering.

use thiserror::Error;
use uuid::Uuid;

use super::group::Roadmap;
use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Cosmetic; the task still renders.
    Warning,
    /// The task cannot be laid out and is skipped.
    Error,
}

/// One validation finding, tied to the offending task.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("task '{title}' has an invalid schedule (start {start}, duration {duration})")]
    InvalidSchedule {
        task: Uuid,
        title: String,
        start: u32,
        duration: u32,
    },

    #[error("task '{title}' depends on {dependency} which is not in this or an earlier group")]
    DanglingDependency {
        task: Uuid,
        title: String,
        dependency: Uuid,
    },

    #[error("task '{title}' extends past column {columns} (ends at {end})")]
    Overflow {
        task: Uuid,
        title: String,
        end: u32,
        columns: u32,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::InvalidSchedule { .. } => Severity::Error,
            ValidationIssue::DanglingDependency { .. } => Severity::Warning,
            ValidationIssue::Overflow { .. } => Severity::Warning,
        }
    }
}

/// Walk the roadmap in render order and collect every finding.
///
/// Dependencies must resolve to a task already seen — same group or an
/// earlier one. Cycle and temporal consistency (a dependency starting
/// after its dependent ends) are known gaps and are not checked.
pub fn check_roadmap(roadmap: &Roadmap, columns: u32) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: Vec<Uuid> = Vec::new();

    for group in &roadmap.groups {
        for task in &group.tasks {
            let duration = if task.is_milestone() { 1 } else { task.duration() };

            if task.start == 0 || duration == 0 {
                issues.push(ValidationIssue::InvalidSchedule {
                    task: task.id,
                    title: task.title.clone(),
                    start: task.start,
                    duration: task.duration(),
                });
            } else if !task.is_milestone() && layout::overflows(task.start, duration, columns) {
                issues.push(ValidationIssue::Overflow {
                    task: task.id,
                    title: task.title.clone(),
                    end: task.start + duration - 1,
                    columns,
                });
            }

            if let Some(dep) = task.depends_on {
                if !seen.contains(&dep) {
                    issues.push(ValidationIssue::DanglingDependency {
                        task: task.id,
                        title: task.title.clone(),
                        dependency: dep,
                    });
                }
            }

            seen.push(task.id);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectGroup, Task};

    fn roadmap_with(tasks: Vec<Task>) -> Roadmap {
        let mut group = ProjectGroup::new("Core");
        group.tasks = tasks;
        let mut roadmap = Roadmap::new("Test");
        roadmap.groups.push(group);
        roadmap
    }

    #[test]
    fn clean_roadmap_has_no_issues() {
        let first = Task::new("Model Training", 1, 4);
        let mut second = Task::new("Data Validation", 4, 3);
        second.depends_on = Some(first.id);
        let issues = check_roadmap(&roadmap_with(vec![first, second]), 12);
        assert!(issues.is_empty());
    }

    #[test]
    fn zero_duration_is_a_fatal_schedule_issue() {
        let issues = check_roadmap(&roadmap_with(vec![Task::new("Broken", 2, 0)]), 12);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Error);
        assert!(matches!(issues[0], ValidationIssue::InvalidSchedule { .. }));
    }

    #[test]
    fn dependency_must_appear_in_same_or_earlier_group() {
        let target = Task::new("Later", 8, 2);
        let mut early = Task::new("Early", 1, 2);
        early.depends_on = Some(target.id);

        // Forward reference: dependency lives later in render order.
        let mut first = ProjectGroup::new("First");
        first.tasks = vec![early];
        let mut second = ProjectGroup::new("Second");
        second.tasks = vec![target];
        let mut roadmap = Roadmap::new("Test");
        roadmap.groups = vec![first, second];

        let issues = check_roadmap(&roadmap, 12);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0],
            ValidationIssue::DanglingDependency { .. }
        ));
        assert_eq!(issues[0].severity(), Severity::Warning);
    }

    #[test]
    fn overflow_is_a_warning_not_an_error() {
        let issues = check_roadmap(&roadmap_with(vec![Task::new("Long Tail", 10, 5)]), 12);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Warning);
        assert!(matches!(
            issues[0],
            ValidationIssue::Overflow { end: 14, columns: 12, .. }
        ));
    }

    #[test]
    fn milestone_at_last_column_is_fine() {
        let issues = check_roadmap(&roadmap_with(vec![Task::new_milestone("Launch", 12)]), 12);
        assert!(issues.is_empty());
    }
}
