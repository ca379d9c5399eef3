use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery health of a task. The enum is closed; style lookups match
/// exhaustively with no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    OnTrack,
    AtRisk,
    Blocked,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::OnTrack => "On Track",
            TaskStatus::AtRisk => "At Risk",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// What kind of entry a task is. A milestone has no span of its own, so
/// duration/progress simply don't exist for it rather than being ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TaskKind {
    Bar {
        /// Span in grid columns, at least 1.
        duration: u32,
        /// Completion 0–100.
        progress: u8,
        /// Originally planned span; present only when a plan was recorded.
        planned_duration: Option<u32>,
    },
    Milestone,
}

/// Planned-vs-actual overrun, derived from a bar task's fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlippageInfo {
    pub planned_duration: u32,
    /// Width of the planned "ghost" overlay as a fraction of the actual
    /// bar, in percent. Always below 100 when slippage exists.
    pub ghost_width_percent: f32,
}

/// A single schedulable entry on the roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// 1-indexed grid column the task starts in.
    pub start: u32,
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub priority: Priority,
    pub owner: Uuid,
    /// Next owner, when the task is handed off partway through.
    pub hand_off_to: Option<Uuid>,
    /// Task this one depends on. Rendering is presence-based only; no
    /// cycle or ordering checks happen here (see validate).
    pub depends_on: Option<Uuid>,
}

impl Task {
    /// Create a new bar task with sensible defaults.
    pub fn new(title: impl Into<String>, start: u32, duration: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            kind: TaskKind::Bar {
                duration,
                progress: 0,
                planned_duration: None,
            },
            status: TaskStatus::OnTrack,
            priority: Priority::Medium,
            owner: Uuid::nil(),
            hand_off_to: None,
            depends_on: None,
        }
    }

    /// Create a new milestone at the given column.
    pub fn new_milestone(title: impl Into<String>, start: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            kind: TaskKind::Milestone,
            status: TaskStatus::OnTrack,
            priority: Priority::Medium,
            owner: Uuid::nil(),
            hand_off_to: None,
            depends_on: None,
        }
    }

    pub fn is_milestone(&self) -> bool {
        matches!(self.kind, TaskKind::Milestone)
    }

    /// Span in columns; milestones occupy a single point.
    pub fn duration(&self) -> u32 {
        match self.kind {
            TaskKind::Bar { duration, .. } => duration,
            TaskKind::Milestone => 0,
        }
    }

    /// Completion 0–100; milestones report none.
    pub fn progress(&self) -> Option<u8> {
        match self.kind {
            TaskKind::Bar { progress, .. } => Some(progress),
            TaskKind::Milestone => None,
        }
    }

    /// Slippage exists iff a plan was recorded and the actual span ran
    /// past it. `planned >= duration` means the task is on or under plan.
    pub fn slippage(&self) -> Option<SlippageInfo> {
        match self.kind {
            TaskKind::Bar {
                duration,
                planned_duration: Some(planned),
                ..
            } if duration > planned => Some(SlippageInfo {
                planned_duration: planned,
                ghost_width_percent: super::layout::ghost_width_percent(planned, duration),
            }),
            _ => None,
        }
    }

    pub fn has_hand_off(&self) -> bool {
        self.hand_off_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(duration: u32, planned: Option<u32>) -> Task {
        let mut task = Task::new("Data Validation", 4, duration);
        if let TaskKind::Bar {
            planned_duration, ..
        } = &mut task.kind
        {
            *planned_duration = planned;
        }
        task
    }

    #[test]
    fn no_slippage_without_plan() {
        assert_eq!(bar(3, None).slippage(), None);
    }

    #[test]
    fn no_slippage_when_on_or_under_plan() {
        assert_eq!(bar(3, Some(3)).slippage(), None);
        assert_eq!(bar(3, Some(4)).slippage(), None);
    }

    #[test]
    fn slippage_when_actual_exceeds_plan() {
        let info = bar(3, Some(2)).slippage().expect("slipping");
        assert_eq!(info.planned_duration, 2);
        assert!((info.ghost_width_percent - 2.0 / 3.0 * 100.0).abs() < 1e-4);
        assert!(info.ghost_width_percent < 100.0);
    }

    #[test]
    fn milestones_never_slip() {
        let milestone = Task::new_milestone("Alpha Release", 8);
        assert_eq!(milestone.slippage(), None);
        assert_eq!(milestone.duration(), 0);
        assert!(milestone.is_milestone());
    }

    #[test]
    fn hand_off_is_presence_based() {
        let mut task = bar(4, None);
        assert!(!task.has_hand_off());
        task.hand_off_to = Some(Uuid::new_v4());
        assert!(task.has_hand_off());
    }
}
