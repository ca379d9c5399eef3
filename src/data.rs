//! Data access seam.
//!
//! The layout engine and chart take a [`Roadmap`] as a parameter and
//! never reach into ambient state; this trait is the single place a
//! backend would plug in. For now the only implementation is the
//! built-in sample.

use crate::model::{Priority, ProjectGroup, Roadmap, Task, TaskKind, TaskStatus, User};

pub trait DataSource {
    fn load_roadmap(&self) -> Roadmap;
}

/// The built-in demonstration roadmap.
pub struct SampleData;

impl DataSource for SampleData {
    fn load_roadmap(&self) -> Roadmap {
        sample_roadmap()
    }
}

/// Build the sample roadmap: two project groups over a twelve-week grid,
/// including one slipping task, one hand-off, and one blocked milestone.
pub fn sample_roadmap() -> Roadmap {
    let mut matthew = User::new("Matthew", 85);
    matthew.avatar = "https://i.pravatar.cc/150?u=1".into();
    let mut sarah = User::new("Sarah", 95); // Overloaded
    sarah.avatar = "https://i.pravatar.cc/150?u=2".into();
    let mut david = User::new("David", 40);
    david.avatar = "https://i.pravatar.cc/150?u=3".into();
    let mut elena = User::new("Elena", 60);
    elena.avatar = "https://i.pravatar.cc/150?u=4".into();

    let mut training = Task::new("Model Training Phase 1", 1, 4);
    training.status = TaskStatus::Completed;
    training.priority = Priority::High;
    training.owner = matthew.id;
    if let TaskKind::Bar { progress, .. } = &mut training.kind {
        *progress = 100;
    }

    let mut validation = Task::new("Data Validation", 4, 3);
    validation.status = TaskStatus::OnTrack;
    validation.priority = Priority::High;
    validation.owner = sarah.id;
    validation.depends_on = Some(training.id);
    if let TaskKind::Bar {
        progress,
        planned_duration,
        ..
    } = &mut validation.kind
    {
        *progress = 60;
        // Slipping: planned two weeks, running three.
        *planned_duration = Some(2);
    }

    let mut gateway = Task::new("API Gateway Integration", 6, 4);
    gateway.status = TaskStatus::AtRisk;
    gateway.priority = Priority::Medium;
    gateway.owner = david.id;
    gateway.depends_on = Some(validation.id);
    gateway.hand_off_to = Some(elena.id);
    if let TaskKind::Bar { progress, .. } = &mut gateway.kind {
        *progress = 20;
    }

    let mut research = Task::new("UX Research", 2, 3);
    research.status = TaskStatus::OnTrack;
    research.priority = Priority::Low;
    research.owner = elena.id;
    if let TaskKind::Bar { progress, .. } = &mut research.kind {
        *progress = 90;
    }

    let mut alpha = Task::new_milestone("Alpha Release", 8);
    alpha.status = TaskStatus::Blocked;
    alpha.priority = Priority::High;
    alpha.owner = sarah.id;

    let mut core = ProjectGroup::new("Forge.AI Core");
    core.tasks = vec![training, validation, gateway];
    let mut dashboard = ProjectGroup::new("Web Dashboard V2");
    dashboard.tasks = vec![research, alpha];

    let mut roadmap = Roadmap::new("Q4 Deliverables");
    roadmap.groups = vec![core, dashboard];
    roadmap.users = vec![matthew, sarah, david, elena];
    roadmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::validate::check_roadmap;
    use crate::model::{layout, WorkloadLevel};

    #[test]
    fn sample_roadmap_is_valid() {
        let roadmap = sample_roadmap();
        assert_eq!(roadmap.groups.len(), 2);
        assert_eq!(roadmap.task_count(), 5);
        assert!(check_roadmap(&roadmap, layout::GRID_COLUMNS).is_empty());
    }

    #[test]
    fn sample_has_one_overloaded_user() {
        let roadmap = sample_roadmap();
        let overloaded: Vec<_> = roadmap
            .users
            .iter()
            .filter(|u| u.workload_level() == WorkloadLevel::Overloaded)
            .collect();
        assert_eq!(overloaded.len(), 1);
        assert_eq!(overloaded[0].name, "Sarah");
    }

    #[test]
    fn sample_has_exactly_one_slipping_task() {
        let roadmap = sample_roadmap();
        let slipping: Vec<_> = roadmap.tasks().filter(|t| t.slippage().is_some()).collect();
        assert_eq!(slipping.len(), 1);
        assert_eq!(slipping[0].title, "Data Validation");
    }
}
