use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;
use super::user::User;

/// A named container of tasks, rendered as one block of timeline rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub id: Uuid,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl ProjectGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

/// A roadmap: ordered project groups plus the team, with file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub name: String,
    pub groups: Vec<ProjectGroup>,
    pub users: Vec<User>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Roadmap {
    fn default() -> Self {
        Self {
            name: "Untitled Roadmap".to_string(),
            groups: Vec::new(),
            users: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Roadmap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|g| g.tasks.len()).sum()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.groups.iter().flat_map(|g| g.tasks.iter())
    }

    pub fn find_task(&self, id: Uuid) -> Option<&Task> {
        self.tasks().find(|t| t.id == id)
    }

    pub fn find_user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
