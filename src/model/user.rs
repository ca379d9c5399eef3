use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capacity tier derived from a user's current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadLevel {
    Normal,
    Elevated,
    /// Above capacity; the HUD draws an alert badge for these users.
    Overloaded,
}

/// A team member who can own tasks and receive hand-offs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Avatar reference (URL or similar); the HUD falls back to initials.
    pub avatar: String,
    /// Capacity utilization, 0–100.
    pub load: u8,
}

impl User {
    pub fn new(name: impl Into<String>, load: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: String::new(),
            load,
        }
    }

    /// Classify `load` into a workload tier.
    ///
    /// Boundaries are inclusive on the lower tier: 70 is still normal,
    /// 90 is still elevated, 91 is overloaded.
    pub fn workload_level(&self) -> WorkloadLevel {
        workload_level(self.load)
    }

    /// First letter of the name, for avatar fallback rendering.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

/// Classify a raw load percentage into a workload tier.
pub fn workload_level(load: u8) -> WorkloadLevel {
    if load > 90 {
        WorkloadLevel::Overloaded
    } else if load > 70 {
        WorkloadLevel::Elevated
    } else {
        WorkloadLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_boundaries() {
        assert_eq!(workload_level(0), WorkloadLevel::Normal);
        assert_eq!(workload_level(70), WorkloadLevel::Normal);
        assert_eq!(workload_level(71), WorkloadLevel::Elevated);
        assert_eq!(workload_level(90), WorkloadLevel::Elevated);
        assert_eq!(workload_level(91), WorkloadLevel::Overloaded);
        assert_eq!(workload_level(100), WorkloadLevel::Overloaded);
    }

    #[test]
    fn initial_falls_back_to_empty() {
        let mut user = User::new("Sarah", 95);
        assert_eq!(user.initial(), "S");
        user.name.clear();
        assert_eq!(user.initial(), "");
    }
}
