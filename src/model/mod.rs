pub mod group;
pub mod layout;
pub mod task;
pub mod user;
pub mod validate;

pub use group::{ProjectGroup, Roadmap};
pub use task::{Priority, SlippageInfo, Task, TaskKind, TaskStatus};
pub use user::{User, WorkloadLevel};
