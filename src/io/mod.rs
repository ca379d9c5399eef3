pub mod csv_export;
pub mod file;

pub use file::{load_roadmap, save_roadmap};
