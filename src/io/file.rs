use std::path::Path;

use thiserror::Error;

use crate::model::Roadmap;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read or write file: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a valid roadmap file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Save a roadmap to a pretty-printed JSON file.
pub fn save_roadmap(roadmap: &Roadmap, path: &Path) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(roadmap)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a roadmap from a JSON file.
pub fn load_roadmap(path: &Path) -> Result<Roadmap, FileError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_roadmap;

    #[test]
    fn save_then_load_preserves_the_roadmap() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("q4.roadmap.json");

        let roadmap = sample_roadmap();
        save_roadmap(&roadmap, &path).expect("save");
        let loaded = load_roadmap(&path).expect("load");

        assert_eq!(loaded.name, roadmap.name);
        assert_eq!(loaded.task_count(), roadmap.task_count());
        assert_eq!(loaded.users.len(), roadmap.users.len());
        // Dependency wiring survives the round trip
        let slipping = loaded
            .tasks()
            .find(|t| t.title == "Data Validation")
            .expect("task present");
        assert!(slipping.depends_on.is_some());
        assert!(slipping.slippage().is_some());
    }

    #[test]
    fn loading_garbage_is_a_format_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(matches!(load_roadmap(&path), Err(FileError::Format(_))));
    }

    #[test]
    fn loading_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");
        assert!(matches!(load_roadmap(&path), Err(FileError::Io(_))));
    }
}
