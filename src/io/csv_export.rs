use std::path::Path;

use thiserror::Error;

use crate::model::Roadmap;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Export every task to a semicolon-delimited CSV file.
///
/// Columns: Group ; Task ; Type ; Start Week ; Duration ; Status ;
/// Priority ; Progress ; Owner. Milestones get an empty duration and
/// progress. Returns the number of tasks written.
pub fn export_csv(roadmap: &Roadmap, path: &Path) -> Result<usize, CsvError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record([
        "Group", "Task", "Type", "Start Week", "Duration", "Status", "Priority", "Progress",
        "Owner",
    ])?;

    let mut count = 0usize;
    for group in &roadmap.groups {
        for task in &group.tasks {
            let owner = roadmap
                .find_user(task.owner)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            let kind = if task.is_milestone() { "Milestone" } else { "Task" };
            let duration = if task.is_milestone() {
                String::new()
            } else {
                task.duration().to_string()
            };
            let progress = task
                .progress()
                .map(|p| format!("{}%", p))
                .unwrap_or_default();

            wtr.write_record([
                group.name.as_str(),
                task.title.as_str(),
                kind,
                &task.start.to_string(),
                &duration,
                task.status.label(),
                task.priority.label(),
                &progress,
                &owner,
            ])?;
            count += 1;
        }
    }

    wtr.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_roadmap;

    #[test]
    fn exports_every_task_with_header() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("roadmap.csv");

        let roadmap = sample_roadmap();
        let count = export_csv(&roadmap, &path).expect("export");
        assert_eq!(count, roadmap.task_count());

        let contents = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), count + 1);
        assert!(lines[0].starts_with("Group;Task;Type"));

        // Milestone row carries no duration or progress
        let milestone = lines
            .iter()
            .find(|l| l.contains("Alpha Release"))
            .expect("milestone row");
        assert!(milestone.contains(";Milestone;8;;"));

        // The slipping task keeps its actual duration
        let slipping = lines
            .iter()
            .find(|l| l.contains("Data Validation"))
            .expect("task row");
        assert!(slipping.contains(";Task;4;3;"));
        assert!(slipping.contains("Sarah"));
    }
}
