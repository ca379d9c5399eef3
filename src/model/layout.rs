//! Timeline layout engine.
//!
//! Pure functions mapping a task's scheduling fields to normalized
//! geometry (percent offsets/widths over the visible grid). Everything
//! here is referentially transparent; the chart decides what pixels to
//! draw from the records returned.

use thiserror::Error;

/// Number of visible grid columns (twelve weeks).
pub const GRID_COLUMNS: u32 = 12;

/// Fixed on-screen width of a milestone marker, in points. Deliberately
/// not derived from any duration.
pub const MILESTONE_MARKER_WIDTH: f32 = 40.0;

/// What to do with a span that runs past the visible grid. The source
/// data never settles this, so it stays a caller choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep the computed width; the chart canvas scrolls.
    Allow,
    /// Clamp the width so the bar ends at the last column.
    Clip,
}

/// Normalized geometry for a task bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Left edge as a percentage of the grid width. Column 1 maps to 0.
    pub left_percent: f32,
    /// Width as a percentage of the grid width.
    pub width_percent: f32,
    /// True when `OverflowPolicy::Clip` shortened the bar.
    pub clipped: bool,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid schedule: start {start}, duration {duration} (both must be >= 1)")]
    InvalidSchedule { start: u32, duration: u32 },
}

/// Compute bar geometry for a span of `duration` columns starting at the
/// 1-indexed `start` column.
pub fn bar_geometry(
    start: u32,
    duration: u32,
    columns: u32,
    policy: OverflowPolicy,
) -> Result<BarGeometry, LayoutError> {
    if start == 0 || duration == 0 {
        return Err(LayoutError::InvalidSchedule { start, duration });
    }

    let mut width = duration;
    let mut clipped = false;
    if policy == OverflowPolicy::Clip && start + duration > columns + 1 {
        width = (columns + 1).saturating_sub(start).max(1);
        clipped = true;
    }

    Ok(BarGeometry {
        left_percent: (start - 1) as f32 / columns as f32 * 100.0,
        width_percent: width as f32 / columns as f32 * 100.0,
        clipped,
    })
}

/// Left edge for a milestone marker; the marker itself has a fixed width
/// ([`MILESTONE_MARKER_WIDTH`]) regardless of any duration.
pub fn milestone_geometry(start: u32, columns: u32) -> Result<f32, LayoutError> {
    if start == 0 {
        return Err(LayoutError::InvalidSchedule { start, duration: 1 });
    }
    Ok((start - 1) as f32 / columns as f32 * 100.0)
}

/// Width of the planned "ghost" overlay as a fraction of the actual bar.
pub fn ghost_width_percent(planned: u32, actual: u32) -> f32 {
    planned as f32 / actual as f32 * 100.0
}

/// Whether the span runs past the last visible column.
pub fn overflows(start: u32, duration: u32, columns: u32) -> bool {
    start + duration > columns + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_over_twelve_columns() {
        let geo = bar_geometry(4, 3, GRID_COLUMNS, OverflowPolicy::Allow).unwrap();
        assert!((geo.left_percent - 25.0).abs() < 1e-5);
        assert!((geo.width_percent - 25.0).abs() < 1e-5);
        assert!(!geo.clipped);
    }

    #[test]
    fn column_one_maps_to_zero_offset() {
        let geo = bar_geometry(1, 4, GRID_COLUMNS, OverflowPolicy::Allow).unwrap();
        assert_eq!(geo.left_percent, 0.0);
    }

    #[test]
    fn width_is_monotonic_in_duration() {
        let mut previous = 0.0;
        for duration in 1..=20 {
            let geo = bar_geometry(2, duration, GRID_COLUMNS, OverflowPolicy::Allow).unwrap();
            assert!(geo.width_percent > previous);
            previous = geo.width_percent;
        }
    }

    #[test]
    fn zero_start_or_duration_is_invalid() {
        assert_eq!(
            bar_geometry(0, 3, GRID_COLUMNS, OverflowPolicy::Allow),
            Err(LayoutError::InvalidSchedule { start: 0, duration: 3 })
        );
        assert_eq!(
            bar_geometry(3, 0, GRID_COLUMNS, OverflowPolicy::Allow),
            Err(LayoutError::InvalidSchedule { start: 3, duration: 0 })
        );
        assert!(milestone_geometry(0, GRID_COLUMNS).is_err());
    }

    #[test]
    fn clip_policy_ends_bar_at_last_column() {
        // Start 10, duration 5 would run to column 14 of 12.
        let geo = bar_geometry(10, 5, GRID_COLUMNS, OverflowPolicy::Clip).unwrap();
        assert!(geo.clipped);
        assert!((geo.left_percent + geo.width_percent - 100.0).abs() < 1e-4);

        let allowed = bar_geometry(10, 5, GRID_COLUMNS, OverflowPolicy::Allow).unwrap();
        assert!(!allowed.clipped);
        assert!(allowed.left_percent + allowed.width_percent > 100.0);
    }

    #[test]
    fn span_ending_exactly_at_grid_edge_is_not_clipped() {
        let geo = bar_geometry(9, 4, GRID_COLUMNS, OverflowPolicy::Clip).unwrap();
        assert!(!geo.clipped);
        assert!(!overflows(9, 4, GRID_COLUMNS));
        assert!(overflows(9, 5, GRID_COLUMNS));
    }

    #[test]
    fn milestone_offset_ignores_everything_but_start() {
        let left = milestone_geometry(8, GRID_COLUMNS).unwrap();
        assert!((left - 7.0 / 12.0 * 100.0).abs() < 1e-4);
        // Marker width is a constant, not a function of any span.
        assert_eq!(MILESTONE_MARKER_WIDTH, 40.0);
    }

    #[test]
    fn ghost_width_stays_under_full_bar_when_slipping() {
        for (planned, actual) in [(1u32, 2u32), (2, 3), (5, 6), (1, 10)] {
            let ghost = ghost_width_percent(planned, actual);
            assert!(ghost > 0.0 && ghost < 100.0);
        }
    }
}
