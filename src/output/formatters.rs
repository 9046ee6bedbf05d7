//! Formatting utilities for terminal output

use chrono::TimeDelta;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration as `"5h 03m 12s"`
#[must_use]
pub fn format_time_left(delta: TimeDelta) -> String {
    let secs = delta.num_seconds().max(0);
    format!("{}h {:02}m {:02}s", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn time_left_formatting() {
        assert_eq!(format_time_left(TimeDelta::seconds(5 * 3600 + 3 * 60 + 12)), "5h 03m 12s");
        assert_eq!(format_time_left(TimeDelta::seconds(-5)), "0h 00m 00s");
    }
}
