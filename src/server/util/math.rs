//! Progress and rating arithmetic.

/// Ratio of completed to total lessons.
///
/// Returns 0.0 when the course has no lessons. The ratio is passed through as is,
/// so more completions than lessons yields a value above 1.0.
///
/// # Arguments
/// - `completed` - Number of lessons completed by the enrollment
/// - `total` - Number of lessons in the course
///
/// # Returns
/// - `f64` - `completed / total`, or 0.0 when `total` is zero
pub fn progress_ratio(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    completed as f64 / total as f64
}

/// Whether an enrollment counts as finished for its course.
///
/// A course without lessons can never be finished.
pub fn is_finished(completed: u64, total: u64) -> bool {
    total > 0 && completed >= total
}

/// Percentage of finished enrollments, rounded to two decimals.
///
/// An enrollment is finished once its progress reaches 1.0. Since `progress_ratio`
/// is 0.0 for a course without lessons, such enrollments never count as finished.
///
/// # Arguments
/// - `progress` - Progress ratio of each enrollment of a course
///
/// # Returns
/// - `f64` - `100 * finished / enrollments`, or 0.0 when there are no enrollments
pub fn completion_rate(progress: &[f64]) -> f64 {
    if progress.is_empty() {
        return 0.0;
    }

    let finished = progress.iter().filter(|&&ratio| ratio >= 1.0).count();

    round_two_decimals(100.0 * finished as f64 / progress.len() as f64)
}

/// Rounds half away from zero to two decimal places.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
