//! Navigation state for the current screen.

/// Holds the index of the screen currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    current_index: usize,
}

impl NavigationState {
    /// Starts on the first screen.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_index: 0 }
    }

    /// Index of the screen on display.
    #[must_use]
    pub const fn current_index(self) -> usize {
        self.current_index
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }
}

/// Clamps a requested target into `[0, screen_count - 1]`.
///
/// Returns `None` for an empty screen set.
#[must_use]
pub fn clamp_index(target: i64, screen_count: usize) -> Option<usize> {
    let last = screen_count.checked_sub(1)?;
    let last = i64::try_from(last).unwrap_or(i64::MAX);
    usize::try_from(target.clamp(0, last)).ok()
}

/// Progress through the deck as a fraction in `(0, 1]`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn progress_fraction(index: usize, screen_count: usize) -> f64 {
    (index + 1) as f64 / screen_count.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(-5, 11, Some(0) ; "negative_clamps_to_first")]
    #[test_case(999, 11, Some(10) ; "overflow_clamps_to_last")]
    #[test_case(4, 11, Some(4) ; "in_range_is_kept")]
    #[test_case(0, 1, Some(0) ; "single_screen")]
    #[test_case(3, 0, None ; "empty_deck")]
    #[test_case(i64::MIN, 11, Some(0) ; "min_value")]
    fn test_clamp_index(target: i64, count: usize, expected: Option<usize>) {
        assert_eq!(clamp_index(target, count), expected);
    }

    #[test]
    fn test_progress_fraction() {
        assert!((progress_fraction(0, 4) - 0.25).abs() < f64::EPSILON);
        assert!((progress_fraction(10, 11) - 1.0).abs() < f64::EPSILON);
        assert!((progress_fraction(0, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navigation_starts_at_zero() {
        assert_eq!(NavigationState::new().current_index(), 0);
    }
}
