//! Rendering surface port definition.

use crate::domain::screen::ScreenContent;

/// Capability set the navigation core needs from a UI.
///
/// Optional elements (progress bar, navigation buttons, input field) may be
/// missing on a given surface; the corresponding calls are then no-ops.
pub trait RenderSurface {
    /// Number of screens in the registry.
    fn screen_count(&self) -> usize;

    /// Checks whether a screen exists at `index`.
    fn contains(&self, index: usize) -> bool;

    /// Makes a screen visible.
    fn show(&mut self, index: usize);

    /// Hides a screen.
    fn hide(&mut self, index: usize);

    /// Hides every screen.
    fn hide_all(&mut self) {
        for index in 0..self.screen_count() {
            self.hide(index);
        }
    }

    /// Returns the current body of a screen.
    fn content(&self, index: usize) -> Option<&ScreenContent>;

    /// Replaces the body of a screen.
    fn set_content(&mut self, index: usize, content: ScreenContent);

    /// Hides or shows the aside panel and navigation footer.
    fn set_chrome_hidden(&mut self, hidden: bool);

    /// Renders progress as a percentage in `(0, 100]`.
    fn set_progress(&mut self, percent: f64);

    /// Enables or disables the backward/forward affordances.
    fn set_navigation_enabled(&mut self, backward: bool, forward: bool);

    /// Moves keyboard focus to the response field.
    fn focus_input(&mut self);

    /// Empties the response field.
    fn clear_input(&mut self);

    /// Shows the confirmation for a saved response.
    fn set_confirmation(&mut self, message: &str);
}
