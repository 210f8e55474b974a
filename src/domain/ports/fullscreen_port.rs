//! Fullscreen port definition.

use crate::domain::errors::FullscreenError;

/// Port for the host's fullscreen (presentation) mode.
pub trait FullscreenPort {
    /// Asks the host to enter fullscreen.
    ///
    /// # Errors
    /// Returns `FullscreenError` if the host rejects the request.
    fn request(&mut self) -> Result<(), FullscreenError>;

    /// Leaves fullscreen. Returns whether the state changed.
    ///
    /// # Errors
    /// Returns `FullscreenError` if the host rejects the request.
    fn exit(&mut self) -> Result<bool, FullscreenError>;

    /// Returns whether fullscreen is active.
    fn is_active(&self) -> bool;
}

#[cfg(test)]
#[allow(dead_code, missing_docs)]
pub mod mock {
    use super::*;

    #[derive(Debug, Default)]
    pub struct MockFullscreen {
        pub active: bool,
        pub requests: usize,
    }

    impl FullscreenPort for MockFullscreen {
        fn request(&mut self) -> Result<(), FullscreenError> {
            self.requests += 1;
            self.active = true;
            Ok(())
        }

        fn exit(&mut self) -> Result<bool, FullscreenError> {
            let was_active = self.active;
            self.active = false;
            Ok(was_active)
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }
}
