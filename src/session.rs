//! Session flags
//!
//! Simple boolean preferences scoped to the process lifetime. Nothing
//! here is persisted; a restart resets every flag.

/// Per-session operator flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// Walkthrough finished or skipped
    pub onboarding_seen: bool,
    /// Operator acknowledged the responsible-use notice
    pub ethics_acknowledged: bool,
    /// Accessibility: reduce animated UI elements
    pub reduced_motion: bool,
    /// Accessibility: high-contrast palette
    pub high_contrast: bool,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acknowledge_ethics(&mut self) {
        self.ethics_acknowledged = true;
    }

    pub fn mark_onboarding_seen(&mut self) {
        self.onboarding_seen = true;
    }

    /// Toggle reduced motion; returns the new value
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        self.reduced_motion
    }

    /// Toggle high contrast; returns the new value
    pub fn toggle_high_contrast(&mut self) -> bool {
        self.high_contrast = !self.high_contrast;
        self.high_contrast
    }
}
