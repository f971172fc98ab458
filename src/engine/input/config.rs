// Capture and correlation settings

use super::queue::DEFAULT_CAPACITY;

/// Locale forced on the window's text-input context while captured
pub const DEFAULT_TEXT_LOCALE: &str = "en-US";

/// Pointer deltas are multiplied by `1 << DEFAULT_MOTION_SHIFT`
pub const DEFAULT_MOTION_SHIFT: u32 = 2;

/// Settings shared by the capture controller and the correlator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Locale selected for text entry on every reposition
    pub text_locale: String,

    /// Left shift applied to raw pointer deltas
    pub motion_shift: u32,

    /// Number of canonical events buffered before the oldest is dropped
    pub queue_capacity: usize,

    /// Warp the pointer back to the window center after it drifts
    pub recenter_on_drift: bool,
}

impl CaptureConfig {
    pub fn new() -> Self {
        Self {
            text_locale: DEFAULT_TEXT_LOCALE.to_string(),
            motion_shift: DEFAULT_MOTION_SHIFT,
            queue_capacity: DEFAULT_CAPACITY,
            recenter_on_drift: true,
        }
    }

    pub fn with_text_locale(mut self, locale: impl Into<String>) -> Self {
        self.text_locale = locale.into();
        self
    }

    pub fn with_motion_shift(mut self, shift: u32) -> Self {
        self.motion_shift = shift;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_recenter_on_drift(mut self, enabled: bool) -> Self {
        self.recenter_on_drift = enabled;
        self
    }

    /// Scale a raw pointer delta component
    pub fn scale(&self, delta: i32) -> i32 {
        delta.wrapping_shl(self.motion_shift)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::new()
    }
}
