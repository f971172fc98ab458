// Pointer capture for relative mouse look
//
// Keeps the pointer pinned to the window center so every motion notification
// is a delta from a known origin, and hides the cursor while doing so.

use super::config::CaptureConfig;
use glam::IVec2;

/// Errors raised by the window/cursor host
///
/// None of these are fatal: the controller logs them and degrades.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Cursor warp unavailable: {0}")]
    WarpUnavailable(String),

    #[error("Cursor warp failed: {0}")]
    WarpFailed(String),

    #[error("Window origin unavailable: {0}")]
    OriginUnavailable(String),
}

/// Window queries and cursor controls provided by the toolkit
pub trait WindowHost {
    /// Screen-space position of the window's content area
    fn screen_origin(&self) -> Result<IVec2, CaptureError>;

    /// Content area size in pixels
    fn size(&self) -> IVec2;

    fn set_cursor_visible(&mut self, visible: bool);

    /// Force the text-input context to a fixed locale
    fn select_text_locale(&mut self, locale: &str);

    fn request_focus(&mut self);
}

/// Capability to move the system cursor to a screen position
pub trait CursorWarp {
    fn warp_to(&mut self, screen_point: IVec2) -> Result<(), CaptureError>;
}

/// Geometry and cursor state tracked while capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureState {
    /// Screen position of the window content origin
    pub screen_offset: IVec2,

    /// Half the content size; the pointer is held here
    pub half_extent: IVec2,

    /// Most recent unscaled pointer delta, Y up
    pub last_delta: IVec2,

    pub cursor_hidden: bool,
}

impl CaptureState {
    /// Screen position the cursor is warped to
    pub fn center(&self) -> IVec2 {
        self.screen_offset + self.half_extent
    }
}

/// Owns the capture state and drives the host's cursor
pub struct CaptureController<H: WindowHost> {
    host: H,

    /// `None` when warping is unsupported; confinement is then skipped
    warp: Option<Box<dyn CursorWarp>>,

    state: CaptureState,

    text_locale: String,
}

impl<H: WindowHost> CaptureController<H> {
    /// Create a controller
    ///
    /// A warp capability that failed to construct is logged and the
    /// controller runs without pointer confinement.
    pub fn new(
        host: H,
        warp: Result<Box<dyn CursorWarp>, CaptureError>,
        config: &CaptureConfig,
    ) -> Self {
        let warp = match warp {
            Ok(warp) => Some(warp),
            Err(e) => {
                log::error!("{}; mouse input will not be confined to the window", e);
                None
            }
        };

        Self {
            host,
            warp,
            state: CaptureState::default(),
            text_locale: config.text_locale.clone(),
        }
    }

    /// Recompute the offset from the window geometry and pin the cursor there
    pub fn reposition(&mut self) {
        match self.host.screen_origin() {
            Ok(origin) => self.state.screen_offset = origin,
            Err(e) => log::debug!("Keeping previous screen offset: {}", e),
        }
        self.state.half_extent = self.host.size() / 2;

        self.warp_to_center();

        self.host.select_text_locale(&self.text_locale);
        self.host.set_cursor_visible(false);
        self.state.cursor_hidden = true;

        log::debug!(
            "Capture offset moved to {:?}, half extent {:?}",
            self.state.screen_offset,
            self.state.half_extent
        );
    }

    /// Bring the pointer back to the window center
    pub fn recenter(&mut self) {
        self.warp_to_center();
    }

    /// Restore the normal cursor
    pub fn show_cursor(&mut self) {
        self.host.set_cursor_visible(true);
        self.state.cursor_hidden = false;
    }

    pub fn request_focus(&mut self) {
        self.host.request_focus();
    }

    /// Pointer position relative to the window center, Y up
    pub fn delta_from_center(&self, x: i32, y: i32) -> IVec2 {
        IVec2::new(x - self.state.half_extent.x, self.state.half_extent.y - y)
    }

    pub fn set_last_delta(&mut self, delta: IVec2) {
        self.state.last_delta = delta;
    }

    pub fn last_delta(&self) -> IVec2 {
        self.state.last_delta
    }

    pub fn clear_last_delta(&mut self) {
        self.state.last_delta = IVec2::ZERO;
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// Check if cursor warps actually happen
    pub fn is_confining(&self) -> bool {
        self.warp.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn warp_to_center(&mut self) {
        let target = self.state.center();
        if let Some(warp) = self.warp.as_mut() {
            if let Err(e) = warp.warp_to(target) {
                log::warn!("{}; disabling pointer confinement", e);
                self.warp = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::testing::{HostCall, MockHost, MockWarp};

    fn controller(host: &MockHost) -> CaptureController<MockHost> {
        let warp: Box<dyn CursorWarp> = Box::new(MockWarp::new(host.log()));
        CaptureController::new(host.clone(), Ok(warp), &CaptureConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let host = MockHost::new(IVec2::new(100, 100), IVec2::new(800, 600));
        let capture = controller(&host);
        assert_eq!(*capture.state(), CaptureState::default());
        assert!(capture.is_confining());
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_reposition_geometry() {
        let host = MockHost::new(IVec2::new(100, 100), IVec2::new(800, 600));
        let mut capture = controller(&host);
        capture.reposition();

        let state = capture.state();
        assert_eq!(state.screen_offset, IVec2::new(100, 100));
        assert_eq!(state.half_extent, IVec2::new(400, 300));
        assert_eq!(state.center(), IVec2::new(500, 400));
        assert!(state.cursor_hidden);

        assert_eq!(
            host.calls(),
            vec![
                HostCall::Warp(IVec2::new(500, 400)),
                HostCall::Locale("en-US".to_string()),
                HostCall::CursorVisible(false),
            ]
        );
    }

    #[test]
    fn test_reposition_is_idempotent() {
        let host = MockHost::new(IVec2::new(100, 100), IVec2::new(800, 600));
        let mut capture = controller(&host);

        capture.reposition();
        let first = *capture.state();
        capture.reposition();

        assert_eq!(*capture.state(), first);
        assert_eq!(host.warps(), vec![IVec2::new(500, 400), IVec2::new(500, 400)]);
    }

    #[test]
    fn test_reposition_follows_window_move() {
        let host = MockHost::new(IVec2::new(0, 0), IVec2::new(640, 480));
        let mut capture = controller(&host);
        capture.reposition();

        host.set_origin(IVec2::new(50, 20));
        capture.reposition();

        assert_eq!(capture.state().screen_offset, IVec2::new(50, 20));
        assert_eq!(host.warps().last(), Some(&IVec2::new(370, 260)));
    }

    #[test]
    fn test_odd_sizes_round_down() {
        let host = MockHost::new(IVec2::ZERO, IVec2::new(801, 599));
        let mut capture = controller(&host);
        capture.reposition();
        assert_eq!(capture.state().half_extent, IVec2::new(400, 299));
    }

    #[test]
    fn test_missing_origin_keeps_previous_offset() {
        let host = MockHost::new(IVec2::new(30, 40), IVec2::new(200, 100));
        let mut capture = controller(&host);
        capture.reposition();

        host.set_origin_available(false);
        capture.reposition();

        assert_eq!(capture.state().screen_offset, IVec2::new(30, 40));
    }

    #[test]
    fn test_delta_from_center_is_y_up() {
        let host = MockHost::new(IVec2::new(100, 100), IVec2::new(800, 600));
        let mut capture = controller(&host);
        capture.reposition();

        assert_eq!(capture.delta_from_center(500, 260), IVec2::new(100, 40));
        assert_eq!(capture.delta_from_center(400, 300), IVec2::ZERO);
        assert_eq!(capture.delta_from_center(350, 310), IVec2::new(-50, -10));
    }

    #[test]
    fn test_show_cursor() {
        let host = MockHost::new(IVec2::ZERO, IVec2::new(100, 100));
        let mut capture = controller(&host);
        capture.reposition();
        capture.show_cursor();

        assert!(!capture.state().cursor_hidden);
        assert_eq!(host.calls().last(), Some(&HostCall::CursorVisible(true)));
    }

    #[test]
    fn test_degraded_without_warp() {
        let host = MockHost::new(IVec2::new(10, 10), IVec2::new(100, 100));
        let mut capture = CaptureController::new(
            host.clone(),
            Err(CaptureError::WarpUnavailable("no robot".to_string())),
            &CaptureConfig::default(),
        );
        assert!(!capture.is_confining());

        capture.reposition();
        capture.recenter();

        assert!(host.warps().is_empty());
        assert_eq!(capture.state().half_extent, IVec2::new(50, 50));
        assert!(capture.state().cursor_hidden);
    }

    #[test]
    fn test_runtime_warp_failure_degrades_once() {
        let host = MockHost::new(IVec2::ZERO, IVec2::new(100, 100));
        let warp: Box<dyn CursorWarp> = Box::new(MockWarp::failing());
        let mut capture = CaptureController::new(host.clone(), Ok(warp), &CaptureConfig::default());

        capture.reposition();
        assert!(!capture.is_confining());

        capture.recenter();
        assert!(host.warps().is_empty());
    }

    #[test]
    fn test_custom_locale() {
        let host = MockHost::new(IVec2::ZERO, IVec2::new(100, 100));
        let config = CaptureConfig::default().with_text_locale("fr-FR");
        let mut capture = CaptureController::new(
            host.clone(),
            Err(CaptureError::WarpUnavailable("none".to_string())),
            &config,
        );
        capture.reposition();

        assert!(host.calls().contains(&HostCall::Locale("fr-FR".to_string())));
    }
}
