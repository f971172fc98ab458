// winit bindings: the window as capture host, window events as raw notifications

use super::buttons::ButtonMask;
use super::capture::{CaptureError, CursorWarp, WindowHost};
use super::keymap::host_code_for;
use super::notification::{NotificationSender, RawNotification};
use glam::IVec2;
use std::sync::Arc;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

/// Capture host backed by a winit window
pub struct WinitWindowHost {
    window: Arc<Window>,
}

impl WinitWindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl WindowHost for WinitWindowHost {
    fn screen_origin(&self) -> Result<IVec2, CaptureError> {
        self.window
            .inner_position()
            .map(|position| IVec2::new(position.x, position.y))
            .map_err(|e| CaptureError::OriginUnavailable(e.to_string()))
    }

    fn size(&self) -> IVec2 {
        let size = self.window.inner_size();
        IVec2::new(size.width as i32, size.height as i32)
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn select_text_locale(&mut self, locale: &str) {
        // winit can't pick a locale; turning IME off at least keeps
        // composition from swallowing key presses.
        self.window.set_ime_allowed(false);
        log::trace!("Text input pinned to {} (IME disabled)", locale);
    }

    fn request_focus(&mut self) {
        self.window.focus_window();
    }
}

/// Cursor warp through `Window::set_cursor_position`
pub struct WinitCursorWarp {
    window: Arc<Window>,
}

impl WinitCursorWarp {
    /// Probe the platform by moving the cursor to the window center
    ///
    /// Fails on platforms that can't position the cursor (e.g. Wayland).
    pub fn new(window: Arc<Window>) -> Result<Self, CaptureError> {
        let size = window.inner_size();
        window
            .set_cursor_position(PhysicalPosition::new(size.width / 2, size.height / 2))
            .map_err(|e| CaptureError::WarpUnavailable(e.to_string()))?;
        Ok(Self { window })
    }

    /// Probe and box in one go, ready for the correlator
    pub fn boxed(window: Arc<Window>) -> Result<Box<dyn CursorWarp>, CaptureError> {
        Self::new(window).map(|warp| Box::new(warp) as Box<dyn CursorWarp>)
    }
}

impl CursorWarp for WinitCursorWarp {
    fn warp_to(&mut self, screen_point: IVec2) -> Result<(), CaptureError> {
        // winit positions the cursor relative to the content area
        let origin = self
            .window
            .inner_position()
            .map(|position| IVec2::new(position.x, position.y))
            .unwrap_or(IVec2::ZERO);
        let local = screen_point - origin;

        self.window
            .set_cursor_position(PhysicalPosition::new(local.x, local.y))
            .map_err(|e| CaptureError::WarpFailed(e.to_string()))
    }
}

/// Host button id for a winit mouse button
pub fn button_id(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
        MouseButton::Back => 4,
        MouseButton::Forward => 5,
        MouseButton::Other(id) => id,
    }
}

/// Turns winit window events into raw notifications
///
/// winit doesn't separate drags from plain motion or report clicks, so the
/// adapter tracks held buttons and whether the pointer moved since the
/// last press.
#[derive(Debug, Default)]
pub struct WinitEventAdapter {
    held: ButtonMask,
    moved_since_press: bool,
}

impl WinitEventAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw notifications for one window event, in delivery order
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<RawNotification> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key) => {
                    let code = host_code_for(key);
                    match event.state {
                        ElementState::Pressed => vec![RawNotification::KeyPress { code }],
                        ElementState::Released => vec![RawNotification::KeyRelease { code }],
                    }
                }
                PhysicalKey::Unidentified(_) => Vec::new(),
            },
            WindowEvent::MouseInput { state, button, .. } => {
                let button = button_id(*button);
                match state {
                    ElementState::Pressed => {
                        self.held.press(button);
                        self.moved_since_press = false;
                        vec![RawNotification::ButtonPress { button }]
                    }
                    ElementState::Released => {
                        self.held.release(button);
                        if self.moved_since_press {
                            vec![RawNotification::ButtonRelease { button }]
                        } else {
                            vec![
                                RawNotification::ButtonRelease { button },
                                RawNotification::Clicked,
                            ]
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.moved_since_press = true;
                let (x, y) = (position.x as i32, position.y as i32);
                if self.held.is_empty() {
                    vec![RawNotification::Motion { x, y }]
                } else {
                    vec![RawNotification::Drag { x, y }]
                }
            }
            WindowEvent::CursorEntered { .. } => vec![RawNotification::PointerEntered],
            WindowEvent::CursorLeft { .. } => vec![RawNotification::PointerExited],
            WindowEvent::Focused(true) => vec![RawNotification::FocusGained],
            WindowEvent::Focused(false) => {
                self.held = ButtonMask::empty();
                vec![RawNotification::FocusLost]
            }
            WindowEvent::Moved(_) => vec![RawNotification::WindowMoving],
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                vec![RawNotification::WindowConfigured]
            }
            _ => Vec::new(),
        }
    }

    /// Translate and queue for the correlator
    pub fn forward(&mut self, event: &WindowEvent, sender: &NotificationSender) {
        for notification in self.translate(event) {
            if let Err(e) = sender.send(notification) {
                log::debug!("Notification queue closed, dropping {:?}", e.0);
            }
        }
    }
}
