// Input correlator - turns raw toolkit notifications into canonical events

use super::buttons::ButtonMask;
use super::capture::{CaptureController, CaptureError, CursorWarp, WindowHost};
use super::config::CaptureConfig;
use super::event::{CanonicalEvent, EventBuilder, EventKind};
use super::keymap::translate;
use super::keys::{KEY_CAPSLOCK, KEY_CLEAR_ALL};
use super::notification::{NotificationSource, RawNotification};
use super::queue::EventSink;
use glam::IVec2;

/// Forced "no buttons, no motion" event
const CLEAR_MOUSE: CanonicalEvent = CanonicalEvent::mouse(0, 0, 0);

/// Forced "release every key" event
const CLEAR_KEYS: CanonicalEvent = CanonicalEvent::new(EventKind::Clear, KEY_CLEAR_ALL, 0, 0);

/// Modal state owned by one correlator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalFlags {
    /// Keyboard and pointer-motion notifications are dropped
    pub ignore_button_input: bool,

    /// The window is being moved; waiting for the click that ends it
    pub window_is_dragging: bool,

    /// A CapsLock press was swallowed and its release may go through
    pub caps_lock_latched: bool,

    /// The window came back into focus since the consumer last asked
    pub just_focused: bool,
}

/// Capture mode derived from the modal flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Active,
    Suppressed,
    /// Suppressed while the window is moved
    Dragging,
}

impl ModalFlags {
    pub fn mode(&self) -> CaptureMode {
        if self.window_is_dragging {
            CaptureMode::Dragging
        } else if self.ignore_button_input {
            CaptureMode::Suppressed
        } else {
            CaptureMode::Active
        }
    }
}

/// Sequences raw notifications into canonical events while tracking
/// held buttons, modal flags and pointer capture
///
/// Every method takes `&mut self`; producers on other threads go through a
/// [`NotificationQueue`](super::notification::NotificationQueue) and the
/// owning thread calls [`Correlator::process_events`].
pub struct Correlator<H: WindowHost, S: EventSink> {
    capture: CaptureController<H>,
    sink: S,
    buttons: ButtonMask,
    flags: ModalFlags,
    config: CaptureConfig,
}

impl<H: WindowHost, S: EventSink> Correlator<H, S> {
    /// Create a correlator for one window
    ///
    /// `warp` may be an error when the toolkit can't move the cursor; the
    /// correlator then runs without confinement.
    pub fn new(
        host: H,
        warp: Result<Box<dyn CursorWarp>, CaptureError>,
        sink: S,
        config: CaptureConfig,
    ) -> Self {
        let capture = CaptureController::new(host, warp, &config);
        Self {
            capture,
            sink,
            buttons: ButtonMask::empty(),
            flags: ModalFlags::default(),
            config,
        }
    }

    /// Drain the source once, handling every pending notification
    /// Returns the number of notifications handled
    pub fn process_events<N: NotificationSource + ?Sized>(&mut self, source: &mut N) -> usize {
        let mut handled = 0;
        source.drain_pending(&mut |notification| {
            self.handle(notification);
            handled += 1;
        });
        handled
    }

    /// Process a single raw notification
    pub fn handle(&mut self, notification: RawNotification) {
        let mut scratch = EventBuilder::new();

        // Keyboard first; a combined key + button follow-up must come right
        // after its key event.
        if !self.flags.ignore_button_input {
            self.handle_keyboard(notification, &mut scratch);
        }
        self.handle_pointer(notification, &mut scratch);
        self.handle_window(notification);

        self.recenter_after_drift();
    }

    fn handle_keyboard(&mut self, notification: RawNotification, scratch: &mut EventBuilder) {
        match notification {
            RawNotification::KeyPress { code } => {
                let symbol = translate(code);
                scratch.kind(EventKind::KeyDown).data1(symbol).deltas(0, 0);

                // No reliable way to query the lock state, so CapsLock is
                // latched here and only its release is relayed.
                if symbol == KEY_CAPSLOCK {
                    self.flags.caps_lock_latched = true;
                } else {
                    scratch.post(&self.sink);
                }
                self.post_held_buttons(scratch);
            }
            RawNotification::KeyRelease { code } => {
                let symbol = translate(code);
                scratch.kind(EventKind::KeyUp).data1(symbol).deltas(0, 0);

                if symbol != KEY_CAPSLOCK || self.flags.caps_lock_latched {
                    scratch.post(&self.sink);
                }
                self.flags.caps_lock_latched = false;
                self.post_held_buttons(scratch);
            }
            RawNotification::KeyTyped { code } => {
                scratch
                    .kind(EventKind::KeyUp)
                    .data1(translate(code))
                    .deltas(0, 0);
                scratch.post(&self.sink);
                self.post_held_buttons(scratch);
            }
            _ => {}
        }
    }

    fn handle_pointer(&mut self, notification: RawNotification, scratch: &mut EventBuilder) {
        match notification {
            RawNotification::ButtonPress { button } => {
                self.buttons.press(button);
                scratch
                    .kind(EventKind::Mouse)
                    .data1(self.buttons.as_data())
                    .deltas(0, 0);
                scratch.post(&self.sink);
            }
            RawNotification::ButtonRelease { button } => {
                self.buttons.release(button);
                // A pure release carries no motion
                scratch
                    .kind(EventKind::Mouse)
                    .data1(self.buttons.as_data())
                    .deltas(0, 0);
                scratch.post(&self.sink);
            }
            RawNotification::Motion { x, y } if !self.flags.ignore_button_input => {
                // A pure move has no buttons
                self.buttons = ButtonMask::empty();
                self.post_motion(x, y, scratch);
            }
            RawNotification::Drag { x, y } if !self.flags.ignore_button_input => {
                self.post_motion(x, y, scratch);
            }
            _ => {}
        }
    }

    fn handle_window(&mut self, notification: RawNotification) {
        match notification {
            RawNotification::Clicked => {
                // A press + release during a window move marks its end
                if self.flags.window_is_dragging {
                    self.flags.window_is_dragging = false;
                    self.capture.reposition();
                    self.flags.ignore_button_input = false;
                    log::debug!("Window move finished, capture resumed");
                }
            }
            RawNotification::FocusLost | RawNotification::PointerExited => {
                self.post_clear();
                self.capture.show_cursor();
                self.flags.ignore_button_input = true;
                log::debug!("Capture suppressed after {:?}", notification);
            }
            RawNotification::WindowMoving => {
                // Don't reposition mid-move, wait for the click that ends it
                self.post_clear();
                self.flags.window_is_dragging = true;
                self.flags.ignore_button_input = true;
                log::debug!("Window move started, capture suppressed");
            }
            RawNotification::PointerEntered
            | RawNotification::FocusGained
            | RawNotification::WindowConfigured
            | RawNotification::WindowCreated => {
                self.flags.window_is_dragging = false;
                self.flags.just_focused = true;
                self.capture.request_focus();
                self.capture.reposition();
                self.flags.ignore_button_input = false;
                log::debug!("Capture active after {:?}", notification);
            }
            _ => {}
        }
    }

    /// Re-post the held buttons so a key pressed mid-click keeps its context
    fn post_held_buttons(&self, scratch: &mut EventBuilder) {
        if !self.buttons.is_empty() {
            scratch
                .kind(EventKind::Mouse)
                .data1(self.buttons.as_data())
                .deltas(0, 0);
            scratch.post(&self.sink);
        }
    }

    fn post_motion(&mut self, x: i32, y: i32, scratch: &mut EventBuilder) {
        let delta = self.capture.delta_from_center(x, y);
        self.capture.set_last_delta(delta);

        let dx = self.config.scale(delta.x);
        let dy = self.config.scale(delta.y);
        if dx != 0 || dy != 0 {
            scratch
                .kind(EventKind::Mouse)
                .data1(self.buttons.as_data())
                .deltas(dx, dy);
            scratch.post(&self.sink);
        }
    }

    /// Tell the consumer to drop every held key and button
    fn post_clear(&mut self) {
        self.sink.post(CLEAR_MOUSE);
        self.sink.post(CLEAR_KEYS);
        self.buttons = ButtonMask::empty();
    }

    /// Pull the pointer back before it can leave the window
    fn recenter_after_drift(&mut self) {
        if self.config.recenter_on_drift
            && !self.flags.window_is_dragging
            && self.capture.last_delta() != IVec2::ZERO
        {
            self.capture.recenter();
        }
        self.capture.clear_last_delta();
    }

    /// Check and reset the "just focused" flag
    pub fn take_just_focused(&mut self) -> bool {
        std::mem::take(&mut self.flags.just_focused)
    }

    pub fn mode(&self) -> CaptureMode {
        self.flags.mode()
    }

    pub fn flags(&self) -> &ModalFlags {
        &self.flags
    }

    /// Buttons currently held
    pub fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    pub fn capture(&self) -> &CaptureController<H> {
        &self.capture
    }

    pub fn capture_mut(&mut self) -> &mut CaptureController<H> {
        &mut self.capture
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }
}
