// Raw toolkit notifications and the producer-safe queue they travel through

use std::sync::mpsc::{self, Receiver, SendError, Sender};

/// Discrete input notification delivered by the windowing toolkit
///
/// Pointer coordinates are relative to the window's content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawNotification {
    KeyPress { code: i32 },
    KeyRelease { code: i32 },
    /// Press and release collapsed into one notification
    KeyTyped { code: i32 },
    ButtonPress { button: u16 },
    ButtonRelease { button: u16 },
    /// Pointer moved with no button held
    Motion { x: i32, y: i32 },
    /// Pointer moved while a button is held
    Drag { x: i32, y: i32 },
    /// Press and release without motion in between
    Clicked,
    FocusLost,
    FocusGained,
    PointerEntered,
    PointerExited,
    WindowMoving,
    WindowConfigured,
    WindowCreated,
}

/// Anything the correlator can drain once per processing pass
pub trait NotificationSource {
    /// Hand every pending notification to `handler`, oldest first
    fn drain_pending(&mut self, handler: &mut dyn FnMut(RawNotification));
}

/// Producer handle; clone one per thread
#[derive(Debug, Clone)]
pub struct NotificationSender {
    sender: Sender<RawNotification>,
}

impl NotificationSender {
    /// Queue a notification without blocking
    ///
    /// Fails only once the receiving queue has been dropped.
    pub fn send(&self, notification: RawNotification) -> Result<(), SendError<RawNotification>> {
        self.sender.send(notification)
    }
}

/// Receiving end drained by the single consumer that owns the correlator
#[derive(Debug)]
pub struct NotificationQueue {
    receiver: Receiver<RawNotification>,
}

impl NotificationQueue {
    /// Create a queue and its first producer handle
    pub fn new() -> (NotificationSender, Self) {
        let (sender, receiver) = mpsc::channel();
        (NotificationSender { sender }, Self { receiver })
    }

    /// Take everything queued so far without waiting for more
    pub fn try_drain(&self) -> Vec<RawNotification> {
        self.receiver.try_iter().collect()
    }
}

impl NotificationSource for NotificationQueue {
    fn drain_pending(&mut self, handler: &mut dyn FnMut(RawNotification)) {
        for notification in self.receiver.try_iter() {
            handler(notification);
        }
    }
}

impl NotificationSource for Vec<RawNotification> {
    fn drain_pending(&mut self, handler: &mut dyn FnMut(RawNotification)) {
        for notification in self.drain(..) {
            handler(notification);
        }
    }
}
