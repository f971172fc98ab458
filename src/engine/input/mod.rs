// Input capture and correlation
//
// Turns raw windowing-toolkit notifications into one canonical event stream
// for the game loop, and keeps the pointer captured for relative mouse look.
//
// ## Architecture
//
// - `keys` / `keymap`: canonical key symbols and host key code translation
// - `buttons`: held mouse button set
// - `event`: canonical events and the scratch builder used to post them
// - `queue`: event sink trait and the bounded queue the game loop drains
// - `notification`: raw toolkit notifications and their producer-safe queue
// - `capture`: pointer confinement, cursor hiding, window geometry
// - `correlator`: the state machine tying everything together
// - `config`: capture settings
// - `winit_host`: winit window host and event adapter
//
// ## Usage Example
//
// ```rust
// use engine::input::{CaptureConfig, Correlator, EventQueue, NotificationQueue};
//
// let (sender, mut notifications) = NotificationQueue::new();
// let mut correlator = Correlator::new(host, warp, EventQueue::default(), CaptureConfig::default());
//
// // Any thread: sender.send(RawNotification::KeyPress { code })
//
// // Once per frame on the owning thread
// correlator.process_events(&mut notifications);
// for event in correlator.sink().drain() {
//     // Hand to the game
// }
// ```

pub mod buttons;
pub mod capture;
pub mod config;
pub mod correlator;
pub mod event;
pub mod keymap;
pub mod keys;
pub mod notification;
pub mod queue;
pub mod winit_host;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use buttons::ButtonMask;
pub use capture::{CaptureController, CaptureError, CaptureState, CursorWarp, WindowHost};
pub use config::CaptureConfig;
pub use correlator::{CaptureMode, Correlator, ModalFlags};
pub use event::{CanonicalEvent, EventBuilder, EventKind};
pub use keymap::translate;
pub use notification::{NotificationQueue, NotificationSender, NotificationSource, RawNotification};
pub use queue::{EventQueue, EventSink};
pub use winit_host::{WinitCursorWarp, WinitEventAdapter, WinitWindowHost};
