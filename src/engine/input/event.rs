// Canonical events and the scratch builder used to post them

use super::queue::EventSink;

/// Kind of a canonical event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    /// Button state plus scaled motion
    Mouse,
    /// Release every held key
    Clear,
}

/// Event handed to the game loop, independent of the input source
///
/// For `Mouse` events `data1` is the held-button mask and `data2`/`data3`
/// the scaled horizontal and vertical deltas (Y up). For key events `data1`
/// is the canonical key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalEvent {
    pub kind: EventKind,
    pub data1: i32,
    pub data2: i32,
    pub data3: i32,
}

impl CanonicalEvent {
    pub const fn new(kind: EventKind, data1: i32, data2: i32, data3: i32) -> Self {
        Self {
            kind,
            data1,
            data2,
            data3,
        }
    }

    pub const fn key_down(symbol: i32) -> Self {
        Self::new(EventKind::KeyDown, symbol, 0, 0)
    }

    pub const fn key_up(symbol: i32) -> Self {
        Self::new(EventKind::KeyUp, symbol, 0, 0)
    }

    pub const fn mouse(buttons: i32, dx: i32, dy: i32) -> Self {
        Self::new(EventKind::Mouse, buttons, dx, dy)
    }
}

/// Mutable scratch record one producer fills before posting
///
/// Each caller owns its builder outright; nothing is shared between
/// workers. `post` hands the sink a copy, so later writes to the builder
/// never reach events already posted.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    kind: EventKind,
    data1: i32,
    data2: i32,
    data3: i32,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            kind: EventKind::KeyUp,
            data1: 0,
            data2: 0,
            data3: 0,
        }
    }

    pub fn kind(&mut self, kind: EventKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn data1(&mut self, value: i32) -> &mut Self {
        self.data1 = value;
        self
    }

    pub fn deltas(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.data2 = dx;
        self.data3 = dy;
        self
    }

    /// Current field values as an immutable event
    pub fn snapshot(&self) -> CanonicalEvent {
        CanonicalEvent::new(self.kind, self.data1, self.data2, self.data3)
    }

    /// Copy the current fields out to the sink
    pub fn post<S: EventSink + ?Sized>(&self, sink: &S) {
        sink.post(self.snapshot());
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
