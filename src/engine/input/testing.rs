// Recording window host and cursor warp for unit tests

use super::capture::{CaptureError, CursorWarp, WindowHost};
use glam::IVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// One call made against the mock host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Warp(IVec2),
    Locale(String),
    CursorVisible(bool),
    Focus,
}

#[derive(Debug)]
struct Geometry {
    origin: IVec2,
    size: IVec2,
    origin_available: bool,
}

/// Window host whose clones share geometry and call log
#[derive(Debug, Clone)]
pub struct MockHost {
    geometry: Rc<RefCell<Geometry>>,
    calls: Rc<RefCell<Vec<HostCall>>>,
}

impl MockHost {
    pub fn new(origin: IVec2, size: IVec2) -> Self {
        Self {
            geometry: Rc::new(RefCell::new(Geometry {
                origin,
                size,
                origin_available: true,
            })),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Call log shared with a [`MockWarp`]
    pub fn log(&self) -> Rc<RefCell<Vec<HostCall>>> {
        Rc::clone(&self.calls)
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn warps(&self) -> Vec<IVec2> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Warp(target) => Some(*target),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn set_origin(&self, origin: IVec2) {
        self.geometry.borrow_mut().origin = origin;
    }

    pub fn set_size(&self, size: IVec2) {
        self.geometry.borrow_mut().size = size;
    }

    pub fn set_origin_available(&self, available: bool) {
        self.geometry.borrow_mut().origin_available = available;
    }
}

impl WindowHost for MockHost {
    fn screen_origin(&self) -> Result<IVec2, CaptureError> {
        let geometry = self.geometry.borrow();
        if geometry.origin_available {
            Ok(geometry.origin)
        } else {
            Err(CaptureError::OriginUnavailable("mock".to_string()))
        }
    }

    fn size(&self) -> IVec2 {
        self.geometry.borrow().size
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.calls.borrow_mut().push(HostCall::CursorVisible(visible));
    }

    fn select_text_locale(&mut self, locale: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::Locale(locale.to_string()));
    }

    fn request_focus(&mut self) {
        self.calls.borrow_mut().push(HostCall::Focus);
    }
}

/// Cursor warp that records targets, or always fails
pub struct MockWarp {
    calls: Option<Rc<RefCell<Vec<HostCall>>>>,
}

impl MockWarp {
    pub fn new(calls: Rc<RefCell<Vec<HostCall>>>) -> Self {
        Self { calls: Some(calls) }
    }

    pub fn failing() -> Self {
        Self { calls: None }
    }
}

impl CursorWarp for MockWarp {
    fn warp_to(&mut self, screen_point: IVec2) -> Result<(), CaptureError> {
        match &self.calls {
            Some(calls) => {
                calls.borrow_mut().push(HostCall::Warp(screen_point));
                Ok(())
            }
            None => Err(CaptureError::WarpFailed("mock".to_string())),
        }
    }
}
