// Held mouse button tracking

use bitflags::bitflags;

bitflags! {
    /// Set of mouse buttons currently held down
    ///
    /// Only the three classic buttons are tracked. The raw bits are what
    /// `Mouse` events carry in `data1`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u8 {
        const BUTTON1 = 0b001;
        const BUTTON2 = 0b010;
        const BUTTON3 = 0b100;
    }
}

impl ButtonMask {
    /// Bit for a host button id (1, 2 or 3); any other id contributes nothing
    pub fn for_button(button: u16) -> Self {
        match button {
            1 => Self::BUTTON1,
            2 => Self::BUTTON2,
            3 => Self::BUTTON3,
            _ => Self::empty(),
        }
    }

    /// Mark a button as held
    pub fn press(&mut self, button: u16) {
        *self |= Self::for_button(button);
    }

    /// Mark a button as released
    ///
    /// Releasing a button that isn't held leaves the mask unchanged.
    pub fn release(&mut self, button: u16) {
        *self &= !Self::for_button(button);
    }

    /// Value carried in a canonical mouse event
    pub fn as_data(self) -> i32 {
        self.bits() as i32
    }
}
