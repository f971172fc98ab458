// Canonical key symbols delivered to the game loop
//
// Values follow the classic Doom key constants: printable keys are their
// lower-case ASCII value, everything else lives above 0x80.

pub const KEY_RIGHTARROW: i32 = 0xae;
pub const KEY_LEFTARROW: i32 = 0xac;
pub const KEY_UPARROW: i32 = 0xad;
pub const KEY_DOWNARROW: i32 = 0xaf;
pub const KEY_ESCAPE: i32 = 27;
pub const KEY_ENTER: i32 = 13;
pub const KEY_TAB: i32 = 9;

pub const KEY_F1: i32 = 0x80 + 0x3b;
pub const KEY_F2: i32 = 0x80 + 0x3c;
pub const KEY_F3: i32 = 0x80 + 0x3d;
pub const KEY_F4: i32 = 0x80 + 0x3e;
pub const KEY_F5: i32 = 0x80 + 0x3f;
pub const KEY_F6: i32 = 0x80 + 0x40;
pub const KEY_F7: i32 = 0x80 + 0x41;
pub const KEY_F8: i32 = 0x80 + 0x42;
pub const KEY_F9: i32 = 0x80 + 0x43;
pub const KEY_F10: i32 = 0x80 + 0x44;
pub const KEY_F11: i32 = 0x80 + 0x57;
pub const KEY_F12: i32 = 0x80 + 0x58;

pub const KEY_BACKSPACE: i32 = 127;
pub const KEY_PAUSE: i32 = 0xff;

pub const KEY_SHIFT: i32 = 0x80 + 0x36;
pub const KEY_CTRL: i32 = 0x80 + 0x1d;
pub const KEY_ALT: i32 = 0x80 + 0x38;

pub const KEY_CAPSLOCK: i32 = 0x80 + 0x3a;
pub const KEY_NUMLOCK: i32 = 0x80 + 0x45;
pub const KEY_SCROLLLOCK: i32 = 0x80 + 0x46;
pub const KEY_PRNTSCRN: i32 = 0x80 + 0x37;

pub const KEY_HOME: i32 = 0x80 + 0x47;
pub const KEY_PGUP: i32 = 0x80 + 0x49;
pub const KEY_END: i32 = 0x80 + 0x4f;
pub const KEY_PGDN: i32 = 0x80 + 0x51;

pub const KEY_COMMA: i32 = b',' as i32;
pub const KEY_PERIOD: i32 = b'.' as i32;
pub const KEY_QUOTE: i32 = b'\'' as i32;
pub const KEY_SEMICOLON: i32 = b';' as i32;
pub const KEY_BROPEN: i32 = b'[' as i32;
pub const KEY_BRCLOSE: i32 = b']' as i32;
pub const KEY_BSLASH: i32 = b'\\' as i32;
pub const KEY_MULTPLY: i32 = b'*' as i32;

/// Out-of-band symbol carried by the "release everything" clear event
pub const KEY_CLEAR_ALL: i32 = 0xff;
