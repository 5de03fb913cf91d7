//! Atom keyboard matrix.
//!
//! The keyboard is a 10-column × 6-row matrix scanned through the PIA:
//! port A bits 0-3 select a column, port B bits 0-5 read the rows
//! (active low). Ctrl and Shift are wired straight to port B bits 6 and 7,
//! outside the matrix; Rept appears on port C bit 6 and Break is hard-wired
//! to the reset circuit.
//!
//! # Matrix layout (column → keys on rows 0-5)
//!
//! | Col | Row 5 | Row 4 | Row 3 | Row 2 | Row 1 | Row 0      |
//! |-----|-------|-------|-------|-------|-------|------------|
//! | 0   | ESC   | Q     | G     | -=    | 3#    |            |
//! | 1   | Z     | P     | F     | ,<    | 2"    |            |
//! | 2   | Y     | O     | E     | ;+    | 1!    | up/down    |
//! | 3   | X     | N     | D     | :*    | 0     | left/right |
//! | 4   | W     | M     | C     | 9)    | DEL   | LOCK       |
//! | 5   | V     | L     | B     | 8(    | COPY  | up arrow   |
//! | 6   | U     | K     | A     | 7'    | RET   | ]          |
//! | 7   | T     | J     | @     | 6&    |       | \          |
//! | 8   | S     | I     | /?    | 5%    |       | [          |
//! | 9   | R     | H     | .>    | 4$    |       | SPACE      |
//!
//! Pressed-state mutation happens only in [`Keyboard::drain_events`], run
//! once per scheduler iteration; matrix reads never race with it.

use std::sync::mpsc;

use crate::input::{KeyEvent, KeySender};

/// Number of logical key codes (including the unwired `None` position).
pub const KEY_COUNT: usize = 61;

/// Logical key on the Atom keyboard, in its numeric key-code order.
///
/// The code order follows the physical rows of the keyboard, top to
/// bottom, which is also the wire protocol used by external input sources
/// (`code`, or `code + 128` for a release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AtomKey {
    // Top row
    Escape = 0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    N0,
    MinusEquals,
    ColonAsterisk,
    UpArrow,
    Break,
    // Second row
    LeftRight,
    Copy,
    Q,
    W,
    E,
    R,
    T,
    Y,
    U,
    I,
    O,
    P,
    At,
    Backslash,
    Delete,
    // Third row
    UpDown,
    Ctrl,
    A,
    S,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    SemicolonPlus,
    LBracket,
    RBracket,
    Return,
    // Fourth row
    Lock,
    LShift,
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    CommaLess,
    PeriodGreater,
    SlashQuestion,
    RShift,
    Rept,
    // Fifth row
    Space,
    // Unwired matrix position
    None,
}

/// All keys in code order, for code → key lookup.
const KEYS: [AtomKey; KEY_COUNT] = [
    AtomKey::Escape,
    AtomKey::N1,
    AtomKey::N2,
    AtomKey::N3,
    AtomKey::N4,
    AtomKey::N5,
    AtomKey::N6,
    AtomKey::N7,
    AtomKey::N8,
    AtomKey::N9,
    AtomKey::N0,
    AtomKey::MinusEquals,
    AtomKey::ColonAsterisk,
    AtomKey::UpArrow,
    AtomKey::Break,
    AtomKey::LeftRight,
    AtomKey::Copy,
    AtomKey::Q,
    AtomKey::W,
    AtomKey::E,
    AtomKey::R,
    AtomKey::T,
    AtomKey::Y,
    AtomKey::U,
    AtomKey::I,
    AtomKey::O,
    AtomKey::P,
    AtomKey::At,
    AtomKey::Backslash,
    AtomKey::Delete,
    AtomKey::UpDown,
    AtomKey::Ctrl,
    AtomKey::A,
    AtomKey::S,
    AtomKey::D,
    AtomKey::F,
    AtomKey::G,
    AtomKey::H,
    AtomKey::J,
    AtomKey::K,
    AtomKey::L,
    AtomKey::SemicolonPlus,
    AtomKey::LBracket,
    AtomKey::RBracket,
    AtomKey::Return,
    AtomKey::Lock,
    AtomKey::LShift,
    AtomKey::Z,
    AtomKey::X,
    AtomKey::C,
    AtomKey::V,
    AtomKey::B,
    AtomKey::N,
    AtomKey::M,
    AtomKey::CommaLess,
    AtomKey::PeriodGreater,
    AtomKey::SlashQuestion,
    AtomKey::RShift,
    AtomKey::Rept,
    AtomKey::Space,
    AtomKey::None,
];

/// The matrix: `MATRIX[row][column]` is the key at that crossing.
/// Row = port B bit 0-5, column = port A bits 0-3 (0-9).
const MATRIX: [[AtomKey; 10]; 6] = [
    [
        AtomKey::None,
        AtomKey::None,
        AtomKey::UpDown,
        AtomKey::LeftRight,
        AtomKey::Lock,
        AtomKey::UpArrow,
        AtomKey::RBracket,
        AtomKey::Backslash,
        AtomKey::LBracket,
        AtomKey::Space,
    ],
    [
        AtomKey::N3,
        AtomKey::N2,
        AtomKey::N1,
        AtomKey::N0,
        AtomKey::Delete,
        AtomKey::Copy,
        AtomKey::Return,
        AtomKey::None,
        AtomKey::None,
        AtomKey::None,
    ],
    [
        AtomKey::MinusEquals,
        AtomKey::CommaLess,
        AtomKey::SemicolonPlus,
        AtomKey::ColonAsterisk,
        AtomKey::N9,
        AtomKey::N8,
        AtomKey::N7,
        AtomKey::N6,
        AtomKey::N5,
        AtomKey::N4,
    ],
    [
        AtomKey::G,
        AtomKey::F,
        AtomKey::E,
        AtomKey::D,
        AtomKey::C,
        AtomKey::B,
        AtomKey::A,
        AtomKey::At,
        AtomKey::SlashQuestion,
        AtomKey::PeriodGreater,
    ],
    [
        AtomKey::Q,
        AtomKey::P,
        AtomKey::O,
        AtomKey::N,
        AtomKey::M,
        AtomKey::L,
        AtomKey::K,
        AtomKey::J,
        AtomKey::I,
        AtomKey::H,
    ],
    [
        AtomKey::Escape,
        AtomKey::Z,
        AtomKey::Y,
        AtomKey::X,
        AtomKey::W,
        AtomKey::V,
        AtomKey::U,
        AtomKey::T,
        AtomKey::S,
        AtomKey::R,
    ],
];

impl AtomKey {
    /// Numeric key code (the wire protocol value).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Key for a numeric code, or `Option::None` if out of range.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        KEYS.get(usize::from(code)).copied()
    }
}

/// Keyboard state: pressed vector plus the event mailbox feeding it.
///
/// External input sources hold a [`KeySender`] and enqueue from any thread;
/// the emulation loop drains the queue once per iteration. Draining never
/// blocks and neither does sending.
pub struct Keyboard {
    pressed: [bool; KEY_COUNT],
    events: mpsc::Receiver<KeyEvent>,
    sender: mpsc::Sender<KeyEvent>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        let (sender, events) = mpsc::channel();
        Self {
            pressed: [false; KEY_COUNT],
            events,
            sender,
        }
    }

    /// A cloneable handle for enqueuing key events from an input thread.
    #[must_use]
    pub fn sender(&self) -> KeySender {
        KeySender::new(self.sender.clone())
    }

    /// Apply all queued events to the pressed vector. Non-blocking.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.pressed[usize::from(event.key.code())] = !event.released;
        }
    }

    /// Set a key directly, bypassing the queue (single-threaded callers
    /// and tests).
    pub fn set_key(&mut self, key: AtomKey, pressed: bool) {
        self.pressed[usize::from(key.code())] = pressed;
    }

    /// Scan the column selected by port A bits 0-3.
    ///
    /// Bits 0-5 are the matrix rows (low = pressed), bit 6 is Ctrl and
    /// bit 7 Shift, both also active low. Columns 10-15 select no matrix
    /// keys; only the direct Ctrl/Shift lines remain visible.
    #[must_use]
    pub fn scan_column(&self, port_a: u8) -> u8 {
        let column = usize::from(port_a & 0x0F);
        let mut value: u8 = 0xFF; // pull-up resistors
        if column < 10 {
            for (row, matrix_row) in MATRIX.iter().enumerate() {
                if self.pressed[usize::from(matrix_row[column].code())] {
                    value &= !(1 << row);
                }
            }
        }
        if self.pressed[usize::from(AtomKey::Ctrl.code())] {
            value &= !(1 << 6);
        }
        if self.pressed[usize::from(AtomKey::LShift.code())]
            || self.pressed[usize::from(AtomKey::RShift.code())]
        {
            value &= !(1 << 7);
        }
        value
    }

    /// Break key state. Break drives the reset circuit, not the matrix.
    #[must_use]
    pub fn reset_requested(&self) -> bool {
        self.pressed[usize::from(AtomKey::Break.code())]
    }

    /// Rept key state, exposed on the PIA's port C bit 6.
    #[must_use]
    pub fn repeat_held(&self) -> bool {
        self.pressed[usize::from(AtomKey::Rept.code())]
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_pressed_reads_all_high() {
        let kbd = Keyboard::new();
        for column in 0..10 {
            assert_eq!(kbd.scan_column(column), 0xFF);
        }
    }

    #[test]
    fn key_a_clears_only_its_row_bit() {
        let mut kbd = Keyboard::new();
        kbd.set_key(AtomKey::A, true);

        // A sits at row 3, column 6.
        assert_eq!(kbd.scan_column(6), 0xFF & !(1 << 3));
        assert_eq!(kbd.scan_column(5), 0xFF, "other columns unaffected");

        kbd.set_key(AtomKey::A, false);
        assert_eq!(kbd.scan_column(6), 0xFF);
    }

    #[test]
    fn ctrl_and_shift_visible_in_every_column() {
        let mut kbd = Keyboard::new();
        kbd.set_key(AtomKey::Ctrl, true);
        kbd.set_key(AtomKey::RShift, true);
        for column in 0..16 {
            let value = kbd.scan_column(column);
            assert_eq!(value & 0xC0, 0, "column {column}");
        }
    }

    #[test]
    fn out_of_range_column_reads_no_matrix_keys() {
        let mut kbd = Keyboard::new();
        kbd.set_key(AtomKey::Space, true);
        assert_eq!(kbd.scan_column(9) & 0x01, 0, "space is column 9 row 0");
        assert_eq!(kbd.scan_column(0x0C), 0xFF);
    }

    #[test]
    fn events_applied_on_drain_only() {
        let mut kbd = Keyboard::new();
        let sender = kbd.sender();
        sender.send(AtomKey::Q, false);
        assert_eq!(kbd.scan_column(0), 0xFF, "not yet drained");

        kbd.drain_events();
        assert_eq!(kbd.scan_column(0), 0xFF & !(1 << 4), "Q is row 4 column 0");

        sender.send(AtomKey::Q, true);
        kbd.drain_events();
        assert_eq!(kbd.scan_column(0), 0xFF);
    }

    #[test]
    fn send_from_another_thread() {
        let mut kbd = Keyboard::new();
        let sender = kbd.sender();
        std::thread::spawn(move || {
            sender.send(AtomKey::Space, false);
        })
        .join()
        .expect("input thread");

        kbd.drain_events();
        assert_eq!(kbd.scan_column(9) & 0x01, 0);
    }

    #[test]
    fn break_and_rept_are_not_matrix_keys() {
        let mut kbd = Keyboard::new();
        kbd.set_key(AtomKey::Break, true);
        kbd.set_key(AtomKey::Rept, true);
        for column in 0..10 {
            assert_eq!(kbd.scan_column(column), 0xFF);
        }
        assert!(kbd.reset_requested());
        assert!(kbd.repeat_held());
    }

    #[test]
    fn code_round_trip() {
        assert_eq!(AtomKey::from_code(AtomKey::Rept.code()), Some(AtomKey::Rept));
        assert_eq!(AtomKey::from_code(60), Some(AtomKey::None));
        assert_eq!(AtomKey::from_code(61), Option::None);
    }
}
