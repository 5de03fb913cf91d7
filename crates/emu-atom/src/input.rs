//! Input event plumbing.
//!
//! External input sources (a UI thread, a script) talk to the keyboard
//! through a [`KeySender`], cloned from [`crate::Keyboard::sender`]. Events
//! travel over a non-blocking mailbox and are applied by the emulation
//! loop when it drains the queue; the producer never waits on the
//! emulation thread and vice versa.

use std::sync::mpsc;

use crate::keyboard::AtomKey;

/// Added to a key code to signal a release on the same channel.
pub const RELEASE_OFFSET: u8 = 128;

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: AtomKey,
    pub released: bool,
}

/// Handle for enqueuing key events from outside the emulation thread.
#[derive(Clone)]
pub struct KeySender {
    tx: mpsc::Sender<KeyEvent>,
}

impl KeySender {
    pub(crate) fn new(tx: mpsc::Sender<KeyEvent>) -> Self {
        Self { tx }
    }

    /// Enqueue a key event. Never blocks; if the machine has shut down the
    /// event is silently dropped.
    pub fn send(&self, key: AtomKey, released: bool) {
        let _ = self.tx.send(KeyEvent { key, released });
    }

    /// Enqueue a raw wire-protocol code: the key code, plus
    /// [`RELEASE_OFFSET`] for a release. Out-of-range codes are dropped
    /// silently, matching the hardware's tolerance for junk input.
    pub fn send_code(&self, code: u8) {
        let released = code >= RELEASE_OFFSET;
        let code = if released { code - RELEASE_OFFSET } else { code };
        if let Some(key) = AtomKey::from_code(code) {
            self.send(key, released);
        }
    }
}
