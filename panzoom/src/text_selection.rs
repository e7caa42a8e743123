// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::Host;

/// Suppresses text selection for the duration of a mouse pan.
///
/// Releasing is a no-op unless a capture is outstanding, so the engine can
/// release from every teardown path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextSelection {
    enabled: bool,
    captured: bool,
}

impl TextSelection {
    /// `enabled` leaves selection alone entirely.
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            captured: false,
        }
    }

    pub(crate) fn capture<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.enabled || self.captured {
            return;
        }
        self.captured = true;
        host.capture_text_selection();
    }

    pub(crate) fn release<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.captured {
            self.captured = false;
            host.release_text_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Selection {
        captured: i32,
    }

    impl Host for Selection {
        fn request_frame(&mut self) {}

        fn capture_text_selection(&mut self) {
            self.captured += 1;
        }

        fn release_text_selection(&mut self) {
            self.captured -= 1;
        }
    }

    #[test]
    fn release_without_capture_is_ignored() {
        let mut host = Selection::default();
        let mut selection = TextSelection::new(false);
        selection.release(&mut host);
        assert_eq!(host.captured, 0, "no capture outstanding");

        selection.capture(&mut host);
        selection.capture(&mut host);
        assert_eq!(host.captured, 1, "captured once");
        selection.release(&mut host);
        selection.release(&mut host);
        assert_eq!(host.captured, 0, "released once");
    }

    #[test]
    fn enabled_selection_is_never_captured() {
        let mut host = Selection::default();
        let mut selection = TextSelection::new(true);
        selection.capture(&mut host);
        assert_eq!(host.captured, 0, "selection left alone");
    }
}
