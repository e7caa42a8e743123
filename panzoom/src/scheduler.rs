// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty tracking and frame request coalescing.

use crate::host::Host;

/// Coalesces model changes into at most one outstanding frame request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameScheduler {
    dirty: bool,
    requested: bool,
}

impl FrameScheduler {
    /// Marks the model dirty and makes sure a frame is on its way.
    pub(crate) fn mark_dirty<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.dirty = true;
        self.request(host);
    }

    /// Requests a frame unless one is already outstanding.
    pub(crate) fn request<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.requested {
            self.requested = true;
            host.request_frame();
        }
    }

    /// Called at the top of a frame: the outstanding request has fired.
    pub(crate) fn begin_frame(&mut self) {
        self.requested = false;
    }

    /// Clears the dirty flag, returning its previous value.
    pub(crate) fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Withdraws the outstanding request, if any.
    pub(crate) fn cancel<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.requested {
            self.requested = false;
            host.cancel_frame();
        }
    }
}
