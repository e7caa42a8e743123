// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications fired by the engine.

use core::fmt;

use hashbrown::HashMap;
use panzoom_view2d::Transform;

/// Notification kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The translation changed.
    Pan,
    /// A drag produced its first movement.
    PanStart,
    /// A drag that had started ended.
    PanEnd,
    /// The scale changed.
    Zoom,
    /// A smooth zoom ran to completion.
    ZoomEnd,
    /// The transform was written to the element.
    Transform,
}

/// A fired notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomEvent {
    /// What happened.
    pub kind: EventKind,
    /// The transform at the time of the event.
    pub transform: Transform,
}

/// Handle returned by [`Emitter::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PanZoomEvent)>;

/// Listener registry keyed by [`EventKind`].
#[derive(Default)]
pub struct Emitter {
    next_id: u64,
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
}

impl Emitter {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `listener` to `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&PanZoomEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Unsubscribes a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|(lid, _)| *lid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Number of listeners subscribed to `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Calls every listener of `kind`, in subscription order.
    pub fn emit(&mut self, kind: EventKind, transform: Transform) {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return;
        };
        let event = PanZoomEvent { kind, transform };
        for (_, listener) in list.iter_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .listeners
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| *kind as u8);
        f.debug_struct("Emitter")
            .field("next_id", &self.next_id)
            .field("listeners", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn listeners_fire_in_order_and_unsubscribe() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();

        let a = {
            let log = Rc::clone(&log);
            emitter.on(EventKind::Zoom, move |e| log.borrow_mut().push(("a", e.kind)))
        };
        {
            let log = Rc::clone(&log);
            emitter.on(EventKind::Zoom, move |e| log.borrow_mut().push(("b", e.kind)));
        }
        emitter.emit(EventKind::Zoom, Transform::IDENTITY);
        emitter.emit(EventKind::Pan, Transform::IDENTITY);
        assert_eq!(
            *log.borrow(),
            vec![("a", EventKind::Zoom), ("b", EventKind::Zoom)]
        );

        assert!(emitter.off(a));
        assert!(!emitter.off(a));
        assert_eq!(emitter.listener_count(EventKind::Zoom), 1);
    }

    #[test]
    fn event_carries_the_transform() {
        let seen = Rc::new(RefCell::new(None));
        let mut emitter = Emitter::new();
        {
            let seen = Rc::clone(&seen);
            emitter.on(EventKind::Transform, move |e| *seen.borrow_mut() = Some(e.transform));
        }
        emitter.emit(EventKind::Transform, Transform::new(1.0, 2.0, 3.0));
        assert_eq!(*seen.borrow(), Some(Transform::new(1.0, 2.0, 3.0)));
    }
}
