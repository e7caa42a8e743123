// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element and host for driving the engine in tests.

#![allow(
    dead_code,
    reason = "Each integration test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use kurbo::{Affine, Rect, Size};
use panzoom::{Element, ElementKind, EventKind, Host, Listeners, PanZoom, PanZoomOptions};

/// An element whose layout is fixed and whose writes are recorded.
#[derive(Clone, Debug)]
pub(crate) struct MockElement {
    pub(crate) kind: ElementKind,
    pub(crate) rect: Rect,
    pub(crate) owner: Rect,
    pub(crate) size: Size,
    pub(crate) bbox: Rect,
    pub(crate) ctm: Option<Affine>,
    pub(crate) owner_ctm: Option<Affine>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) owner_attributes: BTreeMap<String, String>,
    pub(crate) scroll_resets: usize,
}

impl MockElement {
    /// A plain element filling an owner of the given size at the origin.
    pub(crate) fn html(width: f64, height: f64) -> Self {
        let rect = Rect::new(0.0, 0.0, width, height);
        Self {
            kind: ElementKind::Html,
            rect,
            owner: rect,
            size: Size::new(width, height),
            bbox: rect,
            ctm: None,
            owner_ctm: None,
            styles: BTreeMap::new(),
            attributes: BTreeMap::new(),
            owner_attributes: BTreeMap::new(),
            scroll_resets: 0,
        }
    }

    /// A graphics element inside an `<svg>` that still has its `viewBox`.
    pub(crate) fn svg_graphics(owner: Rect, bbox: Rect, ctm: Option<Affine>) -> Self {
        let mut element = Self::html(owner.width(), owner.height());
        element.kind = ElementKind::SvgGraphics;
        element.owner = owner;
        element.bbox = bbox;
        element.ctm = ctm;
        element
            .owner_attributes
            .insert("viewBox".into(), "0 0 100 100".into());
        element
    }
}

impl Element for MockElement {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn owner_client_rect(&self) -> Rect {
        self.owner
    }

    fn client_size(&self) -> Size {
        self.size
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }

    fn ctm(&self) -> Option<Affine> {
        self.ctm
    }

    fn owner_ctm(&self) -> Option<Affine> {
        self.owner_ctm
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.into(), value.into());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.into(), value.into());
    }

    fn set_owner_attribute(&mut self, name: &str, value: &str) {
        self.owner_attributes.insert(name.into(), value.into());
    }

    fn remove_owner_attribute(&mut self, name: &str) {
        self.owner_attributes.remove(name);
    }

    fn reset_scroll(&mut self) {
        self.scroll_resets += 1;
    }
}

/// A host that records what the engine asks of it.
#[derive(Debug, Default)]
pub(crate) struct MockHost {
    pub(crate) frame_requests: usize,
    pub(crate) frame_cancels: usize,
    /// A requested frame has not been delivered yet.
    pub(crate) pending: bool,
    pub(crate) listeners: Listeners,
    pub(crate) listener_updates: usize,
    pub(crate) selection_captured: bool,
}

impl Host for MockHost {
    fn request_frame(&mut self) {
        self.frame_requests += 1;
        self.pending = true;
    }

    fn cancel_frame(&mut self) {
        self.frame_cancels += 1;
        self.pending = false;
    }

    fn listeners_changed(&mut self, listeners: Listeners) {
        self.listeners = listeners;
        self.listener_updates += 1;
    }

    fn capture_text_selection(&mut self) {
        self.selection_captured = true;
    }

    fn release_text_selection(&mut self) {
        self.selection_captured = false;
    }
}

pub(crate) type Engine = PanZoom<MockElement, MockHost>;

/// Builds an engine over `element` and flushes its first frame.
pub(crate) fn engine_with(element: MockElement, options: PanZoomOptions) -> Engine {
    let mut pz = PanZoom::new(element, MockHost::default(), options).expect("valid options");
    deliver_frame(&mut pz, 0);
    pz
}

/// A 100 x 100 plain element with the given options, first frame flushed.
pub(crate) fn engine(options: PanZoomOptions) -> Engine {
    engine_with(MockElement::html(100.0, 100.0), options)
}

/// Runs the frame the engine asked for, if any. Returns whether one ran.
pub(crate) fn deliver_frame(pz: &mut Engine, now: u64) -> bool {
    if !pz.host().pending {
        return false;
    }
    pz.host_mut().pending = false;
    pz.frame(now).expect("frame");
    true
}

/// Delivers frames every 16 ms from `start` until the engine stops asking.
///
/// Returns the time of the last frame.
pub(crate) fn run_until_idle(pz: &mut Engine, start: u64) -> u64 {
    let mut now = start;
    for _ in 0..2_000 {
        if !deliver_frame(pz, now) {
            return now;
        }
        now += 16;
    }
    panic!("engine never went idle");
}

/// Records every notification the engine fires.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventLog(Rc<RefCell<Vec<EventKind>>>);

impl EventLog {
    pub(crate) fn attach(pz: &mut Engine) -> Self {
        let log = Self::default();
        for kind in [
            EventKind::Pan,
            EventKind::PanStart,
            EventKind::PanEnd,
            EventKind::Zoom,
            EventKind::ZoomEnd,
            EventKind::Transform,
        ] {
            let events = Rc::clone(&log.0);
            pz.on(kind, move |event| events.borrow_mut().push(event.kind));
        }
        log
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.0.borrow().iter().filter(|k| **k == kind).count()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub(crate) fn events(&self) -> Vec<EventKind> {
        self.0.borrow().clone()
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
