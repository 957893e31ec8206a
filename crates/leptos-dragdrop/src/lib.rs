//! Leptos DragDrop Utilities
//!
//! Mouse-driven reordering of a flat list for Leptos.
//! Rows are addressed by position; a movement threshold separates clicks
//! from drags.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals for one list
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Position of the row being dragged
    pub dragging: RwSignal<Option<usize>>,
    /// Position the dragged row will land on
    pub hover: RwSignal<Option<usize>>,
    /// Mousedown seen but threshold not yet crossed
    pub pending: RwSignal<Option<usize>>,
    start: RwSignal<(i32, i32)>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        hover: RwSignal::new(None),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl DndSignals {
    /// Row at `index` is the one being dragged
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging.get() == Some(index)
    }

    /// Row at `index` is the current landing spot
    pub fn is_hover(&self, index: usize) -> bool {
        self.hover.get() == Some(index) && self.dragging.get().is_some()
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging.set(None);
    dnd.hover.set(None);
    dnd.pending.set(None);
}

/// Mousedown handler for a draggable row; records a pending drag
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Inputs and buttons inside a row keep their own behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending.set(Some(index));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a row; marks it as the landing spot
pub fn make_on_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.hover.set(Some(index));
        }
    }
}

/// Mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.hover.set(None);
        }
    }
}

fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending.get_untracked();
        if pending.is_none() || dnd.dragging.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging.set(pending);
            dnd.hover.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document-level mouseup (drop) and mousemove (drag start) handlers.
///
/// `on_drop(from, to)` runs only for real drags that land on a different row.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let from = dnd.dragging.get_untracked();
        let to = dnd.hover.get_untracked();
        dnd.pending.set(None);
        end_drag(&dnd);

        if let (Some(from), Some(to)) = (from, to) {
            if from != to {
                on_drop(from, to);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
