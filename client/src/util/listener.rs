//! Scoped DOM event listeners.
//!
//! A listener registered through [`EventListener`] stays attached exactly as
//! long as the guard lives; dropping the guard detaches it. The guard owns
//! the `wasm_bindgen` closure, so callers never hold raw closures or risk
//! leaving a handler wired to a dead component.
//!
//! Components keep guards in an `Rc<RefCell<Option<...>>>` slot: filling the
//! slot attaches, `take()`-ing it detaches. Listeners that should only live
//! while some state holds (menu open, drag in progress) are attached and
//! dropped from an effect watching that state.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// RAII guard for a DOM event listener.
#[cfg(feature = "hydrate")]
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl EventListener {
    /// Attach `handler` to `target` for `event`.
    ///
    /// Returns `None` when registration fails; the handler is dropped with
    /// the closure in that case.
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), event, closure })
    }

    /// Attach a listener to the window.
    pub fn window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(&window, event, handler)
    }

    /// Attach a listener to the document.
    pub fn document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::new(&document, event, handler)
    }
}

#[cfg(feature = "hydrate")]
impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Whether the event originated inside an element matching `selector`.
///
/// Used by outside-click handlers: a document-level listener fires for every
/// click, and the component ignores the ones that land in its own subtree.
#[cfg(feature = "hydrate")]
pub fn event_hits(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
