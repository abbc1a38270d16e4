//! Scroll-spy: an `IntersectionObserver` over the page sections.
//!
//! Sections report in as they cross the observer band; the page applies the
//! reports in delivery order, so when one callback batch carries several
//! sections the last one delivered ends up active.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use viewstate::section::SectionId;

/// Observer band: a section counts as active while it crosses the strip
/// between 10% from the top of the viewport and 80% from the bottom.
pub const ROOT_MARGIN: &str = "-10% 0px -80% 0px";

/// RAII guard for the section observer. Dropping it disconnects the
/// observer and releases the callback closure.
#[cfg(feature = "hydrate")]
pub struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

#[cfg(feature = "hydrate")]
impl SectionObserver {
    /// Observe every section anchor currently in the document.
    ///
    /// `on_enter` fires once per intersecting section, in the order the
    /// browser delivers the entries. Returns `None` when the observer
    /// cannot be constructed (no window, observer unsupported).
    pub fn observe(mut on_enter: impl FnMut(SectionId) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(section) = SectionId::from_anchor(&entry.target().id()) {
                    on_enter(section);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let observer =
            web_sys::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .ok()?;

        for section in SectionId::ALL {
            if let Some(el) = document.get_element_by_id(section.anchor()) {
                observer.observe(&el);
            }
        }

        Some(Self { observer, _closure: closure })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
