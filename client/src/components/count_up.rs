//! Animated count-up figure.
//!
//! Renders `0` on the server and while hydrating, then sweeps linearly to
//! the target over `duration_ms`. The interval is an RAII guard: finishing
//! the sweep or unmounting the component drops it, which cancels the timer.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

/// Tick period for the sweep; ~60 updates over the default duration.
#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 16;

#[component]
pub fn CountUp(
    /// Value the sweep lands on.
    target: f64,
    /// Fraction digits to render.
    #[prop(default = 0)]
    decimals: u32,
    /// Sweep length in milliseconds.
    #[prop(default = 1000)]
    duration_ms: u32,
) -> impl IntoView {
    let shown = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&interval_slot);
        Effect::new(move || {
            if slot.borrow().is_some() {
                return;
            }
            let started = js_sys::Date::now();
            let tick_slot = Rc::clone(&slot);
            let interval = Interval::new(TICK_MS, move || {
                let progress =
                    ((js_sys::Date::now() - started) / f64::from(duration_ms)).min(1.0);
                shown.set(target * progress);
                if progress >= 1.0 {
                    tick_slot.borrow_mut().take();
                }
            });
            *slot.borrow_mut() = Some(interval);
        });
        let cleanup = Rc::clone(&interval_slot);
        on_cleanup(move || {
            cleanup.borrow_mut().take();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        let _ = duration_ms;
    }

    let text = move || {
        let precision = decimals as usize;
        format!("{:.precision$}", shown.get())
    };

    view! { <span class="count-up-text">{text}</span> }
}
