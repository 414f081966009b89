//! Smooth scrolling with a `requestAnimationFrame` fallback.
//!
//! Browsers that support `scroll-behavior` get a native smooth scroll. Others
//! get a best-effort 1 s ease-in-out-cubic animation toward the numeric target.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

pub const FALLBACK_DURATION_MS: f64 = 1000.0;

/// Ease-in-out cubic over `t` in `[0, 1]`; values outside are clamped.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// One fallback scroll animation from `start` to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub start: f64,
    pub target: f64,
    pub duration_ms: f64,
}

impl ScrollPlan {
    #[must_use]
    pub fn new(start: f64, target: f64) -> Self {
        Self { start, target, duration_ms: FALLBACK_DURATION_MS }
    }

    /// Scroll position `elapsed_ms` after the animation started.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.target;
        }
        let progress = ease_in_out_cubic(elapsed_ms / self.duration_ms);
        self.start + (self.target - self.start) * progress
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Smoothly scroll the window so its top edge lands on `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if supports_scroll_behavior(&window) {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        } else {
            let start = window.scroll_y().unwrap_or(0.0);
            animate_fallback(ScrollPlan::new(start, top));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

#[cfg(feature = "hydrate")]
fn supports_scroll_behavior(window: &web_sys::Window) -> bool {
    use wasm_bindgen::JsCast;

    window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .and_then(|el| js_sys::Reflect::has(&el.style(), &"scrollBehavior".into()).ok())
        .unwrap_or(false)
}

#[cfg(feature = "hydrate")]
fn animate_fallback(plan: ScrollPlan) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    type FrameCallback = Closure<dyn FnMut(f64)>;

    // The callback re-registers itself each frame and drops itself when done.
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let started = Rc::new(RefCell::new(None::<f64>));

    let cb = Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(window) = web_sys::window() else {
            holder_for_cb.borrow_mut().take();
            return;
        };
        let start = *started.borrow_mut().get_or_insert(timestamp);
        let elapsed = timestamp - start;
        window.scroll_to_with_x_and_y(0.0, plan.position_at(elapsed));

        if plan.is_finished(elapsed) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let next = holder_for_cb
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        if !matches!(next, Some(Ok(_))) {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    let Some(window) = web_sys::window() else {
        return;
    };
    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        window.scroll_to_with_x_and_y(0.0, plan.target);
    }
}
