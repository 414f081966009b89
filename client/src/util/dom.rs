//! Thin browser DOM helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these for the few imperative effects Leptos does not
//! express declaratively: page scroll position, body overflow, section
//! geometry, focus movement and page-wide listeners. Every helper degrades to
//! a no-op (or a neutral value) when the node or API it needs is missing, and
//! to a constant outside the browser so server rendering is deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::content::SECTIONS;
use crate::state::scroll::SectionBounds;
use crate::util::smooth_scroll;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    document().and_then(|d| d.body()).map(|b| b.style())
}

/// Current inline `overflow` of `<body>`, empty when unset.
pub fn body_overflow() -> String {
    #[cfg(feature = "hydrate")]
    {
        body_style()
            .and_then(|s| s.get_property_value("overflow").ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Set (or clear, for an empty value) the inline `overflow` of `<body>`.
pub fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(style) = body_style() else {
            return;
        };
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if result.is_err() {
            leptos::logging::warn!("failed to set body overflow to {value:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

/// Vertical page scroll offset in CSS pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Inner width of the viewport in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Document-relative top edge of the element with `id`.
pub fn section_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let el = document()?.get_element_by_id(id)?;
        let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Measure every page section that is present, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    SECTIONS
        .iter()
        .filter_map(|s| section_top(s.id).map(|top| SectionBounds { id: s.id, top }))
        .collect()
}

/// Target scroll offset for an anchor, clear of the fixed navbar.
#[must_use]
pub fn anchor_target(section_top: f64, anchor_offset: f64) -> f64 {
    (section_top - anchor_offset).max(0.0)
}

/// Smooth-scroll to the section with `id`. Returns `false` when it is absent.
pub fn scroll_to_section(id: &str, anchor_offset: f64) -> bool {
    let Some(top) = section_top(id) else {
        leptos::logging::warn!("no section #{id} to scroll to");
        return false;
    };
    smooth_scroll::scroll_to(anchor_target(top, anchor_offset));
    true
}

/// Section id named by an in-page `href` such as `#about`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Zero the motion duration custom properties on `<html>`.
pub fn disable_motion() {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = document()
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        for property in ["--duration-fast", "--duration-normal"] {
            if style.set_property(property, "0ms").is_err() {
                leptos::logging::warn!("failed to set {property}");
            }
        }
    }
}

/// Focus the element with `id`, if present.
pub fn focus_by_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let _ = el.focus();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Keep Tab focus inside `container`. Returns `true` when focus was moved and
/// the default Tab behavior should be suppressed.
#[cfg(feature = "hydrate")]
pub fn trap_focus(container: &web_sys::Element, shift: bool) -> bool {
    use crate::state::overlay::{FOCUSABLE_SELECTOR, focus_wrap_target};

    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return false;
    };
    let focusable = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        .collect::<Vec<_>>();

    let active = document().and_then(|d| d.active_element());
    let active_index = active.and_then(|a| focusable.iter().position(|el| a.is_same_node(Some(el.as_ref()))));

    let Some(target) = focus_wrap_target(focusable.len(), active_index, shift) else {
        return false;
    };
    focusable.get(target).is_some_and(|el| el.focus().is_ok())
}

/// Give every element matching `selector` a pointer cursor on first hover.
pub fn install_cursor_hints(selector: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;

        let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
            return;
        };
        let on_enter = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            let _ = el.style().set_property("cursor", "pointer");
        }) as Box<dyn FnMut(web_sys::Event)>);

        for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
            let _ = node.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
        }
        // Shared by every hinted element for the life of the page.
        on_enter.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
    }
}

/// Log failed resource loads and script errors without interrupting the page.
pub fn install_error_logger() {
    #[cfg(feature = "hydrate")]
    {
        let _ = leptos::prelude::window_event_listener(leptos::ev::error, |ev| {
            match ev.dyn_ref::<web_sys::ErrorEvent>() {
                Some(err) => leptos::logging::warn!("resource error in {}: {}", err.filename(), err.message()),
                None => leptos::logging::warn!("resource failed to load: {}", ev.type_()),
            }
        });
    }
}

/// Whether `target` is the element with `id` or one of its descendants.
#[cfg(feature = "hydrate")]
pub fn target_within(id: &str, target: Option<&web_sys::EventTarget>) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_ref::<web_sys::Node>()) else {
        return false;
    };
    document()
        .and_then(|d| d.get_element_by_id(id))
        .is_some_and(|el| el.contains(Some(node)))
}
