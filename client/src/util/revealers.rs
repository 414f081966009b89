//! Scroll-triggered reveals: card fade-ins, skill bar fills and stat counters.
//!
//! DESIGN
//! ======
//! Three independent `IntersectionObserver`s, one per [`RevealGroup`]. Each
//! observed element is tagged with a `data-reveal-id` at install time so a
//! shared [`RevealTracker`] can guarantee it is revealed once, even if the
//! observer reports it again before `unobserve` takes effect. Delays and the
//! counter interval run on the caller's scheduler so teardown cancels them.
//!
//! The elements are rendered statically by the page components; this module
//! only adds classes, inline widths and counter text, none of which Leptos
//! tracks.

#[cfg(test)]
#[path = "revealers_test.rs"]
mod revealers_test;

use crate::config::{ObserverSpec, RevealConfig};

pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";
pub const INSTALL_CLASS: &str = "animate-on-scroll";
pub const REVEALED_CLASS: &str = "animated";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Generic,
    Skill,
    Counter,
}

impl RevealGroup {
    pub const ALL: [Self; 3] = [Self::Generic, Self::Skill, Self::Counter];

    #[must_use]
    pub fn spec(self, config: &RevealConfig) -> ObserverSpec {
        match self {
            Self::Generic => config.generic,
            Self::Skill => config.skills,
            Self::Counter => config.counters,
        }
    }

    /// Tracker key for the `index`-th element of this group.
    #[must_use]
    pub fn key(self, index: u32) -> String {
        let prefix = match self {
            Self::Generic => "reveal",
            Self::Skill => "skill",
            Self::Counter => "counter",
        };
        format!("{prefix}-{index}")
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Revealers, install};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{INSTALL_CLASS, REVEAL_ID_ATTRIBUTE, REVEALED_CLASS, RevealGroup};
    use crate::config::RevealConfig;
    use crate::state::reveal::{CounterAnimation, RevealTracker, SkillLevel, parse_counter_target};
    use crate::util::schedule::Scheduler;

    type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
    type Tracker = Rc<RefCell<RevealTracker<String>>>;

    /// Live observers. Keep alive for as long as reveals should happen.
    pub struct Revealers {
        observers: Vec<(IntersectionObserver, ObserverCallback)>,
    }

    impl Revealers {
        pub fn disconnect(self) {
            for (observer, _callback) in self.observers {
                observer.disconnect();
            }
        }
    }

    /// Tag and observe every revealable element currently in the document.
    pub fn install(config: &RevealConfig, scheduler: &Scheduler) -> Revealers {
        let tracker: Tracker = Rc::new(RefCell::new(RevealTracker::default()));
        let observers = RevealGroup::ALL
            .into_iter()
            .filter_map(|group| observe_group(group, config, scheduler, &tracker))
            .collect();
        Revealers { observers }
    }

    fn observe_group(
        group: RevealGroup,
        config: &RevealConfig,
        scheduler: &Scheduler,
        tracker: &Tracker,
    ) -> Option<(IntersectionObserver, ObserverCallback)> {
        let spec = group.spec(config);
        let document = web_sys::window()?.document()?;
        let Ok(nodes) = document.query_selector_all(spec.selector) else {
            leptos::logging::warn!("invalid reveal selector {:?}", spec.selector);
            return None;
        };

        let tracker = Rc::clone(tracker);
        let scheduler = scheduler.clone();
        let config = *config;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(key) = target.get_attribute(REVEAL_ID_ATTRIBUTE) else {
                    continue;
                };
                if tracker.borrow_mut().reveal(key) {
                    reveal(group, &target, &config, &scheduler);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(spec.threshold));
        init.set_root_margin(spec.root_margin);
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };

        for (index, node) in (0..nodes.length()).filter_map(|i| nodes.item(i).map(|n| (i, n))) {
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            let _ = el.set_attribute(REVEAL_ID_ATTRIBUTE, &group.key(index));
            if group == RevealGroup::Generic {
                let _ = el.class_list().add_1(INSTALL_CLASS);
            }
            observer.observe(&el);
        }
        Some((observer, callback))
    }

    fn reveal(group: RevealGroup, target: &Element, config: &RevealConfig, scheduler: &Scheduler) {
        match group {
            RevealGroup::Generic => {
                let _ = target.class_list().add_1(REVEALED_CLASS);
            }
            RevealGroup::Skill => {
                let raw = target.get_attribute("data-skill").unwrap_or_default();
                let Some(level) = SkillLevel::parse(&raw) else {
                    leptos::logging::warn!("skill bar has unusable data-skill {raw:?}");
                    return;
                };
                let Ok(bar) = target.clone().dyn_into::<HtmlElement>() else {
                    return;
                };
                scheduler.after(config.skill_delay_ms, move || {
                    let _ = bar.style().set_property("width", &level.width());
                });
            }
            RevealGroup::Counter => {
                let raw = target.get_attribute("data-target").unwrap_or_default();
                let Some(goal) = parse_counter_target(&raw) else {
                    leptos::logging::warn!("counter has unusable data-target {raw:?}");
                    return;
                };
                let el = target.clone();
                let mut animation = CounterAnimation::new(goal, config.counter_steps);
                scheduler.every(config.counter_interval_ms, move || match animation.tick() {
                    Some(frame) => {
                        el.set_text_content(Some(&frame.value.to_string()));
                        !frame.done
                    }
                    None => false,
                });
            }
        }
    }
}
