//! Project details overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Project cards call [`open_project`]; the overlay renders strictly from
//! [`OverlayState::content`]. While it is open the page behind it does not
//! scroll, Tab focus cycles inside it, and the close button, the backdrop or
//! Escape dismiss it. Closing restores the body overflow captured at open.

use leptos::prelude::*;

use crate::state::overlay::{DismissTrigger, OverlayState};
use crate::util::dom;

const CLOSE_BUTTON_ID: &str = "modal-close";

/// Show the record at `index`, locking page scroll behind the overlay.
pub fn open_project(overlay: RwSignal<OverlayState>, index: usize) {
    let prior = dom::body_overflow();
    let Some(title) = overlay.try_update(|o| o.open(index, &prior).title) else {
        return;
    };
    dom::set_body_overflow("hidden");
    leptos::logging::log!("project overlay opened: {title}");
}

/// Close through `trigger`, restoring page scroll if the overlay was open.
pub fn dismiss_project(overlay: RwSignal<OverlayState>, trigger: DismissTrigger) {
    if !overlay.with_untracked(OverlayState::is_visible) {
        return;
    }
    if let Some(prior) = overlay.try_update(|o| o.dismiss(trigger)).flatten() {
        dom::set_body_overflow(&prior);
    }
}

#[component]
pub fn ProjectOverlay() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    let visible = move || overlay.with(OverlayState::is_visible);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::schedule::{Scheduler, Slot};

        let scheduler = StoredValue::new_local(Scheduler::new());

        // Move focus to the close button on the tick after each open.
        Effect::new(move |was_visible: Option<bool>| {
            let now_visible = visible();
            if now_visible && was_visible != Some(true) {
                scheduler.with_value(|s| {
                    s.after_in(Slot::FocusClose, 0, || dom::focus_by_id(CLOSE_BUTTON_ID));
                });
            }
            now_visible
        });

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if !overlay.with_untracked(OverlayState::is_visible) {
                return;
            }
            match ev.key().as_str() {
                "Escape" => {
                    if let Some(prior) = overlay.try_update(|o| o.handle_key("Escape")).flatten() {
                        dom::set_body_overflow(&prior);
                    }
                }
                "Tab" => {
                    let Some(modal) = modal_ref.get_untracked() else {
                        return;
                    };
                    if dom::trap_focus(&modal, ev.shift_key()) {
                        ev.prevent_default();
                    }
                }
                _ => {}
            }
        });

        on_cleanup(move || {
            keydown.remove();
            let _ = scheduler.try_with_value(Scheduler::cancel_all);
        });
    }

    view! {
        <div
            id="project-modal"
            class="modal"
            class:hidden=move || !visible()
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            aria-hidden=move || (!visible()).to_string()
            node_ref=modal_ref
        >
            <div class="modal-backdrop" on:click=move |_| dismiss_project(overlay, DismissTrigger::Backdrop)></div>
            <div class="modal-content">
                <div class="modal-header">
                    <h3 id="modal-title">{move || overlay.with(|o| o.record().map(|r| r.title))}</h3>
                    <button
                        id=CLOSE_BUTTON_ID
                        class="modal-close"
                        aria-label="Close project details"
                        on:click=move |_| dismiss_project(overlay, DismissTrigger::CloseButton)
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {move || {
                        overlay
                            .with(OverlayState::content)
                            .map(|content| {
                                view! {
                                    <div class="project-modal-content">
                                        <div class="project-meta">
                                            <span class="project-duration-modal">{content.duration_badge}</span>
                                        </div>
                                        <p class="project-description-modal">{content.description}</p>
                                        <p class="project-details">{content.details}</p>
                                        <h4>"Technologies Used"</h4>
                                        <div class="modal-tech-tags">
                                            {content
                                                .technologies
                                                .into_iter()
                                                .map(|tech| view! { <span class="tech-tag">{tech}</span> })
                                                .collect_view()}
                                        </div>
                                        <h4>"Key Achievements"</h4>
                                        <ul class="modal-achievements">
                                            {content
                                                .achievements
                                                .into_iter()
                                                .map(|item| view! { <li>{item}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
