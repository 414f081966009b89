//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::util::smooth_scroll;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    view! {
        <button
            class="scroll-to-top"
            class:visible=move || scroll.with(|s| s.show_scroll_top)
            aria-label="Scroll to top"
            on:click=move |_| smooth_scroll::scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
