//! Full-screen cover shown until the page has loaded.

use leptos::prelude::*;

use crate::config::PreloaderConfig;
use crate::state::chrome::PreloaderPhase;

#[component]
pub fn Preloader(config: PreloaderConfig) -> impl IntoView {
    let phase = expect_context::<RwSignal<PreloaderPhase>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::schedule::Scheduler;

        let scheduler = StoredValue::new_local(Scheduler::new());
        let advance = move || {
            let _ = phase.try_update(|p| *p = p.advance());
        };
        // Hold, then fade, then unmount. Both steps are scheduled up front so
        // no timer callback schedules another.
        let start = move || {
            scheduler.with_value(|s| {
                s.after(config.hold_ms, advance);
                s.after(config.hold_ms + config.fade_ms, advance);
            });
        };

        let loaded = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.ready_state() == "complete");
        if loaded {
            Effect::new(start);
        } else {
            let on_load = window_event_listener(leptos::ev::load, move |_| start());
            on_cleanup(move || on_load.remove());
        }
        on_cleanup(move || {
            let _ = scheduler.try_with_value(Scheduler::cancel_all);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div class="preloader" style:opacity=move || phase.get().opacity() aria-hidden="true">
                <div class="loading preloader__spinner"></div>
            </div>
        </Show>
    }
}
