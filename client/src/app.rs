//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::preloader::Preloader;
use crate::components::project_overlay::ProjectOverlay;
use crate::components::projects::ProjectsSection;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::sections::{About, Contact, Expertise, Footer, Hero, Skills};
use crate::config::{PageConfig, THEME_STORAGE_KEY};
use crate::state::chrome::{MenuState, PreloaderPhase};
use crate::state::contact::ContactState;
use crate::state::overlay::OverlayState;
use crate::state::scroll::ScrollState;
use crate::state::theme::{Theme, ThemePreference};
use crate::util::theme_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page configuration and one state signal per page component,
/// then installs the page-wide listeners once the document is hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::default().with_reduced_motion(theme_storage::system_prefers_reduced_motion());
    let theme_key = config.theme_storage_key().unwrap_or(THEME_STORAGE_KEY);

    // The server renders the default theme; the stored preference is applied
    // after hydration so both renders agree.
    let scroll = RwSignal::new(ScrollState::default());
    let overlay = RwSignal::new(OverlayState::default());
    let theme = RwSignal::new(ThemePreference { theme: Theme::default(), key: theme_key });
    let menu = RwSignal::new(MenuState::default());
    let contact = RwSignal::new(ContactState::default());
    let preloader = RwSignal::new(PreloaderPhase::default());

    provide_context(config);
    provide_context(scroll);
    provide_context(overlay);
    provide_context(theme);
    provide_context(menu);
    provide_context(contact);
    provide_context(preloader);

    #[cfg(feature = "hydrate")]
    install_page_listeners(config, scroll, theme, menu);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Salesforce Solution Architect | Portfolio"/>

        {config.preloader.map(|p| view! { <Preloader config=p/> })}
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Expertise/>
            <ProjectsSection/>
            <Skills/>
            <Contact/>
        </main>
        <Footer/>
        <Show when=move || config.overlay>
            <ProjectOverlay/>
        </Show>
        <Show when=move || config.scroll_top.is_some()>
            <ScrollToTop/>
        </Show>
    }
}

/// Startup wiring that needs the hydrated document: the stored theme, reduced
/// motion, scroll tracking, menu collapse, reveals, cursor hints and the
/// resource error logger.
#[cfg(feature = "hydrate")]
fn install_page_listeners(
    config: PageConfig,
    scroll: RwSignal<ScrollState>,
    theme: RwSignal<ThemePreference>,
    menu: RwSignal<MenuState>,
) {
    use leptos::ev;

    use crate::util::dom;
    use crate::util::revealers::{self, Revealers};
    use crate::util::schedule::{Scheduler, Slot};

    let scheduler = StoredValue::new_local(Scheduler::new());
    let reveals = StoredValue::new_local(None::<Revealers>);

    let refresh_scroll = move || {
        let sections = dom::section_bounds();
        let offset = dom::scroll_offset();
        scroll.update(|s| {
            if s.on_scroll(offset, &sections, &config.nav, config.scroll_top.as_ref()) {
                leptos::logging::log!("active section: {:?}", s.active_section);
            }
        });
    };

    Effect::new(move || {
        dom::install_error_logger();
        if config.reduced_motion {
            dom::disable_motion();
        }

        let preference = match config.theme_storage_key() {
            Some(key) => theme_storage::read_preference(key),
            None => ThemePreference {
                theme: Theme::resolve(None, theme_storage::system_prefers_dark()),
                key: theme.get_untracked().key,
            },
        };
        theme_storage::apply(preference.theme);
        theme.set(preference);

        refresh_scroll();
        dom::install_cursor_hints(config.cursor_hint_selector);
        scheduler.with_value(|s| reveals.set_value(Some(revealers::install(&config.reveal, s))));
    });

    let on_scroll = window_event_listener(ev::scroll, move |_| refresh_scroll());

    let on_click = window_event_listener(ev::click, move |ev| {
        if !menu.with_untracked(|m| m.open) {
            return;
        }
        let target = ev.target();
        let inside_menu = dom::target_within("nav-menu", target.as_ref());
        let on_hamburger = dom::target_within("hamburger", target.as_ref());
        menu.update(|m| m.on_document_click(inside_menu, on_hamburger));
    });

    let on_resize = window_event_listener(ev::resize, move |_| {
        scheduler.with_value(|s| {
            s.after_in(Slot::ResizeDebounce, config.menu.resize_debounce_ms, move || {
                let width = dom::viewport_width();
                let _ = menu.try_update(|m| m.on_resize(width, &config.menu));
            });
        });
    });

    on_cleanup(move || {
        on_scroll.remove();
        on_click.remove();
        on_resize.remove();
        let _ = scheduler.try_with_value(Scheduler::cancel_all);
        if let Some(reveals) = reveals.try_update_value(Option::take).flatten() {
            reveals.disconnect();
        }
    });
}
