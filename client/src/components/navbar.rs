//! Fixed top navigation with section highlighting and the mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::PageConfig;
use crate::content::SECTIONS;
use crate::state::chrome::MenuState;
use crate::state::scroll::ScrollState;
use crate::util::dom;

/// In-page `href` for the section with `id`.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Smooth-scroll an in-page anchor click to its section and collapse the menu.
///
/// Links that are not `#fragment`s keep their default navigation.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str, config: &PageConfig, menu: RwSignal<MenuState>) {
    let Some(id) = dom::fragment_id(href) else {
        return;
    };
    ev.prevent_default();
    dom::scroll_to_section(id, config.nav.anchor_offset);
    if menu.with_untracked(|m| m.open) {
        menu.update(MenuState::close);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let menu = expect_context::<RwSignal<MenuState>>();

    let menu_open = move || menu.with(|m| m.open);

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scroll.with(|s| s.navbar_scrolled)>
            <div class="container nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| follow_anchor(&ev, "#home", &config, menu)>
                    "SF Architect"
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            let href = section_href(id);
                            let target = href.clone();
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || scroll.with(|s| s.is_active(id))
                                        on:click=move |ev| follow_anchor(&ev, &target, &config, menu)
                                    >
                                        {section.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <Show when=move || config.theme_toggle.is_some()>
                        <ThemeToggle/>
                    </Show>
                    <button
                        id="hamburger"
                        class="hamburger"
                        class:active=menu_open
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
