//! Featured project cards.

use leptos::prelude::*;

use crate::catalog;
use crate::components::project_overlay::open_project;
use crate::config::PageConfig;
use crate::state::overlay::OverlayState;

/// Technology tags shown on a card before the overlay lists them all.
const CARD_TAG_LIMIT: usize = 3;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let overlay = expect_context::<RwSignal<OverlayState>>();

    view! {
        <section id="projects" class="projects section">
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="projects-grid">
                    {catalog::all()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let hidden_tags = project.technologies.len().saturating_sub(CARD_TAG_LIMIT);
                            view! {
                                <article class="project-card card">
                                    <div class="card__body">
                                        <div class="project-header">
                                            <h3 class="project-title">{project.title}</h3>
                                            <span class="project-duration">{project.duration}</span>
                                        </div>
                                        <p class="project-description">{project.description}</p>
                                        <div class="project-tech">
                                            {project
                                                .technologies
                                                .iter()
                                                .take(CARD_TAG_LIMIT)
                                                .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                                                .collect_view()}
                                            <Show when=move || { hidden_tags > 0 }>
                                                <span class="tech-tag tech-tag--more">{format!("+{hidden_tags}")}</span>
                                            </Show>
                                        </div>
                                        <Show when=move || config.overlay>
                                            <button
                                                class="btn btn--outline btn--sm project-details-btn"
                                                on:click=move |_| open_project(overlay, index)
                                            >
                                                "View Details"
                                            </button>
                                        </Show>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
