//! Static page sections.
//!
//! These render the markup the revealers look for: `.stat-number[data-target]`
//! counters starting at zero, `.skill-fill[data-skill]` bars starting empty,
//! and the cards faded in on scroll.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::navbar::follow_anchor;
use crate::config::PageConfig;
use crate::content::{CONTACT_CHANNELS, DOMAINS, SKILL_CATEGORIES, STATS};
use crate::state::chrome::MenuState;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <h1 class="hero-title">"Salesforce Solution Architect"</h1>
                <p class="hero-subtitle">
                    "Designing multi-cloud Salesforce platforms that scale with the business."
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn--primary" on:click=move |ev| follow_anchor(&ev, "#projects", &config, menu)>
                        "View Projects"
                    </a>
                    <a href="#contact" class="btn btn--outline" on:click=move |ev| follow_anchor(&ev, "#contact", &config, menu)>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section">
            <div class="container">
                <h2 class="section-title">"About"</h2>
                <p class="about-text">
                    "Architect and hands-on developer across Sales, Service, Community and Commerce clouds, "
                    "focused on integration, security and automation for enterprise teams."
                </p>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <span class="stat-number" data-target=stat.target.to_string()>"0"</span>
                                    <span class="stat-suffix">{stat.suffix}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Expertise() -> impl IntoView {
    view! {
        <section id="expertise" class="expertise section">
            <div class="container">
                <h2 class="section-title">"Expertise"</h2>
                <div class="domains-grid">
                    {DOMAINS
                        .iter()
                        .map(|domain| {
                            view! {
                                <div class="domain-card card">
                                    <div class="domain-icon">{domain.icon}</div>
                                    <h3>{domain.title}</h3>
                                    <p>{domain.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills section">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skill-category">
                                    <h3>{category.title}</h3>
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="skill-item">
                                                    <div class="skill-header">
                                                        <span class="skill-name">{skill.name}</span>
                                                        <span class="skill-level">{format!("{}%", skill.level)}</span>
                                                    </div>
                                                    <div class="skill-bar">
                                                        <div class="skill-fill" data-skill=skill.level.to_string()></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<PageConfig>();

    view! {
        <section id="contact" class="contact section">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">"Let's Work Together"</h2>
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <a class="contact-item" href=channel.href>
                                    <span class="contact-icon">{channel.icon}</span>
                                    <span class="contact-label">{channel.label}</span>
                                    <span class="contact-value">{channel.value}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                {config.contact.map(|contact| view! { <ContactForm config=contact/> })}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© Salesforce Solution Architect. Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}
