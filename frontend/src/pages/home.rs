use log::info;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::anchor::use_anchor_scroll;
use crate::components::chat::ChatWidget;
use crate::components::contact::ContactForm;
use crate::components::project_card::{ProjectCard, PROJECTS};
use crate::components::recommend::RecommendWidget;
use crate::config;
use crate::hero::{start_hero_animation, AnimationHandle, GsapAnimation};
use crate::theme::{render_theme, use_theme_observer, ThemeAction, ThemeState};
use crate::view::ViewHandle;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub view: ViewHandle,
    #[prop_or_default]
    pub animation: Option<AnimationHandle>,
}

/// Portfolio wired to the live document and whatever animation library the
/// page loaded.
#[function_component(Home)]
pub fn home() -> Html {
    let view = use_state(ViewHandle::dom);
    let animation = use_state(GsapAnimation::handle);

    html! {
        <Portfolio view={(*view).clone()} animation={(*animation).clone()} />
    }
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let theme = use_reducer(ThemeState::default);

    use_anchor_scroll(props.view.clone());
    use_theme_observer(theme.dispatcher());

    {
        let animation = props.animation.clone();
        use_mount(move || {
            if start_hero_animation(animation.as_ref().map(|a| &*a.0)) {
                info!("Hero animation started");
            }
        });
    }

    {
        let view = props.view.clone();
        use_effect_with_deps(
            move |state: &ThemeState| {
                render_theme(&*view, state);
                || ()
            },
            (*theme).clone(),
        );
    }

    let on_theme = {
        let dispatcher = theme.dispatcher();
        Callback::from(move |action: ThemeAction| dispatcher.dispatch(action))
    };

    html! {
        <div class="portfolio">
            <style>{ PAGE_STYLE }</style>
            <nav class="top-nav">
                <a href="#hero" class="nav-logo">{ config::OWNER_NAME }</a>
                <div class="nav-links">
                    <a href="#about">{ "About" }</a>
                    <a href="#projects">{ "Projects" }</a>
                    <a href="#recommend">{ "Recommend" }</a>
                    <a href="#chat">{ "Chat" }</a>
                    <a href="#contact">{ "Contact" }</a>
                </div>
            </nav>

            <header id="hero" class="section hero" data-theme="dark" style="--accent: #38bdf8;">
                <div id="hero-bg" class="hero-bg"></div>
                <div class="hero-content">
                    <h1>{ config::OWNER_NAME }</h1>
                    <p class="hero-tagline">{ config::OWNER_TAGLINE }</p>
                    <a href="#projects" class="hero-cta">{ "See my work" }</a>
                </div>
            </header>

            <section id="about" class="section" data-theme="dark" style="--accent: #38bdf8;">
                <h2>{ "About" }</h2>
                <p>
                    { "I build machine learning systems, data products and the automation that keeps them running. \
                       Most of my work sits where models meet production: pipelines, dashboards and the glue in between." }
                </p>
            </section>

            <section id="projects" class="section" data-theme="purple" style="--accent: #a855f7;">
                <h2>{ "Projects" }</h2>
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard
                            key={project.id}
                            project={project.clone()}
                            view={props.view.clone()}
                            on_theme={on_theme.clone()}
                        />
                    }) }
                </div>
            </section>

            <section id="recommend" class="section" data-theme="green" style="--accent: #22c55e;">
                <h2>{ "Not sure where to start?" }</h2>
                <p>{ "Tell me what you're interested in and I'll point you at a project." }</p>
                <RecommendWidget view={props.view.clone()} />
            </section>

            <section id="chat" class="section" data-theme="dark" style="--accent: #f59e0b;">
                <h2>{ "Ask the assistant" }</h2>
                <ChatWidget />
            </section>

            <section id="contact" class="section" style="--accent: #f43f5e;">
                <h2>{ "Contact" }</h2>
                <ContactForm view={props.view.clone()} />
            </section>
        </div>
    }
}

const PAGE_STYLE: &str = r#"
    :root {
        --global-accent: #38bdf8;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #0b0f19;
        color: #e5e7eb;
        transition: background 0.6s ease, color 0.6s ease;
    }
    body[data-active-theme="purple"] {
        background: #1a1030;
    }
    body[data-active-theme="green"] {
        background: #0c1f17;
    }
    a {
        color: var(--global-accent);
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        display: flex;
        justify-content: space-between;
        padding: 1rem 2rem;
        background: rgba(11, 15, 25, 0.8);
        backdrop-filter: blur(10px);
        z-index: 10;
    }
    .nav-links a {
        margin-left: 1.5rem;
        text-decoration: none;
    }
    .section {
        min-height: 80vh;
        padding: 6rem 2rem 4rem;
        max-width: 960px;
        margin: 0 auto;
    }
    .hero {
        position: relative;
        overflow: hidden;
        display: flex;
        align-items: center;
        max-width: none;
    }
    .hero-bg {
        position: absolute;
        inset: 0 -20% 0 0;
        background: radial-gradient(circle at 30% 40%, var(--global-accent), transparent 60%);
        opacity: 0.35;
        z-index: -1;
    }
    .hero-cta {
        display: inline-block;
        margin-top: 1.5rem;
        padding: 0.75rem 1.5rem;
        border: 1px solid var(--global-accent);
        border-radius: 999px;
        text-decoration: none;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .card {
        padding: 1.5rem;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
    }
    .card-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        padding: 0;
        list-style: none;
        font-size: 0.85rem;
        color: #9ca3af;
    }
    button {
        padding: 0.6rem 1.2rem;
        border: none;
        border-radius: 8px;
        background: var(--global-accent);
        color: #0b0f19;
        cursor: pointer;
    }
    input, textarea {
        padding: 0.6rem;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
        color: inherit;
    }
    .chat-window {
        height: 320px;
        overflow-y: auto;
        padding: 1rem;
        margin-bottom: 1rem;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.03);
    }
    .chat-message {
        margin-bottom: 0.75rem;
    }
    .chat-message.user {
        text-align: right;
    }
    .chat-message.pending {
        opacity: 0.6;
    }
    .chat-controls, .recommend-controls {
        display: flex;
        gap: 0.5rem;
    }
    .chat-controls input, .recommend-controls input {
        flex: 1;
    }
    .recommend-output {
        margin-top: 1rem;
        min-height: 3rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        max-width: 480px;
    }
    .contact-form textarea {
        min-height: 120px;
    }
"#;
