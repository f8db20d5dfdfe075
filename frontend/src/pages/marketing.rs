use yew::prelude::*;
use yew_router::prelude::*;
use chrono::Datelike;
use log::debug;

use crate::Route;
use crate::components::booking_modal::{BookingModal, BOOKING_TITLE};
use crate::components::contact_form::ContactForm;
use crate::components::content_tile::{ContentTile, DETAILS_HEADING};
use crate::content::{self, SectionKey, COMPANY_NAME, GITHUB_URL, LINKEDIN_URL, PITCH, TAGLINE};
use crate::state::{ShellAction, ShellState};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_book = props.on_book.clone();
    html! {
        <section class="hero">
            <div class="hero-inner">
                <h1 class="hero-title">
                    <span>{ COMPANY_NAME }</span>
                </h1>
                <span class="hero-tagline">{ TAGLINE }</span>
                <div class="hero-divider"></div>
                <p class="hero-pitch">{ PITCH }</p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={move |_: MouseEvent| on_book.emit(())}>
                        { BOOKING_TITLE }
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub active: SectionKey,
}

#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    html! {
        <div class="section-nav">
            { for content::CONTENT_SECTIONS.iter().map(|section| {
                let active = section.key == props.active;
                html! {
                    <Link<Route>
                        to={section.key.route()}
                        classes={classes!("section-pill", active.then(|| "active"))}
                    >
                        { section.label }
                    </Link<Route>>
                }
            }) }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span>{ format!("© {} {}. All rights reserved.", year, COMPANY_NAME) }</span>
                <div class="footer-links">
                    <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <svg class="footer-icon" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M4.98 3.5a2.5 2.5 0 11.02 5 2.5 2.5 0 01-.02-5zM4 8h3v12H4V8zm5 0h3v1.5h.04a3.3 3.3 0 013-1.65c3.22 0 3.82 2.12 3.82 4.87V20h-3v-6.5c0-1.56-.03-3.57-2.18-3.57-2.2 0-2.54 1.72-2.54 3.45V20h-3V8z" />
                        </svg>
                    </a>
                    <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <svg class="footer-icon" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M12 2C6.48 2 2 6.48 2 12c0 4.42 2.87 8.16 6.84 9.49.5.09.68-.22.68-.49 0-.24-.01-.87-.01-1.71-2.78.6-3.37-1.34-3.37-1.34-.46-1.17-1.12-1.48-1.12-1.48-.92-.62.07-.61.07-.61 1.02.07 1.56 1.05 1.56 1.05.9 1.55 2.36 1.1 2.93.84.09-.65.35-1.1.63-1.35-2.22-.25-4.56-1.11-4.56-4.93 0-1.09.39-1.99 1.03-2.69-.1-.25-.45-1.27.1-2.65 0 0 .84-.27 2.75 1.02A9.54 9.54 0 0112 6.8c.85.004 1.7.115 2.5.337 1.9-1.29 2.74-1.02 2.74-1.02.56 1.38.21 2.4.11 2.65.64.7 1.02 1.6 1.02 2.69 0 3.83-2.34 4.67-4.57 4.92.36.31.69.92.69 1.85 0 1.34-.01 2.42-.01 2.75 0 .27.18.59.69.49A10.002 10.002 0 0022 12c0-5.52-4.48-10-10-10z" />
                        </svg>
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct MarketingShellProps {
    pub section: SectionKey,
    #[prop_or(DETAILS_HEADING)]
    pub details_heading: &'static str,
}

#[function_component(MarketingShell)]
pub fn marketing_shell(props: &MarketingShellProps) -> Html {
    let active = props.section;
    let shell = use_reducer_eq(|| ShellState::new(active));

    // Navigating to another section drops whatever was expanded before.
    {
        let shell = shell.clone();
        use_effect_with_deps(
            move |section: &SectionKey| {
                debug!("Showing section {} (was {})", section.slug(), shell.section().slug());
                shell.dispatch(ShellAction::ShowSection(*section));
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(section.page_title());
                }
                || ()
            },
            active,
        );
    }

    let on_toggle = {
        let shell = shell.clone();
        Callback::from(move |id: &'static str| {
            shell.dispatch(ShellAction::ToggleItem {
                section: active,
                id: id.to_string(),
            });
        })
    };

    let on_book = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::OpenBooking))
    };

    let on_close = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::CloseBooking))
    };

    html! {
        <MarketingShellView
            section={active}
            state={(*shell).clone()}
            details_heading={props.details_heading}
            on_toggle={on_toggle}
            on_book={on_book}
            on_close={on_close}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct MarketingShellViewProps {
    pub section: SectionKey,
    pub state: ShellState,
    #[prop_or(DETAILS_HEADING)]
    pub details_heading: &'static str,
    pub on_toggle: Callback<&'static str>,
    pub on_book: Callback<()>,
    pub on_close: Callback<()>,
}

/// The whole page for one section, drawn from the shell state.
#[function_component(MarketingShellView)]
pub fn marketing_shell_view(props: &MarketingShellViewProps) -> Html {
    let MarketingShellViewProps { section, state, details_heading, on_toggle, on_book, on_close } =
        props;
    let active = *section;
    let current = content::section(active);

    html! {
        <div class="marketing-page">
            <Hero on_book={on_book.clone()} />

            <BookingModal open={state.booking_open()} on_close={on_close.clone()} />

            <section class="content-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{ current.heading }</h2>
                        <p>{ current.subheading }</p>
                    </div>

                    <SectionNav active={active} />

                    <div class="tile-grid">
                        { for current.ordered_items(state.expanded_in(active)).into_iter().map(|item| html! {
                            <ContentTile
                                key={item.id}
                                item={item}
                                expanded={state.is_expanded(active, item.id)}
                                heading={*details_heading}
                                on_toggle={on_toggle.clone()}
                            />
                        }) }
                    </div>

                    <div class="sr-only" aria-live="polite">
                        { format!("Viewing {}", current.label) }
                    </div>
                </div>
            </section>

            <section class="contact-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Have a question or ready to start your project? Send us a message and one of our experts will get back to you shortly."}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .marketing-page {
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                    background: #111827;
                    color: #ffffff;
                }
                .hero {
                    position: relative;
                    padding: 5rem 1rem;
                    overflow: hidden;
                    background-image: radial-gradient(circle at top center, rgba(255,255,255,0.05), rgba(15,23,42,1) 80%), linear-gradient(135deg, #1e3a8a, #0f172a);
                }
                .hero-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    text-shadow: 0 0 20px rgba(99,102,241,0.5);
                    margin: 0;
                }
                .hero-tagline {
                    display: block;
                    margin-top: 0.5rem;
                    font-size: 1.5rem;
                    background: linear-gradient(to right, #60a5fa, #a78bfa);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .hero-divider {
                    height: 0.25rem;
                    width: 6rem;
                    margin: 1.5rem auto;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #38bdf8, #c084fc);
                }
                .hero-pitch {
                    max-width: 48rem;
                    margin: 1.25rem auto 0;
                    font-size: 1.25rem;
                    color: #9ca3af;
                }
                .hero-actions {
                    margin-top: 3rem;
                    display: flex;
                    justify-content: center;
                }
                .hero-cta {
                    padding: 1rem 2.5rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #ffffff;
                    background: #6366f1;
                    border: none;
                    border-radius: 0.375rem;
                    cursor: pointer;
                    transition: transform 0.2s;
                }
                .hero-cta:hover {
                    background: #4f46e5;
                    transform: scale(1.05);
                }
                .content-section {
                    padding: 3rem 1rem;
                    background: #111827;
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                }
                .section-header h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    margin: 0;
                }
                .section-header p {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: #9ca3af;
                }
                .section-nav {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .section-pill {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid #374151;
                    background: #1f2937;
                    color: #d1d5db;
                    text-decoration: none;
                    transition: all 0.2s;
                }
                .section-pill:hover {
                    color: #ffffff;
                    border-color: #818cf8;
                }
                .section-pill.active {
                    background: #6366f1;
                    border-color: #818cf8;
                    color: #ffffff;
                    box-shadow: 0 10px 15px -3px rgba(99,102,241,0.3);
                }
                .tile-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    grid-auto-rows: 1fr;
                    gap: 2rem;
                }
                .content-tile {
                    position: relative;
                    padding-top: 1.5rem;
                    background: #1f2937;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0,0,0,0.3);
                    overflow: hidden;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .content-tile.expanded {
                    grid-column: 1 / -1;
                    grid-row: span 2;
                }
                .tile-body {
                    padding: 0 1.5rem 2rem;
                }
                .tile-top {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .tile-toggle {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                    transition: transform 0.2s, color 0.2s;
                }
                .tile-toggle:hover {
                    color: #d1d5db;
                }
                .tile-toggle.rotated {
                    transform: rotate(45deg);
                }
                .tile-title {
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin: 0;
                }
                .tile-description {
                    margin-top: 0.5rem;
                    color: #9ca3af;
                }
                .tile-details {
                    margin-top: 1.5rem;
                }
                .detail-list {
                    list-style: none;
                    padding: 0;
                }
                .detail-list.two-columns {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    column-gap: 1rem;
                }
                .detail-list li {
                    display: flex;
                    align-items: flex-start;
                    margin-bottom: 0.5rem;
                    color: #d1d5db;
                }
                .detail-check {
                    flex-shrink: 0;
                    margin-right: 0.5rem;
                    color: #818cf8;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                }
                .contact-section {
                    position: relative;
                    padding: 5rem 1rem;
                    background-image: radial-gradient(circle at bottom center, rgba(255,255,255,0.03), rgba(15,23,42,1) 80%), linear-gradient(315deg, #0f172a, #1e3a8a);
                }
                .contact-form {
                    max-width: 36rem;
                    margin: 2.5rem auto 0;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-label {
                    display: block;
                    text-align: left;
                    color: #e5e7eb;
                }
                .form-control {
                    margin-top: 0.25rem;
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 0.375rem;
                    border: 1px solid #374151;
                    background: #111827;
                    color: #ffffff;
                    box-sizing: border-box;
                }
                .form-control:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #6366f1;
                }
                .form-submit {
                    padding: 0.75rem 1rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: #6366f1;
                    border: none;
                    border-radius: 0.375rem;
                    cursor: pointer;
                }
                .form-submit:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .form-feedback {
                    text-align: center;
                    margin-top: 0.5rem;
                }
                .form-feedback.success {
                    color: #4ade80;
                }
                .form-feedback.error {
                    color: #f87171;
                }
                .site-footer {
                    padding: 0 0 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                    background-image: radial-gradient(circle at bottom center, rgba(255,255,255,0.03), rgba(15,23,42,1) 80%), linear-gradient(315deg, #0f172a, #1e3a8a);
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: inherit;
                }
                .footer-links a:hover {
                    color: #ffffff;
                }
                @media (max-width: 640px) {
                    .hero-title {
                        font-size: 2.25rem;
                    }
                    .detail-list.two-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use yew::functional::Reducible;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    use crate::components::content_tile::LANDING_DETAILS_HEADING;

    fn memory_history(section: SectionKey) -> AnyHistory {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(section.route().to_path());
        history
    }

    #[derive(Properties, PartialEq)]
    struct ShellHarnessProps {
        section: SectionKey,
        details_heading: &'static str,
    }

    #[function_component(ShellHarness)]
    fn shell_harness(props: &ShellHarnessProps) -> Html {
        html! {
            <Router history={memory_history(props.section)}>
                <MarketingShell section={props.section} details_heading={props.details_heading} />
            </Router>
        }
    }

    #[derive(Properties, PartialEq)]
    struct ViewHarnessProps {
        state: ShellState,
    }

    #[function_component(ViewHarness)]
    fn view_harness(props: &ViewHarnessProps) -> Html {
        let section = props.state.section();
        html! {
            <Router history={memory_history(section)}>
                <MarketingShellView
                    section={section}
                    state={props.state.clone()}
                    on_toggle={Callback::noop()}
                    on_book={Callback::noop()}
                    on_close={Callback::noop()}
                />
            </Router>
        }
    }

    async fn render_shell(section: SectionKey) -> String {
        render_shell_with_heading(section, DETAILS_HEADING).await
    }

    async fn render_shell_with_heading(section: SectionKey, details_heading: &'static str) -> String {
        ServerRenderer::<ShellHarness>::with_props(move || ShellHarnessProps {
            section,
            details_heading,
        })
        .render()
        .await
    }

    async fn render_view(state: &ShellState) -> String {
        let state = state.clone();
        ServerRenderer::<ViewHarness>::with_props(move || ViewHarnessProps { state })
            .render()
            .await
    }

    fn click_tile(id: &str) -> ShellAction {
        ShellAction::ToggleItem {
            section: SectionKey::Services,
            id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn shell_renders_active_section_collapsed() {
        let html = render_shell(SectionKey::About).await;

        assert!(html.contains(COMPANY_NAME));
        assert!(html.contains(BOOKING_TITLE));
        assert!(html.contains("About Subtropic"));
        assert!(html.contains("Viewing About Us"));
        for item in content::section(SectionKey::About).items {
            assert!(html.contains(item.title));
        }
        assert!(!html.contains(DETAILS_HEADING));
        assert!(!html.contains("<iframe"));
        assert!(html.contains("Get in Touch"));
        assert!(html.contains("All rights reserved."));
    }

    #[tokio::test]
    async fn nav_links_every_section() {
        let html = render_shell(SectionKey::CaseStudies).await;

        assert!(html.contains("href=\"/services\""));
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains("href=\"/case-studies\""));
        assert!(html.contains("Operations Automation"));
    }

    #[tokio::test]
    async fn clicking_consulting_twice_shows_then_hides_details() {
        let shell = Rc::new(ShellState::new(SectionKey::Services));
        let html = render_view(&shell).await;
        assert!(html.contains("Consulting"));
        assert!(!html.contains(DETAILS_HEADING));

        let shell = shell.reduce(click_tile("services-consulting"));
        let html = render_view(&shell).await;
        assert!(html.contains(DETAILS_HEADING));
        assert!(html.contains("Collapse details"));
        assert!(html.contains("Technical due diligence"));

        let shell = shell.reduce(click_tile("services-consulting"));
        let html = render_view(&shell).await;
        assert!(!html.contains(DETAILS_HEADING));
        assert!(!html.contains("Collapse details"));
    }

    #[tokio::test]
    async fn only_one_tile_shows_details() {
        let shell = Rc::new(ShellState::new(SectionKey::Services))
            .reduce(click_tile("services-consulting"))
            .reduce(click_tile("services-ai-integrations"));
        let html = render_view(&shell).await;

        assert_eq!(html.matches(DETAILS_HEADING).count(), 1);
        assert!(!html.contains("Technical due diligence"));
    }

    #[tokio::test]
    async fn switching_section_renders_collapsed() {
        let shell = Rc::new(ShellState::new(SectionKey::Services))
            .reduce(click_tile("services-consulting"))
            .reduce(ShellAction::ShowSection(SectionKey::About));
        let html = render_view(&shell).await;

        assert!(html.contains("Viewing About Us"));
        assert!(!html.contains(DETAILS_HEADING));
    }

    #[tokio::test]
    async fn booking_cta_opens_and_closes_frame() {
        let shell = Rc::new(ShellState::new(SectionKey::Services));
        assert!(!render_view(&shell).await.contains("<iframe"));

        let shell = shell.reduce(ShellAction::OpenBooking);
        let html = render_view(&shell).await;
        assert!(html.contains("<iframe"));
        assert!(html.contains(&format!("title=\"{}\"", BOOKING_TITLE)));
        assert!(html.contains(crate::config::booking_url()));

        let shell = shell.reduce(ShellAction::CloseBooking);
        assert!(!render_view(&shell).await.contains("<iframe"));
    }

    #[tokio::test]
    async fn landing_heading_reaches_tiles() {
        let html = render_shell_with_heading(SectionKey::Services, LANDING_DETAILS_HEADING).await;
        assert!(!html.contains(LANDING_DETAILS_HEADING));

        let shell = Rc::new(ShellState::new(SectionKey::Services)).reduce(click_tile("services-consulting"));
        let state = (*shell).clone();
        let html = ServerRenderer::<LandingHarness>::with_props(move || ViewHarnessProps { state })
            .render()
            .await;
        assert!(html.contains(LANDING_DETAILS_HEADING));
        assert!(!html.contains(DETAILS_HEADING));
    }

    #[function_component(LandingHarness)]
    fn landing_harness(props: &ViewHarnessProps) -> Html {
        html! {
            <Router history={memory_history(SectionKey::Services)}>
                <MarketingShellView
                    section={SectionKey::Services}
                    state={props.state.clone()}
                    details_heading={LANDING_DETAILS_HEADING}
                    on_toggle={Callback::noop()}
                    on_book={Callback::noop()}
                    on_close={Callback::noop()}
                />
            </Router>
        }
    }
}
