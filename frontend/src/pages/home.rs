use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::scheduler::SchedulingWidget;
use crate::config;
use crate::content::{self, Section, SectionKind, BOOK_CTA, NAV_ENTRIES};
use crate::nav::header::NavHeader;
use crate::nav::scroll::ScrollSignal;
use crate::theme::Theme;

fn mailto() -> String {
    format!("mailto:{}", config::CONTACT_EMAIL)
}

fn hero(id: &'static str) -> Html {
    let hero = &content::HERO;
    html! {
        <section id={id} class="hero">
            <div class="container hero-grid">
                <Reveal class={classes!("hero-copy")}>
                    <h1>
                        {hero.title_lead}
                        <span class="highlight">{hero.title_highlight}</span>
                    </h1>
                    <p class="hero-intro">{hero.intro}</p>
                    <div class="hero-cta-group">
                        <a href={BOOK_CTA.href()} class="button button-primary button-xl">
                            {hero.primary_cta}
                        </a>
                        <a href={mailto()} class="button button-outline button-xl">
                            {hero.secondary_cta}
                        </a>
                    </div>
                </Reveal>
                <Reveal class={classes!("hero-photo")} delay_ms={200}>
                    <div class="photo-frame">
                        <img src={hero.photo} alt={hero.photo_alt} loading="lazy" />
                    </div>
                    <div class="photo-backdrop"></div>
                </Reveal>
            </div>
        </section>
    }
}

fn credibility_strip(id: &'static str) -> Html {
    html! {
        <section id={id} class="credibility">
            <div class="container">
                <p class="eyebrow">{content::CREDIBILITY_HEADING}</p>
                <div class="company-list">
                    { for content::COMPANIES.iter().map(|company| html! {
                        <span class="company">{*company}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn who_i_help(id: &'static str) -> Html {
    html! {
        <section id={id} class="who-i-help">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Who I Help"}</h2>
                    <p>{content::WHO_I_HELP_INTRO}</p>
                </div>
                <div class="card-grid">
                    { for content::PROFILES.iter().enumerate().map(|(index, profile)| html! {
                        <Reveal class={classes!("card")} delay_ms={index as u32 * 100}>
                            <div class="card-accent"></div>
                            <h3>{profile.title}</h3>
                            <p>{profile.description}</p>
                        </Reveal>
                    }) }
                </div>
                <div class="fit-prompt">
                    <p>{"Not sure where you fit?"}</p>
                    <a href={BOOK_CTA.href()} class="text-link">
                        {"Let's talk about your unique situation "}
                        <span aria-hidden="true">{"→"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

fn approach(id: &'static str) -> Html {
    html! {
        <section id={id} class="approach tinted">
            <div class="container two-column">
                <Reveal>
                    <h2>{"What Makes My Approach Different"}</h2>
                    <p class="lead">{content::APPROACH_INTRO}</p>
                    <ul class="check-list">
                        { for content::DIFFERENTIATORS.iter().map(|item| html! {
                            <li>
                                <span class="check" aria-hidden="true">{"✓"}</span>
                                <span>{*item}</span>
                            </li>
                        }) }
                    </ul>
                </Reveal>
                <Reveal class={classes!("philosophy")} delay_ms={150}>
                    <h3>{"My Philosophy"}</h3>
                    <blockquote>{format!("\"{}\"", content::PHILOSOPHY_QUOTE)}</blockquote>
                    <div class="signature">
                        <span class="rule"></span>
                        <span>{"Robert Marshall"}</span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn story(id: &'static str) -> Html {
    html! {
        <section id={id} class="story">
            <div class="container narrow">
                <h2 class="centered">{"My Story"}</h2>
                <Reveal class={classes!("prose")}>
                    { for content::STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </Reveal>
            </div>
        </section>
    }
}

fn process(id: &'static str) -> Html {
    html! {
        <section id={id} class="process">
            <div class="container">
                <div class="section-heading">
                    <h2>{"How Coaching Works"}</h2>
                    <p>{content::PROCESS_INTRO}</p>
                </div>
                <div class="steps">
                    <div class="steps-connector"></div>
                    { for content::STEPS.iter().enumerate().map(|(index, step)| html! {
                        <Reveal class={classes!("step")} delay_ms={index as u32 * 100}>
                            <div class="step-number">{step.number}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </Reveal>
                    }) }
                </div>
                <div class="centered">
                    <a href={BOOK_CTA.href()} class="button button-inverse button-xl">
                        {content::HERO.primary_cta}
                    </a>
                </div>
            </div>
        </section>
    }
}

fn services(id: &'static str) -> Html {
    html! {
        <section id={id} class="services">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Services & Pricing"}</h2>
                    <p>{"Transparent pricing. No hidden fees."}</p>
                </div>
                <div class="service-grid">
                    { for content::SERVICES.iter().map(|service| html! {
                        <Reveal class={classes!("service-card", service.featured.then_some("featured"))}>
                            <h3>{service.name}</h3>
                            <span class="badge">{service.badge}</span>
                            <p>{service.description}</p>
                            <a
                                href={BOOK_CTA.href()}
                                class={classes!("button", if service.featured { "button-primary" } else { "button-outline" })}
                            >
                                {service.cta}
                            </a>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn booking(id: &'static str) -> Html {
    html! {
        <section id={id} class="booking">
            <div class="container">
                <h2 class="centered">{"Schedule Your Free Alignment Call"}</h2>
                <SchedulingWidget url={config::booking_url()} />
            </div>
        </section>
    }
}

fn testimonials(id: &'static str) -> Html {
    html! {
        <section id={id} class="testimonials tinted">
            <div class="container">
                <h2 class="centered">{"What Clients Say"}</h2>
                <div class="card-grid">
                    { for content::TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal class={classes!("testimonial")} delay_ms={index as u32 * 100}>
                            <span class="quote-mark" aria-hidden="true">{"\u{201C}"}</span>
                            <p class="quote">{testimonial.quote}</p>
                            <p class="author">{format!("— {}", testimonial.author)}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-cta">
                    <div>
                        <h2>{content::FOOTER_HEADING}</h2>
                        <p>{content::FOOTER_BODY}</p>
                    </div>
                    <div class="footer-actions">
                        <a href={BOOK_CTA.href()} class="button button-light button-xl">
                            {content::HERO.primary_cta}
                        </a>
                        <a href={mailto()} class="footer-link">{"Or email me directly"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="footer-brand">
                        <img src="/assets/logo.png" alt="Marshall Coach" />
                        <div>
                            <p>{format!("© {} Robert Marshall", year)}</p>
                            <p>{content::CERTIFICATION}</p>
                        </div>
                    </div>
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class="footer-link">
                        {"LinkedIn"}
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub theme: Theme,
}

fn render_section(section: &Section) -> Html {
    let id = section.id;
    match section.kind {
        SectionKind::Hero => hero(id),
        SectionKind::Credibility => credibility_strip(id),
        SectionKind::WhoIHelp => who_i_help(id),
        SectionKind::Approach => approach(id),
        SectionKind::Story => story(id),
        SectionKind::Process => process(id),
        SectionKind::Services => services(id),
        SectionKind::Booking => booking(id),
        SectionKind::Testimonials => testimonials(id),
    }
}

/// The provided scroll source, or the page's own fallback when mounted without a provider.
fn page_scroll(provided: Option<ScrollSignal>, fallback: &ScrollSignal) -> ScrollSignal {
    provided.unwrap_or_else(|| fallback.clone())
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Kept in state so the header sees the same source every render.
    let fallback = use_state(ScrollSignal::window);
    let scroll = page_scroll(use_context::<ScrollSignal>(), &fallback);

    html! {
        <div class={classes!("site", format!("theme-{}", props.theme.slug()))} style={props.theme.css_vars()}>
            <style>{PAGE_CSS}</style>
            <NavHeader entries={NAV_ENTRIES} cta={BOOK_CTA} {scroll} />
            <main>
                { for content::SECTIONS.iter().map(render_section) }
            </main>
            <Footer />
        </div>
    }
}

const PAGE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

.site {
    min-height: 100vh;
    background: var(--background);
    color: var(--foreground);
    font-family: var(--body-font);
    line-height: 1.6;
}

.site h1, .site h2, .site h3 {
    font-family: var(--heading-font);
    line-height: 1.15;
    margin: 0 0 1rem;
}

.site section {
    padding: 5rem 0;
    scroll-margin-top: 5rem;
}

.booking {
    padding-top: 0 !important;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.container.narrow {
    max-width: 48rem;
}

.centered {
    text-align: center;
}

.tinted {
    background: var(--secondary);
}

.reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

.button {
    display: inline-block;
    padding: 0.75rem 1.75rem;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    text-align: center;
    border: 2px solid transparent;
    transition: opacity 0.2s ease;
}

.button:hover {
    opacity: 0.9;
}

.button-xl {
    font-size: 1.125rem;
    padding: 1rem 2rem;
}

.button-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.button-outline {
    border-color: var(--border);
    color: var(--foreground);
}

.button-inverse,
.button-light {
    background: #ffffff;
    color: var(--primary);
}

.hero {
    padding-top: 8rem !important;
    overflow: hidden;
}

.hero-grid,
.two-column {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero h1 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
}

.highlight {
    color: var(--primary);
}

.hero-intro {
    font-size: 1.25rem;
    color: var(--muted);
    max-width: 36rem;
    margin-bottom: 2rem;
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.hero-photo {
    position: relative;
}

.photo-frame {
    position: relative;
    z-index: 1;
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.photo-frame img {
    display: block;
    width: 100%;
    aspect-ratio: 4 / 5;
    object-fit: cover;
}

.photo-backdrop {
    position: absolute;
    inset: -2.5rem -2.5rem auto auto;
    width: 100%;
    height: 100%;
    border-radius: 1.5rem;
    background: var(--primary);
    opacity: 0.06;
    transform: rotate(6deg);
}

.credibility {
    padding: 2.5rem 0 !important;
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
}

.eyebrow {
    text-align: center;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    color: var(--muted);
}

.company-list {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem 4rem;
}

.company {
    font-family: var(--heading-font);
    font-size: 1.5rem;
    font-weight: 700;
    opacity: 0.4;
    transition: opacity 0.3s ease;
}

.company:hover {
    opacity: 0.8;
}

.section-heading {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 4rem;
}

.section-heading p,
.lead {
    font-size: 1.125rem;
    color: var(--muted);
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.card,
.testimonial {
    background: var(--background);
    border: 1px solid var(--border);
    border-radius: 1rem;
    padding: 2rem;
    position: relative;
}

.card-accent {
    width: 3rem;
    height: 4px;
    border-radius: 999px;
    background: var(--primary);
    margin-bottom: 1.5rem;
}

.fit-prompt {
    text-align: center;
    margin-top: 3rem;
}

.text-link {
    color: var(--primary);
    font-weight: 600;
    font-size: 1.125rem;
    text-decoration: none;
}

.check-list {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 1rem;
}

.check-list li {
    display: flex;
    gap: 1rem;
    align-items: flex-start;
}

.check {
    flex-shrink: 0;
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 999px;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    color: var(--primary);
    background: var(--background);
}

.philosophy {
    background: var(--background);
    border-radius: 1.5rem;
    padding: 3rem;
    box-shadow: 0 20px 40px -20px rgba(0, 0, 0, 0.2);
}

.philosophy h3 {
    color: var(--primary);
}

.philosophy blockquote {
    margin: 0 0 1.5rem;
    font-size: 1.5rem;
    font-style: italic;
    color: var(--muted);
}

.signature {
    display: flex;
    align-items: center;
    gap: 1rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    color: var(--muted);
}

.signature .rule {
    flex: 1;
    height: 1px;
    background: var(--border);
}

.prose p {
    font-size: 1.125rem;
    color: var(--muted);
    margin-bottom: 1.5rem;
}

.process {
    background: var(--primary);
    color: var(--primary-foreground);
}

.process .section-heading p {
    color: var(--primary-foreground);
    opacity: 0.8;
}

.steps {
    position: relative;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin-bottom: 4rem;
    text-align: center;
}

.steps-connector {
    position: absolute;
    top: 3rem;
    left: 0;
    width: 100%;
    height: 2px;
    background: rgba(255, 255, 255, 0.2);
}

.step {
    position: relative;
    z-index: 1;
}

.step-number {
    width: 6rem;
    height: 6rem;
    margin: 0 auto 1.5rem;
    border-radius: 999px;
    background: #ffffff;
    color: var(--primary);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
    font-weight: 700;
}

.service-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    max-width: 56rem;
    margin: 0 auto;
}

.service-card {
    border: 1px solid var(--border);
    border-radius: 1rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.service-card.featured {
    border-width: 2px;
}

.service-card .button {
    margin-top: auto;
}

.badge {
    align-self: flex-start;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    padding: 0.25rem 0.5rem;
    border-radius: 0.25rem;
    background: var(--secondary);
    color: var(--primary);
}

.scheduler-fallback {
    text-align: center;
    font-size: 0.875rem;
    color: var(--muted);
}

.quote-mark {
    position: absolute;
    top: 1rem;
    left: 1rem;
    font-size: 4rem;
    line-height: 1;
    color: var(--primary);
    opacity: 0.1;
}

.quote {
    font-size: 1.125rem;
    font-style: italic;
    padding-top: 1rem;
}

.author {
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--muted);
}

.site-footer {
    background: var(--foreground);
    color: var(--background);
    padding: 5rem 0 2.5rem;
}

.footer-cta {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 2rem;
    margin-bottom: 4rem;
}

.footer-actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    text-align: center;
}

.footer-link {
    color: inherit;
    opacity: 0.6;
    text-decoration: none;
}

.footer-link:hover {
    opacity: 1;
}

.footer-bottom {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding-top: 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 0.875rem;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 1rem;
    opacity: 0.8;
}

.footer-brand img {
    height: 2rem;
    filter: brightness(0) invert(1);
}

.footer-brand p {
    margin: 0;
}

@media (max-width: 768px) {
    .hero-grid,
    .two-column,
    .card-grid,
    .steps,
    .service-grid {
        grid-template-columns: 1fr;
    }

    .steps-connector {
        display: none;
    }

    .footer-cta,
    .footer-bottom {
        flex-direction: column;
        text-align: center;
    }
}
"#;
