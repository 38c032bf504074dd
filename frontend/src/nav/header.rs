use log::{debug, warn};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::nav::menu::{MenuEvent, MenuState};
use crate::nav::scroll::{track_scroll, ScrollSignal, ScrollState};

/// One entry of the header navigation. `target` is the id of the section it scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavEntry {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// What the header should draw for a given pair of states.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub overlay: Option<&'static [NavEntry]>,
}

impl HeaderView {
    pub fn new(entries: &'static [NavEntry], menu: MenuState, scroll: ScrollState) -> Self {
        Self {
            menu,
            scroll,
            overlay: menu.is_open().then_some(entries),
        }
    }

    pub fn nav_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["top-nav"];
        if self.scroll.is_scrolled() {
            classes.push("scrolled");
        }
        if self.menu.is_open() {
            classes.push("menu-open");
        }
        classes
    }
}

/// Result of activating a link: the menu always closes and navigation heads for the link's anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkActivation {
    pub menu: MenuState,
    pub navigate_to: &'static str,
}

pub fn activate_link(menu: MenuState, entry: &NavEntry) -> LinkActivation {
    LinkActivation {
        menu: menu.next(MenuEvent::LinkActivated),
        navigate_to: entry.target,
    }
}

fn scroll_to_anchor(target: &str) {
    let element = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(target));

    match element {
        Some(element) => {
            debug!("Scrolling to #{}", target);
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("Navigation target #{} is not on the page", target),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavHeaderProps {
    pub entries: &'static [NavEntry],
    pub cta: NavEntry,
    pub scroll: ScrollSignal,
    #[prop_or(config::SCROLL_THRESHOLD_PX)]
    pub threshold: f64,
}

fn nav_link(entry: NavEntry, class: &'static str, menu: &UseStateHandle<MenuState>) -> Html {
    let onclick = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let activation = activate_link(*menu, &entry);
            menu.set(activation.menu);
            scroll_to_anchor(activation.navigate_to);
        })
    };

    html! {
        <a href={entry.href()} class={class} {onclick}>
            {entry.label}
        </a>
    }
}

#[function_component(NavHeader)]
pub fn nav_header(props: &NavHeaderProps) -> Html {
    let NavHeaderProps { entries, cta, scroll, threshold } = props;
    let menu = use_state(MenuState::default);
    let scroll_state = use_state(ScrollState::default);

    {
        let scroll_state = scroll_state.clone();
        use_effect_with_deps(
            move |(source, threshold)| {
                debug!("Attaching header scroll listener");
                let subscription =
                    track_scroll(&**source, *threshold, move |state| scroll_state.set(state));
                move || {
                    debug!("Detaching header scroll listener");
                    drop(subscription);
                }
            },
            (scroll.clone(), *threshold),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.next(MenuEvent::Toggle));
        })
    };

    let view = HeaderView::new(*entries, *menu, *scroll_state);

    html! {
        <nav class={classes!(view.nav_classes())}>
            <style>{header_css()}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src="/assets/logo.png" alt="Marshall Coach" />
                </a>

                <div class="nav-links">
                    { for entries.iter().map(|entry| nav_link(*entry, "nav-link", &menu)) }
                    { nav_link(*cta, "nav-cta", &menu) }
                </div>

                <button
                    class={classes!("burger-menu", view.menu.is_open().then_some("open"))}
                    aria-label={view.menu.toggle_label()}
                    aria-expanded={view.menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if let Some(overlay) = view.overlay {
                    html! {
                        <div class="mobile-overlay">
                            { for overlay.iter().map(|entry| nav_link(*entry, "overlay-link", &menu)) }
                            <div class="overlay-cta">
                                { nav_link(*cta, "nav-cta", &menu) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

fn header_css() -> String {
    let breakpoint = config::MOBILE_BREAKPOINT_PX;
    format!(
        r#"
        .top-nav {{
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            z-index: 50;
            background: transparent;
            border-bottom: 1px solid transparent;
            transition: background 0.3s ease, border-color 0.3s ease, backdrop-filter 0.3s ease;
        }}

        .top-nav.scrolled,
        .top-nav.menu-open {{
            background: color-mix(in srgb, var(--background) 85%, transparent);
            backdrop-filter: blur(12px);
            -webkit-backdrop-filter: blur(12px);
            border-bottom-color: var(--border);
        }}

        .nav-content {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1.5rem;
            height: 5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }}

        .nav-logo img {{
            height: 2.5rem;
            width: auto;
            object-fit: contain;
        }}

        .nav-links {{
            display: flex;
            align-items: center;
            gap: 2rem;
        }}

        .nav-link {{
            font-size: 0.875rem;
            font-weight: 500;
            color: var(--muted);
            text-decoration: none;
            transition: color 0.2s ease;
        }}

        .nav-link:hover {{
            color: var(--primary);
        }}

        .nav-cta {{
            display: inline-block;
            padding: 0.75rem 1.5rem;
            border-radius: 999px;
            background: var(--primary);
            color: var(--primary-foreground);
            font-weight: 600;
            text-decoration: none;
            text-align: center;
        }}

        .burger-menu {{
            display: none;
            flex-direction: column;
            justify-content: center;
            gap: 5px;
            width: 2.5rem;
            height: 2.5rem;
            background: none;
            border: none;
            cursor: pointer;
            padding: 0.5rem;
        }}

        .burger-menu span {{
            display: block;
            height: 2px;
            width: 100%;
            background: var(--foreground);
            transition: transform 0.3s ease, opacity 0.3s ease;
        }}

        .burger-menu.open span:nth-child(1) {{
            transform: translateY(7px) rotate(45deg);
        }}

        .burger-menu.open span:nth-child(2) {{
            opacity: 0;
        }}

        .burger-menu.open span:nth-child(3) {{
            transform: translateY(-7px) rotate(-45deg);
        }}

        .mobile-overlay {{
            display: none;
        }}

        @media (max-width: {breakpoint}px) {{
            .nav-links {{
                display: none;
            }}

            .burger-menu {{
                display: flex;
            }}

            .mobile-overlay {{
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
                padding: 0.5rem 1rem 1.5rem;
                background: var(--background);
                border-bottom: 1px solid var(--border);
                min-height: calc(100vh - 5rem);
                animation: overlayIn 0.25s ease-out;
            }}

            .overlay-link {{
                display: block;
                padding: 0.75rem;
                font-size: 1rem;
                font-weight: 500;
                color: var(--foreground);
                text-decoration: none;
                border-radius: 0.5rem;
            }}

            .overlay-link:hover {{
                background: var(--secondary);
            }}

            .overlay-cta {{
                padding-top: 1rem;
            }}

            .overlay-cta .nav-cta {{
                display: block;
                width: 100%;
            }}
        }}

        @keyframes overlayIn {{
            from {{ opacity: 0; transform: translateY(-0.5rem); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::NAV_ENTRIES;
    use crate::nav::scroll::testing::ManualScroll;

    #[test]
    fn closed_menu_renders_no_overlay() {
        let view = HeaderView::new(NAV_ENTRIES, MenuState::Closed, ScrollState::AtTop);
        assert_eq!(view.overlay, None);
        assert_eq!(view.nav_classes(), vec!["top-nav"]);
    }

    #[test]
    fn toggle_then_approach_link() {
        let menu = MenuState::default().next(MenuEvent::Toggle);
        assert_eq!(menu, MenuState::Open);

        let view = HeaderView::new(NAV_ENTRIES, menu, ScrollState::AtTop);
        let labels: Vec<_> = view
            .overlay
            .map(|entries| entries.iter().map(|entry| entry.label).collect())
            .unwrap_or_default();
        assert_eq!(labels, vec!["About", "Approach", "Services", "Testimonials"]);

        let approach = NAV_ENTRIES
            .iter()
            .find(|entry| entry.label == "Approach")
            .copied()
            .expect("approach entry");
        let activation = activate_link(menu, &approach);
        assert_eq!(
            activation,
            LinkActivation {
                menu: MenuState::Closed,
                navigate_to: "approach",
            }
        );
        assert_eq!(approach.href(), "#approach");

        let view = HeaderView::new(NAV_ENTRIES, activation.menu, ScrollState::AtTop);
        assert_eq!(view.overlay, None);
    }

    #[test]
    fn any_link_closes_open_menu() {
        for entry in NAV_ENTRIES {
            let activation = activate_link(MenuState::Open, entry);
            assert_eq!(activation.menu, MenuState::Closed, "link {}", entry.label);
            assert_eq!(activation.navigate_to, entry.target);
        }
    }

    #[test]
    fn classes_reflect_both_flags_independently() {
        let scrolled = HeaderView::new(NAV_ENTRIES, MenuState::Closed, ScrollState::Scrolled);
        assert_eq!(scrolled.nav_classes(), vec!["top-nav", "scrolled"]);

        let both = HeaderView::new(NAV_ENTRIES, MenuState::Open, ScrollState::Scrolled);
        assert_eq!(both.nav_classes(), vec!["top-nav", "scrolled", "menu-open"]);
        assert_eq!(both.overlay.map(<[NavEntry]>::len), Some(NAV_ENTRIES.len()));

        let open = HeaderView::new(NAV_ENTRIES, MenuState::Open, ScrollState::AtTop);
        assert_eq!(open.nav_classes(), vec!["top-nav", "menu-open"]);
    }

    #[test]
    fn scroll_drives_header_treatment_until_unmounted() {
        let source = ManualScroll::at(0.0);
        let state = std::rc::Rc::new(std::cell::Cell::new(ScrollState::Scrolled));
        let sink = state.clone();
        let subscription = track_scroll(&source, config::SCROLL_THRESHOLD_PX, move |next| {
            sink.set(next)
        });
        assert_eq!(state.get(), ScrollState::AtTop);

        source.scroll_to(50.0);
        let view = HeaderView::new(NAV_ENTRIES, MenuState::Closed, state.get());
        assert_eq!(view.nav_classes(), vec!["top-nav", "scrolled"]);

        source.scroll_to(10.0);
        assert_eq!(state.get(), ScrollState::AtTop);

        drop(subscription);
        source.scroll_to(400.0);
        assert_eq!(state.get(), ScrollState::AtTop);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn stylesheet_uses_configured_breakpoint() {
        let css = header_css();
        assert!(css.contains(&format!("max-width: {}px", config::MOBILE_BREAKPOINT_PX)));
    }
}
