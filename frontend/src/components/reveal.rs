use std::cell::Cell;
use std::rc::Rc;

use web_sys::{window, Element};
use yew::prelude::*;

use crate::config;
use crate::nav::scroll::{ScrollSignal, ScrollSource, ScrollSubscription};

/// Latched visibility of a block that animates in once it reaches the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn observe(self, element_top: f64, viewport_height: f64) -> Self {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if element_top < viewport_height * config::REVEAL_TRIGGER_RATIO => {
                RevealState::Visible
            }
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

fn measure(node: &NodeRef) -> Option<(f64, f64)> {
    let element = node.cast::<Element>()?;
    let viewport_height = window()?.inner_height().ok()?.as_f64()?;
    Some((element.get_bounding_client_rect().top(), viewport_height))
}

/// Wires a hidden block to the scroll source. `measure` reports the block's top edge and the
/// viewport height; `on_visible` fires once when the block enters the trigger band. Without a
/// source the block is revealed straight away. The returned subscription is held until the
/// block turns visible.
pub fn watch_reveal(
    source: Option<&dyn ScrollSource>,
    current: RevealState,
    measure: impl Fn() -> Option<(f64, f64)> + 'static,
    on_visible: impl Fn() + 'static,
) -> Option<ScrollSubscription> {
    if current.is_visible() {
        return None;
    }
    let Some(source) = source else {
        on_visible();
        return None;
    };

    let state = Cell::new(RevealState::Hidden);
    let check = Rc::new(move || {
        if state.get().is_visible() {
            return;
        }
        if let Some((top, viewport_height)) = measure() {
            state.set(state.get().observe(top, viewport_height));
            if state.get().is_visible() {
                on_visible();
            }
        }
    });
    check();

    let listener = check.clone();
    Some(source.subscribe(Rc::new(move |_| listener())))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(RevealState::default);
    let scroll = use_context::<ScrollSignal>();
    let current = *state;

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |(scroll, current)| {
                let subscription = watch_reveal(
                    scroll.as_deref(),
                    *current,
                    move || measure(&node),
                    move || state.set(RevealState::Visible),
                );
                // Re-runs once visible, which drops the listener for good.
                move || drop(subscription)
            },
            (scroll, current),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), state.is_visible().then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
