use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::embed::script::acquire_script;

#[derive(Properties, PartialEq)]
pub struct SchedulingWidgetProps {
    pub url: AttrValue,
    #[prop_or(AttrValue::Static(config::SCHEDULER_SCRIPT_SRC))]
    pub script_src: AttrValue,
}

/// Mount point for the booking calendar. The loader script is held for as long as the widget
/// is mounted; if it never loads the container simply stays empty.
#[function_component(SchedulingWidget)]
pub fn scheduling_widget(props: &SchedulingWidgetProps) -> Html {
    use_effect_with_deps(
        move |src| {
            debug!("Scheduling widget mounted");
            let lease = acquire_script(src);
            if !lease.is_held() {
                warn!("Scheduling widget loader unavailable, calendar will stay empty");
            }
            move || {
                debug!("Scheduling widget unmounted");
                drop(lease);
            }
        },
        props.script_src.clone(),
    );

    html! {
        <div class="scheduler">
            <div
                class="calendly-inline-widget"
                data-url={props.url.clone()}
                style="min-width: 320px; height: 700px;"
            ></div>
            <p class="scheduler-fallback">
                {"Calendar not loading? "}
                <a href={props.url.clone()} target="_blank" rel="noopener noreferrer">
                    {"Open the booking page"}
                </a>
            </p>
        </div>
    }
}
