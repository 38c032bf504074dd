use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};

mod config;
mod content;
mod theme;
mod nav {
    pub mod menu;
    pub mod scroll;
    pub mod header;
}
mod embed {
    pub mod script;
}
mod components {
    pub mod reveal;
    pub mod scheduler;
}
mod pages {
    pub mod home;
}

use nav::scroll::ScrollSignal;
use pages::home::Home;
use theme::Theme;


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/v/:slug")]
    Variant { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Theme a route renders with, or `None` when it should fall back to the home page.
fn theme_for(route: &Route) -> Option<Theme> {
    match route {
        Route::Home => Some(Theme::default()),
        Route::Variant { slug } => Theme::from_slug(slug),
        Route::NotFound => None,
    }
}

fn switch(routes: Route) -> Html {
    match theme_for(&routes) {
        Some(theme) => {
            info!("Rendering Home page with {} theme", theme.slug());
            html! { <Home {theme} /> }
        }
        None => {
            warn!("No page for {:?}, redirecting home", routes);
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}


#[function_component]
fn App() -> Html {
    // One window scroll source shared by the header and every reveal block.
    let scroll = use_state(ScrollSignal::window);

    html! {
        <ContextProvider<ScrollSignal> context={(*scroll).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ScrollSignal>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    if let Err(err) = content::validate_site() {
        error!("Site content is inconsistent: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
