use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod state;
mod scroll;
mod anchor;
mod clock;
mod reveal;
mod inquiry;
mod components {
    pub mod hero;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod sections;
}

use clock::ClockProvider;
use pages::home::{Home, Studio};
use scroll::ScrollProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/studio")]
    Studio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Studio => {
            info!("Rendering Studio page");
            html! { <Studio /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProvider>
                <ClockProvider>
                    <Switch<Route> render={switch} />
                </ClockProvider>
            </ScrollProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
