use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod contact_form;
mod content;
mod reveal;
mod styles;

mod components {
    pub mod button;
    pub mod footer;
    pub mod header;
    pub mod mouse_follower;
    pub mod section_heading;
}
mod sections {
    pub mod about;
    pub mod benefits;
    pub mod blog;
    pub mod contact;
    pub mod courses;
    pub mod faq;
    pub mod hero;
    pub mod pricing;
    pub mod products;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{footer::Footer, header::Header, mouse_follower::MouseFollower};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::GLOBAL}</style>
            <MouseFollower />
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
