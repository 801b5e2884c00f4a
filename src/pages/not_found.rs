use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <p class="not-found-code gradient-text">{"404"}</p>
                <h1>{"Page not found"}</h1>
                <p class="muted">{"The page you are looking for doesn't exist or has been moved."}</p>
                <Link<Route> to={Route::Home} classes="solid-link">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </section>
    }
}
