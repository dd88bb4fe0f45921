use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Nothing lives here."}</p>
            <Link<Route> to={Route::Landing} classes="forward-link">
                <button class="hero-cta">{"Back to the landing page"}</button>
            </Link<Route>>
        </div>
    }
}
