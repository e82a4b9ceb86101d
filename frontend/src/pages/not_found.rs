use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo::Seo;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page page-header">
            <Seo title="Page not found" description="This page took a different route." />
            <h1>{"404"}</h1>
            <p>{"This page took a different route."}</p>
            <Link<Route> to={Route::Home} classes="button primary">{"Back home"}</Link<Route>>
        </div>
    }
}
