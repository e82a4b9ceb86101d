use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod engine {
    pub mod savings_jar;
    pub mod schedule;
    pub mod sequencer;
    pub mod simulator;
    pub mod story;
}
mod utils {
    pub mod scroll;
    pub mod timers;
}
mod components {
    pub mod feature_grid;
    pub mod layout;
    pub mod seo;
    pub mod steps;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod faq;
    pub mod features;
    pub mod home;
    pub mod how_it_works;
    pub mod login;
    pub mod not_found;
    pub mod pricing;
}

use components::layout::Layout;
use pages::{
    about::About, blog::Blog, faq::Faq, features::FeaturesPage, home::Home,
    how_it_works::HowItWorksPage, login::Login, not_found::NotFound, pricing::Pricing,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/features")]
    Features,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/blog")]
    Blog,
    #[at("/faq")]
    Faq,
    #[at("/pricing")]
    Pricing,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Features => html! { <FeaturesPage /> },
        Route::HowItWorks => html! { <HowItWorksPage /> },
        Route::Blog => html! { <Blog /> },
        Route::Faq => html! { <Faq /> },
        Route::Pricing => html! { <Pricing /> },
        Route::Login => html! { <Login /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("spllit frontend starting");
    yew::Renderer::<App>::new().render();
}
