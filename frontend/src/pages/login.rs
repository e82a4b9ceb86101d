use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::seo::Seo;
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

/// Sign-in form. Accounts open with the app launch, so submitting only
/// acknowledges the request.
#[function_component(Login)]
pub fn login() -> Html {
    use_scroll_to_top();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let notice = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() || password.is_empty() {
                notice.set(Some("Enter your email and password.".to_string()));
                return;
            }
            gloo_console::log!("sign-in requested before launch");
            notice.set(Some(format!(
                "Thanks! We'll email {} as soon as Spllit opens in your city.",
                email.trim()
            )));
        })
    };

    html! {
        <div class="login-page">
            <Seo title="Log in" description="Sign in to Spllit." />
            <div class="auth-card">
                <h1>{"Welcome back"}</h1>
                <p class="muted">{"Log in to find your next shared ride."}</p>
                <form onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={let password = password.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <button type="submit" class="button primary">{"Log in"}</button>
                </form>
                if let Some(message) = (*notice).clone() {
                    <div class="notice">{message}</div>
                }
                <div class="auth-redirect">
                    {"New to Spllit? "}
                    <Link<Route> to={Route::Pricing}>{"See plans"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
