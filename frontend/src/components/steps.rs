use yew::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    ("fa-solid fa-route", "Set your route", "Tell Spllit where you're headed and when."),
    ("fa-solid fa-satellite-dish", "Get matched", "We scan a 500m radius for riders on the same route."),
    ("fa-solid fa-handshake", "Confirm with ₹1", "Both riders lock the match with a one rupee token."),
    ("fa-solid fa-wallet", "Ride and split", "The fare is divided automatically when you arrive."),
];

/// Four-step timeline used on Home and How It Works.
#[function_component(Steps)]
pub fn steps() -> Html {
    html! {
        <section class="steps">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">{"How it works"}</span>
                    <h2>{"From search to split in four steps"}</h2>
                </div>
                <ol class="step-list">
                    {
                        STEPS.iter().enumerate().map(|(i, (icon, title, body))| html! {
                            <li class="step">
                                <span class="step-number">{i + 1}</span>
                                <i class={*icon}></i>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </div>
        </section>
    }
}
