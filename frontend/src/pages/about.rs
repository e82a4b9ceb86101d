use yew::prelude::*;

use crate::components::seo::Seo;
use crate::utils::scroll::use_scroll_to_top;

const VALUES: [(&str, &str, &str); 3] = [
    (
        "fa-solid fa-wallet",
        "Fair by default",
        "Every rupee is split evenly and rounded in the open. No surge on shared seats.",
    ),
    (
        "fa-solid fa-user-shield",
        "Safety first",
        "Verified IDs, live trip sharing and women-only matching are built in, not add-ons.",
    ),
    (
        "fa-solid fa-earth-asia",
        "Fewer cars",
        "Two riders in one auto is one less vehicle on the road. We count every kilometre.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    html! {
        <div class="about-page">
            <Seo
                title="About"
                description="Spllit started with students splitting autos outside a college gate. Here is why we built it."
            />
            <header class="page-header">
                <span class="pill">{"Our story"}</span>
                <h1>{"Built at the "}<span class="accent">{"college gate"}</span></h1>
                <p>
                    {"Spllit began with a group of students who kept paying full fare for half-empty autos going to the same place. We built the app we wished existed: find someone going your way, commit, ride, and split."}
                </p>
            </header>
            <section class="container values">
                {
                    VALUES.iter().map(|(icon, title, body)| html! {
                        <div class="value-card">
                            <i class={*icon}></i>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>
            <section class="container mission">
                <h2>{"Our mission"}</h2>
                <p>
                    {"Make the everyday commute cheaper for riders and lighter for cities, without asking anyone to change how they travel."}
                </p>
            </section>
        </div>
    }
}
