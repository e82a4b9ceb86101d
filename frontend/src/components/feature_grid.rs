use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-solid fa-location-crosshairs",
        title: "500m Smart Radius",
        body: "Riders heading your way are found within walking distance, so nobody detours.",
    },
    Feature {
        icon: "fa-solid fa-shield-halved",
        title: "Verified Riders",
        body: "College and work ID checks before anyone can join a shared trip.",
    },
    Feature {
        icon: "fa-solid fa-coins",
        title: "₹1 Intent Token",
        body: "A one rupee commitment keeps matches real and no-shows rare.",
    },
    Feature {
        icon: "fa-solid fa-calculator",
        title: "Automatic Split",
        body: "Fares are divided the moment the ride ends. No awkward maths at the gate.",
    },
    Feature {
        icon: "fa-solid fa-leaf",
        title: "Carbon Coins",
        body: "Every shared kilometre adds to your personal carbon savings jar.",
    },
    Feature {
        icon: "fa-solid fa-people-group",
        title: "Women-Only Mode",
        body: "Match exclusively with women riders whenever you prefer.",
    },
];

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section class="features">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">{"Why Spllit"}</span>
                    <h2>{"Everything you need to share a ride"}</h2>
                </div>
                <div class="feature-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <i class={feature.icon}></i>
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
