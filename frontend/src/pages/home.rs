use yew::prelude::*;
use yew_router::components::Link;

use crate::components::feature_grid::FeatureGrid;
use crate::components::seo::Seo;
use crate::components::steps::Steps;
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

const INTEGRATIONS: [(&str, &str); 6] = [
    ("fa-solid fa-taxi", "Uber"),
    ("fa-solid fa-car-side", "Ola"),
    ("fa-solid fa-motorcycle", "Rapido"),
    ("fa-solid fa-bus", "Namma Yatri"),
    ("fa-brands fa-google-pay", "Google Pay"),
    ("fa-solid fa-indian-rupee-sign", "UPI"),
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "My daily auto to campus went from ₹180 to ₹70. I match with the same two people most mornings now.",
        name: "Ananya R.",
        role: "Student, Bengaluru",
    },
    Testimonial {
        quote: "The ₹1 token sounds silly until you realise nobody ghosts you anymore.",
        name: "Karthik S.",
        role: "Software engineer, Pune",
    },
    Testimonial {
        quote: "Women-only matching is the reason I started sharing rides at all.",
        name: "Meera J.",
        role: "Analyst, Hyderabad",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <span class="pill">{"Shared rides for students and professionals"}</span>
                <h1 class="hero-title">
                    {"Split Your Ride, "}<br />
                    <span class="gradient-text">{"Not Your Wallet"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Save up to 60% on your daily commute. Safe, verified and automated ride-sharing with people already going your way."}
                </p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Login} classes="button primary">
                        {"Get Started"}
                    </Link<Route>>
                    <Link<Route> to={Route::HowItWorks} classes="button ghost">
                        {"See how it works"}
                    </Link<Route>>
                </div>
                <div class="hero-stats">
                    <div><strong>{"60%"}</strong><span>{"average saving"}</span></div>
                    <div><strong>{"500m"}</strong><span>{"match radius"}</span></div>
                    <div><strong>{"₹1"}</strong><span>{"to confirm"}</span></div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Integrations)]
fn integrations() -> Html {
    html! {
        <section class="integrations">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">{"Integrations"}</span>
                    <h2>{"Works with the rides you already book"}</h2>
                </div>
                <div class="integration-row">
                    {
                        INTEGRATIONS.iter().map(|(icon, name)| html! {
                            <div class="integration">
                                <i class={*icon}></i>
                                <span>{*name}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">{"Riders"}</span>
                    <h2>{"Loved by daily commuters"}</h2>
                </div>
                <div class="testimonial-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial">
                                <blockquote>{t.quote}</blockquote>
                                <figcaption>
                                    <strong>{t.name}</strong>
                                    <span>{t.role}</span>
                                </figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Cta)]
fn cta() -> Html {
    html! {
        <section class="cta">
            <div class="container cta-card">
                <h2>{"Your next ride is already going your way."}</h2>
                <p>{"Join the waitlist and be first on Spllit in your city."}</p>
                <Link<Route> to={Route::Login} classes="button primary">
                    {"Join Spllit"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    html! {
        <>
            <Seo
                title="Split Your Ride, Not Your Wallet"
                description="Join Spllit to save up to 60% on your daily commute. Safe, verified, and automated ride-sharing for students and professionals."
            />
            <Hero />
            <Steps />
            <FeatureGrid />
            <Integrations />
            <Testimonials />
            <Cta />
        </>
    }
}
