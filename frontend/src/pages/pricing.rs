use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::seo::Seo;
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub best_for: &'static str,
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub is_popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Rider",
        best_for: "Occasional shared trips",
        price: 0,
        period: "forever",
        features: &[
            "Unlimited matching within 500m",
            "₹1 intent token per ride",
            "Automatic fare split",
            "Carbon Coin tracking",
        ],
        is_popular: false,
    },
    Plan {
        name: "Spllit Pass",
        best_for: "Daily commuters",
        price: 99,
        period: "month",
        features: &[
            "Everything in Rider",
            "No token on your first 30 rides",
            "Recurring route matching",
            "Priority matches at peak hours",
        ],
        is_popular: true,
    },
    Plan {
        name: "Campus",
        best_for: "Colleges and offices",
        price: 4_999,
        period: "month",
        features: &[
            "Passes for up to 100 members",
            "Private matching pool",
            "Monthly savings and carbon report",
            "Dedicated support",
        ],
        is_popular: false,
    },
];

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    plan: Plan,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = &props.plan;
    let price_text = if plan.price == 0 {
        "Free".to_string()
    } else {
        format!("₹{}", plan.price)
    };
    html! {
        <div class={classes!("pricing-card", plan.is_popular.then_some("popular"))}>
            if plan.is_popular {
                <span class="popular-tag">{"Most popular"}</span>
            }
            <h3>{plan.name}</h3>
            <p class="best-for">{plan.best_for}</p>
            <div class="price">
                <span class="amount">{price_text}</span>
                <span class="period">{format!("/ {}", plan.period)}</span>
            </div>
            <ul>
                {
                    plan.features.iter().map(|feature| html! {
                        <li><i class="fa-solid fa-check"></i>{*feature}</li>
                    }).collect::<Html>()
                }
            </ul>
            <Link<Route> to={Route::Login} classes="button primary">{"Get Started"}</Link<Route>>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_scroll_to_top();
    html! {
        <div class="pricing-page">
            <Seo
                title="Pricing"
                description="Matching on Spllit is free. Daily commuters save more with the Spllit Pass."
            />
            <header class="page-header">
                <h1>{"Simple, "}<span class="accent">{"shared"}</span>{" pricing"}</h1>
                <p>{"Matching is free. Pay only if you ride every day."}</p>
            </header>
            <section class="container pricing-grid">
                { for PLANS.iter().map(|plan| html! { <PricingCard plan={plan.clone()} /> }) }
            </section>
            <p class="pricing-note">
                {"Fares are paid to your driver as usual. Spllit never adds a fee on top of your share."}
            </p>
        </div>
    }
}
