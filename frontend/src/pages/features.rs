use std::rc::Rc;

use yew::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::seo::Seo;
use crate::config;
use crate::engine::savings_jar::{confetti, CoinId, Completion, SavingsJar};
use crate::utils::scroll::use_scroll_to_top;
use crate::utils::timers::use_timer_scope;

const SHAKE_RESET: &str = "shake-reset";
const CELEBRATION_DISMISS: &str = "celebration-dismiss";

pub enum JarAction {
    Commit { now_ms: u64 },
    StopShaking,
    Land(CoinId),
    Dismiss,
}

impl Reducible for SavingsJar {
    type Action = JarAction;

    fn reduce(self: Rc<Self>, action: JarAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            JarAction::Commit { now_ms } => {
                let id = next.commit(now_ms);
                log::debug!("coin {} dropped, {} in flight", id, next.in_flight().len());
            }
            JarAction::StopShaking => next.stop_shaking(),
            JarAction::Land(id) => match next.complete(id) {
                Completion::Saved { celebrate: true } => {
                    log::debug!("savings milestone: {}", next.savings());
                }
                Completion::Saved { celebrate: false } => {}
                // Already landed; animationend can fire more than once.
                Completion::Unknown => return self,
            },
            JarAction::Dismiss => next.dismiss_celebration(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct JarProps {
    savings: u32,
    stacked: u32,
    fill_px: f64,
    shaking: bool,
}

#[function_component(Jar)]
fn jar(props: &JarProps) -> Html {
    html! {
        <div class={classes!("jar", props.shaking.then_some("shaking"))}>
            <svg viewBox="0 0 200 300" class="jar-glass">
                <defs>
                    <linearGradient id="glassGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#e0f2fe" stop-opacity="0.3" />
                        <stop offset="50%" stop-color="#f0f9ff" stop-opacity="0.5" />
                        <stop offset="100%" stop-color="#e0f2fe" stop-opacity="0.3" />
                    </linearGradient>
                </defs>
                <path
                    d="M 60 40 L 60 240 Q 60 260 80 260 L 120 260 Q 140 260 140 240 L 140 40 Q 140 30 130 30 L 70 30 Q 60 30 60 40 Z"
                    fill="url(#glassGradient)"
                    stroke="#bae6fd"
                    stroke-width="3"
                />
                <ellipse cx="100" cy="30" rx="45" ry="8" fill="#cbd5e1" stroke="#94a3b8" stroke-width="2" />
                <ellipse cx="100" cy="28" rx="45" ry="6" fill="#e2e8f0" />
                <path d="M 75 50 Q 75 100 75 200" stroke="white" stroke-width="4" opacity="0.3" stroke-linecap="round" />
            </svg>
            <div class="jar-fill" style={format!("height: {:.1}px;", props.fill_px)}>
                {
                    (0..props.stacked).map(|i| html! {
                        <div
                            key={i.to_string()}
                            class="stacked-coin"
                            style={format!(
                                "bottom: {}px; left: {}px; animation-delay: {}ms;",
                                i * 11,
                                (i % 3) as i32 * 8 - 8,
                                i * 50
                            )}
                        ></div>
                    }).collect::<Html>()
                }
            </div>
            if props.savings > 0 {
                <>
                    <div class="sparkle sparkle-left"></div>
                    <div class="sparkle sparkle-right"></div>
                    <div class="sparkle sparkle-side"></div>
                </>
            }
        </div>
    }
}

#[function_component(SavingsJackpot)]
fn savings_jackpot() -> Html {
    let jar = use_reducer(SavingsJar::default);
    let timers = use_timer_scope();

    {
        let timers = timers.clone();
        let stop = jar.dispatcher();
        use_effect_with_deps(
            move |commits: &u32| {
                if *commits > 0 {
                    timers.borrow_mut().after(SHAKE_RESET, config::SHAKE_MS, move || {
                        stop.dispatch(JarAction::StopShaking)
                    });
                }
                || ()
            },
            jar.commits(),
        );
    }
    {
        let dismiss = jar.dispatcher();
        use_effect_with_deps(
            move |celebrations: &u32| {
                if *celebrations > 0 {
                    timers.borrow_mut().after(CELEBRATION_DISMISS, config::CELEBRATION_MS, move || {
                        dismiss.dispatch(JarAction::Dismiss)
                    });
                }
                || ()
            },
            jar.celebrations(),
        );
    }

    let on_save = {
        let commit = jar.dispatcher();
        Callback::from(move |_: MouseEvent| {
            commit.dispatch(JarAction::Commit {
                now_ms: js_sys::Date::now() as u64,
            })
        })
    };

    let coins = jar
        .in_flight()
        .iter()
        .map(|id| {
            let land = {
                let land = jar.dispatcher();
                let id = *id;
                Callback::from(move |_: AnimationEvent| land.dispatch(JarAction::Land(id)))
            };
            html! {
                <div
                    key={id.to_string()}
                    class="flying-coin"
                    style={format!("animation-duration: {}ms;", config::COIN_FLIGHT_MS)}
                    onanimationend={land}
                >
                    <div class="coin-face">{"₹"}</div>
                </div>
            }
        })
        .collect::<Html>();

    let confetti_burst = if jar.is_celebrating() {
        let burst = jar.celebrations();
        confetti(u64::from(burst))
            .into_iter()
            .enumerate()
            .map(|(i, piece)| html! {
                <div
                    key={format!("{}-{}", burst, i)}
                    class="confetti"
                    style={format!(
                        "--to-x: {:.1}%; --to-y: {:.1}%; --spin: {:.0}deg; background-color: {};",
                        piece.x_pct, piece.y_pct, piece.rotate_deg, piece.color
                    )}
                ></div>
            })
            .collect::<Html>()
    } else {
        html! {}
    };

    html! {
        <section class="jackpot">
            <div class="container jackpot-grid">
                <div class="jackpot-stage">
                    <div class="confetti-layer">{confetti_burst}</div>
                    <div class="coin-layer">{coins}</div>
                    <div class="jar-holder">
                        <Jar
                            savings={jar.savings()}
                            stacked={jar.stacked_coins()}
                            fill_px={jar.fill_height_px()}
                            shaking={jar.is_shaking()}
                        />
                    </div>
                    if jar.is_celebrating() {
                        <div class="ribbon">
                            <p class="ribbon-title">{"🎉 JACKPOT!"}</p>
                            <p class="ribbon-body">{"You saved 1 Carbon Coin"}</p>
                        </div>
                    }
                    <div class="counter-slot">
                        <div class="savings-counter" key={jar.savings().to_string()}>
                            <p class="counter-label">{"Total Carbon Savings"}</p>
                            <div class="counter-value">
                                <span class="count">{jar.savings()}</span>
                                <span class="unit">{"COINS"}</span>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="jackpot-copy">
                    <div class="accent-bar"></div>
                    <h2>{"The Savings "}<br />{"Jackpot."}</h2>
                    <p>
                        {"Every trip you split contributes to your personal carbon jackpot. Watch your impact grow in real-time with our savings engine."}
                    </p>
                    <button class="save-button" onclick={on_save}>
                        <span>{"SAVE NOW"}</span>
                        <span class="wiggle">{"💰"}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    use_scroll_to_top();
    let jar_css = r#"
        .jackpot-stage {
            position: relative;
            height: 700px;
            border-radius: 4rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2));
            overflow: hidden;
        }
        .jar-holder {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 1;
        }
        .jar {
            position: relative;
            width: 16rem;
            height: 24rem;
        }
        .jar.shaking {
            animation: shake 0.5s;
        }
        .jar-glass {
            width: 100%;
            height: 100%;
        }
        .jar-fill {
            position: absolute;
            bottom: 0;
            left: 50%;
            width: 8rem;
            transform: translateX(-50%);
            overflow: hidden;
            transition: height 0.5s;
        }
        .stacked-coin {
            position: absolute;
            width: 3rem;
            height: 0.75rem;
            margin-left: 2.5rem;
            border-radius: 999px;
            background: linear-gradient(#facc15, #ca8a04);
            animation: settle 0.3s ease-out backwards;
        }
        .flying-coin {
            position: absolute;
            left: 50%;
            top: 50%;
            z-index: 5;
            pointer-events: none;
            animation-name: coin-drop;
            animation-timing-function: ease-in;
            animation-fill-mode: forwards;
        }
        .coin-face {
            width: 4rem;
            height: 4rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.5rem;
            font-weight: 900;
            color: #713f12;
            background: linear-gradient(135deg, #fde047, #facc15, #ca8a04);
            border: 4px solid #eab308;
        }
        .confetti-layer {
            position: absolute;
            inset: 0;
            z-index: 4;
            pointer-events: none;
        }
        .confetti {
            position: absolute;
            left: 50%;
            top: 50%;
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 50%;
            animation: burst 2s ease-out forwards;
        }
        .ribbon {
            position: absolute;
            top: 3rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 3;
            padding: 1.25rem 2rem;
            border-radius: 1.5rem;
            text-align: center;
            color: #000;
            background: linear-gradient(90deg, var(--accent-green), var(--accent-emerald), var(--accent-green));
            animation: ribbon-in 0.4s ease-out;
        }
        .counter-slot {
            position: absolute;
            bottom: 3rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 3;
        }
        .savings-counter {
            animation: counter-pop 0.3s ease-out;
        }
        .sparkle {
            position: absolute;
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 50%;
            background: #facc15;
            filter: blur(2px);
            animation: twinkle 2s infinite;
        }
        .sparkle-left { top: -1rem; left: -1rem; }
        .sparkle-right { top: -1rem; right: -1rem; animation-delay: 0.5s; }
        .sparkle-side { top: 50%; right: -1.5rem; animation-delay: 1s; background: var(--accent-green); }
        @keyframes shake {
            0%, 100% { transform: translateX(0) rotate(0); }
            20%, 60% { transform: translateX(-5px) rotate(-2deg); }
            40%, 80% { transform: translateX(5px) rotate(2deg); }
        }
        @keyframes coin-drop {
            0% { transform: translate(-50%, -50%) scale(0.5) rotate(0deg); opacity: 0; }
            30% { transform: translate(calc(-50% + 20px), calc(-50% - 80px)) scale(1) rotate(180deg); opacity: 1; }
            70% { transform: translate(-50%, -50%) scale(0.8) rotate(360deg); opacity: 1; }
            100% { transform: translate(-50%, calc(-50% + 200px)) scale(0.3) rotate(540deg); opacity: 0; }
        }
        @keyframes burst {
            to { left: var(--to-x); top: var(--to-y); opacity: 0; transform: scale(0) rotate(var(--spin)); }
        }
        @keyframes settle {
            from { opacity: 0; transform: translateY(-20px); }
            to { opacity: 1; transform: translateY(0); }
        }
        @keyframes ribbon-in {
            from { opacity: 0; transform: translate(-50%, -50px) scale(0.5); }
            to { opacity: 1; transform: translate(-50%, 0) scale(1); }
        }
        @keyframes counter-pop {
            from { transform: scale(0.9) translateY(20px); }
            to { transform: scale(1) translateY(0); }
        }
        @keyframes twinkle {
            0%, 100% { transform: scale(1); opacity: 0.5; }
            50% { transform: scale(1.5); opacity: 1; }
        }
    "#;
    html! {
        <div class="features-page">
            <Seo
                title="Features"
                description="Explore the technology behind Spllit's shared mobility: smart matching, automatic splits and carbon savings."
            />
            <header class="page-header">
                <span class="pill">{"Next-Gen Features"}</span>
                <h1>{"Engineered for "}<br /><span class="gradient-text">{"Efficiency"}</span></h1>
                <p>{"Explore the cutting-edge technology behind Spllit's shared mobility infrastructure. Built for scale, designed for simplicity."}</p>
            </header>
            <SavingsJackpot />
            <FeatureGrid />
            <style>{jar_css}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_an_unknown_coin_keeps_the_same_state() {
        let jar = Rc::new(SavingsJar::default());
        let committed = jar.reduce(JarAction::Commit { now_ms: 10 });
        let id = committed.in_flight()[0];

        let landed = committed.reduce(JarAction::Land(id));
        assert_eq!(landed.savings(), 1);
        assert!(landed.is_celebrating());

        let again = landed.clone().reduce(JarAction::Land(id));
        assert!(Rc::ptr_eq(&again, &landed));
    }

    #[test]
    fn timers_clear_shake_and_celebration() {
        let jar = Rc::new(SavingsJar::default());
        let committed = jar.reduce(JarAction::Commit { now_ms: 0 });
        assert!(committed.is_shaking());

        let id = committed.in_flight()[0];
        let state = committed
            .reduce(JarAction::StopShaking)
            .reduce(JarAction::Land(id))
            .reduce(JarAction::Dismiss);
        assert!(!state.is_shaking());
        assert!(!state.is_celebrating());
        assert_eq!(state.savings(), 1);
        assert!(state.in_flight().is_empty());
    }
}
