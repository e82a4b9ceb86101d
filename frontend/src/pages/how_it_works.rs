use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::seo::Seo;
use crate::components::steps::Steps;
use crate::config;
use crate::engine::sequencer::PhaseSequencer;
use crate::engine::simulator::{BillAmount, RiderCount, SplitSimulator};
use crate::engine::story::{StoryBeat, STORY};
use crate::utils::scroll::use_scroll_to_top;
use crate::utils::timers::use_timer_scope;

const PHASE_ADVANCE: &str = "phase-advance";
const PHASE_SETTLE: &str = "phase-settle";
const PRUNE_RECIPIENTS: &str = "prune-recipients";

pub enum SplitAction {
    Bill(BillAmount),
    Riders(RiderCount),
    PruneDeparted,
}

impl Reducible for SplitSimulator {
    type Action = SplitAction;

    fn reduce(self: Rc<Self>, action: SplitAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SplitAction::Bill(bill) => next.set_bill(bill),
            SplitAction::Riders(riders) => next.set_riders(riders),
            SplitAction::PruneDeparted => next.prune_departed(),
        }
        next.into()
    }
}

pub enum StoryAction {
    Advance,
    Settle,
}

impl Reducible for PhaseSequencer {
    type Action = StoryAction;

    fn reduce(self: Rc<Self>, action: StoryAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            StoryAction::Advance => next.tick(),
            StoryAction::Settle => next.settle(),
        }
        next.into()
    }
}

#[function_component(SplitSimulatorDemo)]
fn split_simulator_demo() -> Html {
    let sim = use_reducer(SplitSimulator::default);
    let timers = use_timer_scope();

    let on_bill = {
        let sim = sim.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            sim.dispatch(SplitAction::Bill(BillAmount::parse(&input.value())));
        })
    };
    let on_riders = {
        let sim = sim.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let prune = sim.dispatcher();
            timers.borrow_mut().after(PRUNE_RECIPIENTS, config::RECIPIENT_EXIT_MS, move || {
                prune.dispatch(SplitAction::PruneDeparted)
            });
            sim.dispatch(SplitAction::Riders(RiderCount::parse(&input.value())));
        })
    };

    let inputs = sim.inputs();
    let bill = inputs.bill.get();
    let riders = inputs.riders.get();
    let share = sim.share();

    html! {
        <section class="simulator">
            <div class="container">
                <div class="section-head">
                    <span class="pill"><i class="fa-solid fa-calculator"></i>{"Live Logic Demo"}</span>
                    <h2>{"See the Math in Action"}</h2>
                    <p class="muted">{"Drag the sliders to simulate a real-world split scenario."}</p>
                </div>
                <div class="simulator-grid">
                    <div class="simulator-controls">
                        <label class="slider-label">
                            <span>{"Total Bill Amount"}</span>
                            <span class="value">{format!("₹ {}", bill)}</span>
                        </label>
                        <input
                            type="range"
                            min={BillAmount::RANGE.min.to_string()}
                            max={BillAmount::RANGE.max.to_string()}
                            step={BillAmount::RANGE.step.to_string()}
                            value={bill.to_string()}
                            oninput={on_bill}
                        />

                        <label class="slider-label">
                            <span>{"Number of People"}</span>
                            <span class="value">{format!("{} Riders", riders)}</span>
                        </label>
                        <input
                            type="range"
                            min={RiderCount::RANGE.min.to_string()}
                            max={RiderCount::RANGE.max.to_string()}
                            step={RiderCount::RANGE.step.to_string()}
                            value={riders.to_string()}
                            oninput={on_riders}
                        />
                        <div class="slider-ticks">
                            { for RiderCount::TICKS.iter().map(|n| html! { <span key={n.to_string()}>{*n}</span> }) }
                        </div>

                        <div class="calculation">
                            <div class="calculation-head">
                                <span>{"Calculation"}</span>
                                <i class="fa-solid fa-calculator"></i>
                            </div>
                            <div class="calculation-line">
                                <span>{format!("₹{}", bill)}</span>
                                <span class="op">{"/"}</span>
                                <span>{riders}</span>
                                <span class="op">{"="}</span>
                                <span class="result">{format!("₹{}", share)}</span>
                            </div>
                            <div class="hint">{"Per person calculation is instant and automated."}</div>
                        </div>
                    </div>

                    <div class="simulator-visual">
                        <div class="bill-slot">
                            <div class="bill-badge" key={bill.to_string()}>
                                <i class="fa-solid fa-money-bill-wave"></i>
                                {format!("₹{}", bill)}
                            </div>
                        </div>
                        <div class="split-arrow"><i class="fa-solid fa-arrow-down"></i></div>
                        <div class="recipients">
                            {
                                sim.roster().slots().iter().map(|slot| html! {
                                    <div
                                        key={slot.index.to_string()}
                                        class={classes!("recipient", slot.leaving.then_some("leaving"))}
                                        style={format!("animation-delay: {}ms;", slot.animation_delay_ms())}
                                    >
                                        <div class="recipient-icon"><i class="fa-solid fa-user"></i></div>
                                        <div class="recipient-label">{format!("Rider {}", slot.index + 1)}</div>
                                        <div class="recipient-share">{format!("₹{}", share)}</div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_beat(beat: StoryBeat) -> Html {
    match beat {
        StoryBeat::Alone => html! {
            <div class="beat beat-alone">
                <div class="rider rider-blue large"><i class="fa-solid fa-user"></i></div>
                <div class="searching">{"Searching for ride..."}</div>
            </div>
        },
        StoryBeat::Scan => html! {
            <div class="beat beat-scan">
                <div class="radar-ring"></div>
                <div class="radar-ring delayed"></div>
                <div class="rider rider-blue"><i class="fa-solid fa-user"></i></div>
                <div class="rider rider-pink found">
                    <i class="fa-solid fa-user"></i>
                    <span class="found-label">{"Match Found!"}</span>
                </div>
                <div class="radius-label">{"500m"}</div>
            </div>
        },
        StoryBeat::Token => html! {
            <div class="beat beat-token">
                <div class="token-party dim">
                    <i class="fa-solid fa-user"></i>
                    <span>{"Ravi"}</span>
                </div>
                <div class="token-coin">{"₹1"}</div>
                <div class="token-party commit">
                    <div class="commit-box"><i class="fa-solid fa-money-bill-wave"></i></div>
                    <span>{"Commit"}</span>
                </div>
            </div>
        },
        StoryBeat::Match => html! {
            <div class="beat beat-match">
                <div class="match-line"></div>
                <div class="rider rider-blue large slide-right"><i class="fa-solid fa-user"></i></div>
                <div class="connected">{"CONNECTED"}</div>
                <div class="rider rider-pink large slide-left"><i class="fa-solid fa-user"></i></div>
            </div>
        },
        StoryBeat::Savings => html! {
            <div class="beat beat-savings">
                <div class="savings-orb">
                    <div class="rider rider-blue"><i class="fa-solid fa-user"></i></div>
                    <div class="rider rider-pink"><i class="fa-solid fa-user"></i></div>
                    <span class="saved-tag">{"SAVED 40%"}</span>
                </div>
                <h3>{"Happily On Their Way!"}</h3>
                <div class="saved-each"><i class="fa-solid fa-money-bill-wave"></i>{"₹50 Saved each"}</div>
            </div>
        },
    }
}

#[function_component(StoryFlow)]
fn story_flow() -> Html {
    let sequencer = use_reducer(|| PhaseSequencer::new(STORY.len()));
    let timers = use_timer_scope();
    {
        let timers = timers.clone();
        let advance = sequencer.dispatcher();
        use_effect_with_deps(
            move |_| {
                timers.borrow_mut().every(PHASE_ADVANCE, config::PHASE_INTERVAL_MS, move || {
                    advance.dispatch(StoryAction::Advance)
                });
                || ()
            },
            (),
        );
    }
    {
        let settle = sequencer.dispatcher();
        use_effect_with_deps(
            move |outgoing: &Option<usize>| {
                if outgoing.is_some() {
                    timers.borrow_mut().after(PHASE_SETTLE, config::PHASE_EXIT_MS, move || {
                        settle.dispatch(StoryAction::Settle)
                    });
                }
                || ()
            },
            sequencer.outgoing(),
        );
    }

    let index = sequencer.index();
    let outgoing = sequencer
        .outgoing()
        .and_then(|out| STORY.get(out).map(|phase| (out, phase)));

    // Outgoing beat exits while the new one enters; the caption waits.
    let beat_frames = outgoing
        .map(|(out, phase)| (out, phase, true))
        .into_iter()
        .chain(sequencer.select(&STORY).map(|phase| (index, phase, false)))
        .map(|(i, phase, leaving)| html! {
            <div class={classes!("beat-frame", leaving.then_some("leaving"))} key={i.to_string()}>
                { render_beat(phase.beat) }
            </div>
        })
        .collect::<Html>();
    let caption = match outgoing {
        Some((out, phase)) => Some((out, phase, true)),
        None => sequencer.select(&STORY).map(|phase| (index, phase, false)),
    };

    html! {
        <section class="story">
            <div class="container">
                <div class="section-head">
                    <span class="eyebrow">{"The Spllit Story"}</span>
                    <h2>{"A Journey of Savings"}</h2>
                    <p class="muted">{"Watch how our intelligent matchmaking happens in real-time."}</p>
                </div>
                <div class="story-stage">
                    <div class="story-pips">
                        {
                            (0..STORY.len()).map(|i| html! {
                                <div key={i.to_string()} class={classes!("pip", sequencer.is_current(i).then_some("active"))}></div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="story-scene">
                        <div class="skyline"></div>
                        <div class="beat-slot">{beat_frames}</div>
                    </div>
                    <div class="story-caption">
                        if let Some((i, phase, leaving)) = caption {
                            <div class={classes!("caption", leaving.then_some("leaving"))} key={i.to_string()}>
                                <h4>{phase.title}</h4>
                                <p>{phase.description}</p>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorksPage)]
pub fn how_it_works_page() -> Html {
    use_scroll_to_top();
    let story_css = r#"
        .story-stage {
            position: relative;
            max-width: 64rem;
            margin: 0 auto;
            height: 400px;
            display: flex;
            flex-direction: column;
            border-radius: 3rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: var(--bg-primary);
            overflow: hidden;
        }
        .story-pips {
            position: absolute;
            top: 2rem;
            width: 100%;
            display: flex;
            justify-content: center;
            gap: 0.5rem;
            z-index: 2;
        }
        .pip {
            height: 6px;
            width: 1rem;
            border-radius: 999px;
            background: #374151;
            transition: all 0.5s;
        }
        .pip.active {
            width: 3rem;
            background: var(--accent-green);
        }
        .story-scene {
            flex: 1;
            position: relative;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .beat-slot {
            position: absolute;
            inset: 0;
        }
        .beat-frame {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            animation: beat-in 0.5s ease-out;
        }
        .beat-frame.leaving {
            animation: beat-out 0.5s ease-in forwards;
        }
        .story-caption {
            height: 8rem;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            background: rgba(0, 0, 0, 0.4);
            border-top: 1px solid rgba(255, 255, 255, 0.05);
        }
        .caption {
            animation: caption-in 0.4s ease-out;
        }
        .caption.leaving {
            animation: caption-out 0.5s ease-in forwards;
        }
        .caption h4 {
            color: var(--accent-green);
            margin: 0 0 0.25rem;
        }
        .radar-ring {
            position: absolute;
            top: 50%;
            left: 50%;
            border-radius: 50%;
            border: 1px solid rgba(16, 185, 129, 0.4);
            transform: translate(-50%, -50%);
            animation: radar 2s infinite;
        }
        .radar-ring.delayed {
            animation-delay: 0.5s;
        }
        .token-coin {
            animation: token-flight 1s ease-in-out forwards;
        }
        .match-line {
            animation: grow-x 0.5s ease-out forwards;
        }
        .recipient {
            animation: pop-in 0.3s ease-out backwards;
        }
        .recipient.leaving {
            animation: pop-out 0.3s ease-in forwards;
        }
        .bill-badge {
            animation: pulse-in 0.25s ease-out;
        }
        @keyframes beat-in {
            from { opacity: 0; transform: translateX(-100px); }
            to { opacity: 1; transform: translateX(0); }
        }
        @keyframes beat-out {
            to { opacity: 0; transform: translateX(100px); }
        }
        @keyframes caption-out {
            to { opacity: 0; transform: translateY(-10px); }
        }
        @keyframes caption-in {
            from { opacity: 0; transform: translateY(10px); }
            to { opacity: 1; transform: translateY(0); }
        }
        @keyframes radar {
            from { width: 0; height: 0; opacity: 1; }
            to { width: 400px; height: 400px; opacity: 0; }
        }
        @keyframes token-flight {
            from { transform: translateX(-60px) rotate(0deg); }
            to { transform: translate(60px, -20px) rotate(360deg); }
        }
        @keyframes grow-x {
            from { transform: scaleX(0); }
            to { transform: scaleX(1); }
        }
        @keyframes pop-in {
            from { opacity: 0; transform: translateY(20px) scale(0); }
            to { opacity: 1; transform: translateY(0) scale(1); }
        }
        @keyframes pop-out {
            to { opacity: 0; transform: scale(0); }
        }
        @keyframes pulse-in {
            from { transform: scale(0.9); }
            to { transform: scale(1); }
        }
    "#;
    html! {
        <div class="how-it-works-page">
            <Seo
                title="How It Works"
                description="From finding a ride to settling the cost, Spllit makes shared mobility effortless."
            />
            <header class="page-header">
                <h1>{"How It "}<span class="accent">{"Works"}</span></h1>
                <p>{"From finding a ride to settling the cost, Spllit makes shared mobility effortless."}</p>
            </header>
            <Steps />
            <SplitSimulatorDemo />
            <StoryFlow />
            <style>{story_css}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_riders_keeps_exiting_slots_until_pruned() {
        let sim = Rc::new(SplitSimulator::default());
        let shrunk = sim.reduce(SplitAction::Riders(RiderCount::from_slider(2.0)));
        assert_eq!(shrunk.roster().slots().len(), 4);
        assert_eq!(shrunk.roster().active(), 2);
        assert_eq!(shrunk.share(), 600);

        let pruned = shrunk.reduce(SplitAction::PruneDeparted);
        assert_eq!(pruned.roster().slots().len(), 2);
        assert!(pruned.roster().slots().iter().all(|s| !s.leaving));
    }

    #[test]
    fn bill_changes_leave_the_roster_alone() {
        let sim = Rc::new(SplitSimulator::default());
        let next = sim.reduce(SplitAction::Bill(BillAmount::parse("2000")));
        assert_eq!(next.share(), 500);
        assert_eq!(next.roster().slots().len(), 4);
    }

    #[test]
    fn story_advances_then_settles() {
        let sequencer = Rc::new(PhaseSequencer::new(STORY.len()));
        let advanced = sequencer.reduce(StoryAction::Advance);
        assert_eq!(advanced.index(), 1);
        assert_eq!(advanced.outgoing(), Some(0));

        let settled = advanced.reduce(StoryAction::Settle);
        assert_eq!(settled.index(), 1);
        assert_eq!(settled.outgoing(), None);
    }
}
