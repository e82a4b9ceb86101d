use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};
use yew_router::prelude::Link;

use crate::components::seo::Seo;
use crate::utils::scroll::use_scroll_to_top;
use crate::utils::timers::use_timer_scope;
use crate::Route;

const SCROLL_TO_ITEM: &str = "scroll-to-item";

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    id: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);
    let timers = use_timer_scope();

    // Open (and scroll to) this item when the URL hash names it
    {
        let is_open = is_open.clone();
        let id = props.id.clone();

        use_effect_with_deps(move |_| {
            let check_hash: Rc<dyn Fn()> = Rc::new(move || {
                let Some(window) = web_sys::window() else { return };
                if window.location().hash().ok().as_deref() != Some(format!("#{}", id).as_str()) {
                    return;
                }
                is_open.set(true);
                // Give the answer a moment to expand before scrolling
                let id = id.clone();
                timers.borrow_mut().after(SCROLL_TO_ITEM, 100, move || {
                    if let Some(element) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|doc| doc.get_element_by_id(&id))
                    {
                        element.scroll_into_view_with_bool(true);
                    }
                });
            });

            check_hash();

            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let on_hash = check_hash.clone();
                    let callback = Closure::<dyn Fn()>::new(move || on_hash());
                    let _ = window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
                        }
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        }, ());
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };
    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_scroll_to_top();

    html! {
        <div class="faq-page">
            <Seo
                title="FAQ"
                description="Answers about matching, the ₹1 token, payments, safety and Carbon Coins on Spllit."
            />
            <header class="page-header">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you want to know before your first shared ride."}</p>
            </header>

            <section class="faq-list container">
                <FaqItem question="How does Spllit find a match?" id="matching">
                    <p>{"When you set a destination, Spllit looks for riders within 500 metres who are heading the same way at roughly the same time. You see the match before anything is confirmed."}</p>
                </FaqItem>
                <FaqItem question="What is the ₹1 token for?" id="token">
                    <p>{"Both riders put down a one rupee token to confirm they are actually coming. It keeps no-shows rare and is adjusted against your share of the fare."}</p>
                </FaqItem>
                <FaqItem question="How is the fare split?" id="split">
                    <p>{"The total is divided evenly between riders and rounded up to the nearest rupee. You can try it yourself on the "}
                        <Link<Route> to={Route::HowItWorks}>{"How It Works"}</Link<Route>>
                        {" page."}
                    </p>
                </FaqItem>
                <FaqItem question="Who can I ride with?" id="safety">
                    <p>{"Every rider verifies a college or work ID before their first trip. Women-only matching is available in settings."}</p>
                </FaqItem>
                <FaqItem question="What are Carbon Coins?" id="carbon-coins">
                    <p>{"Each shared ride earns Carbon Coins that track the emissions you avoided. Watch them pile up in the savings jar on the "}
                        <Link<Route> to={Route::Features}>{"Features"}</Link<Route>>
                        {" page."}
                    </p>
                </FaqItem>
                <FaqItem question="Does Spllit work with autos and cabs?" id="vehicles">
                    <p>{"Yes. Spllit works with autos, cabs and bike taxis booked through the apps you already use."}</p>
                </FaqItem>
                <FaqItem question="How much does it cost?" id="pricing">
                    <p>{"Matching is free. See "}
                        <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                        {" for the optional Spllit Pass."}
                    </p>
                </FaqItem>
            </section>

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                    padding-bottom: 6rem;
                }
                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    background: var(--bg-secondary);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    color: var(--accent-green);
                    font-size: 1.5rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: var(--text-secondary);
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 0 1.5rem 1.25rem;
                }
                .faq-answer a {
                    color: var(--accent-green);
                }
                "#}
            </style>
        </div>
    }
}
