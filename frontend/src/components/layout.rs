use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_LINKS: [(Route, &str); 6] = [
    (Route::Features, "Features"),
    (Route::HowItWorks, "How It Works"),
    (Route::Pricing, "Pricing"),
    (Route::About, "About"),
    (Route::Blog, "Blog"),
    (Route::Faq, "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page shell shared by every route: navbar, content, footer and the
/// background canvas, which is mounted once here and never per page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="shell">
            <Navbar />
            <main>
                { for props.children.iter() }
            </main>
            <Footer />
            <BackgroundCanvas />
        </div>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class="navbar">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"S"}</span>
                    {"Spllit"}
                </Link<Route>>
                <button class="nav-toggle" onclick={toggle} aria-label="Toggle menu">
                    <i class={if *menu_open { "fa-solid fa-xmark" } else { "fa-solid fa-bars" }}></i>
                </button>
                <div class={classes!("nav-links", (*menu_open).then_some("open"))} onclick={close}>
                    {
                        NAV_LINKS.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                    {*label}
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                    <Link<Route> to={Route::Login} classes="nav-cta">
                        {"Log in"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="logo-mark">{"S"}</span>
                    <p>{"Split your ride, not your wallet."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                </div>
                <p class="footer-copy">{"© 2025 Spllit Mobility. Made for commuters."}</p>
            </div>
        </footer>
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) {
    if let Some(window) = web_sys::window() {
        let dpr = window.device_pixel_ratio().clamp(1.0, 2.0);
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);
    }
}

/// Fixed full-viewport surface behind all routes, mounted once. Nothing draws
/// into it; it only keeps its backing store sized to the window.
#[function_component(BackgroundCanvas)]
fn background_canvas() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (web_sys::window(), canvas_ref.cast::<HtmlCanvasElement>()) {
                    (Some(window), Some(canvas)) => {
                        fit_to_window(&canvas);
                        let callback = Closure::<dyn Fn()>::new(move || fit_to_window(&canvas));
                        let _ = window.add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "resize",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    html! {
        <div class="scene-layer" aria-hidden="true">
            <canvas id="scene" ref={canvas_ref}></canvas>
        </div>
    }
}
