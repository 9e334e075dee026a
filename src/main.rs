use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod faq;
    pub mod stars;
}
mod pages {
    pub mod capital;
    pub mod funding;
    pub mod home;
    pub mod termsprivacy;
}

use components::stars::StarField;
use pages::{
    capital::Capital,
    funding::Funding,
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/funding")]
    Funding,
    #[at("/capital")]
    Capital,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Funding => {
            info!("Rendering Funding page");
            html! { <Funding /> }
        }
        Route::Capital => {
            info!("Rendering Capital page");
            html! { <Capital /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

const NAV_COMPACT_OFFSET_PX: f64 = 50.0;

/// The nav's condensed mode is a function of the latest offset only,
/// never of scroll history.
fn nav_compacted(scroll_y: f64) -> bool {
    scroll_y > NAV_COMPACT_OFFSET_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let listener_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = listener_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(nav_compacted(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark"></span>
                    {"ALCOVE"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Funding} classes="nav-link">
                            {"Funding"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Capital} classes="nav-link">
                            {"Capital"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Funding} classes="nav-cta">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 2rem 0;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.02em;
                    color: #001f3f;
                    text-decoration: none;
                }

                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    background: #2ca01c;
                    border-radius: 8px;
                    display: inline-block;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    transition: all 0.3s ease;
                }

                .scrolled .nav-right {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(0, 31, 63, 0.1);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #001f3f;
                    opacity: 0.7;
                    text-decoration: none;
                    transition: opacity 0.3s ease;
                }

                .nav-link:hover {
                    opacity: 1;
                }

                .nav-cta {
                    background: #001f3f;
                    color: #fff;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: opacity 0.3s ease;
                }

                .nav-cta:hover {
                    opacity: 0.9;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #001f3f;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        border-radius: 0;
                        padding: 1.5rem;
                        border-bottom: 1px solid rgba(0, 31, 63, 0.1);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <StarField />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::nav_compacted;

    #[test]
    fn compaction_follows_latest_offset_only() {
        let offsets = [0.0, 30.0, 60.0, 40.0, 10.0];
        let observed: Vec<bool> = offsets.iter().copied().map(nav_compacted).collect();
        assert_eq!(observed, vec![false, false, true, true, false]);
    }

    #[test]
    fn threshold_itself_stays_expanded() {
        assert!(!nav_compacted(50.0));
        assert!(nav_compacted(50.1));
    }
}
