use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod cards;
mod config;
mod content;
mod error;
mod motion;
mod scroll;
mod theme;
mod rain {
    pub mod drops;
    pub mod engine;
    pub mod surface;
    pub mod timer;
}
mod components {
    pub mod background;
    pub mod briefings;
    pub mod closing;
    pub mod hero;
    pub mod icon;
    pub mod reveal;
    pub mod threat_card;
}
mod pages {
    pub mod catalog;
}

use components::icon::IconGlyph;
use content::{anchor_for, Icon, NAV_LINKS};
use motion::Hover;
use pages::catalog::CatalogPage;

const BRAND_HOVER: Hover = Hover::grow(1.05, 1.0);
const LINK_HOVER: Hover = Hover::lift(2);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering threat catalog");
            html! { <CatalogPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to catalog");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    if let Some(current) = scroll::current_progress() {
                        progress.set(current);
                    }

                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(current) = scroll::current_progress() {
                            progress.set(current);
                        }
                    });

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Could not watch scrolling: {:?}", e);
                    }

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    })
                }
                None => Box::new(|| ()),
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the mobile menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let background = scroll::nav_background(*progress);
    let links_class = if *menu_open {
        "nav-links open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav" style={format!("background-color: {};", background)}>
            <div class="nav-content">
                <div class="hover-fx" style={BRAND_HOVER.css_vars()}>
                    <Link<Route> to={Route::Home} classes="nav-brand">
                        <IconGlyph icon={Icon::Alert} />
                        <div>
                            <div class="nav-brand-name">{"CYBER THREATS"}</div>
                            <div class="nav-brand-tag mono">{"INTELLIGENCE"}</div>
                        </div>
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={links_class}>
                    { for NAV_LINKS.iter().map(|label| html! {
                        <a
                            href={anchor_for(label)}
                            class="nav-link hover-fx mono"
                            style={LINK_HOVER.css_vars()}
                            onclick={close_menu.clone()}
                        >
                            {*label}
                            <span class="nav-underline"></span>
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    use_effect_with_deps(|_| {
        let style = match theme::mount() {
            Ok(style) => Some(style),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        move || drop(style)
    }, ());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting threat catalog");
    yew::Renderer::<App>::new().render();
}
