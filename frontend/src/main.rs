use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod context;
mod dom;
mod session;
mod controller {
    pub mod anchors;
    pub mod attrs;
    pub mod counter;
    pub mod faq;
    pub mod forms;
    pub mod globe;
    pub mod lead_modal;
    pub mod nav;
    pub mod preloader;
    pub mod reveal;
    pub mod scroll_lock;
}
mod components {
    pub mod active_nav;
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod globe;
    pub mod lead_modal;
    pub mod magic_card;
    pub mod marquee;
    pub mod nav;
    pub mod preloader;
    pub mod reveal;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
}

use components::nav::{body_options, variant_for, Nav};
use config::SiteConfig;
use context::PageContext;
use pages::{contact::Contact, faq::Faq, home::Home};
use session::BrowserSession;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>();
    let options = use_memo(|_| body_options(), ());
    let variant = variant_for(route.as_ref(), &options);

    html! {
        <>
            <Nav {variant} light={options.light} />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

#[function_component]
fn App() -> Html {
    let page = use_memo(
        |_| PageContext::new(SiteConfig::load(), Rc::new(BrowserSession)),
        (),
    );

    html! {
        <ContextProvider<PageContext> context={(*page).clone()}>
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </ContextProvider<PageContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
