use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::context::use_page;
use crate::controller::anchors;
use crate::controller::attrs::ElementOptions;
use crate::controller::nav::{MenuState, NavState, NavVariant};
use crate::dom::{self, Listener};
use crate::Route;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/#destinations", "Destinations"),
    ("/#about", "About"),
    ("/#stats", "Why us"),
    ("/faq", "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub variant: NavVariant,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let page = use_page();
    let threshold = page.config.nav_threshold;
    let variant = props.variant;
    let nav_state = use_state(|| NavState::evaluate(variant, dom::scroll_y(), threshold));
    let menu = use_mut_ref(MenuState::default);
    let redraw = use_force_update();

    {
        let nav_state = nav_state.clone();
        use_effect_with_deps(
            move |variant| {
                let variant = *variant;
                nav_state.set(NavState::evaluate(variant, dom::scroll_y(), threshold));

                let listener = NavState::tracks_scroll(variant)
                    .then(|| web_sys::window())
                    .flatten()
                    .map(|window| {
                        Listener::passive(&window, "scroll", move |_| {
                            nav_state.set(NavState::evaluate(variant, dom::scroll_y(), threshold));
                        })
                    });

                move || drop(listener)
            },
            variant,
        );
    }

    let open_menu = {
        let page = page.clone();
        let menu = menu.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.with_lock(|lock| menu.borrow_mut().open(lock));
            redraw.force_update();
        })
    };

    let close_menu = {
        let page = page.clone();
        let menu = menu.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            page.with_lock(|lock| menu.borrow_mut().close(lock));
            redraw.force_update();
        })
    };

    {
        let page = page.clone();
        let menu = menu.clone();
        let redraw = redraw.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let was_open = menu.borrow().is_open;
            page.with_lock(|lock| menu.borrow_mut().on_key(&e.key(), lock));
            if was_open {
                redraw.force_update();
            }
        });
    }

    // Smooth scrolling for in-page anchors and `data-scroll-to` triggers.
    {
        let close_menu = close_menu.clone();
        let offset = page.config.anchor_offset;
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_document("click", move |e| {
                    let Some(trigger) = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest("a[href*='#'], [data-scroll-to]").ok().flatten())
                    else {
                        return;
                    };

                    let options = ElementOptions::from_lookup(|name| trigger.get_attribute(name));
                    let href = options
                        .scroll_to
                        .or_else(|| trigger.get_attribute("href"))
                        .unwrap_or_default();
                    let path = web_sys::window()
                        .and_then(|w| w.location().pathname().ok())
                        .unwrap_or_default();
                    let Some(target) = anchors::fragment(&href, &path)
                        .and_then(|id| dom::document().and_then(|d| d.get_element_by_id(id)))
                    else {
                        return;
                    };

                    e.prevent_default();
                    let top = anchors::scroll_top_for(
                        target.get_bounding_client_rect().top(),
                        dom::scroll_y(),
                        offset,
                    );
                    dom::smooth_scroll_to(top);
                    close_menu.emit(());
                });
                move || drop(listener)
            },
            (),
        );
    }

    let is_open = menu.borrow().is_open;
    let link_click = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    html! {
        <nav
            id="navbar"
            class={classes!("nav", nav_state.class(), props.light.then_some("nav--light"))}
        >
            <div class="nav__inner">
                <Link<Route> to={Route::Home} classes="nav__logo">
                    {"WAMAW"}<span>{" Travel Group"}</span>
                </Link<Route>>

                <ul class="nav__links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li><a href={*href}>{*label}</a></li>
                    }) }
                </ul>

                <Link<Route> to={Route::Contact} classes="nav__cta">
                    {"Plan my trip"}
                </Link<Route>>

                <button id="hamburger" class="nav__hamburger" aria-label="Open menu" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div id="mobileNav" class={classes!("mobile-nav", is_open.then_some("open"))}>
                <button
                    id="mobileClose"
                    class="mobile-nav__close"
                    aria-label="Close menu"
                    onclick={link_click.clone()}
                >
                    {"×"}
                </button>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={link_click.clone()}>{*label}</a>
                }) }
                <div onclick={link_click}>
                    <Link<Route> to={Route::Contact} classes="mobile-nav__cta">
                        {"Plan my trip"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

pub fn body_options() -> ElementOptions {
    dom::body()
        .map(|body| ElementOptions::from_lookup(|name| body.get_attribute(name)))
        .unwrap_or_default()
}

pub fn variant_for(route: Option<&Route>, options: &ElementOptions) -> NavVariant {
    if options.inner || !matches!(route, Some(Route::Home)) {
        NavVariant::Inner
    } else {
        NavVariant::Transparent
    }
}
