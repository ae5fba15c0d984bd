use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::magic_card::MagicCard;
use crate::context::use_page;
use crate::controller::lead_modal::LeadModal;

#[function_component(LeadModalOverlay)]
pub fn lead_modal_overlay() -> Html {
    let page = use_page();
    let modal = use_mut_ref(|| {
        LeadModal::new(page.config.lead_modal_delay_ms, page.config.lead_modal_close_ms)
    });
    let redraw = use_force_update();
    let overlay_ref = use_node_ref();

    let close = {
        let page = page.clone();
        let modal = modal.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            if modal.borrow().is_open() {
                page.with_lock(|lock| modal.borrow_mut().close(lock, page.session.as_ref()));
                redraw.force_update();
            }
        })
    };

    {
        let page = page.clone();
        let modal = modal.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let delay = modal.borrow().open_delay(page.session.as_ref());
                let timer = delay.map(|ms| {
                    debug!("lead modal opens in {}ms", ms);
                    Timeout::new(ms, move || {
                        page.with_lock(|lock| modal.borrow_mut().open(lock));
                        redraw.force_update();
                    })
                });
                move || drop(timer)
            },
            (),
        );
    }

    // Navigating away while the modal is up must still hand back the lock.
    {
        let page = page.clone();
        let modal = modal.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    page.with_lock(|lock| modal.borrow_mut().close(lock, page.session.as_ref()));
                }
            },
            (),
        );
    }

    {
        let close = close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    let on_backdrop = {
        let close = close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_overlay = match (e.target(), overlay_ref.get()) {
                (Some(target), Some(overlay)) => {
                    let overlay: &web_sys::EventTarget = overlay.as_ref();
                    target == *overlay
                }
                _ => false,
            };
            if on_overlay {
                close.emit(());
            }
        })
    };

    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_submit = {
        let modal = modal.clone();
        let redraw = redraw.clone();
        let close = close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let close_after = modal.borrow_mut().submit();
            redraw.force_update();
            if let Some(ms) = close_after {
                let close = close.clone();
                spawn_local(async move {
                    TimeoutFuture::new(ms).await;
                    close.emit(());
                });
            }
        })
    };

    let modal = modal.borrow();

    html! {
        <div
            id="ctaModal"
            ref={overlay_ref}
            class={classes!("cta-modal", modal.is_open().then_some("is-open"))}
            onclick={on_backdrop}
        >
            <MagicCard>
                <button id="ctaClose" class="cta-modal__close" aria-label="Close" onclick={on_close_button}>
                    {"×"}
                </button>
                <div id="ctaFormContent" style={if modal.show_success() { "display: none;" } else { "" }}>
                    <h2>{"Plan your African adventure"}</h2>
                    <p>{"Leave your details and a travel designer will craft a free itinerary for you."}</p>
                    <form id="ctaLeadForm" onsubmit={on_submit}>
                        <input type="text" name="name" placeholder="Your name" required=true />
                        <input type="email" name="email" placeholder="Email address" required=true />
                        <button type="submit" class="btn btn--primary">{"Send me ideas"}</button>
                    </form>
                </div>
                <div id="ctaSuccess" style={if modal.show_success() { "display: block;" } else { "display: none;" }}>
                    <h3>{"Karibu! We'll be in touch soon."}</h3>
                </div>
            </MagicCard>
        </div>
    }
}
