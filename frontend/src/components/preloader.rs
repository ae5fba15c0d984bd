use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};
use yew::prelude::*;

use super::globe::{self, Globe};
use crate::context::use_page;
use crate::controller::preloader::{
    Effect, Interaction, Phase, PreloaderEvent, Sequencer, Timings,
};
use crate::controller::scroll_lock::LockOwner;
use crate::dom::{self, Listener};

// Outbox is shared between reductions so effects from back-to-back
// dispatches all get applied.
struct PreloaderModel {
    machine: Sequencer,
    outbox: Rc<RefCell<VecDeque<Effect>>>,
    revision: u64,
}

impl PreloaderModel {
    fn new(has_cta: bool, timings: Timings) -> Self {
        let machine = Sequencer::new(has_cta, timings);
        let outbox = Rc::new(RefCell::new(machine.start().into_iter().collect()));
        Self {
            machine,
            outbox,
            revision: 1,
        }
    }
}

impl Reducible for PreloaderModel {
    type Action = PreloaderEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let mut machine = self.machine.clone();
        let effects = machine.handle(event);
        if effects.is_empty() && machine == self.machine {
            return self;
        }
        self.outbox.borrow_mut().extend(effects);
        Rc::new(Self {
            machine,
            outbox: self.outbox.clone(),
            revision: self.revision + 1,
        })
    }
}

fn interaction_listeners(dispatch: UseReducerDispatcher<PreloaderModel>) -> Vec<Listener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };

    let on_wheel = dispatch.clone();
    let on_touch = dispatch.clone();
    let on_key = dispatch;
    vec![
        Listener::passive(&window, "wheel", move |e| {
            if let Some(e) = e.dyn_ref::<WheelEvent>() {
                on_wheel.dispatch(PreloaderEvent::Interaction(Interaction::Wheel {
                    delta_y: e.delta_y(),
                }));
            }
        }),
        Listener::passive(&window, "touchmove", move |_| {
            on_touch.dispatch(PreloaderEvent::Interaction(Interaction::TouchMove));
        }),
        Listener::new(&window, "keydown", move |e| {
            if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                on_key.dispatch(PreloaderEvent::Interaction(Interaction::Key(e.key())));
            }
        }),
    ]
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    #[prop_or(true)]
    pub with_cta: bool,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let page = use_page();
    let timings = page.config.preloader;
    let with_cta = props.with_cta;
    let model = use_reducer(move || PreloaderModel::new(with_cta, timings));
    let canvas_ref = use_node_ref();
    let globe = use_mut_ref(|| None::<Globe>);
    let listeners = use_mut_ref(Vec::<Listener>::new);
    let poll = use_mut_ref(|| None::<Interval>);

    // Raw input listeners and the wait for the globe library.
    {
        let dispatch = model.dispatcher();
        let listeners = listeners.clone();
        let poll = poll.clone();
        let poll_ms = page.config.globe_poll_ms;
        use_effect_with_deps(
            move |_| {
                *listeners.borrow_mut() = interaction_listeners(dispatch.clone());

                if globe::library_loaded() {
                    dispatch.dispatch(PreloaderEvent::GlobeReady);
                } else {
                    *poll.borrow_mut() = Some(Interval::new(poll_ms, move || {
                        if globe::library_loaded() {
                            dispatch.dispatch(PreloaderEvent::GlobeReady);
                        }
                    }));
                }

                move || {
                    listeners.borrow_mut().clear();
                    poll.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Polling only matters while idle.
    {
        let poll = poll.clone();
        use_effect_with_deps(
            move |phase| {
                if *phase != Phase::Idle {
                    poll.borrow_mut().take();
                }
                || ()
            },
            model.machine.phase(),
        );
    }

    // Apply whatever the sequencer asked for since the last render.
    {
        let page = page.clone();
        let dispatch = model.dispatcher();
        let outbox = model.outbox.clone();
        let canvas_ref = canvas_ref.clone();
        let globe = globe.clone();
        let listeners = listeners.clone();
        let globe_config = page.config.globe.clone();
        use_effect_with_deps(
            move |_| {
                let pending: Vec<Effect> = outbox.borrow_mut().drain(..).collect();
                for effect in pending {
                    match effect {
                        Effect::LockScroll => {
                            page.with_lock(|lock| lock.acquire(LockOwner::Preloader));
                        }
                        Effect::ReleaseScroll => {
                            page.with_lock(|lock| lock.release(LockOwner::Preloader));
                            info!("preloader finished, page unlocked");
                        }
                        Effect::StartGlobe => {
                            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                                *globe.borrow_mut() = Globe::create(&canvas, &globe_config);
                            }
                        }
                        Effect::DetachInteractions => listeners.borrow_mut().clear(),
                        Effect::DestroyGlobe => drop(globe.borrow_mut().take()),
                        Effect::RecheckScroll => dom::dispatch_scroll(),
                        Effect::Schedule { after_ms, event } => {
                            let dispatch = dispatch.clone();
                            Timeout::new(after_ms, move || dispatch.dispatch(event)).forget();
                        }
                    }
                }
                || ()
            },
            model.revision,
        );
    }

    // Unmounting mid-sequence must not leave the page locked.
    {
        let page = page.clone();
        let globe = globe.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    globe.borrow_mut().take();
                    page.with_lock(|lock| lock.release(LockOwner::Preloader));
                }
            },
            (),
        );
    }

    let machine = &model.machine;
    let on_submit = {
        let dispatch = model.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.dispatch(PreloaderEvent::CtaSubmitted);
        })
    };
    let on_skip = {
        let dispatch = model.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.dispatch(PreloaderEvent::CtaSkipped);
        })
    };

    let globe_style = format!(
        "opacity: {}; transition: opacity {}ms ease;{}",
        machine.globe_opacity(),
        timings.globe_fade_ms,
        if machine.globe_hidden() { " display: none;" } else { "" },
    );
    let cta_style = format!(
        "opacity: {}; transition: opacity {}ms ease;{}",
        machine.cta_opacity(),
        timings.cta_fade_ms,
        if machine.cta_visible() { "" } else { " display: none;" },
    );
    let locked = machine.cta_locked();

    html! {
        <div
            id="preloader"
            class={classes!("preloader", machine.overlay_hidden().then_some("is-hidden"))}
            aria-hidden={machine.overlay_hidden().to_string()}
        >
            <div class="preloader__globe" style={globe_style}>
                <canvas ref={canvas_ref} class="preloader__canvas"></canvas>
                <p class="preloader__hint">{"Scroll to begin your journey"}</p>
            </div>

            if with_cta {
                <div class="preloader__cta" style={cta_style}>
                    <h2>{"Where will Africa take you?"}</h2>
                    <p>{"Tell us where to send a free sample itinerary."}</p>
                    <form class="preloader__form" onsubmit={on_submit}>
                        <input type="text" name="name" placeholder="Your name" disabled={locked} />
                        <input type="email" name="email" placeholder="Email address" required=true disabled={locked} />
                        <button type="submit" class="btn btn--primary" disabled={locked}>
                            {machine.cta_label()}
                        </button>
                    </form>
                    <button class="preloader__skip" onclick={on_skip}>
                        {"Skip, just show me the site"}
                    </button>
                </div>
            }
        </div>
    }
}
