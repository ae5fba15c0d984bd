use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::context::use_page;
use crate::controller::attrs::ElementOptions;
use crate::controller::counter::{CounterAnimation, CounterSpec};
use crate::controller::reveal::{RevealAction, RevealTracker};
use crate::dom::{self, Observer};

pub const COUNTER_SELECTOR: &str = ".stats__number, [data-target], [data-count]";

enum CounterMarkup {
    Text,
    Sup,
}

fn read_counter(el: &Element) -> Option<(CounterSpec, CounterMarkup)> {
    let options = ElementOptions::from_lookup(|name| el.get_attribute(name));
    if let Some(spec) = options.counter() {
        return Some((spec, CounterMarkup::Text));
    }
    if options.target.is_some() {
        // A target attribute that isn't a number means: leave it alone.
        return None;
    }

    let sup = el.query_selector("sup").ok().flatten();
    let sup_text = sup.as_ref().and_then(|s| s.text_content());
    let spec = CounterSpec::from_text(&el.text_content()?, sup_text.as_deref())?;
    let markup = if sup.is_some() {
        CounterMarkup::Sup
    } else {
        CounterMarkup::Text
    };
    Some((spec, markup))
}

fn write_counter(el: &Element, anim: &CounterAnimation, value: u64, markup: &CounterMarkup) {
    match markup {
        CounterMarkup::Text => el.set_text_content(Some(&anim.text(value))),
        CounterMarkup::Sup => {
            el.set_text_content(Some(&value.to_string()));
            if let Some(sup) = dom::document().and_then(|d| d.create_element("sup").ok()) {
                sup.set_text_content(Some(&anim.spec().suffix));
                let _ = el.append_child(&sup);
            }
        }
    }
}

fn animate(el: Element, spec: CounterSpec, markup: CounterMarkup, duration_ms: f64) {
    let mut anim = CounterAnimation::new(spec, duration_ms);
    dom::animation_loop(move |now| {
        let frame = anim.frame(now);
        write_counter(&el, &anim, frame.value, &markup);
        !frame.done
    });
}

#[hook]
pub fn use_counters<K>(key: K)
where
    K: PartialEq + 'static,
{
    let page = use_page();

    use_effect_with_deps(
        move |_| {
            let counters: Vec<_> = dom::query_all(COUNTER_SELECTOR)
                .into_iter()
                .filter_map(|el| read_counter(&el).map(|parsed| (el, parsed)))
                .collect();
            let elements: Vec<Element> = counters.iter().map(|(el, _)| el.clone()).collect();
            let pending = Rc::new(RefCell::new(
                counters
                    .into_iter()
                    .map(|(_, parsed)| Some(parsed))
                    .collect::<Vec<_>>(),
            ));
            let tracker = Rc::new(RefCell::new(RevealTracker::new()));
            let duration_ms = page.config.counter_duration_ms;

            let observer = if elements.is_empty() {
                None
            } else {
                let targets = elements.clone();
                let state = tracker.clone();
                Observer::new(page.config.counter_threshold, None, move |entry, observer| {
                    let target = entry.target();
                    let Some(index) = targets.iter().position(|el| *el == target) else {
                        return;
                    };
                    let action = state
                        .borrow_mut()
                        .on_intersection(&index, entry.is_intersecting());
                    if action != RevealAction::Reveal {
                        return;
                    }
                    observer.unobserve(&target);
                    if let Some((spec, markup)) = pending.borrow_mut()[index].take() {
                        animate(target, spec, markup, duration_ms);
                    }
                })
            };

            if let Some(observer) = observer.as_ref() {
                for (index, el) in elements.iter().enumerate() {
                    tracker.borrow_mut().observe(index);
                    observer.observe(el);
                }
            }

            move || drop(observer)
        },
        key,
    );
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    html! {
        <div class="stats__item reveal">
            <span
                class="stats__number"
                data-target={props.target.to_string()}
                data-suffix={props.suffix.clone()}
            >
                {"0"}{&props.suffix}
            </span>
            <span class="stats__label">{&props.label}</span>
        </div>
    }
}
