use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::context::use_page;
use crate::controller::reveal::{RevealAction, RevealTracker};
use crate::dom::{self, Observer};

pub const REVEAL_SELECTOR: &str = ".reveal";

#[hook]
pub fn use_reveal<K>(key: K)
where
    K: PartialEq + 'static,
{
    let page = use_page();

    use_effect_with_deps(
        move |_| {
            let targets = dom::query_all(REVEAL_SELECTOR);
            let tracker = Rc::new(RefCell::new(RevealTracker::new()));

            let observer = if targets.is_empty() {
                None
            } else {
                let elements = targets.clone();
                let state = tracker.clone();
                Observer::new(
                    page.config.reveal_threshold,
                    Some(page.config.reveal_root_margin.as_str()),
                    move |entry, observer| {
                        let target = entry.target();
                        let Some(index) = elements.iter().position(|el| *el == target) else {
                            return;
                        };
                        let action = state
                            .borrow_mut()
                            .on_intersection(&index, entry.is_intersecting());
                        if action == RevealAction::Reveal {
                            let _ = target.class_list().add_1("visible");
                            observer.unobserve(&target);
                        }
                    },
                )
            };

            if let Some(observer) = observer.as_ref() {
                for (index, el) in targets.iter().enumerate() {
                    tracker.borrow_mut().observe(index);
                    observer.observe(el);
                }
            }

            move || drop(observer)
        },
        key,
    );
}
