use yew::prelude::*;

use crate::context::use_page;
use crate::controller::anchors;
use crate::dom::{self, Observer};

#[hook]
pub fn use_active_nav<K>(key: K)
where
    K: PartialEq + 'static,
{
    let page = use_page();

    use_effect_with_deps(
        move |_| {
            let sections = dom::query_all("section[id]");
            let links = dom::query_all(".nav__links a");

            let observer = if sections.is_empty() || links.is_empty() {
                None
            } else {
                Observer::new(page.config.section_threshold, None, move |entry, _| {
                    if !entry.is_intersecting() {
                        return;
                    }
                    let id = entry.target().id();
                    let hrefs: Vec<Option<String>> =
                        links.iter().map(|link| link.get_attribute("href")).collect();
                    let active = anchors::active_links(hrefs.iter().map(|h| h.as_deref()), &id);
                    for (link, on) in links.iter().zip(active) {
                        let _ = link.class_list().toggle_with_force("is-active", on);
                    }
                })
            };

            if let Some(observer) = observer.as_ref() {
                for section in &sections {
                    observer.observe(section);
                }
            }

            move || drop(observer)
        },
        key,
    );
}
