use web_sys::MouseEvent;
use yew::prelude::*;

use crate::controller::faq::FaqState;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

impl FaqEntry {
    pub fn new(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: AttrValue::Static(question),
            answer: AttrValue::Static(answer),
        }
    }
}

const REVEAL_WRAPPER: &str = "faq-item-wrap reveal";

fn item_classes(is_open: bool) -> Classes {
    classes!("faq-item", is_open.then_some("open"))
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_state(FaqState::<usize>::new);

    html! {
        <div class="faq">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*state).clone();
                        next.toggle(&index);
                        state.set(next);
                    })
                };
                let is_open = state.is_open(&index);

                // `reveal` sits on a wrapper whose class never re-renders, so the
                // `visible` class added by the observer survives toggling.
                html! {
                    <div class={REVEAL_WRAPPER}>
                        <div class={item_classes(is_open)}>
                            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                                <span class="question-text">{&item.question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{&item.answer}</p>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_item_class_never_carries_reveal() {
        for is_open in [false, true] {
            let classes = item_classes(is_open);
            assert!(classes.contains("faq-item"));
            assert!(!classes.contains("reveal"));
            assert!(!classes.contains("visible"));
        }
        assert!(item_classes(true).contains("open"));
        assert!(!item_classes(false).contains("open"));
    }

    #[test]
    fn test_reveal_wrapper_class_is_fixed() {
        let wrapper: Vec<&str> = REVEAL_WRAPPER.split_whitespace().collect();
        assert!(wrapper.contains(&"reveal"));
        assert!(!wrapper.contains(&"faq-item"));
        assert!(!wrapper.contains(&"open"));
    }
}
