use yew::prelude::*;

pub fn marquee_track(len: usize) -> impl Iterator<Item = (usize, bool)> {
    (0..len * 2).map(move |i| (i % len.max(1), i >= len))
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<AttrValue>,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    html! {
        <div class="marquee">
            <div class="marquee__track">
                { for marquee_track(props.items.len()).map(|(index, hidden)| html! {
                    <span class="marquee__item" aria-hidden={hidden.then_some("true")}>
                        {&props.items[index]}
                    </span>
                }) }
            </div>
        </div>
    }
}
