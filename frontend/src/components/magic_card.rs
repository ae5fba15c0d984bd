use web_sys::PointerEvent;
use yew::prelude::*;

pub fn border_gradient(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(260px circle at {}px {}px, #1E90D6, #0D3580, #dee3ea 100%)",
        x, y
    )
}

pub fn glow_gradient(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(260px circle at {}px {}px, rgba(30,144,214,.13), transparent 100%)",
        x, y
    )
}

#[derive(Properties, PartialEq)]
pub struct MagicCardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagicCard)]
pub fn magic_card(props: &MagicCardProps) -> Html {
    let card_ref = use_node_ref();
    let pointer = use_state(|| None::<(f64, f64)>);

    let on_move = {
        let pointer = pointer.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(card) = card_ref.cast::<web_sys::Element>() {
                let rect = card.get_bounding_client_rect();
                pointer.set(Some((
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                )));
            }
        })
    };
    let reset = {
        let pointer = pointer.clone();
        Callback::from(move |_: PointerEvent| pointer.set(None))
    };

    let (border_style, glow_style) = match *pointer {
        Some((x, y)) => (
            format!("background: {};", border_gradient(x, y)),
            format!("background: {}; opacity: 1;", glow_gradient(x, y)),
        ),
        None => (String::new(), "opacity: 0;".to_string()),
    };

    html! {
        <div
            id="magicCard"
            class="magic-card"
            ref={card_ref}
            onpointermove={on_move}
            onpointerenter={reset.clone()}
            onpointerleave={reset}
        >
            <div class="magic-card__border" style={border_style}></div>
            <div class="magic-card__glow" style={glow_style}></div>
            <div class="magic-card__content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
