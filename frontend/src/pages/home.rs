use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::active_nav::use_active_nav;
use crate::components::contact_form::ContactForm;
use crate::components::counter::{use_counters, StatCounter};
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::marquee::Marquee;
use crate::components::preloader::Preloader;
use crate::components::reveal::use_reveal;
use crate::Route;

const DESTINATIONS: &[(&str, &str, &str)] = &[
    ("Maasai Mara", "Kenya", "Big cats and the great migration from a private conservancy camp."),
    ("Zanzibar", "Tanzania", "Spice farms, Stone Town alleys and long white beaches."),
    ("Volcanoes NP", "Rwanda", "An hour with a mountain gorilla family in the bamboo forest."),
    ("Cape Winelands", "South Africa", "Slow lunches between Franschhoek, Stellenbosch and the sea."),
];

const PARTNERS: &[&str] = &[
    "Kenya Airways",
    "RwandAir",
    "&Beyond",
    "Singita",
    "Wilderness",
    "Asilia",
    "Great Plains",
];

pub fn preview_questions() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "When is the best time to go on safari?",
            "June to October is dry season across East Africa and the easiest time to spot wildlife. The green season is quieter, cheaper and great for birding.",
        ),
        FaqEntry::new(
            "Do I need a visa?",
            "Most visitors need an e-visa for Kenya, Tanzania and Rwanda. We send a checklist with your itinerary and can handle the East Africa Tourist Visa for you.",
        ),
        FaqEntry::new(
            "Can you plan trips for families?",
            "Yes. We pick family-friendly camps, private vehicles and shorter transfer days so younger travellers stay happy.",
        ),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
    use_reveal(());
    use_counters(());
    use_active_nav(());

    let partners: Vec<AttrValue> = PARTNERS.iter().map(|p| AttrValue::Static(*p)).collect();

    html! {
        <>
            <Preloader with_cta=true />

            <header class="hero">
                <div class="hero__content">
                    <p class="hero__eyebrow">{"Tailor-made journeys across Africa"}</p>
                    <h1>{"Travel deeper. Travel with WAMAW."}</h1>
                    <p class="hero__lead">
                        {"Private safaris, island escapes and cultural journeys designed by people who live here."}
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" data-scroll-to="#destinations">
                            {"Explore destinations"}
                        </button>
                        <Link<Route> to={Route::Contact} classes="btn btn--ghost">
                            {"Talk to a designer"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <Marquee items={partners} />

            <section id="destinations" class="destinations">
                <h2 class="reveal">{"Where we go"}</h2>
                <div class="destinations__grid">
                    { for DESTINATIONS.iter().map(|(name, country, blurb)| html! {
                        <article class="destination-card reveal">
                            <span class="destination-card__country">{*country}</span>
                            <h3>{*name}</h3>
                            <p>{*blurb}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="stats" class="stats">
                <StatCounter target={120} suffix="+" label="Itineraries designed" />
                <StatCounter target={14} label="Countries covered" />
                <StatCounter target={2500} suffix="+" label="Happy travellers" />
                <div class="stats__item reveal">
                    <span class="stats__number">{"98"}<sup>{"%"}</sup></span>
                    <span class="stats__label">{"Would travel with us again"}</span>
                </div>
            </section>

            <section id="about" class="about">
                <div class="about__text reveal">
                    <h2>{"Local knowledge, personal service"}</h2>
                    <p>
                        {"WAMAW Travel Group was founded in Nairobi by guides and planners who wanted travellers to see the continent the way we do. Every trip is built from scratch around you."}
                    </p>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2 class="reveal">{"Questions we hear a lot"}</h2>
                <FaqAccordion items={preview_questions()} />
                <Link<Route> to={Route::Faq} classes="faq-section__more">
                    {"See all questions"}
                </Link<Route>>
            </section>

            <section id="contact" class="contact">
                <h2 class="reveal">{"Start planning"}</h2>
                <ContactForm />
            </section>
        </>
    }
}
