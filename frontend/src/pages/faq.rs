use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::lead_modal::LeadModalOverlay;
use crate::components::reveal::use_reveal;
use crate::pages::home::preview_questions;

fn all_questions() -> Vec<FaqEntry> {
    let mut items = preview_questions();
    items.extend([
        FaqEntry::new(
            "How far ahead should I book?",
            "Six to nine months for July to September, when the best camps fill up. Outside peak season a few weeks is often enough.",
        ),
        FaqEntry::new(
            "Is it safe?",
            "Our routes, camps and drivers are vetted by our own team, and you have a 24/7 local contact for the whole trip.",
        ),
        FaqEntry::new(
            "What vaccinations do I need?",
            "Yellow fever is required for some routes and malaria prophylaxis is recommended in most safari areas. Check with a travel clinic six weeks before you fly.",
        ),
        FaqEntry::new(
            "How do payments work?",
            "A 30% deposit confirms the trip and the balance is due 60 days before departure. We take card and bank transfer.",
        ),
    ]);
    items
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_reveal(());

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before your first trip with us"}</p>
            </section>

            <section class="faq-section">
                <FaqAccordion items={all_questions()} />
            </section>

            <LeadModalOverlay />
        </div>
    }
}
