use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::use_reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_reveal(());

    html! {
        <div class="contact-page">
            <section class="contact-hero reveal">
                <h1>{"Let's plan your trip"}</h1>
                <p>{"Tell us a little about what you have in mind. We reply within one business day."}</p>
            </section>
            <section class="contact reveal">
                <ContactForm require_consent=true />
            </section>
            <aside class="contact-details reveal">
                <p>{"Westlands, Nairobi, Kenya"}</p>
                <p><a href="mailto:hello@wamawtravel.com">{"hello@wamawtravel.com"}</a></p>
            </aside>
        </div>
    }
}
