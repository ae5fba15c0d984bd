use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controller::forms::FormSubmission;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or(true)]
    pub require_consent: bool,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(FormSubmission::new);
    let consent_ref = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let consent_ref = consent_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let consent = consent_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.checked());
            let mut next = (*form).clone();
            next.submit(consent);
            form.set(next);
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.consent_changed(input.checked());
            form.set(next);
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit} novalidate=true>
            if form.show_fields() {
                <div class="contact-form__fields">
                    <input type="text" name="name" placeholder="Full name" required=true />
                    <input type="email" name="email" placeholder="Email address" required=true />
                    <select name="interest">
                        <option value="safari">{"Safari"}</option>
                        <option value="beach">{"Beach & islands"}</option>
                        <option value="gorilla">{"Gorilla trekking"}</option>
                        <option value="custom">{"Something else"}</option>
                    </select>
                    <textarea name="message" rows="4" placeholder="Tell us about your trip"></textarea>
                    if props.require_consent {
                        <label class={classes!("contact-form__consent", form.consent_flagged().then_some("is-invalid"))}>
                            <input type="checkbox" name="consent" ref={consent_ref} onchange={on_consent} />
                            {" I agree to the privacy policy"}
                        </label>
                    }
                    <button type="submit" class="btn btn--primary">{"Send enquiry"}</button>
                </div>
            }
            <div class="contact-form__success" style={if form.show_success() { "display: block;" } else { "display: none;" }}>
                <h3>{"Thank you!"}</h3>
                <p>{"A travel designer will be in touch within one business day."}</p>
            </div>
        </form>
    }
}
