use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::view::{PageView, ViewHandle};

pub const CONTACT_NOTICE: &str = "Thanks — form demo. Hook this to an email/sheet or backend.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Nothing is sent anywhere; the visitor gets a notice and a clean form.
pub fn submit_contact(view: &dyn PageView, fields: &mut ContactFields) {
    view.notify(CONTACT_NOTICE);
    *fields = ContactFields::default();
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub view: ViewHandle,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let fields = use_state(ContactFields::default);

    let onsubmit = {
        let fields = fields.clone();
        let view = props.view.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut current = (*fields).clone();
            submit_contact(&*view, &mut current);
            fields.set(current);
        })
    };

    let edit = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*fields).clone();
            apply(&mut current, input.value());
            fields.set(current);
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut current = (*fields).clone();
            current.message = textarea.value();
            fields.set(current);
        })
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                value={fields.name.clone()}
                oninput={edit(|f, v| f.name = v)}
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                value={fields.email.clone()}
                oninput={edit(|f, v| f.email = v)}
            />
            <textarea
                name="message"
                placeholder="Message"
                value={fields.message.clone()}
                oninput={on_message}
            />
            <button type="submit">{ "Send" }</button>
        </form>
    }
}
