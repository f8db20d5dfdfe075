use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::contact::{
    submit_once, ContactField, ContactFields, ContactFormState, FormAction, FormStatus,
    HttpTransport,
};

fn default_endpoint() -> AttrValue {
    AttrValue::from(config::form_endpoint())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
}

/// Contact form wired to the form backend. Owns the field values and the
/// submission status for this page view.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer_eq(ContactFormState::default);

    let on_edit = {
        let form = form.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            form.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let endpoint = props.endpoint.clone();
        Callback::from(move |_: ()| {
            let form = form.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let snapshot = (*form).clone();
                submit_once(&snapshot, &HttpTransport, &endpoint, |action| form.dispatch(action))
                    .await;
            });
        })
    };

    html! {
        <ContactFormView
            fields={form.fields.clone()}
            status={form.status}
            on_edit={on_edit}
            on_submit={on_submit}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    pub fields: ContactFields,
    pub status: FormStatus,
    pub on_edit: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let ContactFormViewProps { fields, status, on_edit, on_submit } = props;

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let control = |field: ContactField| {
        let on_edit = on_edit.clone();
        let value = fields.get(field).to_string();
        let control = match field {
            ContactField::Message => html! {
                <textarea
                    name={field.name()}
                    required={true}
                    rows="5"
                    value={value}
                    oninput={move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_edit.emit((field, input.value()));
                    }}
                    class="form-control"
                />
            },
            ContactField::Name | ContactField::Email => html! {
                <input
                    type={if field == ContactField::Email { "email" } else { "text" }}
                    name={field.name()}
                    required={true}
                    value={value}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_edit.emit((field, input.value()));
                    }}
                    class="form-control"
                />
            },
        };
        html! {
            <label class="form-label">
                { field.label() }
                { control }
            </label>
        }
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            { for ContactField::ALL.into_iter().map(control) }
            <button type="submit" class="form-submit" disabled={status.is_submitting()}>
                { if status.is_submitting() { "Sending..." } else { "Send" } }
            </button>
            if let Some(feedback) = status.feedback() {
                <p class={classes!("form-feedback", if *status == FormStatus::Success { "success" } else { "error" })}>
                    { feedback }
                </p>
            }
        </form>
    }
}
